//! Entry point that turns a quote into PDF bytes.

use crate::document::{quote_page_layout, QuoteDocumentBuilder};
use crate::error::RenderingFailure;
use crate::model::Quote;
use crate::profile::IssuerProfile;
use log::{debug, error, info};
use orcamento_layout::{LaidOutDocument, LayoutEngine};
use orcamento_render_lopdf::LopdfRenderer;
use orcamento_style::PageLayout;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A finished document, ready to be written to disk or sent to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQuote {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

impl RenderedQuote {
    /// Suggested download name for the quote with this id.
    pub fn filename_for(id: i64) -> String {
        format!("orcamento-n{}.pdf", id)
    }
}

/// Renders quotes with a fixed issuer profile.
///
/// Holds no per-document state: one instance can serve any number of
/// concurrent renders through a shared reference.
#[derive(Debug, Clone)]
pub struct QuoteRenderer {
    profile: IssuerProfile,
    page: PageLayout,
    engine: LayoutEngine,
    writer: LopdfRenderer,
}

impl Default for QuoteRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRenderer {
    pub fn new() -> Self {
        Self::with_profile(IssuerProfile::default())
    }

    pub fn with_profile(profile: IssuerProfile) -> Self {
        Self {
            profile,
            page: quote_page_layout(),
            engine: LayoutEngine::new(),
            writer: LopdfRenderer::new(),
        }
    }

    pub fn with_page_layout(mut self, page: PageLayout) -> Self {
        self.page = page;
        self
    }

    /// Composes and lays out the quote without writing any PDF.
    pub fn layout(&self, quote: &Quote) -> Result<LaidOutDocument, RenderingFailure> {
        let document = QuoteDocumentBuilder::new(&self.profile)
            .with_page_layout(self.page)
            .build(quote)?;
        Ok(self.engine.layout(&document)?)
    }

    /// Produces the complete PDF for `quote`. On failure nothing is returned
    /// but the error; the failure is also logged.
    pub fn render(&self, quote: &Quote) -> Result<RenderedQuote, RenderingFailure> {
        match self.try_render(quote) {
            Ok(bytes) => {
                info!("Rendered quote {} ({} bytes)", quote.id, bytes.len());
                Ok(RenderedQuote {
                    bytes,
                    content_type: PDF_CONTENT_TYPE,
                    filename: RenderedQuote::filename_for(quote.id),
                })
            }
            Err(e) => {
                error!("Failed to render quote {} [{}]: {}", quote.id, e.kind(), e);
                Err(e)
            }
        }
    }

    fn try_render(&self, quote: &Quote) -> Result<Vec<u8>, RenderingFailure> {
        let laid_out = self.layout(quote)?;
        debug!(
            "Quote {} laid out on {} page(s)",
            quote.id,
            laid_out.page_count()
        );
        Ok(self.writer.render(&laid_out)?)
    }
}
