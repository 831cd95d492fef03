pub mod document;
pub mod draft;
pub mod error;
pub mod format;
pub mod model;
pub mod profile;
pub mod renderer;

pub use document::{
    item_rows, quote_page_layout, QuoteDocumentBuilder, NOT_INFORMED, NO_ITEMS, NO_OBSERVATIONS,
    VALIDITY_DAYS,
};
pub use draft::{QuoteDraft, ServiceDraft, ValidQuoteDraft, ValidService};
pub use error::{QuoteError, RenderingFailure, ValidationError};
pub use format::{format_amount, format_currency, format_date, format_quantity, MISSING_DATE};
pub use model::{AmountOverflow, ParseStatusError, Quote, QuoteStatus, Service};
pub use profile::IssuerProfile;
pub use renderer::{QuoteRenderer, RenderedQuote, PDF_CONTENT_TYPE};

// Re-exported so callers can adjust the page without depending on the style crate.
pub use orcamento_style::PageLayout;
