use crate::encoding::to_win_ansi;
use crate::error::RenderError;
use crate::page::{font_resource_name, PageContext};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use orcamento_layout::LaidOutDocument;
use orcamento_style::font::FontWeight;
use std::io::Write;

pub const DEFAULT_PRODUCER: &str = "orcamento";

/// An in-memory PDF renderer using the `lopdf` library.
///
/// Every call builds its own object graph, so a single renderer can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    producer: String,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self {
            producer: DEFAULT_PRODUCER.to_string(),
        }
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    /// Renders the laid-out pages into a complete PDF byte buffer.
    pub fn render(&self, laid_out: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let mut buffer = Vec::new();
        self.render_to(laid_out, &mut buffer)?;
        Ok(buffer)
    }

    pub fn render_to<W: Write>(
        &self,
        laid_out: &LaidOutDocument,
        writer: &mut W,
    ) -> Result<(), RenderError> {
        let mut document = self.build(laid_out)?;
        document.save_to(writer)?;
        Ok(())
    }

    /// Builds the `lopdf` object graph: shared font resources, one content
    /// stream and page object per page, the page tree, catalog and info.
    pub fn build(&self, laid_out: &LaidOutDocument) -> Result<Document, RenderError> {
        if laid_out.pages.is_empty() {
            return Err(RenderError::NoPages);
        }
        let (page_width, page_height) = laid_out.page_size;

        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources = Self::font_resources(&mut document);
        let resources_id = document.add_object(resources);

        let mut page_ids: Vec<ObjectId> = Vec::with_capacity(laid_out.pages.len());
        for elements in &laid_out.pages {
            let mut page_ctx = PageContext::new(page_height);
            for element in elements {
                page_ctx.draw_element(element);
            }
            let content = page_ctx.finish();
            let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));

            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            };
            page_ids.push(document.add_object(page_dict));
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::from(*id)).collect::<Vec<Object>>(),
            "Count" => page_ids.len() as i64,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::String(to_win_ansi(&self.producer), StringFormat::Literal),
        };
        if let Some(title) = &laid_out.title {
            info.set("Title", Object::String(to_win_ansi(title), StringFormat::Literal));
        }
        let info_id = document.add_object(info);
        document.trailer.set("Info", info_id);

        log::debug!(
            "Built PDF with {} page(s) of {:.2}x{:.2}pt",
            page_ids.len(),
            page_width,
            page_height
        );
        Ok(document)
    }

    fn font_resources(document: &mut Document) -> Dictionary {
        let mut font_dict = Dictionary::new();
        for weight in [FontWeight::Regular, FontWeight::Bold] {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => weight.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font_resource_name(weight), font_id);
        }
        dictionary! { "Font" => font_dict }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orcamento_layout::LayoutEngine;
    use orcamento_idf::{Document as IdfDocument, Paragraph};
    use orcamento_style::{PageLayout, ParagraphStyle};
    use std::sync::Arc;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn laid_out(texts: &[&str]) -> LaidOutDocument {
        let mut doc = IdfDocument::new(PageLayout::default()).with_title("Quote 7");
        let style = Arc::new(ParagraphStyle::default());
        for t in texts {
            doc.push(Paragraph::from_text(t, Arc::clone(&style)));
        }
        LayoutEngine::new().layout(&doc).unwrap()
    }

    #[test]
    fn writes_a_parseable_pdf() {
        init_logger();
        let bytes = LopdfRenderer::new().render(&laid_out(&["Hello", "World"])).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        let text = doc.extract_text(&[1]).unwrap();
        assert!(text.contains("Hello"));
        assert!(text.contains("World"));
    }

    #[test]
    fn declares_both_helvetica_faces() {
        init_logger();
        let document = LopdfRenderer::new().build(&laid_out(&["x"])).unwrap();
        let base_fonts: Vec<String> = document
            .objects
            .values()
            .filter_map(|o| o.as_dict().ok())
            .filter_map(|d| d.get(b"BaseFont").ok())
            .filter_map(|n| n.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).into_owned())
            .collect();
        assert!(base_fonts.contains(&"Helvetica".to_string()));
        assert!(base_fonts.contains(&"Helvetica-Bold".to_string()));
    }

    #[test]
    fn info_dictionary_carries_title_and_producer() {
        init_logger();
        let renderer = LopdfRenderer::new().with_producer("test-suite");
        let bytes = renderer.render(&laid_out(&["x"])).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Quote 7");
        assert_eq!(info.get(b"Producer").unwrap().as_str().unwrap(), b"test-suite");
    }

    #[test]
    fn output_is_deterministic() {
        init_logger();
        let laid_out = laid_out(&["same input"]);
        let renderer = LopdfRenderer::new();
        assert_eq!(renderer.render(&laid_out).unwrap(), renderer.render(&laid_out).unwrap());
    }

    #[test]
    fn empty_page_list_is_an_error() {
        let empty = LaidOutDocument {
            page_size: (100.0, 100.0),
            title: None,
            pages: vec![],
        };
        assert!(matches!(LopdfRenderer::new().render(&empty), Err(RenderError::NoPages)));
    }
}
