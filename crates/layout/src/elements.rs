use orcamento_style::font::FontWeight;
use orcamento_types::Color;

/// A drawable element with its position on the page, in points from the
/// top-left corner of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rule(RuleElement),
}

/// One line of text. `baseline` is measured from the element's top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font_weight: FontWeight,
    pub font_size: f32,
    pub baseline: f32,
    pub color: Color,
}

/// A horizontal stroke running from `x` to `x + width` at `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleElement {
    pub thickness: f32,
    pub color: Color,
}

impl PositionedElement {
    pub fn text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(t) => Some(t),
            LayoutElement::Rule(_) => None,
        }
    }
}

/// The output of layout: every page with its elements in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutDocument {
    /// Page width and height in points.
    pub page_size: (f32, f32),
    pub title: Option<String>,
    pub pages: Vec<Vec<PositionedElement>>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The text lines of one page, top to bottom then left to right.
    pub fn page_text(&self, page: usize) -> Vec<&str> {
        let Some(elements) = self.pages.get(page) else {
            return Vec::new();
        };
        let mut lines: Vec<&PositionedElement> =
            elements.iter().filter(|e| e.text().is_some()).collect();
        lines.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
        lines
            .into_iter()
            .filter_map(|e| e.text().map(|t| t.content.as_str()))
            .collect()
    }

    /// Every text line of the document in page order.
    pub fn all_text(&self) -> Vec<&str> {
        (0..self.pages.len()).flat_map(|p| self.page_text(p)).collect()
    }
}
