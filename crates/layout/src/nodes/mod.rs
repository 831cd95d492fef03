pub(crate) mod paragraph;
pub(crate) mod table;

use crate::LayoutError;
use crate::elements::{LayoutElement, PositionedElement, TextElement};
use crate::fonts::{baseline_offset, text_width};
use orcamento_style::font::FontWeight;
use orcamento_style::text::TextAlign;
use orcamento_types::Color;

/// The font settings a run of lines is set in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextSetting {
    pub weight: FontWeight,
    pub size: f32,
    pub leading: f32,
    pub align: TextAlign,
    pub color: Color,
}

impl TextSetting {
    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        if !(self.size > 0.0 && self.size.is_finite()) {
            return Err(LayoutError::InvalidFontSize(self.size));
        }
        Ok(())
    }

    /// Builds the element for one line whose box starts at `(x, y)` and is
    /// `box_width` wide. Returns `None` for blank lines.
    pub(crate) fn line_element(
        &self,
        line: &str,
        x: f32,
        y: f32,
        box_width: f32,
    ) -> Option<PositionedElement> {
        if line.is_empty() {
            return None;
        }
        let width = text_width(line, self.weight, self.size);
        let offset = match self.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => (box_width - width) / 2.0,
            TextAlign::Right => box_width - width,
        };
        Some(PositionedElement {
            x: x + offset,
            y,
            width,
            height: self.leading,
            element: LayoutElement::Text(TextElement {
                content: line.to_string(),
                font_weight: self.weight,
                font_size: self.size,
                baseline: baseline_offset(self.size, self.leading),
                color: self.color,
            }),
        })
    }
}
