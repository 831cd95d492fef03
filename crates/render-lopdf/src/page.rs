use crate::encoding::to_win_ansi;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use orcamento_layout::{LayoutElement, PositionedElement, RuleElement, TextElement};
use orcamento_style::font::FontWeight;
use orcamento_types::Color;

/// Resource name of each face in the shared font dictionary.
pub(crate) fn font_resource_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "F1",
        FontWeight::Bold => "F2",
    }
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontWeight, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// Builds the content stream of one page, emitting state operators only
/// when the value changes.
pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    pub(crate) fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rule(rule) => self.draw_rule(rule, el),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, weight: FontWeight, size: f32) {
        if self.state.font != Some((weight, size)) {
            let name = font_resource_name(weight);
            self.push("Tf", vec![Object::Name(name.as_bytes().to_vec()), size.into()]);
            self.state.font = Some((weight, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.unit_components();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.unit_components();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(text.font_weight, text.font_size);
        self.set_fill_color(text.color);
        let pdf_y = self.page_height - (el.y + text.baseline);
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_rule(&mut self, rule: &RuleElement, el: &PositionedElement) {
        if rule.thickness <= 0.0 || el.width <= 0.0 {
            return;
        }
        self.set_stroke(rule.color, rule.thickness);
        let y = self.page_height - el.y;
        self.push("m", vec![el.x.into(), y.into()]);
        self.push("l", vec![(el.x + el.width).into(), y.into()]);
        self.push("S", vec![]);
    }
}
