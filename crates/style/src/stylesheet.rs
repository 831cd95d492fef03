//! Paragraph and table-cell styles, plus the page layout a document is set on.

use crate::dimension::{Margins, PageSize};
use crate::font::FontWeight;
use crate::text::{TextAlign, VerticalAlign};
use orcamento_types::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Ratio between font size and line height when no leading is given.
pub const DEFAULT_LEADING_RATIO: f32 = 1.2;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default)]
    pub margins: Margins,
}

impl PageLayout {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self { size, margins }
    }

    /// Width left for content between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.size.dimensions_pt().0 - self.margins.horizontal()
    }

    /// Height left for content between the top and bottom margins.
    pub fn content_height(&self) -> f32 {
        self.size.dimensions_pt().1 - self.margins.vertical()
    }
}

/// Style for a flowing paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub name: String,
    pub font_weight: FontWeight,
    pub font_size: f32,
    pub leading: f32,
    pub align: TextAlign,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            name: "normal".to_string(),
            font_weight: FontWeight::Regular,
            font_size: 10.0,
            leading: 12.0,
            align: TextAlign::Left,
            color: Color::BLACK,
            space_before: 0.0,
            space_after: 0.0,
        }
    }
}

impl ParagraphStyle {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::Bold;
        self
    }

    /// Sets the font size and resets the leading to the default ratio.
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self.leading = size * DEFAULT_LEADING_RATIO;
        self
    }

    pub fn leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn space_before(mut self, space: f32) -> Self {
        self.space_before = space;
        self
    }

    pub fn space_after(mut self, space: f32) -> Self {
        self.space_after = space;
        self
    }
}

/// Fully resolved style of one table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub font_weight: FontWeight,
    pub font_size: f32,
    pub leading: Option<f32>,
    pub align: TextAlign,
    pub valign: VerticalAlign,
    pub color: Color,
    pub padding: Margins,
    /// When false, text only breaks at explicit newlines and may overflow.
    pub wrap: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            font_weight: FontWeight::Regular,
            font_size: 10.0,
            leading: None,
            align: TextAlign::Left,
            valign: VerticalAlign::Bottom,
            color: Color::BLACK,
            padding: Margins::new(3.0, 6.0, 3.0, 6.0),
            wrap: true,
        }
    }
}

impl CellStyle {
    pub fn effective_leading(&self) -> f32 {
        self.leading
            .unwrap_or(self.font_size * DEFAULT_LEADING_RATIO)
    }
}

/// A partial cell style. Unset fields leave the underlying style untouched.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CellStyleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valign: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

impl CellStyleOverride {
    pub fn apply_to(&self, style: &mut CellStyle) {
        if let Some(v) = self.font_weight {
            style.font_weight = v;
        }
        if let Some(v) = self.font_size {
            style.font_size = v;
        }
        if let Some(v) = self.leading {
            style.leading = Some(v);
        }
        if let Some(v) = self.align {
            style.align = v;
        }
        if let Some(v) = self.valign {
            style.valign = v;
        }
        if let Some(v) = self.color {
            style.color = v;
        }
        if let Some(v) = self.padding_top {
            style.padding.top = v;
        }
        if let Some(v) = self.padding_right {
            style.padding.right = v;
        }
        if let Some(v) = self.padding_bottom {
            style.padding.bottom = v;
        }
        if let Some(v) = self.padding_left {
            style.padding.left = v;
        }
        if let Some(v) = self.wrap {
            style.wrap = v;
        }
    }

    pub fn bold() -> Self {
        Self {
            font_weight: Some(FontWeight::Bold),
            ..Default::default()
        }
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = Some(valign);
        self
    }

    pub fn no_wrap(mut self) -> Self {
        self.wrap = Some(false);
        self
    }

    pub fn padding(mut self, padding: Margins) -> Self {
        self.padding_top = Some(padding.top);
        self.padding_right = Some(padding.right);
        self.padding_bottom = Some(padding.bottom);
        self.padding_left = Some(padding.left);
        self
    }
}

/// Named paragraph styles shared by every document built from it.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    pub page: PageLayout,
    styles: HashMap<String, Arc<ParagraphStyle>>,
}

impl Stylesheet {
    pub fn new(page: PageLayout) -> Self {
        Self {
            page,
            styles: HashMap::new(),
        }
    }

    /// Registers a style under its own name, replacing any previous one.
    pub fn insert(&mut self, style: ParagraphStyle) -> Arc<ParagraphStyle> {
        let style = Arc::new(style);
        self.styles.insert(style.name.clone(), Arc::clone(&style));
        style
    }

    /// Looks up a style by name, falling back to the default body style.
    pub fn get(&self, name: &str) -> Arc<ParagraphStyle> {
        self.styles
            .get(name)
            .cloned()
            .unwrap_or_else(|| Arc::new(ParagraphStyle::default()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}
