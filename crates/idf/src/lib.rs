//! Intermediate Document Format (IDF)
//!
//! The in-memory representation of a document between composition and layout:
//! an ordered list of block descriptors (paragraphs, styled tables, spacers)
//! that the layout engine flows onto fixed-size pages.

use orcamento_style::border::Border;
use orcamento_style::stylesheet::{CellStyle, CellStyleOverride, PageLayout, ParagraphStyle};
use std::ops::RangeInclusive;
use std::sync::Arc;

/// A string type for the document.
pub type TextStr = String;

/// A complete document: page geometry plus the blocks to flow onto it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub page: PageLayout,
    pub title: Option<TextStr>,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(page: PageLayout) -> Self {
        Self {
            page,
            title: None,
            blocks: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<TextStr>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    pub fn spacer(&mut self, height: f32) {
        self.blocks.push(Block::Spacer { height });
    }

    /// Iterates over the tables of the document in flow order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Iterates over the top-level paragraphs of the document in flow order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }
}

/// A block-level element flowed top to bottom by the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    /// Vertical whitespace. Dropped when it falls at the top of a page.
    Spacer { height: f32 },
}

impl Block {
    /// Returns a string identifier for the block type, used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Table(_) => "table",
            Block::Spacer { .. } => "spacer",
        }
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Block::Table(t)
    }
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    /// A run of plain text.
    Text(TextStr),
    /// A forced line break.
    LineBreak,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub style: Arc<ParagraphStyle>,
    pub children: Vec<InlineNode>,
}

impl Paragraph {
    pub fn new(style: Arc<ParagraphStyle>) -> Self {
        Self {
            style,
            children: Vec::new(),
        }
    }

    /// Builds a paragraph from plain text, turning every `\n` into a line break.
    /// A `\r\n` pair counts as one break.
    pub fn from_text(text: &str, style: Arc<ParagraphStyle>) -> Self {
        let mut paragraph = Self::new(style);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                paragraph.children.push(InlineNode::LineBreak);
            }
            let line = line.strip_suffix('\r').unwrap_or(line);
            if !line.is_empty() {
                paragraph.children.push(InlineNode::Text(line.to_string()));
            }
        }
        paragraph
    }

    pub fn text(mut self, content: &str) -> Self {
        self.children.push(InlineNode::Text(content.to_string()));
        self
    }

    /// The paragraph's text with line breaks rendered as `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                InlineNode::Text(t) => out.push_str(t),
                InlineNode::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

// --- Table-specific Structures ---

/// Horizontal placement of a table narrower than the content frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumn {
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellContent {
    #[default]
    Empty,
    /// Plain text set in the cell's resolved style.
    Text(TextStr),
    /// A paragraph carrying its own style.
    Paragraph(Paragraph),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub content: CellContent,
}

impl TableCell {
    pub fn text(content: impl Into<TextStr>) -> Self {
        Self {
            content: CellContent::Text(content.into()),
        }
    }

    pub fn paragraph(paragraph: Paragraph) -> Self {
        Self {
            content: CellContent::Paragraph(paragraph),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The cell's text, or `None` for an empty cell.
    pub fn plain_text(&self) -> Option<String> {
        match &self.content {
            CellContent::Empty => None,
            CellContent::Text(t) => Some(t.clone()),
            CellContent::Paragraph(p) => Some(p.plain_text()),
        }
    }
}

impl From<&str> for TableCell {
    fn from(s: &str) -> Self {
        TableCell::text(s)
    }
}

impl From<String> for TableCell {
    fn from(s: String) -> Self {
        TableCell::text(s)
    }
}

impl From<Paragraph> for TableCell {
    fn from(p: Paragraph) -> Self {
        TableCell::paragraph(p)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|c| c.plain_text().unwrap_or_default())
            .collect()
    }
}

/// An inclusive rectangle of cells addressed as `(column, row)`.
/// Negative indices count from the end, so `-1` is the last column or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: (isize, isize),
    pub end: (isize, isize),
}

impl CellRange {
    pub fn new(start: (isize, isize), end: (isize, isize)) -> Self {
        Self { start, end }
    }

    pub fn all() -> Self {
        Self::new((0, 0), (-1, -1))
    }

    pub fn row(row: isize) -> Self {
        Self::new((0, row), (-1, row))
    }

    pub fn rows_from(row: isize) -> Self {
        Self::new((0, row), (-1, -1))
    }

    pub fn column(col: isize) -> Self {
        Self::new((col, 0), (col, -1))
    }

    pub fn cell(col: isize, row: isize) -> Self {
        Self::new((col, row), (col, row))
    }

    fn resolve_axis(start: isize, end: isize, len: usize) -> Option<RangeInclusive<usize>> {
        let resolve = |i: isize| -> Option<usize> {
            let idx = if i < 0 { len as isize + i } else { i };
            (0..len as isize).contains(&idx).then_some(idx as usize)
        };
        let (s, e) = (resolve(start)?, resolve(end)?);
        (s <= e).then_some(s..=e)
    }

    /// Whether the cell at `(col, row)` falls inside this range for a table of
    /// `cols` × `rows` cells.
    pub fn contains(&self, col: usize, row: usize, cols: usize, rows: usize) -> bool {
        let cols_in = Self::resolve_axis(self.start.0, self.end.0, cols);
        let rows_in = Self::resolve_axis(self.start.1, self.end.1, rows);
        matches!((cols_in, rows_in), (Some(c), Some(r)) if c.contains(&col) && r.contains(&row))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRule {
    /// Overrides the cell style of every cell in range.
    Cells {
        range: CellRange,
        style: CellStyleOverride,
    },
    /// Draws a rule along the top edge of every cell in range.
    LineAbove { range: CellRange, border: Border },
    /// Draws a rule along the bottom edge of every cell in range.
    LineBelow { range: CellRange, border: Border },
}

/// Ordered style rules for a table. Later rules win over earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableStyle {
    pub base: CellStyle,
    pub rules: Vec<TableRule>,
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: CellStyle) -> Self {
        self.base = base;
        self
    }

    pub fn cells(mut self, range: CellRange, style: CellStyleOverride) -> Self {
        self.rules.push(TableRule::Cells { range, style });
        self
    }

    pub fn line_above(mut self, range: CellRange, border: Border) -> Self {
        self.rules.push(TableRule::LineAbove { range, border });
        self
    }

    pub fn line_below(mut self, range: CellRange, border: Border) -> Self {
        self.rules.push(TableRule::LineBelow { range, border });
        self
    }

    /// Resolves the effective style of one cell.
    pub fn cell_style(&self, col: usize, row: usize, cols: usize, rows: usize) -> CellStyle {
        let mut style = self.base.clone();
        for rule in &self.rules {
            if let TableRule::Cells { range, style: ov } = rule {
                if range.contains(col, row, cols, rows) {
                    ov.apply_to(&mut style);
                }
            }
        }
        style
    }

    /// Returns the rules to draw above and below one cell.
    pub fn cell_lines(
        &self,
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    ) -> (Option<Border>, Option<Border>) {
        let mut above = None;
        let mut below = None;
        for rule in &self.rules {
            match rule {
                TableRule::LineAbove { range, border } if range.contains(col, row, cols, rows) => {
                    above = Some(*border)
                }
                TableRule::LineBelow { range, border } if range.contains(col, row, cols, rows) => {
                    below = Some(*border)
                }
                _ => {}
            }
        }
        (above, below)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub style: TableStyle,
    pub align: TableAlign,
}

impl Table {
    /// Creates an empty table with fixed column widths in points.
    pub fn new(widths: &[f32]) -> Self {
        Self {
            columns: widths.iter().map(|&width| TableColumn { width }).collect(),
            ..Default::default()
        }
    }

    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn align(mut self, align: TableAlign) -> Self {
        self.align = align;
        self
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// The text of every cell, row by row.
    pub fn texts(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(TableRow::texts).collect()
    }
}
