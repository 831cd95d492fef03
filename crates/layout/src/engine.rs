use crate::algorithms::pagination::check_child_fit;
use crate::elements::{LaidOutDocument, PositionedElement};
use crate::nodes::{paragraph, table};
use crate::LayoutError;
use log::debug;
use orcamento_idf::{Block, Document};
use orcamento_types::geometry::Rect;

/// Flows a [`Document`] onto pages.
///
/// The engine holds no state between calls, so one instance can be shared
/// freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn layout(&self, document: &Document) -> Result<LaidOutDocument, LayoutError> {
        let page_size = document.page.size.dimensions_pt();
        let frame = Rect::new(
            document.page.margins.left,
            document.page.margins.top,
            document.page.content_width(),
            document.page.content_height(),
        );
        if frame.is_empty() || !frame.width.is_finite() || !frame.height.is_finite() {
            return Err(LayoutError::NoContentArea {
                width: frame.width,
                height: frame.height,
            });
        }

        let mut ctx = LayoutContext::new(frame);
        for (index, block) in document.blocks.iter().enumerate() {
            debug!(
                "Laying out block {} ({}) on page {} at y={:.2}",
                index,
                block.kind(),
                ctx.page_index() + 1,
                ctx.cursor_y()
            );
            match block {
                Block::Spacer { height } => ctx.add_space(*height),
                Block::Paragraph(p) => paragraph::layout_paragraph(&mut ctx, p)?,
                Block::Table(t) => table::layout_table(&mut ctx, t)?,
            }
        }

        let pages = ctx.finish();
        debug!(
            "Layout finished: {} page(s), {} element(s)",
            pages.len(),
            pages.iter().map(Vec::len).sum::<usize>()
        );
        Ok(LaidOutDocument {
            page_size,
            title: document.title.clone(),
            pages,
        })
    }
}

/// Mutable state of one layout pass: the finished pages, the page being
/// filled and the cursor within its content frame.
pub(crate) struct LayoutContext {
    frame: Rect,
    cursor_y: f32,
    current: Vec<PositionedElement>,
    pages: Vec<Vec<PositionedElement>>,
}

impl LayoutContext {
    pub(crate) fn new(frame: Rect) -> Self {
        Self {
            frame,
            cursor_y: 0.0,
            current: Vec::new(),
            pages: Vec::new(),
        }
    }

    pub(crate) fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub(crate) fn page_index(&self) -> usize {
        self.pages.len()
    }

    pub(crate) fn is_at_page_top(&self) -> bool {
        self.cursor_y < 0.001
    }

    pub(crate) fn available_height(&self) -> f32 {
        (self.frame.height - self.cursor_y).max(0.0)
    }

    /// Whether `height` fits below the cursor on the current page.
    pub(crate) fn fits(&self, height: f32) -> bool {
        !check_child_fit(self.cursor_y, height, self.frame.height).should_break
    }

    pub(crate) fn advance_cursor(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    /// Vertical whitespace: dropped at the top of a page and clamped to the
    /// room left, so it never opens a page by itself.
    pub(crate) fn add_space(&mut self, height: f32) {
        if self.is_at_page_top() || height <= 0.0 {
            return;
        }
        self.cursor_y += height.min(self.available_height());
    }

    /// Makes room for content of `height`, opening a new page when it does
    /// not fit below the cursor. Content taller than a whole frame fails.
    pub(crate) fn ensure_room(&mut self, height: f32) -> Result<(), LayoutError> {
        if height > self.frame.height + crate::algorithms::pagination::EPSILON {
            return Err(LayoutError::ElementTooLarge(height, self.frame.height));
        }
        if !self.fits(height) && !self.is_at_page_top() {
            self.new_page();
        }
        Ok(())
    }

    pub(crate) fn new_page(&mut self) {
        debug!("Page {} full, starting a new page", self.pages.len() + 1);
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor_y = 0.0;
    }

    /// Adds an element given in frame-relative coordinates.
    pub(crate) fn push(&mut self, mut element: PositionedElement) {
        element.x += self.frame.x;
        element.y += self.frame.y;
        self.current.push(element);
    }

    fn finish(mut self) -> Vec<Vec<PositionedElement>> {
        self.pages.push(self.current);
        self.pages
    }
}
