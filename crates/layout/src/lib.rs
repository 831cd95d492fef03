use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Element has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Page content area is {width:.2}x{height:.2}; margins leave no room for content.")]
    NoContentArea { width: f32, height: f32 },
    #[error("Table column {column} has an invalid width of {width}.")]
    InvalidColumnWidth { column: usize, width: f32 },
    #[error("Table row {row} has {found} cells but the table declares {expected} columns.")]
    CellCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid font size {0}; sizes must be positive.")]
    InvalidFontSize(f32),
}

pub mod algorithms;
pub mod elements;
pub(crate) mod engine;
pub mod fonts;
pub(crate) mod nodes;
pub mod text;

pub use self::elements::{LaidOutDocument, LayoutElement, PositionedElement, RuleElement, TextElement};
pub use self::engine::LayoutEngine;

pub use orcamento_types::geometry::{Rect, Size};

#[cfg(test)]
mod engine_test;
