//! PDF renderer using lopdf.
//!
//! Turns a [`orcamento_layout::LaidOutDocument`] into a complete PDF held in
//! memory. Text is set in the standard Helvetica faces, which PDF viewers
//! supply themselves, so no font data is embedded.

mod encoding;
mod error;
mod page;
mod renderer;

pub use encoding::to_win_ansi;
pub use error::RenderError;
pub use renderer::{LopdfRenderer, DEFAULT_PRODUCER};
