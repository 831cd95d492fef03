pub mod border;
pub mod dimension;
pub mod font;
pub mod parsers;
pub mod stylesheet;
pub mod text;

pub use border::Border;
pub use dimension::{Margins, PageSize, cm, mm};
pub use font::FontWeight;
pub use parsers::StyleParseError;
pub use stylesheet::{CellStyle, CellStyleOverride, PageLayout, ParagraphStyle, Stylesheet};
pub use text::{TextAlign, VerticalAlign};
