pub mod dimension;
pub mod font;
pub mod parsers;
pub mod text;

pub use dimension::{MM, Margins, PageGeometry, PageSize};
pub use font::{FontFamily, FontSpec, FontWeight};
pub use parsers::StyleParseError;
pub use text::{TextAlign, TextStyle};
