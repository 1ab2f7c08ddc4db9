pub mod font;
pub mod measure;
pub mod resource;

pub use font::{FontError, FontProvider, FontQuery, InMemoryFontProvider, SharedFontData};
pub use measure::{AverageAdvanceMeasurer, TextMeasurer};
pub use resource::{ImageProvider, InMemoryImageProvider, ResourceError};
