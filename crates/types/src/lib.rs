pub mod color;
pub mod document;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use document::{
    BookLanguage, Chapter, ChapterPageRecord, IndexEntry, Labels, Manuscript, SharedImageData,
};
pub use geometry::{Rect, Size};
pub use ids::ImageTag;
