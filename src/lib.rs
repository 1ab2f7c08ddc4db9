//! Quire lays books out.
//!
//! A [`Manuscript`] (title, theme, chapters of lightly marked-up lines, image
//! payloads) is paginated into styled pages with running chrome and a linked index.
//! The resulting [`LaidOutDocument`] can be replayed onto any [`DrawingSurface`].
//!
//! ```no_run
//! use quire::{PipelineBuilder, RecordingSurface};
//!
//! # fn main() -> Result<(), quire::PipelineError> {
//! let manuscript = quire::Pipeline::load_manuscript("book.json")?;
//! let pipeline = PipelineBuilder::new().build()?;
//! let mut surface = RecordingSurface::new();
//! let doc = pipeline.render(&manuscript, &mut surface)?;
//! println!("{} pages", doc.page_count());
//! # Ok(())
//! # }
//! ```

pub mod assets;
mod error;
pub mod pipeline;

pub use assets::{ResolutionReport, collect_image_tags, resolve_image_payloads};
pub use error::PipelineError;
pub use pipeline::{MeasurementMode, Pipeline, PipelineBuilder};

pub use quire_layout::{
    LaidOutDocument, LayoutConfig, LayoutElement, LayoutEngine, LayoutError, Page, PageKind,
};
pub use quire_render_core::{DrawOp, DrawingSurface, RecordingSurface, RenderError, emit_document};
pub use quire_traits::{
    AverageAdvanceMeasurer, FontProvider, ImageProvider, InMemoryFontProvider,
    InMemoryImageProvider, ResourceError, TextMeasurer,
};
pub use quire_types::{
    BookLanguage, Chapter, ChapterPageRecord, Color, ImageTag, IndexEntry, Manuscript,
};
