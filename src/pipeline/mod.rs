//! The public entry point: load a manuscript, resolve its images, lay it out and
//! replay the pages onto a drawing surface.

mod builder;
mod config;

pub use builder::PipelineBuilder;
pub use config::{MeasurementMode, default_fetch_concurrency};

use crate::assets::{ResolutionReport, resolve_image_payloads};
use crate::error::PipelineError;
use quire_layout::{LaidOutDocument, LayoutEngine};
use quire_render_core::{DrawingSurface, emit_document};
use quire_traits::ImageProvider;
use quire_types::Manuscript;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A configured layout engine plus the collaborators around it.
pub struct Pipeline {
    engine: LayoutEngine,
    image_provider: Option<Arc<dyn ImageProvider>>,
    fetch_concurrency: usize,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Parses a manuscript from JSON. Image payloads are base64 strings; `null` marks
    /// an image that could not be produced.
    pub fn manuscript_from_json(json: &str) -> Result<Manuscript, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_manuscript<P: AsRef<Path>>(path: P) -> Result<Manuscript, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!(
                    "Failed to read manuscript from '{}': {}",
                    path_ref.display(),
                    e
                ),
            ))
        })?;
        Self::manuscript_from_json(&source)
    }

    /// Fetches every referenced image that has no payload yet through the configured
    /// provider. A pipeline without a provider leaves the manuscript untouched.
    pub async fn resolve_images(&self, manuscript: &mut Manuscript) -> ResolutionReport {
        match &self.image_provider {
            Some(provider) => {
                resolve_image_payloads(manuscript, Arc::clone(provider), self.fetch_concurrency)
                    .await
            }
            None => ResolutionReport::default(),
        }
    }

    pub fn layout(&self, manuscript: &Manuscript) -> Result<LaidOutDocument, PipelineError> {
        Ok(self.engine.layout(manuscript)?)
    }

    /// Lays the manuscript out and replays every page onto `surface`.
    pub fn render(
        &self,
        manuscript: &Manuscript,
        surface: &mut dyn DrawingSurface,
    ) -> Result<LaidOutDocument, PipelineError> {
        let doc = self.layout(manuscript)?;
        emit_document(&doc, surface)?;
        log::info!(
            "Rendered '{}' onto the surface: {} pages.",
            manuscript.title,
            doc.page_count()
        );
        Ok(doc)
    }
}
