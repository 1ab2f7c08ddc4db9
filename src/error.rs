use quire_layout::LayoutError;
use quire_render_core::RenderError;
use thiserror::Error;

/// The error type for every high-level operation of the pipeline.
///
/// Only conditions that stop a book from being produced end up here. Missing or
/// broken images and index overflow are handled inside the engine.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Other pipeline error: {0}")]
    Other(String),
}
