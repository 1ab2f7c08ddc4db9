//! Core rendering abstractions.
//!
//! This crate provides the seam between layout and any concrete output format:
//! - `DrawingSurface` trait for the drawing primitives a backend must offer
//! - `emit_document`, which replays a laid-out document onto a surface
//! - `RecordingSurface`, an in-memory surface that records every draw call
//! - Shared utility functions for font naming and coordinate conversion

mod emit;
mod error;
mod recording;
mod traits;
pub mod utils;

pub use emit::emit_document;
pub use error::RenderError;
pub use recording::{DrawOp, RecordingSurface};
pub use traits::DrawingSurface;
