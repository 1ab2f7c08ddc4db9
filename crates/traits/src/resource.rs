//! ImageProvider trait for abstracting where image payloads come from.
//!
//! The layout engine itself never fetches anything; providers are used by callers
//! assembling a manuscript before layout starts.

use quire_types::{ImageTag, SharedImageData};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Produces the image payload for an image tag.
///
/// Implementations may block (e.g. call a remote generator); callers run them off the
/// async executor and isolate failures per tag.
pub trait ImageProvider: Send + Sync + Debug {
    fn fetch(&self, tag: &ImageTag) -> Result<SharedImageData, ResourceError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory image provider, pre-populated before use.
#[derive(Debug, Default)]
pub struct InMemoryImageProvider {
    images: RwLock<HashMap<ImageTag, SharedImageData>>,
}

impl InMemoryImageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, tag: impl Into<ImageTag>, data: Vec<u8>) -> Result<(), ResourceError> {
        let tag = tag.into();
        let mut images = self.images.write().map_err(|_| ResourceError::LoadFailed {
            path: tag.to_string(),
            message: "image store lock poisoned".to_string(),
        })?;
        images.insert(tag, Arc::new(data));
        Ok(())
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.images.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ImageProvider for InMemoryImageProvider {
    fn fetch(&self, tag: &ImageTag) -> Result<SharedImageData, ResourceError> {
        let images = self.images.read().map_err(|_| ResourceError::LoadFailed {
            path: tag.to_string(),
            message: "image store lock poisoned".to_string(),
        })?;
        images
            .get(tag)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(tag.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryImageProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_fetch() {
        let provider = InMemoryImageProvider::new();
        provider.add("[IMAGE_PROMPT: sea]", b"png".to_vec()).unwrap();

        let data = provider.fetch(&ImageTag::from("[IMAGE_PROMPT: sea]")).unwrap();
        assert_eq!(&*data, b"png");
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryImageProvider::new();
        let result = provider.fetch(&ImageTag::from("[IMAGE_PROMPT: none]"));
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
        assert!(provider.is_empty());
    }
}
