//! FontProvider trait for abstracting font loading.
//!
//! Lets the font library resolve faces from memory, a bundle, or any other source
//! without filesystem access.

use quire_style::FontWeight;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Shared font binary (reference-counted bytes).
pub type SharedFontData = Arc<Vec<u8>>;

#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font not found: {family} ({weight:?})")]
    NotFound { family: String, weight: FontWeight },

    #[error("Failed to load font '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid font data: {0}")]
    InvalidData(String),
}

/// A request for a font face.
#[derive(Debug, Clone, PartialEq)]
pub struct FontQuery {
    pub family: String,
    pub weight: FontWeight,
    pub fallbacks: Vec<String>,
}

impl FontQuery {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::Regular,
            fallbacks: Vec::new(),
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_fallbacks(mut self, fallbacks: &[&str]) -> Self {
        self.fallbacks = fallbacks.iter().map(|s| s.to_string()).collect();
        self
    }
}

pub trait FontProvider: Send + Sync + Debug {
    fn load_font(&self, query: &FontQuery) -> Result<SharedFontData, FontError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Fonts registered up front, keyed by lowercase family and weight.
#[derive(Debug, Default)]
pub struct InMemoryFontProvider {
    fonts: RwLock<HashMap<(String, FontWeight), SharedFontData>>,
}

impl InMemoryFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `FontError::LoadFailed` if the internal lock is poisoned.
    pub fn add_font(
        &self,
        family: &str,
        weight: FontWeight,
        data: Vec<u8>,
    ) -> Result<(), FontError> {
        let mut fonts = self.fonts.write().map_err(|_| FontError::LoadFailed {
            path: family.to_string(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts.insert((family.to_lowercase(), weight), Arc::new(data));
        Ok(())
    }
}

impl FontProvider for InMemoryFontProvider {
    fn load_font(&self, query: &FontQuery) -> Result<SharedFontData, FontError> {
        let fonts = self.fonts.read().map_err(|_| FontError::LoadFailed {
            path: query.family.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        std::iter::once(&query.family)
            .chain(query.fallbacks.iter())
            .find_map(|family| fonts.get(&(family.to_lowercase(), query.weight)))
            .cloned()
            .ok_or_else(|| FontError::NotFound {
                family: query.family.clone(),
                weight: query.weight,
            })
    }

    fn name(&self) -> &'static str {
        "InMemoryFontProvider"
    }
}
