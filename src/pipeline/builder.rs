use super::config::{MeasurementMode, default_fetch_concurrency};
use super::Pipeline;
use crate::error::PipelineError;
use quire_layout::{LayoutConfig, LayoutEngine, SharedFontLibrary, ShapingMeasurer};
use quire_traits::{AverageAdvanceMeasurer, FontProvider, ImageProvider, TextMeasurer};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `Pipeline`.
pub struct PipelineBuilder {
    config: LayoutConfig,
    measurement: MeasurementMode,
    average: AverageAdvanceMeasurer,
    fonts: SharedFontLibrary,
    image_provider: Option<Arc<dyn ImageProvider>>,
    fetch_concurrency: usize,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            measurement: MeasurementMode::default(),
            average: AverageAdvanceMeasurer::default(),
            fonts: SharedFontLibrary::new(),
            image_provider: None,
            fetch_concurrency: default_fetch_concurrency(),
        }
    }
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the default A4 house style.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the layout configuration from a JSON string. Missing fields keep their defaults.
    pub fn with_config_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.config = LayoutConfig::from_json(json)?;
        Ok(self)
    }

    /// Loads the layout configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.with_config_json(&source)
    }

    pub fn with_measurement(mut self, mode: MeasurementMode) -> Self {
        self.measurement = mode;
        self
    }

    /// Per-character advances used by `MeasurementMode::AverageAdvance` and as the
    /// shaping fallback.
    pub fn with_average_advance(mut self, measurer: AverageAdvanceMeasurer) -> Self {
        self.average = measurer;
        self
    }

    /// Fonts from this provider take precedence over system fonts when shaping.
    pub fn with_font_provider(mut self, provider: Arc<dyn FontProvider>) -> Self {
        self.fonts = self.fonts.with_provider(provider);
        self
    }

    /// Scans the host system for installed fonts and makes them available for shaping.
    #[cfg(feature = "system-fonts")]
    pub fn with_system_fonts(mut self, system_fonts: bool) -> Self {
        self.fonts = self.fonts.with_system_fonts(system_fonts);
        self
    }

    /// Source of content image payloads for `Pipeline::resolve_images`.
    pub fn with_image_provider(mut self, provider: Arc<dyn ImageProvider>) -> Self {
        self.image_provider = Some(provider);
        self
    }

    pub fn with_fetch_concurrency(mut self, limit: usize) -> Self {
        self.fetch_concurrency = limit;
        self
    }

    /// Consumes the builder and creates the `Pipeline`.
    pub fn build(self) -> Result<Pipeline, PipelineError> {
        self.config
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        if self.fetch_concurrency == 0 {
            return Err(PipelineError::Config(
                "Fetch concurrency must be at least 1".to_string(),
            ));
        }

        let measurer: Arc<dyn TextMeasurer> = match self.measurement {
            MeasurementMode::AverageAdvance => {
                log::info!("Measuring text with fixed character advances.");
                Arc::new(self.average)
            }
            MeasurementMode::Shaping => {
                log::info!("Measuring text by shaping with the font library.");
                Arc::new(ShapingMeasurer::new(self.fonts).with_fallback(self.average))
            }
        };

        Ok(Pipeline {
            engine: LayoutEngine::new(self.config, measurer),
            image_provider: self.image_provider,
            fetch_concurrency: self.fetch_concurrency,
        })
    }
}
