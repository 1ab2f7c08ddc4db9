/// Selects how the layout engine measures text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MeasurementMode {
    /// Fixed per-character advance. Deterministic and needs no font files. (Default)
    #[default]
    AverageAdvance,
    /// Shapes text with the fonts known to the pipeline's font library; text whose
    /// face cannot be resolved falls back to the average advance.
    Shaping,
}

/// Upper bound on image fetches in flight when resolving a manuscript's payloads.
pub fn default_fetch_concurrency() -> usize {
    num_cpus::get().max(1) * 2
}
