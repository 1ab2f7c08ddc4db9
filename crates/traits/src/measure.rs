//! The text measurement seam.
//!
//! The layout engine never assumes anything about glyph metrics: it asks a
//! `TextMeasurer` for the width of a string under a complete `FontSpec`.

use quire_style::{FontSpec, FontWeight};
use std::fmt::Debug;

/// Measures the advance width of text.
///
/// Widths are in points and must be non-negative; the engine treats them as opaque.
pub trait TextMeasurer: Send + Sync + Debug {
    fn measure(&self, text: &str, font: &FontSpec) -> f32;

    /// Returns a human-readable name for this measurer (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A measurer that assigns every character the same advance, scaled by font size.
///
/// Deterministic and dependency free, which makes it the measurer of choice for
/// tests and for environments without font files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageAdvanceMeasurer {
    /// Advance of one character in ems for regular text.
    pub regular_em: f32,
    /// Advance of one character in ems for bold text.
    pub bold_em: f32,
}

impl Default for AverageAdvanceMeasurer {
    fn default() -> Self {
        Self {
            regular_em: 0.5,
            bold_em: 0.55,
        }
    }
}

impl AverageAdvanceMeasurer {
    pub fn new(regular_em: f32, bold_em: f32) -> Self {
        Self {
            regular_em,
            bold_em,
        }
    }

    pub fn advance(&self, font: &FontSpec) -> f32 {
        let em = match font.weight {
            FontWeight::Regular => self.regular_em,
            FontWeight::Bold => self.bold_em,
        };
        em * font.size
    }
}

impl TextMeasurer for AverageAdvanceMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * self.advance(font)
    }

    fn name(&self) -> &'static str {
        "AverageAdvanceMeasurer"
    }
}
