use crate::font::{FontFamily, FontSpec, FontWeight};
use quire_types::Color;
use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a text element relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

/// The complete style of a text draw operation.
///
/// Every text element carries one of these; nothing is inherited from a previous draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: Color,
}

impl TextStyle {
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            font: FontSpec::new(family, FontWeight::Regular, size),
            color: Color::black(),
        }
    }

    pub fn bold(&self) -> Self {
        self.with_weight(FontWeight::Bold)
    }

    pub fn with_weight(&self, weight: FontWeight) -> Self {
        Self {
            font: self.font.with_weight(weight),
            color: self.color.clone(),
        }
    }

    pub fn with_size(&self, size: f32) -> Self {
        Self {
            font: self.font.with_size(size),
            color: self.color.clone(),
        }
    }

    pub fn with_color(&self, color: Color) -> Self {
        Self {
            font: self.font.clone(),
            color,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font.weight == FontWeight::Bold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_styles_are_independent() {
        let body = TextStyle::new(FontFamily::Times, 14.0);
        let heading = body.bold().with_size(18.0).with_color(Color::white());

        assert!(!body.is_bold());
        assert_eq!(body.font.size, 14.0);
        assert_eq!(body.color, Color::black());
        assert!(heading.is_bold());
        assert_eq!(heading.font.family, FontFamily::Times);
    }
}
