use serde::{Deserialize, Deserializer, Serialize, de};
use std::hash::{Hash, Hasher};

/// The font family of a run of text.
///
/// `Helvetica` and `Times` are the two families manuscripts select by identifier;
/// `Named` covers anything a font provider can resolve by name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Named(String),
}

impl FontFamily {
    /// Maps a manuscript font identifier ("helvetica", "times", ...) to a family.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "" | "helvetica" | "sans" | "sans-serif" => FontFamily::Helvetica,
            "times" | "times new roman" | "serif" => FontFamily::Times,
            _ => FontFamily::Named(id.trim().to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Times => "Times",
            FontFamily::Named(name) => name,
        }
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|s| FontFamily::from_id(&s))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Returns the numeric weight value (CSS 100-900 scale).
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "regular" | "normal" | "400" => Ok(FontWeight::Regular),
            "bold" | "700" => Ok(FontWeight::Bold),
            _ => Err(format!("Invalid font weight: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

/// Everything a measurer needs to know about the font of a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f32,
}

impl Eq for FontSpec {}

impl Hash for FontSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.weight.hash(state);
        self.size.to_bits().hash(state);
    }
}

impl FontSpec {
    pub fn new(family: FontFamily, weight: FontWeight, size: f32) -> Self {
        Self {
            family,
            weight,
            size,
        }
    }

    pub fn with_weight(&self, weight: FontWeight) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }

    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_from_id() {
        assert_eq!(FontFamily::from_id("Helvetica"), FontFamily::Helvetica);
        assert_eq!(FontFamily::from_id("times"), FontFamily::Times);
        assert_eq!(FontFamily::from_id(""), FontFamily::Helvetica);
        assert_eq!(
            FontFamily::from_id("Inter"),
            FontFamily::Named("Inter".to_string())
        );
    }

    #[test]
    fn test_weight_deserialize() {
        let w: FontWeight = serde_json::from_str("\"bold\"").unwrap();
        assert_eq!(w, FontWeight::Bold);
        assert!(serde_json::from_str::<FontWeight>("\"heavy\"").is_err());
    }
}
