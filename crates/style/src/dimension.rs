//! Page size, margins and the derived content area.
use crate::parsers::{parse_page_size, parse_shorthand_margins};
use quire_types::{Rect, Size};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Points per millimetre.
pub const MM: f32 = 2.835;

/// Distances from each page edge to the content area, in points.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Accepts `"20mm"` / `"20mm 15mm"` shorthands, a bare number of points, or a map
/// of sides (missing sides are 0).
impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Sides {
            #[serde(default)]
            top: f32,
            #[serde(default)]
            right: f32,
            #[serde(default)]
            bottom: f32,
            #[serde(default)]
            left: f32,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MarginsDef {
            Points(f32),
            Shorthand(String),
            Sides(Sides),
        }

        match MarginsDef::deserialize(deserializer)? {
            MarginsDef::Points(value) => Ok(Margins::all(value)),
            MarginsDef::Shorthand(s) => parse_shorthand_margins(&s).map_err(de::Error::custom),
            MarginsDef::Sides(s) => Ok(Margins::new(s.top, s.right, s.bottom, s.left)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => parse_page_size(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

/// A physical page: its size and the margins that bound the content area.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margins: Margins::new(35.0 * MM, 20.0 * MM, 30.0 * MM, 20.0 * MM),
        }
    }
}

impl PageGeometry {
    pub fn page_size(&self) -> Size {
        let (width, height) = self.size.dimensions_pt();
        Size::new(width, height)
    }

    /// The rectangle content may occupy (page minus margins).
    pub fn content_rect(&self) -> Rect {
        let page = self.page_size();
        Rect {
            x: self.margins.left,
            y: self.margins.top,
            width: page.width - self.margins.left - self.margins.right,
            height: page.height - self.margins.top - self.margins.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_a4() {
        let geometry = PageGeometry::default();
        let content = geometry.content_rect();
        assert!((content.width - (595.28 - 40.0 * MM)).abs() < 0.01);
        assert!(content.height > 0.0);
    }

    #[test]
    fn test_margins_from_string_and_map() {
        let m: Margins = serde_json::from_str("\"10pt 20pt\"").unwrap();
        assert_eq!(m, Margins::new(10.0, 20.0, 10.0, 20.0));

        let m: Margins = serde_json::from_str(r#"{"top": 5, "left": 7}"#).unwrap();
        assert_eq!(m, Margins::new(5.0, 0.0, 0.0, 7.0));
    }

    #[test]
    fn test_page_size_from_string() {
        let s: PageSize = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(s, PageSize::Letter);

        let s: PageSize = serde_json::from_str("\"100pt 200pt\"").unwrap();
        assert_eq!(
            s,
            PageSize::Custom {
                width: 100.0,
                height: 200.0
            }
        );
    }
}
