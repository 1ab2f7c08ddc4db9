//! Font library and the shaping-based text measurer.
//!
//! `SharedFontLibrary` resolves a `FontSpec` to font binaries, either from an
//! injected `FontProvider` or (with the `system-fonts` feature) from fontdb.
//! `ShapingMeasurer` shapes text with rustybuzz against whatever the library
//! resolves and falls back to average advances when no face is available.

use quire_style::{FontFamily, FontSpec, FontWeight};
use quire_traits::{AverageAdvanceMeasurer, FontError, FontProvider, FontQuery, TextMeasurer};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A thread-safe handle to font data with rustybuzz Face creation.
pub struct FontInstance {
    pub data: Arc<Vec<u8>>,
}

impl std::fmt::Debug for FontInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontInstance")
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontInstance {
    pub fn new(data: Arc<Vec<u8>>) -> Self {
        Self { data }
    }

    /// Creates a lightweight Face view over the font data.
    /// This is cheap (parsing header) and avoids self-referential struct issues.
    pub fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, 0)
    }

    /// The PostScript name of the face, falling back to the family name.
    pub fn postscript_name(&self) -> Option<String> {
        let face = ttf_parser::Face::parse(&self.data, 0).ok()?;
        [ttf_parser::name_id::POST_SCRIPT_NAME, ttf_parser::name_id::FAMILY]
            .into_iter()
            .find_map(|id| {
                face.names()
                    .into_iter()
                    .find(|n| n.name_id == id)
                    .and_then(|n| n.to_string())
            })
    }
}

pub type FontData = Arc<FontInstance>;

/// Key for the font cache.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FontCacheKey {
    family: String,
    weight: u16,
}

impl FontCacheKey {
    fn new(family: &str, weight: FontWeight) -> Self {
        Self {
            family: family.to_lowercase(),
            weight: weight.numeric_value(),
        }
    }
}

/// Names tried, in order, when resolving a family.
fn family_candidates(family: &FontFamily) -> Vec<String> {
    match family {
        FontFamily::Helvetica => vec!["Helvetica".into(), "Arial".into(), "Liberation Sans".into()],
        FontFamily::Times => vec![
            "Times".into(),
            "Times New Roman".into(),
            "Liberation Serif".into(),
        ],
        FontFamily::Named(name) => vec![name.clone()],
    }
}

/// A thread-safe, shared font library.
///
/// - With the `system-fonts` feature: fontdb is consulted after the provider.
/// - Without it: only the injected FontProvider is used.
#[derive(Clone)]
pub struct SharedFontLibrary {
    /// fontdb database for system fonts (only available with system-fonts feature)
    #[cfg(feature = "system-fonts")]
    db: Arc<RwLock<fontdb::Database>>,

    /// Optional external font provider for custom/in-memory fonts
    external_provider: Option<Arc<dyn FontProvider>>,

    /// Cache of loaded font binaries, keyed by normalized (family, weight).
    font_data_cache: Arc<RwLock<HashMap<FontCacheKey, FontData>>>,
}

impl SharedFontLibrary {
    /// Creates a new empty font library.
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "system-fonts")]
            db: Arc::new(RwLock::new(fontdb::Database::new())),
            external_provider: None,
            font_data_cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a font library using only the provided FontProvider.
    pub fn from_provider(provider: Arc<dyn FontProvider>) -> Self {
        Self::new().with_provider(provider)
    }

    /// Fonts from the external provider take precedence over system fonts.
    pub fn with_provider(mut self, provider: Arc<dyn FontProvider>) -> Self {
        self.external_provider = Some(provider);
        self
    }

    /// Enables system font loading.
    #[cfg(feature = "system-fonts")]
    pub fn with_system_fonts(self, enable: bool) -> Self {
        if enable && let Ok(mut db) = self.db.write() {
            db.load_system_fonts();
        }
        self
    }

    /// Resolves the raw font data for a font spec.
    ///
    /// Resolution order:
    /// 1. Cache
    /// 2. External FontProvider (if set)
    /// 3. fontdb database
    ///
    /// # Errors
    ///
    /// Returns `FontError::NotFound` if no matching font is found in any source.
    pub fn resolve_font_data(&self, font: &FontSpec) -> Result<FontData, FontError> {
        let cache_key = FontCacheKey::new(font.family.name(), font.weight);

        if let Ok(cache) = self.font_data_cache.read()
            && let Some(data) = cache.get(&cache_key)
        {
            return Ok(data.clone());
        }

        let candidates = family_candidates(&font.family);

        if let Some(provider) = &self.external_provider {
            let fallbacks: Vec<&str> = candidates.iter().skip(1).map(String::as_str).collect();
            let query = FontQuery::new(font.family.name())
                .with_weight(font.weight)
                .with_fallbacks(&fallbacks);
            match provider.load_font(&query) {
                Ok(data) => return Ok(self.cache_font_data(cache_key, data)),
                Err(e) => log::debug!("Provider '{}' miss: {}", provider.name(), e),
            }
        }

        #[cfg(feature = "system-fonts")]
        if let Some(data) = self.resolve_from_fontdb(&candidates, font) {
            return Ok(self.cache_font_data(cache_key, data));
        }

        Err(FontError::NotFound {
            family: font.family.name().to_string(),
            weight: font.weight,
        })
    }

    #[cfg(feature = "system-fonts")]
    fn resolve_from_fontdb(&self, candidates: &[String], font: &FontSpec) -> Option<Arc<Vec<u8>>> {
        let db = self.db.read().ok()?;
        let generic = match font.family {
            FontFamily::Times => fontdb::Family::Serif,
            _ => fontdb::Family::SansSerif,
        };
        let mut families: Vec<fontdb::Family<'_>> = candidates
            .iter()
            .map(|name| fontdb::Family::Name(name.as_str()))
            .collect();
        families.push(generic);

        let query = fontdb::Query {
            families: &families,
            weight: map_weight(font.weight),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = db.query(&query)?;
        db.with_face_data(id, |data, _index| Arc::new(data.to_vec()))
    }

    fn cache_font_data(&self, key: FontCacheKey, data: Arc<Vec<u8>>) -> FontData {
        let font_data = Arc::new(FontInstance::new(data));
        log::debug!(
            "Caching font for '{}' ({}): {}",
            key.family,
            key.weight,
            font_data.postscript_name().as_deref().unwrap_or("<unnamed>")
        );
        if let Ok(mut cache) = self.font_data_cache.write() {
            cache.insert(key, font_data.clone());
        }
        font_data
    }
}

impl Default for SharedFontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "system-fonts")]
fn map_weight(w: FontWeight) -> fontdb::Weight {
    match w {
        FontWeight::Regular => fontdb::Weight::NORMAL,
        FontWeight::Bold => fontdb::Weight::BOLD,
    }
}

/// Measures text by shaping it with rustybuzz.
///
/// Advances are summed in font units and scaled by `size / units_per_em`. Text
/// whose face cannot be resolved or parsed is measured by the fallback.
#[derive(Clone)]
pub struct ShapingMeasurer {
    library: SharedFontLibrary,
    fallback: AverageAdvanceMeasurer,
}

impl std::fmt::Debug for ShapingMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapingMeasurer")
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl ShapingMeasurer {
    pub fn new(library: SharedFontLibrary) -> Self {
        Self {
            library,
            fallback: AverageAdvanceMeasurer::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: AverageAdvanceMeasurer) -> Self {
        self.fallback = fallback;
        self
    }

    fn shaped_width(&self, text: &str, font: &FontSpec) -> Option<f32> {
        let data = self.library.resolve_font_data(font).ok()?;
        let face = data.as_face()?;

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();
        let glyphs = rustybuzz::shape(&face, &[], buffer);

        let units: i32 = glyphs.glyph_positions().iter().map(|p| p.x_advance).sum();
        let upem = face.units_per_em() as f32;
        if upem <= 0.0 {
            return None;
        }
        Some(units.max(0) as f32 * font.size / upem)
    }
}

impl TextMeasurer for ShapingMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.shaped_width(text, font)
            .unwrap_or_else(|| self.fallback.measure(text, font))
    }

    fn name(&self) -> &'static str {
        "ShapingMeasurer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_traits::InMemoryFontProvider;

    #[test]
    fn test_font_cache_key() {
        let key1 = FontCacheKey::new("Arial", FontWeight::Bold);
        let key2 = FontCacheKey::new("arial", FontWeight::Bold);
        let key3 = FontCacheKey::new("Arial", FontWeight::Regular);

        // Case insensitive
        assert_eq!(key1, key2);
        // Different weight = different key
        assert_ne!(key1, key3);
    }

    #[test]
    fn test_provider_font_is_resolved_and_cached() {
        let provider = InMemoryFontProvider::new();
        // Not a parseable face, but enough to exercise resolution.
        provider
            .add_font("Helvetica", FontWeight::Regular, vec![0, 1, 2, 3])
            .unwrap();
        let library = SharedFontLibrary::from_provider(Arc::new(provider));
        let spec = FontSpec::new(FontFamily::Helvetica, FontWeight::Regular, 12.0);

        let first = library.resolve_font_data(&spec).unwrap();
        let second = library.resolve_font_data(&spec).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.as_face().is_none());
    }

    #[test]
    fn test_unparseable_face_falls_back_to_average_advance() {
        let provider = InMemoryFontProvider::new();
        provider
            .add_font("Helvetica", FontWeight::Regular, vec![0; 16])
            .unwrap();
        let measurer =
            ShapingMeasurer::new(SharedFontLibrary::from_provider(Arc::new(provider)));
        let spec = FontSpec::new(FontFamily::Helvetica, FontWeight::Regular, 10.0);

        assert_eq!(measurer.measure("abcd", &spec), 20.0);
        assert_eq!(measurer.measure("", &spec), 0.0);
    }

    #[test]
    fn test_named_family_candidates() {
        let candidates = family_candidates(&FontFamily::Named("Inter".into()));
        assert_eq!(candidates, vec!["Inter".to_string()]);
    }
}
