//! The manuscript data model consumed by the layout engine, and the records the
//! engine hands back once page numbers are known.

use crate::color::Color;
use crate::geometry::Rect;
use crate::ids::ImageTag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Shared image bytes (reference-counted so pages can point at payloads without copying).
pub type SharedImageData = Arc<Vec<u8>>;

/// Language of the generated chrome labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookLanguage {
    Pt,
    #[default]
    En,
    Es,
    Fr,
    De,
}

/// Localized strings used by the chrome, title page and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub index: &'static str,
    pub chapter: &'static str,
    pub by: &'static str,
}

impl BookLanguage {
    pub fn labels(&self) -> Labels {
        match self {
            BookLanguage::En => Labels {
                index: "SUMMARY",
                chapter: "Chapter",
                by: "Written by",
            },
            BookLanguage::Es => Labels {
                index: "ÍNDICE",
                chapter: "Capítulo",
                by: "Escrito por",
            },
            BookLanguage::Fr => Labels {
                index: "SOMMAIRE",
                chapter: "Chapitre",
                by: "Écrit par",
            },
            BookLanguage::De => Labels {
                index: "ZUSAMMENFASSUNG",
                chapter: "Kapitel",
                by: "Geschrieben von",
            },
            BookLanguage::Pt => Labels {
                index: "SUMÁRIO",
                chapter: "Capítulo",
                by: "Escrito por",
            },
        }
    }
}

/// A single chapter: a title plus raw, lightly marked-up lines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chapter {
    pub title: String,
    #[serde(rename = "content", deserialize_with = "payload::lines")]
    pub lines: Vec<String>,
}

impl Chapter {
    /// Builds a chapter from its full text; the text is split on newlines.
    pub fn new(title: impl Into<String>, content: &str) -> Self {
        Self {
            title: title.into(),
            lines: split_lines(content),
        }
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect()
}

fn default_theme_color() -> Color {
    Color::rgb(0x1e, 0x40, 0xaf)
}

fn default_font_family() -> String {
    "helvetica".to_string()
}

/// The complete, already-assembled book handed to the layout engine.
///
/// Image payloads are resolved before layout starts; a tag mapped to `None` (or not
/// present at all) renders as nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manuscript {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "authorName")]
    pub author: Option<String>,
    #[serde(default)]
    pub language: BookLanguage,
    #[serde(default = "default_theme_color")]
    pub theme_color: Color,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default, deserialize_with = "payload::optional")]
    pub background_image: Option<SharedImageData>,
    #[serde(default, deserialize_with = "payload::optional")]
    pub cover_image: Option<SharedImageData>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default, deserialize_with = "payload::map")]
    pub content_images: HashMap<ImageTag, Option<SharedImageData>>,
}

impl Manuscript {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            language: BookLanguage::default(),
            theme_color: default_theme_color(),
            font_family: default_font_family(),
            background_image: None,
            cover_image: None,
            chapters: Vec::new(),
            content_images: HashMap::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_language(mut self, language: BookLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn with_theme_color(mut self, color: Color) -> Self {
        self.theme_color = color;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_background(mut self, data: Vec<u8>) -> Self {
        self.background_image = Some(Arc::new(data));
        self
    }

    pub fn with_cover(mut self, data: Vec<u8>) -> Self {
        self.cover_image = Some(Arc::new(data));
        self
    }

    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    pub fn with_image(mut self, tag: impl Into<ImageTag>, data: Vec<u8>) -> Self {
        self.content_images.insert(tag.into(), Some(Arc::new(data)));
        self
    }

    /// Registers a tag whose payload is known to be missing (e.g. generation failed).
    pub fn with_missing_image(mut self, tag: impl Into<ImageTag>) -> Self {
        self.content_images.insert(tag.into(), None);
        self
    }

    /// Looks up the payload for a tag; absent tags and `None` payloads are equivalent.
    pub fn image_payload(&self, tag: &ImageTag) -> Option<&SharedImageData> {
        self.content_images.get(tag).and_then(|p| p.as_ref())
    }
}

/// The absolute page (1-based, storage order) on which a chapter's title block began.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPageRecord {
    pub title: String,
    pub page: usize,
}

/// One resolved row of the index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    /// 1-based position of the chapter in the manuscript.
    pub ordinal: usize,
    pub title: String,
    /// Absolute page the row links to.
    pub page: usize,
    /// Absolute page the row is drawn on.
    pub index_page: usize,
    /// Clickable region of the row, in page coordinates.
    pub link_rect: Rect,
}

mod payload {
    //! Serde helpers for base64-encoded image payloads.

    use super::{SharedImageData, split_lines};
    use crate::ids::ImageTag;
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer};
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Decodes a base64 payload, tolerating a `data:...;base64,` prefix.
    ///
    /// Undecodable text becomes an empty payload; the layout engine reports and skips it.
    fn decode(text: &str) -> SharedImageData {
        let body = match text.find(";base64,") {
            Some(pos) => &text[pos + ";base64,".len()..],
            None => text,
        };
        Arc::new(STANDARD.decode(body.trim()).unwrap_or_default())
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<SharedImageData>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(decode))
    }

    pub fn map<'de, D>(
        deserializer: D,
    ) -> Result<HashMap<ImageTag, Option<SharedImageData>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<ImageTag, Option<String>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(tag, value)| (tag, value.as_deref().map(decode)))
            .collect())
    }

    pub fn lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|content| split_lines(&content))
    }
}
