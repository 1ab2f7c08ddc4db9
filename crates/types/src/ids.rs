//! Newtype wrappers for semantic identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The verbatim text of an image reference line (e.g. `[IMAGE_PROMPT: a lighthouse]`).
///
/// Image payloads are keyed by this exact text, so no normalisation is applied beyond
/// what the caller does before constructing the tag.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ImageTag(Arc<str>);

impl ImageTag {
    pub fn new(tag: impl Into<Arc<str>>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ImageTag {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ImageTag {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ImageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ImageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ImageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ImageTag::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_tag_creation() {
        let t1 = ImageTag::new("[IMAGE_PROMPT: fox]");
        let t2 = ImageTag::from("[IMAGE_PROMPT: fox]");
        let t3 = ImageTag::from(String::from("[IMAGE_PROMPT: fox]"));

        assert_eq!(t1, t2);
        assert_eq!(t2, t3);
        assert_eq!(t1.as_str(), "[IMAGE_PROMPT: fox]");
    }

    #[test]
    fn test_tag_is_case_sensitive() {
        assert_ne!(ImageTag::from("[IMAGE_PROMPT: Fox]"), ImageTag::from("[IMAGE_PROMPT: fox]"));
    }

    #[test]
    fn test_hash_map_usage() {
        use std::collections::HashMap;

        let mut payloads = HashMap::new();
        payloads.insert(ImageTag::new("[IMAGE_PROMPT: a]"), Some(vec![1u8, 2, 3]));
        payloads.insert(ImageTag::new("[IMAGE_PROMPT: b]"), None);

        assert_eq!(
            payloads.get(&ImageTag::new("[IMAGE_PROMPT: a]")),
            Some(&Some(vec![1, 2, 3]))
        );
        assert_eq!(payloads.get(&ImageTag::new("[IMAGE_PROMPT: b]")), Some(&None));
    }
}
