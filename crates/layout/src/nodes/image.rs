//! Image payload validation.
//!
//! Every payload is decoded once before layout. A payload that fails to decode is
//! treated exactly like a missing one.

use crate::ImageKey;
use quire_types::{ImageTag, Manuscript, SharedImageData};
use std::collections::HashMap;
use std::io::Cursor;
use thiserror::Error;

/// A problem with a single image payload. Logged, never propagated.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Image payload '{key}' is empty")]
    EmptyPayload { key: String },
    #[error("Image payload '{key}' could not be decoded: {message}")]
    Undecodable { key: String, message: String },
}

/// Fully decodes a payload and returns its pixel dimensions.
pub fn probe_image(key: &ImageKey, data: &[u8]) -> Result<(u32, u32), AssetError> {
    if data.is_empty() {
        return Err(AssetError::EmptyPayload {
            key: key.to_string(),
        });
    }
    let undecodable = |message: String| AssetError::Undecodable {
        key: key.to_string(),
        message,
    };

    let reader = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| undecodable(e.to_string()))?;
    if reader.format().is_none() {
        return Err(undecodable("unrecognised image format".to_string()));
    }
    let decoded = reader.decode().map_err(|e| undecodable(e.to_string()))?;
    Ok((decoded.width(), decoded.height()))
}

/// Probes an optional payload, logging and discarding anything unusable.
pub fn usable(key: &ImageKey, payload: Option<&SharedImageData>) -> Option<SharedImageData> {
    let data = payload?;
    match probe_image(key, data) {
        Ok((w, h)) => {
            log::debug!("Image '{}' accepted ({}x{} px)", key, w, h);
            Some(data.clone())
        }
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

/// The content images that can actually be drawn, keyed by tag.
pub fn decodable_content_images(manuscript: &Manuscript) -> HashMap<ImageTag, SharedImageData> {
    manuscript
        .content_images
        .iter()
        .filter_map(|(tag, payload)| {
            let key = ImageKey::Content(tag.clone());
            usable(&key, payload.as_ref()).map(|data| (tag.clone(), data))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{damaged_png, png_bytes};
    use std::sync::Arc;

    #[test]
    fn test_probe_png_dimensions() {
        let data = png_bytes(6, 4);
        assert_eq!(probe_image(&ImageKey::Cover, &data).unwrap(), (6, 4));
    }

    #[test]
    fn test_probe_rejects_garbage_and_empty() {
        let err = probe_image(&ImageKey::Background, b"definitely not an image").unwrap_err();
        assert!(matches!(err, AssetError::Undecodable { .. }));
        assert!(err.to_string().contains("background"));

        let err = probe_image(&ImageKey::Background, &[]).unwrap_err();
        assert!(matches!(err, AssetError::EmptyPayload { .. }));
    }

    #[test]
    fn test_probe_rejects_damaged_body_with_valid_header() {
        let data = damaged_png(64, 64);
        let header = image::ImageReader::new(Cursor::new(&data))
            .with_guessed_format()
            .unwrap()
            .into_dimensions();
        assert_eq!(header.unwrap(), (64, 64));

        let err = probe_image(&ImageKey::Content(ImageTag::new("[IMAGE_PROMPT: x]")), &data);
        assert!(matches!(err, Err(AssetError::Undecodable { .. })));
    }

    #[test]
    fn test_decodable_content_images_filters_bad_payloads() {
        let manuscript = Manuscript::new("Book")
            .with_image("[IMAGE_PROMPT: good]", png_bytes(3, 2))
            .with_image("[IMAGE_PROMPT: bad]", vec![1, 2, 3])
            .with_missing_image("[IMAGE_PROMPT: missing]");

        let images = decodable_content_images(&manuscript);
        assert_eq!(images.len(), 1);
        assert!(images.contains_key(&ImageTag::new("[IMAGE_PROMPT: good]")));
        assert!(usable(&ImageKey::Cover, Some(&Arc::new(vec![0u8; 8]))).is_none());
    }
}
