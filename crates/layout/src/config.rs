//! Tunable constants of the book layout.
//!
//! Every distance is in points. The defaults reproduce the house style: A4 pages,
//! 14pt body text on a 7mm line pitch and a theme-coloured footer band.

use crate::LayoutError;
use quire_style::{MM, PageGeometry};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub geometry: PageGeometry,

    // Body text
    pub body_font_size: f32,
    pub body_line_height: f32,
    /// Extra space after the last line of a paragraph.
    pub paragraph_spacing: f32,
    /// Vertical space consumed by a blank manuscript line.
    pub blank_line_gap: f32,
    pub list_indent: f32,
    pub list_bullet: String,

    // Chapter title block
    pub chapter_ordinal_size: f32,
    pub chapter_title_size: f32,
    pub chapter_title_line_height: f32,
    pub chapter_title_spacing: f32,
    /// Width kept free on the right of the title for the decorative ordinal.
    pub chapter_ordinal_reserve: f32,
    /// How many leading non-blank lines are checked for a repeated chapter title.
    pub title_suppression_window: usize,

    // Subtitle boxes
    pub subtitle_font_size: f32,
    pub subtitle_line_height: f32,
    pub subtitle_padding_x: f32,
    pub subtitle_padding_y: f32,
    pub subtitle_corner_radius: f32,
    pub subtitle_spacing: f32,

    // Inline images
    /// Width divided by height of every inline image box.
    pub image_aspect_ratio: f32,
    pub image_spacing: f32,

    // Page chrome
    pub header_rule_y: f32,
    pub header_rule_width: f32,
    pub header_label_size: f32,
    pub header_label_y: f32,
    pub accent_radius: f32,
    pub accent_center_y: f32,
    pub footer_height: f32,
    pub footer_number_size: f32,
    pub background_opacity: f32,

    // Title page
    pub title_bar_height: f32,
    pub book_title_size: f32,
    pub book_title_y: f32,
    pub book_title_line_height: f32,
    pub byline_size: f32,
    /// Distance of the byline from the bottom page edge.
    pub byline_bottom_offset: f32,

    // Index page
    pub index_heading_size: f32,
    pub index_heading_y: f32,
    pub index_rule_y: f32,
    pub index_accent_width: f32,
    pub index_accent_height: f32,
    pub index_first_row_y: f32,
    pub index_continuation_row_y: f32,
    /// Rows whose top would fall below `page height - index_bottom_limit` move to a new page.
    pub index_bottom_limit: f32,
    pub index_row_pitch: f32,
    pub index_ordinal_size: f32,
    pub index_title_size: f32,
    pub index_title_offset: f32,
    pub index_link_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),

            body_font_size: 14.0,
            body_line_height: 7.0 * MM,
            paragraph_spacing: 3.0 * MM,
            blank_line_gap: 6.0 * MM,
            list_indent: 5.0 * MM,
            list_bullet: "\u{2022}".to_string(),

            chapter_ordinal_size: 60.0,
            chapter_title_size: 32.0,
            chapter_title_line_height: 12.0 * MM,
            chapter_title_spacing: 25.0 * MM,
            chapter_ordinal_reserve: 30.0 * MM,
            title_suppression_window: 5,

            subtitle_font_size: 18.0,
            subtitle_line_height: 8.0 * MM,
            subtitle_padding_x: 5.0 * MM,
            subtitle_padding_y: 3.0 * MM,
            subtitle_corner_radius: 1.0 * MM,
            subtitle_spacing: 10.0 * MM,

            image_aspect_ratio: 1.5,
            image_spacing: 8.0 * MM,

            header_rule_y: 15.0 * MM,
            header_rule_width: 0.5,
            header_label_size: 10.0,
            header_label_y: 8.5 * MM,
            accent_radius: 1.5 * MM,
            accent_center_y: 12.0 * MM,
            footer_height: 15.0 * MM,
            footer_number_size: 11.0,
            background_opacity: 0.15,

            title_bar_height: 15.0 * MM,
            book_title_size: 36.0,
            book_title_y: 100.0 * MM,
            book_title_line_height: 14.0 * MM,
            byline_size: 14.0,
            byline_bottom_offset: 40.0 * MM,

            index_heading_size: 48.0,
            index_heading_y: 35.0 * MM,
            index_rule_y: 60.0 * MM,
            index_accent_width: 8.0 * MM,
            index_accent_height: 80.0 * MM,
            index_first_row_y: 80.0 * MM,
            index_continuation_row_y: 30.0 * MM,
            index_bottom_limit: 30.0 * MM,
            index_row_pitch: 9.0 * MM,
            index_ordinal_size: 18.0,
            index_title_size: 14.0,
            index_title_offset: 15.0 * MM,
            index_link_height: 10.0 * MM,
        }
    }
}

impl LayoutConfig {
    /// Parses a configuration from JSON, filling every missing field with its default.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LayoutError::Structural(format!("Invalid layout configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that leave no room to lay anything out.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let content = self.geometry.content_rect();
        if content.width <= 0.0 || content.height <= 0.0 {
            return Err(LayoutError::Structural(format!(
                "Page margins leave no content area ({:.2} x {:.2})",
                content.width, content.height
            )));
        }
        if self.body_line_height <= 0.0 || self.index_row_pitch <= 0.0 {
            return Err(LayoutError::Structural(
                "Line heights and row pitch must be positive".to_string(),
            ));
        }
        if self.image_aspect_ratio <= 0.0 {
            return Err(LayoutError::Structural(format!(
                "Image aspect ratio must be positive, got {}",
                self.image_aspect_ratio
            )));
        }
        Ok(())
    }

    pub fn content_width(&self) -> f32 {
        self.geometry.content_rect().width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_house_style() {
        let config = LayoutConfig::default();
        assert_eq!(config.body_font_size, 14.0);
        assert!((config.body_line_height - 19.845).abs() < 0.001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_overrides() {
        let config = LayoutConfig::from_json(r#"{ "bodyFontSize": 12, "titleSuppressionWindow": 3 }"#)
            .unwrap();
        assert_eq!(config.body_font_size, 12.0);
        assert_eq!(config.title_suppression_window, 3);
        assert_eq!(config.subtitle_font_size, 18.0);
    }

    #[test]
    fn test_from_json_geometry_shorthand() {
        let config = LayoutConfig::from_json(
            r#"{ "geometry": { "size": "letter", "margins": "20mm" } }"#,
        )
        .unwrap();
        assert_eq!(config.geometry.page_size().width, 612.0);
        assert!((config.geometry.margins.top - 56.7).abs() < 0.01);
    }

    #[test]
    fn test_margins_consuming_the_page_are_structural() {
        let err = LayoutConfig::from_json(r#"{ "geometry": { "margins": "400pt" } }"#).unwrap_err();
        assert!(matches!(err, LayoutError::Structural(_)));
    }

    #[test]
    fn test_non_positive_aspect_ratio_rejected() {
        let config = LayoutConfig {
            image_aspect_ratio: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
