//! Header and footer decoration of chapter pages.

use super::box_painter;
use crate::output::Page;
use crate::{ImageKey, LayoutEnvironment};
use quire_style::{MM, TextAlign};
use quire_types::Color;

const SIDE_INSET: f32 = 20.0 * MM;
const LABEL_INSET: f32 = 25.0 * MM;

/// Paints the page decoration that does not depend on content.
pub struct ChromeRenderer<'a> {
    env: &'a LayoutEnvironment<'a>,
}

impl<'a> ChromeRenderer<'a> {
    pub fn new(env: &'a LayoutEnvironment<'a>) -> Self {
        Self { env }
    }

    /// Draws the background texture, if any. Must run before anything else on the page.
    pub fn paint_background(&self, page: &mut Page) {
        if self.env.has_background {
            page.push(box_painter::full_bleed(
                page.size,
                ImageKey::Background,
                self.env.config.background_opacity,
            ));
        }
    }

    /// Paints a chapter page: background, header rule, running label, accent dot
    /// and the footer band carrying the display page number.
    pub fn paint(&self, page: &mut Page, label: &str, display_number: usize) {
        let config = self.env.config;
        let size = page.size;

        self.paint_background(page);

        page.push(box_painter::rule(
            SIDE_INSET,
            size.width - SIDE_INSET,
            config.header_rule_y,
            Color::gray(220),
            config.header_rule_width,
        ));

        let label_style = self
            .env
            .style(config.header_label_size)
            .with_color(Color::gray(100));
        page.push(self.env.text(
            size.width - LABEL_INSET,
            config.header_label_y,
            config.header_label_size,
            label,
            &label_style,
            TextAlign::Right,
        ));

        page.push(box_painter::dot(
            size.width - SIDE_INSET,
            config.accent_center_y,
            config.accent_radius,
            self.env.theme.clone(),
        ));

        let band_top = size.height - config.footer_height;
        page.push(box_painter::filled_rect(
            quire_types::Rect::new(0.0, band_top, size.width, config.footer_height),
            self.env.theme.clone(),
            0.0,
        ));

        let number_style = self
            .env
            .style(config.footer_number_size)
            .bold()
            .with_color(Color::white());
        page.push(self.env.text(
            size.width / 2.0,
            band_top + (config.footer_height - config.footer_number_size) / 2.0,
            config.footer_number_size,
            display_number.to_string(),
            &number_style,
            TextAlign::Center,
        ));
    }
}
