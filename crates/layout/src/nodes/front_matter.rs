//! Cover and title pages.

use crate::output::{Page, PageKind};
use crate::painting::{ChromeRenderer, box_painter};
use crate::text::wrap_plain;
use crate::{ImageKey, LayoutEnvironment};
use quire_style::TextAlign;
use quire_types::{Color, Rect};

pub struct FrontMatter<'a> {
    env: &'a LayoutEnvironment<'a>,
}

impl<'a> FrontMatter<'a> {
    pub fn new(env: &'a LayoutEnvironment<'a>) -> Self {
        Self { env }
    }

    /// A page filled edge to edge by the cover image.
    pub fn cover_page(&self, number: usize) -> Page {
        let mut page = Page::new(number, PageKind::Cover, self.env.page_size());
        page.push(box_painter::full_bleed(page.size, ImageKey::Cover, 1.0));
        page
    }

    /// Background, theme bar, centred title and an optional byline.
    pub fn title_page(&self, number: usize, title: &str, author: Option<&str>) -> Page {
        let config = self.env.config;
        let mut page = Page::new(number, PageKind::Title, self.env.page_size());
        let size = page.size;

        ChromeRenderer::new(self.env).paint_background(&mut page);
        page.push(box_painter::filled_rect(
            Rect::new(0.0, 0.0, size.width, config.title_bar_height),
            self.env.theme.clone(),
            0.0,
        ));

        let title_style = self
            .env
            .style(config.book_title_size)
            .bold()
            .with_color(self.env.theme.clone());
        let lines = wrap_plain(
            title,
            &title_style,
            self.env.measurer,
            self.env.content_rect().width,
        );
        for (i, line) in lines.into_iter().enumerate() {
            page.push(self.env.text(
                size.width / 2.0,
                config.book_title_y + i as f32 * config.book_title_line_height,
                config.book_title_line_height,
                line,
                &title_style,
                TextAlign::Center,
            ));
        }

        if let Some(author) = author.map(str::trim).filter(|a| !a.is_empty()) {
            let byline_style = self
                .env
                .style(config.byline_size)
                .with_color(Color::gray(100));
            page.push(self.env.text(
                size.width / 2.0,
                size.height - config.byline_bottom_offset,
                config.byline_size,
                format!("{} {}", self.env.labels.by, author),
                &byline_style,
                TextAlign::Center,
            ));
        }

        page
    }
}
