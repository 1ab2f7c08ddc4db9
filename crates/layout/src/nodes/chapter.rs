use super::block::{BlockItem, ContentBlock, classify_lines};
use crate::painting::box_painter;
use crate::pagination::PaginationController;
use crate::text::{line_elements, pack_lines, split_units, tokenize, wrap_plain};
use crate::{ImageKey, LayoutEnvironment};
use quire_style::TextAlign;
use quire_types::{Chapter, ChapterPageRecord, Color, ImageTag, Rect, SharedImageData};
use std::collections::HashMap;

/// Lays out one chapter: title block followed by its content blocks.
pub struct ChapterRenderer<'a> {
    env: &'a LayoutEnvironment<'a>,
    /// Decodable content images only.
    images: &'a HashMap<ImageTag, SharedImageData>,
}

impl<'a> ChapterRenderer<'a> {
    pub fn new(
        env: &'a LayoutEnvironment<'a>,
        images: &'a HashMap<ImageTag, SharedImageData>,
    ) -> Self {
        Self { env, images }
    }

    /// Renders chapter `ordinal` (1-based) starting on a fresh page.
    ///
    /// Returns the page on which the title block begins. Every image actually
    /// drawn is registered in `resources`.
    pub fn render(
        &self,
        ordinal: usize,
        chapter: &Chapter,
        pager: &mut PaginationController<'_, '_>,
        resources: &mut HashMap<ImageKey, SharedImageData>,
    ) -> ChapterPageRecord {
        let first_page = pager.begin_chapter(ordinal);
        self.title_block(ordinal, &chapter.title, pager);

        let items = classify_lines(
            &chapter.title,
            &chapter.lines,
            self.env.config.title_suppression_window,
        );
        for item in items {
            match item {
                BlockItem::Gap => pager.advance(self.env.config.blank_line_gap),
                BlockItem::Block(ContentBlock::Paragraph(text)) => {
                    self.paragraph(&text, None, pager)
                }
                BlockItem::Block(ContentBlock::ListItem(text)) => {
                    self.paragraph(&text, Some(self.env.config.list_bullet.as_str()), pager)
                }
                BlockItem::Block(ContentBlock::Subtitle(text)) => self.subtitle(&text, pager),
                BlockItem::Block(ContentBlock::ImageRef { key, token }) => {
                    self.image(&key, &token, pager, resources)
                }
            }
        }

        ChapterPageRecord {
            title: chapter.title.clone(),
            page: first_page,
        }
    }

    fn title_block(&self, ordinal: usize, title: &str, pager: &mut PaginationController<'_, '_>) {
        let config = self.env.config;
        let content = pager.content_rect();

        let style = self
            .env
            .style(config.chapter_title_size)
            .bold()
            .with_color(self.env.theme.clone());
        let lines = wrap_plain(
            title,
            &style,
            self.env.measurer,
            content.width - config.chapter_ordinal_reserve,
        );
        let line_height = config.chapter_title_line_height;
        let block_height = lines.len() as f32 * line_height + config.chapter_title_spacing;

        pager.ensure_space(block_height);
        let top = pager.cursor_y();

        let ordinal_style = self
            .env
            .style(config.chapter_ordinal_size)
            .bold()
            .with_color(Color::gray(240));
        pager.push(self.env.text(
            content.right(),
            top,
            config.chapter_ordinal_size,
            ordinal.to_string(),
            &ordinal_style,
            TextAlign::Right,
        ));

        for (i, line) in lines.into_iter().enumerate() {
            pager.push(self.env.text(
                content.x,
                top + i as f32 * line_height,
                line_height,
                line,
                &style,
                TextAlign::Left,
            ));
        }

        pager.advance(block_height);
    }

    /// Body text, justified. A bullet turns it into a list item with a hanging indent.
    fn paragraph(&self, text: &str, bullet: Option<&str>, pager: &mut PaginationController<'_, '_>) {
        let config = self.env.config;
        let content = pager.content_rect();
        let body = self.env.body_style();

        let units = split_units(&tokenize(text), &body, self.env.measurer);
        if units.is_empty() {
            return;
        }

        let indent = if bullet.is_some() { config.list_indent } else { 0.0 };
        let line_height = config.body_line_height;

        for (i, line) in pack_lines(&units, content.width - indent).iter().enumerate() {
            pager.ensure_space(line_height);
            let y = pager.cursor_y();
            if i == 0
                && let Some(bullet) = bullet
            {
                pager.push(self.env.text(content.x, y, line_height, bullet, &body, TextAlign::Left));
            }
            for element in line_elements(line, &units, content.x + indent, y, line_height) {
                pager.push(element);
            }
            pager.advance(line_height);
        }

        pager.advance(config.paragraph_spacing);
    }

    /// A theme-coloured box with white bold text. Never split across pages.
    fn subtitle(&self, text: &str, pager: &mut PaginationController<'_, '_>) {
        let config = self.env.config;
        let content = pager.content_rect();

        let style = self
            .env
            .style(config.subtitle_font_size)
            .bold()
            .with_color(Color::white());
        let lines = wrap_plain(
            text,
            &style,
            self.env.measurer,
            content.width - 2.0 * config.subtitle_padding_x,
        );
        let line_height = config.subtitle_line_height;
        let box_height = lines.len() as f32 * line_height + 2.0 * config.subtitle_padding_y;

        pager.ensure_space(box_height);
        let top = pager.cursor_y();

        pager.push(box_painter::filled_rect(
            Rect::new(content.x, top, content.width, box_height),
            self.env.theme.clone(),
            config.subtitle_corner_radius,
        ));
        for (i, line) in lines.into_iter().enumerate() {
            pager.push(self.env.text(
                content.x + config.subtitle_padding_x,
                top + config.subtitle_padding_y + i as f32 * line_height,
                line_height,
                line,
                &style,
                TextAlign::Left,
            ));
        }

        pager.advance(box_height + config.subtitle_spacing);
    }

    /// A full-width image at the fixed aspect ratio. Missing payloads take no space.
    fn image(
        &self,
        key: &ImageTag,
        token: &ImageTag,
        pager: &mut PaginationController<'_, '_>,
        resources: &mut HashMap<ImageKey, SharedImageData>,
    ) {
        let found = [key, token]
            .into_iter()
            .find_map(|tag| self.images.get(tag).map(|data| (tag, data)));
        let Some((tag, data)) = found else {
            log::debug!("No usable payload for image reference '{}'", key);
            return;
        };

        let config = self.env.config;
        let content = pager.content_rect();
        let height = content.width / config.image_aspect_ratio;

        pager.ensure_space(height);
        let image_key = ImageKey::Content(tag.clone());
        pager.push(box_painter::image(
            Rect::new(content.x, pager.cursor_y(), content.width, height),
            image_key.clone(),
            1.0,
        ));
        resources.entry(image_key).or_insert_with(|| data.clone());

        pager.advance(height + config.image_spacing);
    }
}
