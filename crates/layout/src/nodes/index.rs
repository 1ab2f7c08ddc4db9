//! The second layout pass: filling the reserved index page once every chapter's
//! start page is known.

use crate::output::{Page, PageKind};
use crate::painting::box_painter;
use crate::{LayoutEnvironment, LayoutError};
use quire_style::TextAlign;
use quire_types::{ChapterPageRecord, Color, IndexEntry, Rect};

pub struct IndexRenderer<'a> {
    env: &'a LayoutEnvironment<'a>,
}

impl<'a> IndexRenderer<'a> {
    pub fn new(env: &'a LayoutEnvironment<'a>) -> Self {
        Self { env }
    }

    /// Draws one row per record onto the page numbered `index_page`.
    ///
    /// Rows that do not fit continue on new pages appended at the end of `pages`,
    /// after the last chapter, not next to the reserved page.
    pub fn fill(
        &self,
        pages: &mut Vec<Page>,
        index_page: usize,
        records: &[ChapterPageRecord],
    ) -> Result<Vec<IndexEntry>, LayoutError> {
        let config = self.env.config;
        let page = index_page
            .checked_sub(1)
            .and_then(|i| pages.get_mut(i))
            .filter(|p| p.kind == PageKind::Index)
            .ok_or_else(|| {
                LayoutError::Generic(format!("Page {} is not a reserved index page", index_page))
            })?;
        self.paint_heading(page);

        let size = self.env.page_size();
        let content = self.env.content_rect();
        let row_limit = size.height - config.index_bottom_limit;

        let mut current = index_page;
        let mut row_y = config.index_first_row_y;
        let mut entries = Vec::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            if row_y > row_limit {
                current = pages.len() + 1;
                pages.push(Page::new(current, PageKind::IndexOverflow, size));
                row_y = config.index_continuation_row_y;
                log::debug!("Index continues on appended page {}", current);
            }

            let ordinal = i + 1;
            let link_rect = Rect::new(content.x, row_y, content.width, config.index_link_height);
            let page = &mut pages[current - 1];
            self.paint_row(page, ordinal, record, row_y);
            page.push(box_painter::link(link_rect, record.page));

            entries.push(IndexEntry {
                ordinal,
                title: record.title.clone(),
                page: record.page,
                index_page: current,
                link_rect,
            });
            row_y += config.index_row_pitch;
        }

        log::info!(
            "Index resolved: {} entries across {} page(s)",
            entries.len(),
            1 + pages.iter().filter(|p| p.kind == PageKind::IndexOverflow).count()
        );
        Ok(entries)
    }

    fn paint_heading(&self, page: &mut Page) {
        let config = self.env.config;
        let size = page.size;
        let content = self.env.content_rect();

        page.elements.clear();
        page.push(box_painter::filled_rect(
            Rect::new(0.0, 0.0, size.width, size.height),
            Color::white(),
            0.0,
        ));
        page.push(box_painter::filled_rect(
            Rect::new(0.0, 0.0, config.index_accent_width, config.index_accent_height),
            self.env.theme.clone(),
            0.0,
        ));
        page.push(box_painter::filled_rect(
            Rect::new(0.0, 0.0, size.width, config.title_bar_height),
            self.env.theme.clone(),
            0.0,
        ));

        let heading_style = self.env.style(config.index_heading_size).bold();
        page.push(self.env.text(
            content.x,
            config.index_heading_y,
            config.index_heading_size,
            self.env.labels.index,
            &heading_style,
            TextAlign::Left,
        ));
        page.push(box_painter::rule(
            content.x,
            content.right(),
            config.index_rule_y,
            Color::gray(200),
            config.header_rule_width,
        ));
    }

    fn paint_row(&self, page: &mut Page, ordinal: usize, record: &ChapterPageRecord, row_y: f32) {
        let config = self.env.config;
        let content = self.env.content_rect();

        let ordinal_style = self
            .env
            .style(config.index_ordinal_size)
            .bold()
            .with_color(self.env.theme.clone());
        page.push(self.env.text(
            content.x,
            row_y,
            config.index_ordinal_size,
            format!("{:02}", ordinal),
            &ordinal_style,
            TextAlign::Left,
        ));

        let title_style = self.env.style(config.index_title_size).bold();
        page.push(self.env.text(
            content.x + config.index_title_offset,
            row_y,
            config.index_title_size,
            record.title.as_str(),
            &title_style,
            TextAlign::Left,
        ));

        let number_style = title_style.with_color(Color::gray(150));
        page.push(self.env.text(
            content.right(),
            row_y,
            config.index_title_size,
            record.page.to_string(),
            &number_style,
            TextAlign::Right,
        ));
    }
}
