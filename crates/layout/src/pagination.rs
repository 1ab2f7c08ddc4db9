//! The cursor that flows chapter content down the page and opens new pages.

use crate::algorithms::pagination::check_block_fit;
use crate::output::{Page, PageKind};
use crate::painting::ChromeRenderer;
use crate::{LayoutEnvironment, PositionedElement};
use quire_types::Rect;

/// Owns the vertical cursor while chapters are laid out.
///
/// Two counters are kept apart: the absolute page number (position in the page
/// list) and the display number printed in the footer. They advance together but
/// start from different bases.
pub struct PaginationController<'e, 'p> {
    env: &'e LayoutEnvironment<'e>,
    pages: &'p mut Vec<Page>,
    bounds: Rect,
    /// Offset from the top of `bounds`.
    cursor_y: f32,
    /// Index into `pages` of the page being filled.
    active: Option<usize>,
    next_display: usize,
    ordinal: usize,
    label: String,
}

impl<'e, 'p> PaginationController<'e, 'p> {
    /// `first_display` is the footer number of the first chapter page.
    pub fn new(
        env: &'e LayoutEnvironment<'e>,
        pages: &'p mut Vec<Page>,
        first_display: usize,
    ) -> Self {
        Self {
            bounds: env.content_rect(),
            env,
            pages,
            cursor_y: 0.0,
            active: None,
            next_display: first_display,
            ordinal: 0,
            label: String::new(),
        }
    }

    /// Starts chapter `ordinal` on a fresh page and returns that page's absolute number.
    pub fn begin_chapter(&mut self, ordinal: usize) -> usize {
        self.ordinal = ordinal;
        self.label = format!("{} {}", self.env.labels.chapter, ordinal);
        self.new_page()
    }

    fn new_page(&mut self) -> usize {
        let number = self.pages.len() + 1;
        let display = self.next_display;
        self.next_display += 1;

        let mut page = Page::new(
            number,
            PageKind::Chapter {
                ordinal: self.ordinal,
            },
            self.env.page_size(),
        );
        page.display_number = Some(display);
        ChromeRenderer::new(self.env).paint(&mut page, &self.label, display);

        self.pages.push(page);
        self.active = Some(self.pages.len() - 1);
        self.cursor_y = 0.0;
        log::debug!("Opened page {} (display {}) for '{}'", number, display, self.label);
        number
    }

    /// Guarantees that a block of `height` fits below the cursor.
    ///
    /// Opens a new page (with chrome) when it does not, and returns its absolute
    /// number. A block taller than the content area at the top of a page is left
    /// to overflow.
    pub fn ensure_space(&mut self, height: f32) -> Option<usize> {
        if self.active.is_none() {
            return Some(self.new_page());
        }
        let fit = check_block_fit(self.cursor_y, height, self.bounds);
        if fit.should_break {
            Some(self.new_page())
        } else {
            if height > self.bounds.height {
                log::warn!(
                    "Block of height {:.2} exceeds the content area ({:.2}) and will overflow.",
                    height,
                    self.bounds.height
                );
            }
            None
        }
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    /// Absolute y of the cursor on the page.
    pub fn cursor_y(&self) -> f32 {
        self.bounds.y + self.cursor_y
    }

    pub fn is_at_page_top(&self) -> bool {
        self.cursor_y.abs() < 0.01
    }

    pub fn content_rect(&self) -> Rect {
        self.bounds
    }

    /// Absolute number of the active page, if one has been opened.
    pub fn page_number(&self) -> Option<usize> {
        self.active.map(|i| self.pages[i].number)
    }

    /// Footer number of the active page.
    pub fn display_number(&self) -> Option<usize> {
        self.active.and_then(|i| self.pages[i].display_number)
    }

    /// Appends an element to the active page, opening one if needed.
    pub fn push(&mut self, element: PositionedElement) {
        let index = match self.active {
            Some(i) => i,
            None => {
                self.new_page();
                self.pages.len() - 1
            }
        };
        self.pages[index].push(element);
    }
}
