//! Output types from the layout engine.
//!
//! `LaidOutDocument` is the complete, ordered page list plus the side tables the
//! renderer and callers need: image payloads, chapter start pages and index rows.

use crate::{ImageKey, PositionedElement};
use quire_types::{ChapterPageRecord, IndexEntry, SharedImageData, Size};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Cover,
    Title,
    /// The reserved index page.
    Index,
    /// Extra index pages appended after the last chapter.
    IndexOverflow,
    Chapter { ordinal: usize },
}

#[derive(Debug, Clone)]
pub struct Page {
    /// Absolute 1-based position in the final document.
    pub number: usize,
    pub kind: PageKind,
    /// The number printed in the footer, if any.
    pub display_number: Option<usize>,
    pub size: Size,
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn new(number: usize, kind: PageKind, size: Size) -> Self {
        Self {
            number,
            kind,
            display_number: None,
            size,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: PositionedElement) {
        self.elements.push(element);
    }

    /// Text contents in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| e.as_text().map(|t| t.content.as_str()))
    }

    pub fn is_chapter_page(&self) -> bool {
        matches!(self.kind, PageKind::Chapter { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
    /// Payloads for every image referenced by an `Image` element.
    pub resources: HashMap<ImageKey, SharedImageData>,
    /// First physical page of each chapter, in manuscript order.
    pub chapter_records: Vec<ChapterPageRecord>,
    pub index_entries: Vec<IndexEntry>,
    /// Absolute number of the reserved index page.
    pub index_page: usize,
}

impl LaidOutDocument {
    pub fn page(&self, number: usize) -> Option<&Page> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
