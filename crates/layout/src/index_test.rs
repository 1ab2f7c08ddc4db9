#![cfg(test)]

use crate::output::{Page, PageKind};
use crate::test_utils::{find_text, layout};
use crate::{LayoutElement, LayoutConfig};
use quire_style::TextAlign;
use quire_types::{BookLanguage, Chapter, Manuscript};

fn book(chapters: usize) -> Manuscript {
    (1..=chapters).fold(Manuscript::new("Anthology"), |m, i| {
        m.with_chapter(Chapter::new(format!("Story {}", i), "A short body."))
    })
}

fn link_targets(page: &Page) -> Vec<usize> {
    page.elements
        .iter()
        .filter_map(|e| match &e.element {
            LayoutElement::Link(l) => Some(l.target_page),
            _ => None,
        })
        .collect()
}

#[test]
fn test_index_rows_match_chapter_records() {
    let doc = layout(&book(3));

    assert_eq!(doc.index_entries.len(), 3);
    for (i, (entry, record)) in doc.index_entries.iter().zip(&doc.chapter_records).enumerate() {
        assert_eq!(entry.ordinal, i + 1);
        assert_eq!(entry.title, record.title);
        assert_eq!(entry.page, record.page);
        assert_eq!(entry.index_page, doc.index_page);
        assert_eq!(doc.page(entry.page).map(|p| p.kind), Some(PageKind::Chapter { ordinal: i + 1 }));
    }

    let index = doc.page(doc.index_page).unwrap();
    assert_eq!(index.kind, PageKind::Index);
    assert_eq!(link_targets(index), vec![3, 4, 5]);
}

#[test]
fn test_index_row_content() {
    let doc = layout(&book(2));
    let index = doc.page(doc.index_page).unwrap();

    assert!(find_text(index, "SUMMARY").is_some());
    assert!(find_text(index, "01").is_some());
    assert!(find_text(index, "02").is_some());
    assert!(find_text(index, "Story 2").is_some());

    let number = find_text(index, "4").unwrap();
    assert_eq!(number.as_text().map(|t| t.align), Some(TextAlign::Right));
    let content = LayoutConfig::default().geometry.content_rect();
    assert!((number.x + number.width - content.right()).abs() < 0.01);
}

#[test]
fn test_link_regions_lie_on_their_index_page() {
    let doc = layout(&book(5));
    let index = doc.page(doc.index_page).unwrap();
    let page_rect = quire_types::Rect::new(0.0, 0.0, index.size.width, index.size.height);

    for entry in &doc.index_entries {
        assert!(page_rect.contains(&entry.link_rect));
    }
    let ys: Vec<_> = doc.index_entries.iter().map(|e| e.link_rect.y).collect();
    assert!(ys.windows(2).all(|w| w[1] > w[0]), "rows must advance down the page");
}

#[test]
fn test_index_overflow_pages_are_appended_at_document_end() {
    let doc = layout(&book(45));

    // title, index, 45 chapters, one overflow page
    assert_eq!(doc.page_count(), 48);
    let last = doc.pages.last().unwrap();
    assert_eq!(last.kind, PageKind::IndexOverflow);
    assert_eq!(last.number, 48);
    assert_eq!(
        doc.pages.iter().filter(|p| p.kind == PageKind::IndexOverflow).count(),
        1
    );

    let on_reserved: Vec<_> = doc.index_entries.iter().filter(|e| e.index_page == 2).collect();
    let on_overflow: Vec<_> = doc.index_entries.iter().filter(|e| e.index_page == 48).collect();
    assert_eq!(on_reserved.len() + on_overflow.len(), 45);
    assert!(!on_overflow.is_empty());

    let mut targets = link_targets(doc.page(2).unwrap());
    targets.extend(link_targets(last));
    assert_eq!(targets, (3..=47).collect::<Vec<_>>());

    for entry in &doc.index_entries {
        assert_eq!(entry.page, entry.ordinal + 2);
        assert_eq!(
            doc.page(entry.page).map(|p| p.kind),
            Some(PageKind::Chapter { ordinal: entry.ordinal })
        );
    }

    let continuation = LayoutConfig::default().index_continuation_row_y;
    assert!((on_overflow[0].link_rect.y - continuation).abs() < 0.01);
}

#[test]
fn test_overflow_page_has_no_footer_number() {
    let doc = layout(&book(45));
    let last = doc.pages.last().unwrap();
    assert_eq!(last.display_number, None);
    assert!(find_text(last, "Chapter 45").is_none());
}

#[test]
fn test_empty_manuscript_has_heading_only_index() {
    let doc = layout(&Manuscript::new("Nothing Yet"));

    assert_eq!(doc.page_count(), 2);
    assert!(doc.index_entries.is_empty());
    let index = doc.page(2).unwrap();
    assert!(find_text(index, "SUMMARY").is_some());
    assert!(link_targets(index).is_empty());
}

#[test]
fn test_labels_follow_language() {
    let manuscript = book(1).with_language(BookLanguage::Pt);
    let doc = layout(&manuscript);

    assert!(find_text(doc.page(2).unwrap(), "SUMÁRIO").is_some());
    assert!(find_text(doc.page(3).unwrap(), "Capítulo 1").is_some());
}
