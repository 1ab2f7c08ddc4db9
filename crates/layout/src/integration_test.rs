#![cfg(test)]

use crate::output::{Page, PageKind};
use crate::pagination::PaginationController;
use crate::test_utils::{find_text, init_logging, layout, png_bytes, words};
use crate::{
    ImageKey, LayoutConfig, LayoutElement, LayoutEngine, LayoutEnvironment, LayoutError,
    SharedFontLibrary, ShapingMeasurer,
};
use quire_style::FontFamily;
use quire_traits::AverageAdvanceMeasurer;
use quire_types::{BookLanguage, Chapter, Color, Manuscript, Rect};
use std::sync::Arc;

fn full_book() -> Manuscript {
    Manuscript::new("A Long Road")
        .with_author("R. Writer")
        .with_background(png_bytes(4, 4))
        .with_chapter(Chapter::new(
            "Departure",
            &format!("## Setting Out\n{}\n\n- pack\n- go", words("walk", 600)),
        ))
        .with_chapter(Chapter::new("Arrival", &words("rest", 900)))
}

#[test]
fn test_missing_title_is_structural_error() {
    init_logging();
    let err = LayoutEngine::default()
        .layout(&Manuscript::new("   "))
        .unwrap_err();
    assert!(matches!(err, LayoutError::Structural(_)));
}

#[test]
fn test_zero_content_area_is_structural_error() {
    init_logging();
    let mut config = LayoutConfig::default();
    config.geometry.margins.left = 400.0;
    config.geometry.margins.right = 400.0;
    let engine = LayoutEngine::new(config, Arc::new(AverageAdvanceMeasurer::default()));

    let err = engine.layout(&Manuscript::new("Fine")).unwrap_err();
    assert!(matches!(err, LayoutError::Structural(_)));
}

#[test]
fn test_every_element_lies_on_its_page() {
    let doc = layout(&full_book());
    for page in &doc.pages {
        let bounds = Rect::new(0.0, 0.0, page.size.width, page.size.height);
        for el in &page.elements {
            assert!(
                bounds.contains(&el.rect()),
                "page {}: {:?} outside page",
                page.number,
                el
            );
        }
    }
}

#[test]
fn test_display_numbers_increase_by_one() {
    let doc = layout(&full_book());
    let numbers: Vec<_> = doc
        .pages
        .iter()
        .filter(|p| p.is_chapter_page())
        .map(|p| p.display_number.unwrap())
        .collect();

    assert!(numbers.len() > 2);
    assert_eq!(numbers[0], doc.index_page + 1);
    assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn test_background_is_painted_first() {
    let doc = layout(&full_book());
    assert!(doc.resources.contains_key(&ImageKey::Background));

    for page in doc.pages.iter().filter(|p| p.is_chapter_page() || p.kind == PageKind::Title) {
        match &page.elements[0].element {
            LayoutElement::Image(img) => {
                assert_eq!(img.key, ImageKey::Background);
                assert!((img.opacity - 0.15).abs() < f32::EPSILON);
            }
            other => panic!("page {} starts with {:?}", page.number, other),
        }
        assert_eq!(
            (page.elements[0].width, page.elements[0].height),
            (page.size.width, page.size.height)
        );
    }

    let index = doc.page(doc.index_page).unwrap();
    assert!(
        !index
            .elements
            .iter()
            .any(|e| matches!(e.element, LayoutElement::Image(_)))
    );
}

#[test]
fn test_undecodable_background_and_cover_are_ignored() {
    let manuscript = Manuscript::new("Plain")
        .with_background(vec![9; 32])
        .with_cover(vec![0xFF, 0xD8, 0xFF, 0x00])
        .with_chapter(Chapter::new("Only", "text"));
    let doc = layout(&manuscript);

    assert_eq!(doc.pages[0].kind, PageKind::Title);
    assert!(doc.resources.is_empty());
    assert!(!doc.pages.iter().any(|p| {
        p.elements
            .iter()
            .any(|e| matches!(e.element, LayoutElement::Image(_)))
    }));
}

#[test]
fn test_title_page_byline() {
    let doc = layout(&full_book());
    let title_page = &doc.pages[0];
    assert_eq!(title_page.kind, PageKind::Title);
    assert!(find_text(title_page, "A Long Road").is_some());
    assert!(find_text(title_page, "Written by R. Writer").is_some());

    let anonymous = layout(&Manuscript::new("Anon").with_language(BookLanguage::Fr));
    assert_eq!(anonymous.pages[0].texts().count(), 1);
}

#[test]
fn test_layout_is_deterministic() {
    let book = full_book();
    let a = layout(&book);
    let b = layout(&book);
    assert_eq!(a.page_count(), b.page_count());
    for (pa, pb) in a.pages.iter().zip(&b.pages) {
        assert_eq!(pa.elements, pb.elements);
    }
    assert_eq!(a.chapter_records, b.chapter_records);
}

#[test]
fn test_shaping_measurer_without_fonts_matches_fallback() {
    init_logging();
    let library = SharedFontLibrary::new();
    let shaping = LayoutEngine::new(
        LayoutConfig::default(),
        Arc::new(ShapingMeasurer::new(library)),
    );
    let manuscript = Manuscript::new("Shaped").with_chapter(Chapter::new("One", &words("word", 50)));

    let doc = shaping.layout(&manuscript).unwrap();
    assert_eq!(doc.chapter_records[0].page, 3);
    assert!(find_text(&doc.pages[2], "word").is_some());
}

#[test]
fn test_controller_breaks_only_when_block_does_not_fit() {
    let config = LayoutConfig::default();
    let measurer = AverageAdvanceMeasurer::default();
    let env = LayoutEnvironment {
        config: &config,
        measurer: &measurer,
        theme: Color::rgb(30, 64, 175),
        family: FontFamily::Helvetica,
        labels: BookLanguage::En.labels(),
        has_background: false,
    };
    let content = config.geometry.content_rect();
    let mut pages: Vec<Page> = Vec::new();
    let mut pager = PaginationController::new(&env, &mut pages, 7);

    assert_eq!(pager.begin_chapter(1), 1);
    assert_eq!(pager.display_number(), Some(7));
    assert!(pager.is_at_page_top());

    // Oversize block at the top of a page: placed, no new page.
    assert_eq!(pager.ensure_space(content.height * 2.0), None);

    pager.advance(content.height - 10.0);
    assert_eq!(pager.ensure_space(10.0), None);
    assert_eq!(pager.ensure_space(10.5), Some(2));
    assert_eq!(pager.page_number(), Some(2));
    assert_eq!(pager.display_number(), Some(8));
    assert!((pager.cursor_y() - content.y).abs() < 0.01);

    drop(pager);
    assert_eq!(pages.len(), 2);
    assert!(find_text(&pages[1], "Chapter 1").is_some());
    assert!(find_text(&pages[1], "8").is_some());
}
