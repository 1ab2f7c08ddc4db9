use crate::output::{LaidOutDocument, Page, PageKind};
use crate::{LayoutElement, LayoutEngine, PositionedElement};
use quire_types::{Chapter, Manuscript};
use std::io::Cursor;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A real, decodable PNG of the given pixel size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

/// A PNG whose header is intact but whose pixel data is scrambled and truncated.
pub fn damaged_png(width: u32, height: u32) -> Vec<u8> {
    let mut data = png_bytes(width, height);
    // Signature (8) plus the IHDR chunk (25) stay readable.
    for byte in data.iter_mut().skip(41) {
        *byte ^= 0x5a;
    }
    data.truncate(data.len() * 2 / 3);
    data
}

/// Lays out with the default configuration and the average-advance measurer.
pub fn layout(manuscript: &Manuscript) -> LaidOutDocument {
    init_logging();
    LayoutEngine::default().layout(manuscript).unwrap()
}

pub fn single_chapter(title: &str, content: &str) -> Manuscript {
    Manuscript::new("Test Book").with_chapter(Chapter::new(title, content))
}

/// `count` words of `word`, space separated, as one line.
pub fn words(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}

pub fn chapter_pages(doc: &LaidOutDocument, ordinal: usize) -> Vec<&Page> {
    doc.pages
        .iter()
        .filter(|p| p.kind == PageKind::Chapter { ordinal })
        .collect()
}

pub fn find_text<'a>(page: &'a Page, content: &str) -> Option<&'a PositionedElement> {
    page.elements
        .iter()
        .find(|e| e.as_text().is_some_and(|t| t.content == content))
}

pub fn count_text(page: &Page, content: &str) -> usize {
    page.texts().filter(|t| *t == content).count()
}

pub fn rounded_boxes(page: &Page) -> Vec<&PositionedElement> {
    page.elements
        .iter()
        .filter(|e| matches!(&e.element, LayoutElement::Rectangle(r) if r.corner_radius > 0.0))
        .collect()
}

pub fn images(page: &Page) -> Vec<&PositionedElement> {
    page.elements
        .iter()
        .filter(|e| matches!(e.element, LayoutElement::Image(_)))
        .collect()
}
