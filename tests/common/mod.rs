#![allow(dead_code)]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use quire::{DrawOp, LaidOutDocument, Manuscript, PipelineBuilder, PipelineError, RecordingSurface};
use serde_json::{Value, json};
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A real, decodable PNG of the given pixel size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([20, 120, 200]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode test png");
    out.into_inner()
}

pub fn base64_png() -> String {
    STANDARD.encode(png_bytes(30, 20))
}

/// `count` copies of `word`, space separated.
pub fn words(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}

/// A manuscript JSON document with the given chapters and no images.
pub fn manuscript_json(title: &str, chapters: &[(&str, &str)]) -> Value {
    let chapters: Vec<Value> = chapters
        .iter()
        .map(|(title, content)| json!({ "title": title, "content": content }))
        .collect();
    json!({
        "title": title,
        "authorName": "Test Author",
        "themeColor": "#1e40af",
        "chapters": chapters,
    })
}

/// Lays out and emits with the default pipeline.
pub fn render(manuscript: &Manuscript) -> Result<(LaidOutDocument, RecordingSurface), PipelineError> {
    init_logging();
    let pipeline = PipelineBuilder::new().build()?;
    let mut surface = RecordingSurface::new();
    let doc = pipeline.render(manuscript, &mut surface)?;
    Ok((doc, surface))
}

pub fn texts(ops: &[DrawOp]) -> Vec<&str> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

pub fn link_targets(ops: &[DrawOp]) -> Vec<usize> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Link { target_page, .. } => Some(*target_page),
            _ => None,
        })
        .collect()
}

pub fn image_count(ops: &[DrawOp]) -> usize {
    ops.iter()
        .filter(|op| matches!(op, DrawOp::Image { .. }))
        .count()
}
