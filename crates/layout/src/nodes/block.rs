//! Classification of raw chapter lines into typed content blocks.
//!
//! Classification runs before any rendering so that title suppression and block
//! typing can be tested without touching pages.

use nom::bytes::complete::{tag_no_case, take_until};
use nom::character::complete::char;
use nom::combinator::recognize;
use nom::{IResult, Parser};
use quire_types::ImageTag;

const SUBTITLE_MARKER: &str = "##";
const LIST_MARKER: &str = "- ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(String),
    /// A `##` heading, markup already stripped.
    Subtitle(String),
    /// A `- ` list item, marker stripped.
    ListItem(String),
    /// An `[IMAGE_PROMPT: ...]` reference.
    ///
    /// `key` is the whole trimmed line, which is how payloads are keyed; `token`
    /// is the bracketed reference alone and serves as a fallback key.
    ImageRef { key: ImageTag, token: ImageTag },
}

/// One step of a chapter body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockItem {
    /// A blank source line.
    Gap,
    Block(ContentBlock),
}

fn image_prompt(input: &str) -> IResult<&str, &str> {
    recognize((tag_no_case("[IMAGE_PROMPT:"), take_until("]"), char(']'))).parse(input)
}

/// Finds the first `[IMAGE_PROMPT: ...]` reference anywhere in `line` (case-insensitive).
pub fn find_image_reference(line: &str) -> Option<&str> {
    line.match_indices('[')
        .find_map(|(i, _)| image_prompt(&line[i..]).ok().map(|(_, token)| token))
}

fn strip_bold_markers(text: &str) -> String {
    text.replace("**", "").trim().to_string()
}

impl ContentBlock {
    /// Types a single non-blank, trimmed line.
    pub fn classify(line: &str) -> Self {
        if let Some(rest) = line.strip_prefix(SUBTITLE_MARKER) {
            return ContentBlock::Subtitle(strip_bold_markers(rest));
        }
        if let Some(token) = find_image_reference(line) {
            return ContentBlock::ImageRef {
                key: ImageTag::new(line),
                token: ImageTag::new(token),
            };
        }
        if let Some(rest) = line.strip_prefix(LIST_MARKER) {
            return ContentBlock::ListItem(rest.trim().to_string());
        }
        ContentBlock::Paragraph(line.to_string())
    }
}

/// Lowercases and drops `#`/`*` markup for title comparison.
pub fn normalize_title(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| *c != '#' && *c != '*')
        .collect::<String>()
        .trim()
        .to_string()
}

/// True when `line` restates `title` (optionally with a trailing period).
pub fn repeats_title(line: &str, title: &str) -> bool {
    let line = normalize_title(line);
    let title = normalize_title(title);
    !title.is_empty() && (line == title || line.strip_suffix('.') == Some(title.as_str()))
}

/// Classifies a chapter's lines.
///
/// Lines that restate the chapter title among the first `window` non-blank
/// lines are dropped, since the title block already shows it.
pub fn classify_lines(title: &str, lines: &[String], window: usize) -> Vec<BlockItem> {
    let mut items = Vec::with_capacity(lines.len());
    let mut non_blank_seen = 0;

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            items.push(BlockItem::Gap);
            continue;
        }

        non_blank_seen += 1;
        if non_blank_seen <= window && repeats_title(line, title) {
            log::debug!("Suppressing repeated chapter title line '{}'", line);
            continue;
        }

        items.push(BlockItem::Block(ContentBlock::classify(line)));
    }

    items
}
