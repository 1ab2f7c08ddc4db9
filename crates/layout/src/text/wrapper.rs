use super::tokenizer::WordUnit;
use crate::{LayoutElement, PositionedElement, TextElement};
use quire_style::{TextAlign, TextStyle};
use quire_traits::TextMeasurer;
use quire_types::Rect;
use std::ops::Range;

/// One packed line: a contiguous slice of the unit sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedLine {
    pub units: Range<usize>,
    /// Sum of unit widths (trailing spaces included).
    pub natural_width: f32,
    pub justified: bool,
    /// Extra space added at every break opportunity when justified.
    pub gap: f32,
}

impl PackedLine {
    fn ragged(units: Range<usize>, natural_width: f32) -> Self {
        Self {
            units,
            natural_width,
            justified: false,
            gap: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Horizontal offsets of each unit relative to the line start.
    pub fn offsets(&self, units: &[WordUnit]) -> Vec<f32> {
        let mut x = 0.0;
        let mut offsets = Vec::with_capacity(self.len());
        for unit in &units[self.units.clone()] {
            offsets.push(x);
            x += unit.width;
            if unit.trailing_space {
                x += self.gap;
            }
        }
        offsets
    }

    /// Width from the line start to the end of the last word's text, gaps included.
    pub fn rendered_width(&self, units: &[WordUnit]) -> f32 {
        let line = &units[self.units.clone()];
        self.natural_width - trailing_space_width(line) + self.gap * count_gaps(line) as f32
    }
}

/// Width of the space the line's last unit carries, if any.
fn trailing_space_width(line: &[WordUnit]) -> f32 {
    line.last().map_or(0.0, |u| u.width - u.text_width)
}

/// Break opportunities inside a line: spaces that are not at the line end.
fn count_gaps(line: &[WordUnit]) -> usize {
    match line.split_last() {
        Some((_, head)) => head.iter().filter(|u| u.trailing_space).count(),
        None => 0,
    }
}

/// End (exclusive) of the unbreakable cluster starting at `start`.
fn cluster_end(units: &[WordUnit], start: usize) -> usize {
    let mut end = start;
    while end < units.len() {
        end += 1;
        if units[end - 1].trailing_space {
            break;
        }
    }
    end
}

fn close_line(units: &[WordUnit], line: Range<usize>, natural: f32, width: f32) -> PackedLine {
    // Lookahead: a line counts as paragraph-final unless two or more units follow it.
    let remaining = units.len() - line.end;
    let gaps = count_gaps(&units[line.clone()]);
    if gaps == 0 || remaining < 2 {
        return PackedLine::ragged(line, natural);
    }
    let visible = natural - trailing_space_width(&units[line.clone()]);
    PackedLine {
        gap: (width - visible).max(0.0) / gaps as f32,
        justified: true,
        units: line,
        natural_width: natural,
    }
}

/// Greedily packs units into lines no wider than `width`.
///
/// A line is closed when the next cluster would overflow it. A cluster wider than
/// `width` is placed alone, untruncated. Every closed line is justified unless the
/// lookahead marks it as final; the last buffered line is always ragged.
pub fn pack_lines(units: &[WordUnit], width: f32) -> Vec<PackedLine> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut natural = 0.0;
    let mut i = 0;

    while i < units.len() {
        let end = cluster_end(units, i);
        let cluster_width: f32 = units[i..end].iter().map(|u| u.width).sum();

        if i > start && natural + cluster_width > width {
            lines.push(close_line(units, start..i, natural, width));
            start = i;
            natural = 0.0;
        }

        natural += cluster_width;
        i = end;
    }

    if start < units.len() {
        lines.push(PackedLine::ragged(start..units.len(), natural));
    }

    lines
}

/// Produces one text element per unit of `line`, top-left at (`x`, `y`).
pub fn line_elements(
    line: &PackedLine,
    units: &[WordUnit],
    x: f32,
    y: f32,
    line_height: f32,
) -> Vec<PositionedElement> {
    line.offsets(units)
        .into_iter()
        .zip(&units[line.units.clone()])
        .map(|(dx, unit)| {
            PositionedElement::new(
                Rect::new(x + dx, y, unit.text_width, line_height),
                LayoutElement::Text(TextElement {
                    content: unit.visible_text().to_string(),
                    style: unit.style.clone(),
                    align: TextAlign::Left,
                }),
            )
        })
        .collect()
}

/// Word-wraps plain (markup-free) text, one style for the whole string.
///
/// Used for titles, subtitles and index rows, which are never justified.
pub fn wrap_plain(
    text: &str,
    style: &TextStyle,
    measurer: &dyn TextMeasurer,
    width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measurer.measure(&candidate, &style.font) > width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
