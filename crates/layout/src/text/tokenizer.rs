//! Splits a raw manuscript line into bold/plain runs and measured word units.

use nom::bytes::complete::{tag, take_until};
use nom::sequence::delimited;
use nom::{IResult, Parser};
use quire_style::TextStyle;
use quire_traits::TextMeasurer;

const BOLD_MARKER: &str = "**";

/// A maximal span of text sharing one weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRun<'a> {
    pub text: &'a str,
    pub bold: bool,
}

impl<'a> StyledRun<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, bold: false }
    }

    fn bold(text: &'a str) -> Self {
        Self { text, bold: true }
    }
}

/// The smallest unit the line packer places.
///
/// `text` includes the trailing space when whitespace followed the word in the
/// source line, and `width` is measured over exactly that text, so summing
/// widths reproduces the natural inter-word spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct WordUnit {
    pub text: String,
    pub style: TextStyle,
    pub width: f32,
    /// Width of the word without its trailing space.
    pub text_width: f32,
    pub trailing_space: bool,
}

impl WordUnit {
    pub fn visible_text(&self) -> &str {
        self.text.trim_end()
    }

    pub fn is_bold(&self) -> bool {
        self.style.is_bold()
    }
}

fn bold_span(input: &str) -> IResult<&str, &str> {
    delimited(tag(BOLD_MARKER), take_until(BOLD_MARKER), tag(BOLD_MARKER)).parse(input)
}

fn until_marker(input: &str) -> IResult<&str, &str> {
    take_until(BOLD_MARKER).parse(input)
}

/// Splits a line on `**` pairs into alternating plain and bold runs.
///
/// An opening marker without a closing partner is kept as literal text. Empty runs
/// are dropped.
pub fn tokenize(line: &str) -> Vec<StyledRun<'_>> {
    let mut runs = Vec::new();
    let mut rest = line;

    loop {
        let Ok((at_marker, before)) = until_marker(rest) else {
            runs.push(StyledRun::plain(rest));
            break;
        };
        match bold_span(at_marker) {
            Ok((after, inner)) => {
                runs.push(StyledRun::plain(before));
                runs.push(StyledRun::bold(inner));
                rest = after;
            }
            Err(_) => {
                runs.push(StyledRun::plain(rest));
                break;
            }
        }
    }

    runs.retain(|r| !r.text.is_empty());
    runs
}

/// Byte offset of `part` inside `whole`. `part` must be a subslice of `whole`.
fn offset_in(whole: &str, part: &str) -> usize {
    part.as_ptr() as usize - whole.as_ptr() as usize
}

fn starts_with_whitespace(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_whitespace)
}

/// Splits runs on whitespace into measured `WordUnit`s.
///
/// Units that were not separated by whitespace in the source (e.g. `**bold**,`)
/// carry no trailing space and therefore stay glued together when packed.
pub fn split_units(
    runs: &[StyledRun<'_>],
    base: &TextStyle,
    measurer: &dyn TextMeasurer,
) -> Vec<WordUnit> {
    let bold = base.bold();
    let mut units = Vec::new();

    for (i, run) in runs.iter().enumerate() {
        let style = if run.bold { &bold } else { base };
        let next_starts_with_space = runs
            .get(i + 1)
            .is_some_and(|next| starts_with_whitespace(next.text));

        for word in run.text.split_whitespace() {
            let end = offset_in(run.text, word) + word.len();
            let followed_by_space = if end < run.text.len() {
                starts_with_whitespace(&run.text[end..])
            } else {
                next_starts_with_space
            };

            let text = if followed_by_space {
                format!("{} ", word)
            } else {
                word.to_string()
            };
            units.push(WordUnit {
                width: measurer.measure(&text, &style.font),
                text_width: measurer.measure(word, &style.font),
                text,
                style: style.clone(),
                trailing_space: followed_by_space,
            });
        }
    }

    // The line-final word never carries a space.
    if let Some(last) = units.last_mut()
        && last.trailing_space
    {
        last.text.truncate(last.text.trim_end().len());
        last.width = last.text_width;
        last.trailing_space = false;
    }

    units
}
