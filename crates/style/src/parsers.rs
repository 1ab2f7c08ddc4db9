//! Low-level nom parser functions for configuration values.
//!
//! Lengths accept `pt`, `px` (treated as points), `in`, `cm` and `mm` units; a bare
//! number is taken as points.

use crate::dimension::{Margins, PageSize};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, space0, space1};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair, separated_pair};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")),
        value(72.0, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(crate::dimension::MM, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    map(pair(parse_f32, opt(parse_unit)), |(v, unit)| {
        v * unit.unwrap_or(1.0)
    })
    .parse(input)
}

/// Parses CSS shorthand margins (1, 2, or 4 values).
pub fn parse_shorthand_margins(input: &str) -> Result<Margins, StyleParseError> {
    let parts = run_parser(
        |i| separated_list1(space1, parse_length).parse(i),
        input.trim(),
    )?;

    match parts.as_slice() {
        [all] => Ok(Margins::all(*all)),
        [y, x] => Ok(Margins::new(*y, *x, *y, *x)),
        [top, right, bottom, left] => Ok(Margins::new(*top, *right, *bottom, *left)),
        _ => Err(StyleParseError::Parse(format!(
            "Invalid number of values for margin shorthand: got {}, expected 1, 2, or 4.",
            parts.len()
        ))),
    }
}

/// Parses a named page size ("A4", "Letter", "Legal") or "<width> <height>".
pub fn parse_page_size(input: &str) -> Result<PageSize, StyleParseError> {
    let size = run_parser(
        |i| {
            alt((
                value(PageSize::A4, tag_no_case("a4")),
                value(PageSize::Letter, tag_no_case("letter")),
                value(PageSize::Legal, tag_no_case("legal")),
                map(
                    separated_pair(parse_length, space1, parse_length),
                    |(width, height)| PageSize::Custom { width, height },
                ),
            ))
            .parse(i)
        },
        input.trim(),
    )?;

    if let PageSize::Custom { width, height } = size
        && (width <= 0.0 || height <= 0.0)
    {
        return Err(StyleParseError::InvalidValue {
            property: "size".to_string(),
            value: input.to_string(),
        });
    }
    Ok(size)
}

/// Helper to run a nom parser over the whole input and convert its result.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: FnMut(&'a str) -> IResult<&'a str, T>,
{
    match all_consuming(delimited(space0, |i| parser(i), space0)).parse(input) {
        Ok((_, value)) => Ok(value),
        Err(e) => Err(StyleParseError::Parse(format!(
            "Failed to parse '{}': {}",
            input, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::MM;

    #[test]
    fn test_parse_length_units() {
        assert_eq!(parse_length("12pt").unwrap().1, 12.0);
        assert_eq!(parse_length("1in").unwrap().1, 72.0);
        assert!((parse_length("20mm").unwrap().1 - 20.0 * MM).abs() < 0.001);
        assert_eq!(parse_length("7").unwrap().1, 7.0);
        assert_eq!(parse_length(".5in").unwrap().1, 36.0);
    }

    #[test]
    fn test_shorthand_margins() {
        assert_eq!(parse_shorthand_margins("10").unwrap(), Margins::all(10.0));
        assert_eq!(
            parse_shorthand_margins("1 2 3 4").unwrap(),
            Margins::new(1.0, 2.0, 3.0, 4.0)
        );
        assert!(parse_shorthand_margins("1 2 3").is_err());
        assert!(parse_shorthand_margins("ten").is_err());
    }

    #[test]
    fn test_page_size() {
        assert_eq!(parse_page_size(" A4 ").unwrap(), PageSize::A4);
        assert_eq!(
            parse_page_size("210mm 297mm").unwrap(),
            PageSize::Custom {
                width: 210.0 * MM,
                height: 297.0 * MM
            }
        );
        assert!(parse_page_size("0pt 10pt").is_err());
        assert!(parse_page_size("A5").is_err());
    }
}
