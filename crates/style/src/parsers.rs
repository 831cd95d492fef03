//! Low-level nom parser functions for CSS-like length values.
//!
//! Configuration files express page margins and spacing as strings such as
//! `"2cm"`, `"15mm"` or `"1.5cm 2cm"`; these parsers turn them into points.

use crate::dimension::{Margins, PT_PER_CM, PT_PER_MM};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{space0, space1};
use nom::combinator::{opt, value};
use nom::multi::separated_list1;
use nom::number::complete::float;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Unit & Length Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")), // Treat px as pt
        value(72.0, tag_no_case("in")),
        value(PT_PER_CM, tag_no_case("cm")),
        value(PT_PER_MM, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
/// A bare number is taken as points.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = float::<&str, nom::error::Error<&str>>(input)?;
    let (input, unit_multiplier) = opt(preceded(space0, parse_unit)).parse(input)?;
    Ok((input, number * unit_multiplier.unwrap_or(1.0)))
}

/// Parses CSS shorthand margins (1, 2, or 4 values).
pub fn parse_shorthand_margins(input: &str) -> Result<Margins, StyleParseError> {
    let parts_res = separated_list1(space1, parse_length).parse(input.trim());

    match parts_res {
        Ok(("", parts)) => match parts.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [vertical, horizontal] => {
                Ok(Margins::new(*vertical, *horizontal, *vertical, *horizontal))
            }
            [top, right, bottom, left] => Ok(Margins::new(*top, *right, *bottom, *left)),
            _ => Err(StyleParseError::Parse(format!(
                "Invalid number of values for margin shorthand: got {}, expected 1, 2, or 4.",
                parts.len()
            ))),
        },
        _ => Err(StyleParseError::Parse(format!(
            "Failed to parse margins value: '{}'",
            input
        ))),
    }
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Parses a single length with a unit and rejects negative values.
pub fn parse_non_negative_length(property: &str, input: &str) -> Result<f32, StyleParseError> {
    let length = run_parser(parse_length, input)?;
    if length < 0.0 || !length.is_finite() {
        return Err(StyleParseError::InvalidValue {
            property: property.to_string(),
            value: input.to_string(),
        });
    }
    Ok(length)
}
