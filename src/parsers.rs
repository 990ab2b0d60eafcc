//! Low-level nom parser functions for raw style values.
//!
//! Everything a resolver needs to read out of a sampled CSS string lives
//! here: hex and `rgb()`/`rgba()` colors, pixel lengths, and the leading
//! integer of a composite value.

use crate::schema::color::Color;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_while1, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{map, map_res, opt, recognize};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur while parsing a raw style value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueParseError {
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Helper to run a nom parser over a trimmed input and require full
/// consumption, converting the result to a `Result<T, ValueParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, ValueParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    let mut parser = parser;
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(ValueParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(ValueParseError::Parse(e.to_string())),
    }
}

// --- Numeric helpers ---

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn from_hex(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn parse_f64(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((
                    take_while1(|c: char| c.is_ascii_digit()),
                    opt((char('.'), take_while1(|c: char| c.is_ascii_digit()))),
                )),
                recognize((char('.'), take_while1(|c: char| c.is_ascii_digit()))),
            )),
        )),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

/// Consumes any non-digit prefix, then one run of ASCII digits.
fn digit_run(input: &str) -> IResult<&str, u64> {
    map_res(
        (
            take_till(|c: char| c.is_ascii_digit()),
            take_while1(|c: char| c.is_ascii_digit()),
        ),
        |(_, digits): (&str, &str)| digits.parse::<u64>(),
    )
    .parse(input)
}

// --- Color parsers ---

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), from_hex).parse(input)
}

/// Parses a 6-digit hex color (e.g. `#ff8800`), case-insensitive.
pub fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    map(
        (char('#'), hex_primary, hex_primary, hex_primary),
        |(_, r, g, b)| Color { r, g, b },
    )
    .parse(input)
}

/// Extracts the first three numeric components from an `rgb()`/`rgba()`
/// style string, clamping each to the 0-255 byte range.
///
/// The surrounding syntax is deliberately not validated; the caller is
/// expected to have checked for an `rgb` marker first. Trailing input
/// (an alpha component, a closing paren) is left unconsumed.
pub fn parse_rgb_components(input: &str) -> IResult<&str, Color> {
    map((digit_run, digit_run, digit_run), |(r, g, b)| Color {
        r: r.min(255) as u8,
        g: g.min(255) as u8,
        b: b.min(255) as u8,
    })
    .parse(input)
}

// --- Length parsers ---

/// Parses a pixel length with mandatory `px` suffix (e.g. `16px`).
pub fn parse_px_value(input: &str) -> IResult<&str, f64> {
    map((parse_f64, tag("px")), |(value, _)| value).parse(input)
}

/// Parses the leading unsigned integer of a value (`"24px 12px"` -> 24).
/// Fails if the value does not start with a digit.
pub fn parse_leading_integer(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(1, 9, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u32>(),
    )
    .parse(input)
}

/// Convenience wrapper: leading integer of a raw value, if any.
pub fn leading_integer(value: &str) -> Option<u32> {
    parse_leading_integer(value).ok().map(|(_, n)| n)
}

/// Convenience wrapper: the numeric part of a `px` value, requiring the
/// whole (trimmed) input to be a well-formed pixel length.
pub fn px_value(value: &str) -> Option<f64> {
    run_parser(parse_px_value, value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            run_parser(parse_hex_color, "#FF0000").unwrap(),
            Color { r: 255, g: 0, b: 0 }
        );
        assert_eq!(
            run_parser(parse_hex_color, " #00ff7f ").unwrap(),
            Color { r: 0, g: 255, b: 127 }
        );
        assert!(run_parser(parse_hex_color, "#f00").is_err());
        assert!(run_parser(parse_hex_color, "red").is_err());
    }

    #[test]
    fn test_parse_rgb_components() {
        let (_, c) = parse_rgb_components("rgb(12, 34, 56)").unwrap();
        assert_eq!(c, Color { r: 12, g: 34, b: 56 });

        // Whitespace and rgba alpha are tolerated.
        let (_, c) = parse_rgb_components("rgba( 255 , 0 ,  128 , 0.5 )").unwrap();
        assert_eq!(c, Color { r: 255, g: 0, b: 128 });

        // Out-of-range components clamp to 255.
        let (_, c) = parse_rgb_components("rgb(300, 999, 0)").unwrap();
        assert_eq!(c, Color { r: 255, g: 255, b: 0 });

        assert!(parse_rgb_components("rgb()").is_err());
        assert!(parse_rgb_components("rgb(1, 2)").is_err());
    }

    #[test]
    fn test_parse_px_value() {
        assert_eq!(px_value("16px"), Some(16.0));
        assert_eq!(px_value(" 12.5px "), Some(12.5));
        assert_eq!(px_value("0px"), Some(0.0));
        assert_eq!(px_value("16"), None);
        assert_eq!(px_value("1rem"), None);
        assert_eq!(px_value("16px solid"), None);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("24px 12px"), Some(24));
        assert_eq!(leading_integer("4px"), Some(4));
        assert_eq!(leading_integer("0.5rem"), Some(0));
        assert_eq!(leading_integer(".5rem"), None);
        assert_eq!(leading_integer("auto"), None);
    }
}
