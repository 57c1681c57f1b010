//! Parser for the compact style grammar.
//!
//! ```text
//! style      := [color_spec] ["+" attr_chars]
//! color_spec := [fg_name] [":" bg_name]
//! ```
//!
//! Whitespace is ignored anywhere. Color names are case-insensitive while
//! attribute letters are not (`b` is bold, `B` is blink). The literal `reset`
//! yields the reset alone. Attributes come first in the result, in input
//! order, followed by the foreground and then the background.

use crate::color::Color;
use crate::error::StyleParseError;
use crate::property::Property;
use crate::style::Style;

const RESET: &str = "reset";
const ATTRIBUTE_SEPARATOR: char = '+';
const BACKGROUND_SEPARATOR: char = ':';

/// Parse a style string, dropping whatever it does not recognize.
///
/// ```
/// use sgr::{parse_style, Property};
///
/// let style = parse_style("yellow:blue+b");
/// assert_eq!(style.properties(), [Property::Bold, Property::YELLOW, Property::BG_BLUE]);
/// assert!(parse_style("bogus").is_empty());
/// ```
pub fn parse_style(input: &str) -> Style {
    let (style, rejected) = parse(input);
    for err in rejected {
        log::trace!("style {:?}: dropping {}", input, err);
    }
    style
}

/// Parse a style string, failing on the first token it does not recognize.
///
/// ```
/// use sgr::{parse_style_strict, StyleParseError};
///
/// assert!(parse_style_strict("red+bu").is_ok());
/// assert_eq!(
///     parse_style_strict("red+bx"),
///     Err(StyleParseError::UnknownAttribute('x')),
/// );
/// ```
pub fn parse_style_strict(input: &str) -> Result<Style, StyleParseError> {
    let (style, rejected) = parse(input);
    match rejected.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(style),
    }
}

/// Parse `input` into the style it describes plus every token that had to be
/// dropped, in the order they were met.
fn parse(input: &str) -> (Style, Vec<StyleParseError>) {
    let normalized: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut properties = Vec::new();
    let mut rejected = Vec::new();

    if normalized.is_empty() {
        return (Style::default(), rejected);
    }
    if normalized.eq_ignore_ascii_case(RESET) {
        return (Style::from(Property::Reset), rejected);
    }

    let (color_part, attr_part) = split_segment(&normalized, ATTRIBUTE_SEPARATOR, &mut rejected);

    if let Some(attrs) = attr_part {
        for c in attrs.chars() {
            match Property::from_attribute_char(c) {
                Some(property) => properties.push(property),
                None => rejected.push(StyleParseError::UnknownAttribute(c)),
            }
        }
    }

    let color_part = color_part.to_lowercase();
    let (fg, bg) = split_segment(&color_part, BACKGROUND_SEPARATOR, &mut rejected);

    if !fg.is_empty() {
        match Color::from_name(fg) {
            Some(color) => properties.push(Property::Fg(color)),
            None => rejected.push(StyleParseError::UnknownForeground(fg.to_string())),
        }
    }
    if let Some(bg) = bg {
        match Color::from_name(bg) {
            Some(color) => properties.push(Property::Bg(color)),
            None => rejected.push(StyleParseError::UnknownBackground(bg.to_string())),
        }
    }

    (Style::new(properties), rejected)
}

/// Split `s` into the part before the first `separator` and the part between
/// it and the next one. Anything past a second separator is rejected.
fn split_segment<'a>(
    s: &'a str,
    separator: char,
    rejected: &mut Vec<StyleParseError>,
) -> (&'a str, Option<&'a str>) {
    let Some((head, tail)) = s.split_once(separator) else {
        return (s, None);
    };
    match tail.split_once(separator) {
        Some((segment, rest)) => {
            rejected.push(StyleParseError::ExtraSegment {
                separator,
                rest: rest.to_string(),
            });
            (head, Some(segment))
        }
        None => (head, Some(tail)),
    }
}
