//! Error types for strict style parsing.

use thiserror::Error;

/// A token that strict parsing could not place.
///
/// The lenient [`Style::parse`](crate::Style::parse) drops these tokens
/// instead of reporting them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    /// Letter after `+` that names no attribute.
    #[error("unknown attribute: {0:?}")]
    UnknownAttribute(char),

    /// Foreground color name not in the color table.
    #[error("unknown foreground color: {0:?}")]
    UnknownForeground(String),

    /// Background color name after `:` not in the color table.
    #[error("unknown background color: {0:?}")]
    UnknownBackground(String),

    /// A second `+` or `:`; everything after it is ignored.
    #[error("unexpected extra '{separator}' followed by {rest:?}")]
    ExtraSegment { separator: char, rest: String },
}
