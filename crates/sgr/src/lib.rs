//! ANSI SGR styling for terminal text.
//!
//! This crate models the Select Graphic Rendition codes for the reset, nine
//! text attributes and the eight basic colors, and parses a compact style
//! grammar into them.
//!
//! # Overview
//!
//! - [`Property`] is a single code such as [`Property::Bold`] or
//!   [`Property::BG_RED`], displayed as `ESC [ <code> m`.
//! - [`Style`] is an ordered list of properties, displayed as the
//!   concatenation of their escapes.
//! - [`Paint`] wraps text in a property or style followed by a reset, with
//!   variants for formatted payloads, trailing newlines and shell prompts.
//!
//! # Style strings
//!
//! ```text
//! foreground:background+attributes
//! ```
//!
//! Colors: `black red green yellow blue magenta cyan white`.
//! Attributes: `b` bold, `d` dim, `i` italic, `u` underline, `B` blink,
//! `f` fast blink, `r` reverse, `h` hidden, `c` crossed out. The string
//! `reset` stands for the reset alone.
//!
//! # Usage
//!
//! ```
//! use sgr::{Paint, Property, Style};
//!
//! let warning = Style::parse("yellow+b");
//! assert_eq!(warning.wrap("careful"), "\x1b[1m\x1b[33mcareful\x1b[0m");
//!
//! let critical = Style::new([Property::Bold, Property::YELLOW, Property::BG_RED]);
//! println!("{}", critical.paint("CRITICAL"));
//! ```

pub mod color;
pub mod error;
pub mod paint;
pub mod parser;
pub mod property;
pub mod style;

pub use color::Color;
pub use error::StyleParseError;
pub use paint::{Paint, Painted};
pub use parser::{parse_style, parse_style_strict};
pub use property::Property;
pub use style::Style;
