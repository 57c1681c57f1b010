//! Styled terminal text from ANSI color and attribute tokens.
//!
//! The escape model and the `foreground:background+attributes` grammar live
//! in the [`sgr`] crate and are re-exported here. This crate adds named
//! styles loaded from theme files and a file logger.
//!
//! ```
//! use splash::{Paint, Property, Style};
//!
//! println!("{}{}{}", Property::Bold, "To boldly go", Property::Reset);
//! println!("{}", Property::BG_YELLOW.wrap("Yellow there!"));
//!
//! let err = Style::parse("red+b");
//! print!("{}", err.wrap_line("ERROR: You can't say I didn't warn you"));
//! ```

pub mod error;
pub mod log_init;
pub mod theme;

pub use error::{Result, SplashError};
pub use log_init::init_logger;
pub use theme::Theme;

pub use sgr::{
    Color, Paint, Painted, Property, Style, StyleParseError, parse_style, parse_style_strict, wrapf,
};
