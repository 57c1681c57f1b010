//! Wrapping text in escape sequences.
//!
//! [`Paint`] is implemented by everything that encodes to a run of SGR escape
//! sequences through [`Display`](fmt::Display). Every operation writes the
//! encoded prefix, then the payload, then a reset. The prefix and suffix are
//! written directly and never go through a format string.

use std::fmt::{self, Write};

use crate::property::Property;

/// Shell prompt marker opening a run of non-printing characters.
const PROMPT_OPEN: &str = "\\[";
/// Shell prompt marker closing a run of non-printing characters.
const PROMPT_CLOSE: &str = "\\]";

pub trait Paint: fmt::Display {
    /// The escape sequence(s) that switch this styling on.
    fn escape(&self) -> String {
        self.to_string()
    }

    /// `text` preceded by the escape and followed by a reset.
    ///
    /// ```
    /// use sgr::{Paint, Property};
    ///
    /// assert_eq!(Property::Bold.wrap("hi"), "\x1b[1mhi\x1b[0m");
    /// ```
    fn wrap(&self, text: impl fmt::Display) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write!(out, "{}{}{}", self, text, Property::Reset);
        out
    }

    /// Like [`Paint::wrap`], with the payload produced by `format_args!`.
    ///
    /// See also the [`wrapf!`](crate::wrapf) macro.
    fn wrap_fmt(&self, args: fmt::Arguments<'_>) -> String {
        let payload = fmt::format(args);
        let mut out = self.escape();
        out.push_str(&payload);
        let _ = write!(out, "{}", Property::Reset);
        out
    }

    /// Like [`Paint::wrap`], with a newline after the reset.
    fn wrap_line(&self, text: impl fmt::Display) -> String {
        let mut out = self.wrap(text);
        out.push('\n');
        out
    }

    /// The escape enclosed in `\[` and `\]` so that shells leave it out of
    /// the prompt width.
    fn prompt_escape(&self) -> String {
        format!("{}{}{}", PROMPT_OPEN, self, PROMPT_CLOSE)
    }

    /// `text` between prompt-escaped styling and a prompt-escaped reset.
    fn prompt_wrap(&self, text: impl fmt::Display) -> String {
        format!(
            "{}{}{}",
            self.prompt_escape(),
            text,
            Property::Reset.prompt_escape()
        )
    }

    /// A [`Display`](fmt::Display) adapter that paints `text` when formatted,
    /// without building an intermediate string.
    fn paint<T: fmt::Display>(&self, text: T) -> Painted<'_, Self, T>
    where
        Self: Sized,
    {
        Painted { paint: self, text }
    }
}

/// Text together with the styling it is painted in. Created by
/// [`Paint::paint`].
#[derive(Clone, Copy, Debug)]
pub struct Painted<'a, P, T> {
    paint: &'a P,
    text: T,
}

impl<P: Paint, T: fmt::Display> fmt::Display for Painted<'_, P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.paint, self.text, Property::Reset)
    }
}

/// Format a payload and wrap it in a property or style.
///
/// ```
/// use sgr::{wrapf, Property};
///
/// let line = wrapf!(Property::RED, "{} of {}", 3, 4);
/// assert_eq!(line, "\x1b[31m3 of 4\x1b[0m");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($paint:expr, $($arg:tt)*) => {{
        use $crate::Paint as _;
        ($paint).wrap_fmt(::std::format_args!($($arg)*))
    }};
}
