//! Named styles loaded from a small configuration format.
//!
//! ```text
//! # levels
//! info    = green+b
//! warning = yellow
//! error   = red+b
//! ```
//!
//! One `name = style` pair per line. Blank lines and lines starting with `#`
//! are skipped. Styles use the strict grammar, so a typo in a color name is
//! reported with its line number instead of silently producing no color.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use sgr::{Paint, Style};

use crate::error::{Result, SplashError};

const COMMENT: char = '#';
const ASSIGN: char = '=';

/// A registry of named styles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    styles: BTreeMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse theme source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use splash::{Paint, Theme};
    ///
    /// let theme = Theme::parse("info = green+b\nwarn = yellow").unwrap();
    /// assert_eq!(theme.style("info").wrap("ok"), "\x1b[1m\x1b[32mok\x1b[0m");
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let mut theme = Theme::new();

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with(COMMENT) {
                continue;
            }

            let Some((name, spec)) = text.split_once(ASSIGN) else {
                return Err(SplashError::MissingSeparator {
                    line,
                    text: text.to_string(),
                });
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(SplashError::EmptyName { line });
            }
            if theme.styles.contains_key(name) {
                return Err(SplashError::DuplicateName {
                    line,
                    name: name.to_string(),
                });
            }

            let style = Style::parse_strict(spec).map_err(|source| SplashError::InvalidStyle {
                line,
                name: name.to_string(),
                source,
            })?;
            log::trace!("theme line {}: {} = {:?}", line, name, style);
            theme.styles.insert(name.to_string(), style);
        }

        log::debug!("parsed theme with {} styles", theme.styles.len());
        Ok(theme)
    }

    /// Read and parse a theme file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading theme from {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Add or replace a named style, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        self.styles.insert(name.into(), style)
    }

    /// The style registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// The style registered under `name`, or an empty style if there is
    /// none. Unknown names are logged.
    pub fn style(&self, name: &str) -> Style {
        match self.styles.get(name) {
            Some(style) => style.clone(),
            None => {
                log::warn!("theme has no style named '{}'", name);
                Style::default()
            }
        }
    }

    /// Wrap `text` in the named style, see [`Theme::style`].
    pub fn wrap(&self, name: &str, text: &str) -> String {
        self.style(name).wrap(text)
    }

    /// Style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgr::Property;

    #[test]
    fn skips_comments_and_blanks() {
        let theme = Theme::parse("\n# header\n\n  info = green \n").unwrap();
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.get("info"), Some(&Style::from(Property::GREEN)));
    }

    #[test]
    fn spec_may_be_empty() {
        let theme = Theme::parse("plain =").unwrap();
        assert_eq!(theme.get("plain"), Some(&Style::default()));
    }

    #[test]
    fn missing_separator() {
        let err = Theme::parse("info = green\nwarning yellow").unwrap_err();
        assert!(matches!(err, SplashError::MissingSeparator { line: 2, .. }));
    }

    #[test]
    fn empty_name() {
        let err = Theme::parse(" = red").unwrap_err();
        assert!(matches!(err, SplashError::EmptyName { line: 1 }));
    }

    #[test]
    fn duplicate_name() {
        let err = Theme::parse("a = red\na = blue").unwrap_err();
        assert!(matches!(err, SplashError::DuplicateName { line: 2, ref name } if name == "a"));
    }

    #[test]
    fn invalid_style_keeps_cause() {
        let err = Theme::parse("error = crimson+b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: invalid style for 'error': unknown foreground color: \"crimson\""
        );
    }

    #[test]
    fn unknown_name_is_empty_style() {
        let theme = Theme::new();
        assert!(theme.style("nope").is_empty());
        assert_eq!(theme.wrap("nope", "x"), "x\x1b[0m");
    }
}
