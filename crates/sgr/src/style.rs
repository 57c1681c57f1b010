//! Ordered compositions of properties.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleParseError;
use crate::paint::Paint;
use crate::parser;
use crate::property::Property;

/// A reusable, ordered collection of properties.
///
/// The order decides the order in which escape sequences are written. An
/// empty style writes nothing, though wrapping with it still appends a reset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    properties: Vec<Property>,
}

impl Style {
    /// Create a style from properties, keeping their order.
    ///
    /// ```
    /// use sgr::{Paint, Property, Style};
    ///
    /// let info = Style::new([Property::GREEN, Property::Bold]);
    /// assert_eq!(info.wrap("INFO"), "\x1b[32m\x1b[1mINFO\x1b[0m");
    /// ```
    pub fn new(properties: impl IntoIterator<Item = Property>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
        }
    }

    /// Parse a `foreground:background+attributes` style string.
    ///
    /// Parsing never fails. Unknown color names and attribute letters are
    /// left out, so the worst case is an empty style.
    ///
    /// ```
    /// use sgr::{Property, Style};
    ///
    /// let style = Style::parse("red:green+br");
    /// assert_eq!(
    ///     style.properties(),
    ///     [Property::Bold, Property::Reverse, Property::RED, Property::BG_GREEN],
    /// );
    /// ```
    pub fn parse(input: &str) -> Self {
        parser::parse_style(input)
    }

    /// Parse a style string, rejecting unknown names and letters.
    pub fn parse_strict(input: &str) -> Result<Self, StyleParseError> {
        parser::parse_style_strict(input)
    }

    /// The properties in order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the style holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// This style with `property` appended.
    #[must_use]
    pub fn with(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for property in &self.properties {
            write!(f, "{property}")?;
        }
        Ok(())
    }
}

impl Paint for Style {}

impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl From<Property> for Style {
    fn from(property: Property) -> Self {
        Self {
            properties: vec![property],
        }
    }
}

impl From<Vec<Property>> for Style {
    fn from(properties: Vec<Property>) -> Self {
        Self { properties }
    }
}

impl FromIterator<Property> for Style {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
