//! Single SGR properties.
//!
//! A [`Property`] is one Select Graphic Rendition code: the reset, one of nine
//! text attributes, or one of the eight basic colors in the foreground or the
//! background. Its textual form is always `ESC [ <code> m`.

use std::fmt;
use std::hash::{Hash, Hasher};

use phf::phf_map;

use crate::color::Color;
use crate::paint::Paint;

/// Attribute letters used after the `+` of a style string. Case matters:
/// `b` is bold while `B` is blink.
static ATTRIBUTE_CHARS: phf::Map<char, Property> = phf_map! {
    'b' => Property::Bold,
    'd' => Property::Dim,
    'i' => Property::Italic,
    'u' => Property::Underline,
    'B' => Property::Blink,
    'f' => Property::FastBlink,
    'r' => Property::Reverse,
    'h' => Property::Hidden,
    'c' => Property::CrossedOut,
};

/// One stylable unit: a text attribute, a color, or the reset.
///
/// Two properties are equal when they encode to the same SGR code, so
/// `Property::Code(1) == Property::Bold`. Use [`Property::from_code`] to get
/// the named variant for a code.
#[derive(Clone, Copy, Debug)]
pub enum Property {
    /// Turn every attribute and color off (SGR 0).
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    /// Slow blink (SGR 5).
    Blink,
    /// Rapid blink (SGR 6).
    FastBlink,
    /// Swap foreground and background.
    Reverse,
    Hidden,
    CrossedOut,
    /// Foreground color, SGR `30 + index`.
    Fg(Color),
    /// Background color, SGR `40 + index`.
    Bg(Color),
    /// Any other SGR code, written out verbatim.
    Code(u16),
}

impl Property {
    pub const BLACK: Property = Property::Fg(Color::Black);
    pub const RED: Property = Property::Fg(Color::Red);
    pub const GREEN: Property = Property::Fg(Color::Green);
    pub const YELLOW: Property = Property::Fg(Color::Yellow);
    pub const BLUE: Property = Property::Fg(Color::Blue);
    pub const MAGENTA: Property = Property::Fg(Color::Magenta);
    pub const CYAN: Property = Property::Fg(Color::Cyan);
    pub const WHITE: Property = Property::Fg(Color::White);

    pub const BG_BLACK: Property = Property::Bg(Color::Black);
    pub const BG_RED: Property = Property::Bg(Color::Red);
    pub const BG_GREEN: Property = Property::Bg(Color::Green);
    pub const BG_YELLOW: Property = Property::Bg(Color::Yellow);
    pub const BG_BLUE: Property = Property::Bg(Color::Blue);
    pub const BG_MAGENTA: Property = Property::Bg(Color::Magenta);
    pub const BG_CYAN: Property = Property::Bg(Color::Cyan);
    pub const BG_WHITE: Property = Property::Bg(Color::White);

    /// The reset and the nine text attributes, in code order.
    pub const ATTRIBUTES: [Property; 10] = [
        Property::Reset,
        Property::Bold,
        Property::Dim,
        Property::Italic,
        Property::Underline,
        Property::Blink,
        Property::FastBlink,
        Property::Reverse,
        Property::Hidden,
        Property::CrossedOut,
    ];

    /// The SGR code of this property.
    pub fn code(self) -> u16 {
        match self {
            Property::Reset => 0,
            Property::Bold => 1,
            Property::Dim => 2,
            Property::Italic => 3,
            Property::Underline => 4,
            Property::Blink => 5,
            Property::FastBlink => 6,
            Property::Reverse => 7,
            Property::Hidden => 8,
            Property::CrossedOut => 9,
            Property::Fg(color) => u16::from(color.foreground_code()),
            Property::Bg(color) => u16::from(color.background_code()),
            Property::Code(code) => code,
        }
    }

    /// The property for an SGR code, preferring named variants.
    ///
    /// ```
    /// use sgr::{Color, Property};
    ///
    /// assert!(matches!(Property::from_code(4), Property::Underline));
    /// assert!(matches!(Property::from_code(41), Property::Bg(Color::Red)));
    /// assert!(matches!(Property::from_code(90), Property::Code(90)));
    /// ```
    pub fn from_code(code: u16) -> Self {
        let color = |base: u8| {
            u8::try_from(code - u16::from(base))
                .ok()
                .and_then(Color::from_index)
        };
        match code {
            0..=9 => Self::ATTRIBUTES[usize::from(code)],
            30..=37 => color(Color::FOREGROUND_BASE).map_or(Property::Code(code), Property::Fg),
            40..=47 => color(Color::BACKGROUND_BASE).map_or(Property::Code(code), Property::Bg),
            _ => Property::Code(code),
        }
    }

    /// The attribute for a style-string letter, if there is one.
    pub fn from_attribute_char(c: char) -> Option<Self> {
        ATTRIBUTE_CHARS.get(&c).copied()
    }

    /// The style-string letter for this attribute.
    pub fn attribute_char(self) -> Option<char> {
        ATTRIBUTE_CHARS
            .entries()
            .find(|&(_, property)| *property == self)
            .map(|(c, _)| *c)
    }

    /// The background counterpart of a foreground color. Every other
    /// property is returned unchanged.
    pub fn background(self) -> Self {
        match self {
            Property::Fg(color) => Property::Bg(color),
            other => other,
        }
    }

    /// The color carried by this property, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Property::Fg(color) | Property::Bg(color) => Some(color),
            _ => None,
        }
    }
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Property {}

impl Hash for Property {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.code())
    }
}

impl Paint for Property {}
