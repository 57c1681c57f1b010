//! The eight basic terminal colors.
//!
//! A [`Color`] is only a base index (0–7). Whether it paints the foreground or
//! the background is decided by the [`Property`](crate::Property) that carries
//! it, which keeps the `30 + n` / `40 + n` relationship in one place.

use std::fmt;

use phf::phf_map;

/// Lowercase color names to colors.
static COLOR_NAMES: phf::Map<&'static str, Color> = phf_map! {
    "black" => Color::Black,
    "red" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "white" => Color::White,
};

/// One of the eight basic ANSI colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors, in SGR order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// SGR code of the first foreground color.
    pub const FOREGROUND_BASE: u8 = 30;

    /// SGR code of the first background color.
    pub const BACKGROUND_BASE: u8 = 40;

    /// Look up a color by name, ignoring ASCII case.
    ///
    /// ```
    /// use sgr::Color;
    ///
    /// assert_eq!(Color::from_name("cyan"), Some(Color::Cyan));
    /// assert_eq!(Color::from_name("CYAN"), Some(Color::Cyan));
    /// assert_eq!(Color::from_name("teal"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(color) = COLOR_NAMES.get(name) {
            return Some(*color);
        }
        COLOR_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Color for a base index in `0..8`.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Base index of the color (0 for black through 7 for white).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Lowercase name as accepted by [`Color::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// SGR code selecting this color as foreground.
    pub fn foreground_code(self) -> u8 {
        Self::FOREGROUND_BASE + self.index()
    }

    /// SGR code selecting this color as background.
    pub fn background_code(self) -> u8 {
        Self::BACKGROUND_BASE + self.index()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
