//! Named console colors and their ANSI foreground codes.
//!
//! Color names are the lowercase, case-sensitive identifiers used in option
//! tables and config files (`"white"`, `"brightcyan"`, ...). Parsing is
//! lenient: an unknown name resolves to [`ConsoleColor::Default`] instead of
//! failing, so a typo in configuration never aborts output.

use std::fmt;
use std::str::FromStr;

use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};

/// The 17 foreground colors a label or message can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConsoleColor {
    /// Terminal default foreground (code 39).
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ConsoleColor {
    /// Every color, in the order of their ANSI codes (default first).
    pub const ALL: [Self; 17] = [
        Self::Default,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Canonical configuration name of the color.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "brightblack",
            Self::BrightRed => "brightred",
            Self::BrightGreen => "brightgreen",
            Self::BrightYellow => "brightyellow",
            Self::BrightBlue => "brightblue",
            Self::BrightMagenta => "brightmagenta",
            Self::BrightCyan => "brightcyan",
            Self::BrightWhite => "brightwhite",
        }
    }

    /// SGR foreground code: 30–37 normal, 90–97 bright, 39 default.
    pub const fn ansi_code(self) -> u8 {
        match self {
            Self::Default => 39,
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
        }
    }

    /// Look up a color by its exact name.
    ///
    /// Returns `None` for unknown names; see [`ConsoleColor::from_name_lossy`]
    /// for the fallback used by option parsing.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Look up a color by name, falling back to [`ConsoleColor::Default`].
    pub fn from_name_lossy(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// The equivalent [`owo_colors`] dynamic color.
    pub(crate) const fn ansi(self) -> AnsiColors {
        match self {
            Self::Default => AnsiColors::Default,
            Self::Black => AnsiColors::Black,
            Self::Red => AnsiColors::Red,
            Self::Green => AnsiColors::Green,
            Self::Yellow => AnsiColors::Yellow,
            Self::Blue => AnsiColors::Blue,
            Self::Magenta => AnsiColors::Magenta,
            Self::Cyan => AnsiColors::Cyan,
            Self::White => AnsiColors::White,
            Self::BrightBlack => AnsiColors::BrightBlack,
            Self::BrightRed => AnsiColors::BrightRed,
            Self::BrightGreen => AnsiColors::BrightGreen,
            Self::BrightYellow => AnsiColors::BrightYellow,
            Self::BrightBlue => AnsiColors::BrightBlue,
            Self::BrightMagenta => AnsiColors::BrightMagenta,
            Self::BrightCyan => AnsiColors::BrightCyan,
            Self::BrightWhite => AnsiColors::BrightWhite,
        }
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConsoleColor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name_lossy(s))
    }
}

impl From<String> for ConsoleColor {
    fn from(name: String) -> Self {
        Self::from_name_lossy(&name)
    }
}

impl From<ConsoleColor> for String {
    fn from(color: ConsoleColor) -> Self {
        color.name().to_string()
    }
}
