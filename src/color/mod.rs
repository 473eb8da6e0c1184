//! Color model.
//!
//! A [`Color`] is always one concrete, valid variant:
//! - `Rgb`: 24-bit true color, parsed from `#RRGGBB`
//! - `Named`: one of the 16 canonical terminal colors
//! - `Indexed`: an entry of the 256-color palette, parsed from `0`..`255`
//! - `Adaptive`: a light/dark pair resolved against an [`Appearance`] at render time
//!
//! Invalid strings fail in [`Color::parse`] and never produce a value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Whether the terminal background is treated as light or dark.
///
/// Passed in by the caller; never probed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

/// The 16 canonical terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
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

impl NamedColor {
    /// All named colors in palette order (0..=15).
    pub const ALL: [NamedColor; 16] = [
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

    /// Canonical snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright_black",
            Self::BrightRed => "bright_red",
            Self::BrightGreen => "bright_green",
            Self::BrightYellow => "bright_yellow",
            Self::BrightBlue => "bright_blue",
            Self::BrightMagenta => "bright_magenta",
            Self::BrightCyan => "bright_cyan",
            Self::BrightWhite => "bright_white",
        }
    }

    /// Offset within its group of eight (0 = black .. 7 = white).
    pub fn base_offset(&self) -> u8 {
        (*self as u8) % 8
    }

    /// Whether this is one of the bright variants.
    pub fn is_bright(&self) -> bool {
        (*self as u8) >= 8
    }

    /// Look up a name. Accepts `bright_red`, `bright-red` and `brightred`,
    /// ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let (bright, base) = match lower.strip_prefix("bright") {
            Some(rest) => (
                true,
                rest.strip_prefix('_')
                    .or_else(|| rest.strip_prefix('-'))
                    .unwrap_or(rest),
            ),
            None => (false, lower.as_str()),
        };
        let offset = Self::ALL[..8].iter().position(|c| c.name() == base)?;
        Some(Self::ALL[offset + if bright { 8 } else { 0 }])
    }
}

/// A terminal color specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// 24-bit true color.
    Rgb(u8, u8, u8),
    /// Standard or bright 16-color palette entry.
    Named(NamedColor),
    /// 256-color palette index.
    Indexed(u8),
    /// Light/dark pair, resolved at render time.
    Adaptive { light: Box<Color>, dark: Box<Color> },
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    pub fn indexed(n: u8) -> Self {
        Self::Indexed(n)
    }

    /// Build an adaptive color from two already-valid colors.
    pub fn adaptive(light: Color, dark: Color) -> Self {
        Self::Adaptive {
            light: Box::new(light),
            dark: Box::new(dark),
        }
    }

    /// Parse a color specification.
    ///
    /// Accepts `#RRGGBB`, one of the 16 canonical names, or a decimal
    /// palette index `0`..`255`. Everything else is [`ColorError::InvalidColor`].
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        if spec.is_empty() {
            return Err(ColorError::invalid(spec, "empty color"));
        }

        if let Some(hex) = spec.strip_prefix('#') {
            return parse_hex(hex)
                .map(|(r, g, b)| Self::Rgb(r, g, b))
                .ok_or_else(|| ColorError::invalid(spec, "expected #RRGGBB"));
        }

        if spec.bytes().all(|b| b.is_ascii_digit()) {
            return spec
                .parse::<u8>()
                .map(Self::Indexed)
                .map_err(|_| ColorError::invalid(spec, "palette index out of range 0-255"));
        }

        NamedColor::from_name(spec)
            .map(Self::Named)
            .ok_or_else(|| ColorError::invalid(spec, "unknown color name"))
    }

    /// Resolve to a concrete (non-adaptive) color.
    pub fn resolve(&self, appearance: Appearance) -> Color {
        match self {
            Self::Adaptive { light, dark } => match appearance {
                Appearance::Light => light.resolve(appearance),
                Appearance::Dark => dark.resolve(appearance),
            },
            other => other.clone(),
        }
    }

    pub fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive { .. })
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Self::Named(named)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Self::Named(named) => f.write_str(named.name()),
            Self::Indexed(n) => write!(f, "{}", n),
            Self::Adaptive { light, dark } => write!(f, "adaptive({}, {})", light, dark),
        }
    }
}
