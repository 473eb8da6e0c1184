//! ANSI escape code generation.
//!
//! Maps colors and text attributes to SGR sequences (`ESC [ <params> m`).
//! Every valid [`Color`] and [`Attribute`] has a code, so nothing here fails.

use crate::color::{Appearance, Color};

/// Full attribute and color reset.
pub const RESET: &str = "\x1b[0m";

/// Text attributes with a standard SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    Strikethrough,
}

impl Attribute {
    /// All attributes, in the order they are emitted.
    pub const ALL: [Attribute; 8] = [
        Self::Bold,
        Self::Dim,
        Self::Italic,
        Self::Underline,
        Self::Blink,
        Self::Reverse,
        Self::Hidden,
        Self::Strikethrough,
    ];

    /// SGR parameter that turns the attribute on.
    pub fn sgr(&self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Dim => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blink => 5,
            Self::Reverse => 7,
            Self::Hidden => 8,
            Self::Strikethrough => 9,
        }
    }

    /// SGR parameter that turns the attribute off.
    ///
    /// Bold and dim share `22` (normal intensity).
    pub fn reset_sgr(&self) -> u8 {
        match self {
            Self::Bold | Self::Dim => 22,
            Self::Italic => 23,
            Self::Underline => 24,
            Self::Blink => 25,
            Self::Reverse => 27,
            Self::Hidden => 28,
            Self::Strikethrough => 29,
        }
    }
}

/// Escape sequence that enables `attr`.
pub fn attribute_code(attr: Attribute) -> &'static str {
    match attr {
        Attribute::Bold => "\x1b[1m",
        Attribute::Dim => "\x1b[2m",
        Attribute::Italic => "\x1b[3m",
        Attribute::Underline => "\x1b[4m",
        Attribute::Blink => "\x1b[5m",
        Attribute::Reverse => "\x1b[7m",
        Attribute::Hidden => "\x1b[8m",
        Attribute::Strikethrough => "\x1b[9m",
    }
}

/// Escape sequence that disables only `attr`.
pub fn reset_attribute(attr: Attribute) -> &'static str {
    match attr {
        Attribute::Bold | Attribute::Dim => "\x1b[22m",
        Attribute::Italic => "\x1b[23m",
        Attribute::Underline => "\x1b[24m",
        Attribute::Blink => "\x1b[25m",
        Attribute::Reverse => "\x1b[27m",
        Attribute::Hidden => "\x1b[28m",
        Attribute::Strikethrough => "\x1b[29m",
    }
}

/// Full reset sequence.
pub fn reset() -> &'static str {
    RESET
}

/// Foreground escape sequence for `color`.
pub fn foreground_code(color: &Color, appearance: Appearance) -> String {
    let mut buf = String::new();
    push_foreground(color, appearance, &mut buf);
    buf
}

/// Background escape sequence for `color`.
pub fn background_code(color: &Color, appearance: Appearance) -> String {
    let mut buf = String::new();
    push_background(color, appearance, &mut buf);
    buf
}

/// Append the foreground sequence for `color` to `buf`.
pub fn push_foreground(color: &Color, appearance: Appearance, buf: &mut String) {
    push_color(color, appearance, Layer::Foreground, buf);
}

/// Append the background sequence for `color` to `buf`.
pub fn push_background(color: &Color, appearance: Appearance, buf: &mut String) {
    push_color(color, appearance, Layer::Background, buf);
}

#[derive(Clone, Copy)]
enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// Parameter introducing extended (256 / true) colors.
    fn extended(self) -> u8 {
        match self {
            Self::Foreground => 38,
            Self::Background => 48,
        }
    }

    fn base(self, bright: bool) -> u8 {
        match (self, bright) {
            (Self::Foreground, false) => 30,
            (Self::Foreground, true) => 90,
            (Self::Background, false) => 40,
            (Self::Background, true) => 100,
        }
    }
}

fn push_color(color: &Color, appearance: Appearance, layer: Layer, buf: &mut String) {
    match color {
        Color::Named(named) => {
            let code = layer.base(named.is_bright()) + named.base_offset();
            buf.push_str("\x1b[");
            buf.push_str(&code.to_string());
            buf.push('m');
        }
        Color::Indexed(n) => {
            buf.push_str("\x1b[");
            buf.push_str(&layer.extended().to_string());
            buf.push_str(";5;");
            buf.push_str(&n.to_string());
            buf.push('m');
        }
        Color::Rgb(r, g, b) => {
            buf.push_str("\x1b[");
            buf.push_str(&layer.extended().to_string());
            buf.push_str(";2;");
            buf.push_str(&r.to_string());
            buf.push(';');
            buf.push_str(&g.to_string());
            buf.push(';');
            buf.push_str(&b.to_string());
            buf.push('m');
        }
        Color::Adaptive { .. } => {
            push_color(&color.resolve(appearance), appearance, layer, buf);
        }
    }
}
