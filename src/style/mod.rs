//! Immutable style builder.
//!
//! A [`Style`] is a plain value: every setter takes the style by value and
//! returns the updated copy, so a base style can be cloned and specialised
//! without affecting the original. See [`Style::render_with`] for the
//! rendering pipeline.
//!
//! ```
//! use termgloss::{Color, Style};
//!
//! let title = Style::new()
//!     .bold(true)
//!     .foreground(Color::parse("#ff8700").unwrap())
//!     .padding((0, 1));
//!
//! let out = title.render("Hello");
//! assert_eq!(termgloss::strip_escapes(&out), " Hello ");
//! ```

mod render;

pub use render::TRUNCATION_TAIL;

use crate::ansi::{attribute_code, push_background, push_foreground, Attribute};
use crate::border::BorderSpec;
use crate::color::{Appearance, Color};
use crate::layout::Position;

/// Four per-side values, in CSS order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Sides<T> {
    pub fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Sides<usize> {
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

impl From<usize> for Sides<usize> {
    fn from(all: usize) -> Self {
        Self::all(all)
    }
}

/// `(vertical, horizontal)`
impl From<(usize, usize)> for Sides<usize> {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// `(top, right, bottom, left)`
impl From<(usize, usize, usize, usize)> for Sides<usize> {
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

/// Text attributes, colors, spacing, sizing, alignment and border.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    bold: bool,
    italic: bool,
    underline: bool,
    dim: bool,
    strikethrough: bool,
    blink: bool,
    reverse: bool,
    hidden: bool,

    foreground: Option<Color>,
    background: Option<Color>,

    padding: Sides<usize>,
    margin: Sides<usize>,

    width: Option<usize>,
    height: Option<usize>,

    horizontal_align: Position,
    vertical_align: Position,

    border: Option<BorderSpec>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    // Attributes

    pub fn bold(self, on: bool) -> Self {
        self.attribute(Attribute::Bold, on)
    }

    pub fn italic(self, on: bool) -> Self {
        self.attribute(Attribute::Italic, on)
    }

    pub fn underline(self, on: bool) -> Self {
        self.attribute(Attribute::Underline, on)
    }

    pub fn dim(self, on: bool) -> Self {
        self.attribute(Attribute::Dim, on)
    }

    pub fn strikethrough(self, on: bool) -> Self {
        self.attribute(Attribute::Strikethrough, on)
    }

    pub fn blink(self, on: bool) -> Self {
        self.attribute(Attribute::Blink, on)
    }

    pub fn reverse(self, on: bool) -> Self {
        self.attribute(Attribute::Reverse, on)
    }

    pub fn hidden(self, on: bool) -> Self {
        self.attribute(Attribute::Hidden, on)
    }

    /// Set any attribute by value.
    pub fn attribute(mut self, attr: Attribute, on: bool) -> Self {
        *self.flag_mut(attr) = on;
        self
    }

    /// Whether `attr` is enabled.
    pub fn has(&self, attr: Attribute) -> bool {
        match attr {
            Attribute::Bold => self.bold,
            Attribute::Dim => self.dim,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Blink => self.blink,
            Attribute::Reverse => self.reverse,
            Attribute::Hidden => self.hidden,
            Attribute::Strikethrough => self.strikethrough,
        }
    }

    fn flag_mut(&mut self, attr: Attribute) -> &mut bool {
        match attr {
            Attribute::Bold => &mut self.bold,
            Attribute::Dim => &mut self.dim,
            Attribute::Italic => &mut self.italic,
            Attribute::Underline => &mut self.underline,
            Attribute::Blink => &mut self.blink,
            Attribute::Reverse => &mut self.reverse,
            Attribute::Hidden => &mut self.hidden,
            Attribute::Strikethrough => &mut self.strikethrough,
        }
    }

    // Colors

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    // Spacing

    /// Inner spacing. Accepts `n`, `(vertical, horizontal)` or
    /// `(top, right, bottom, left)`.
    pub fn padding(mut self, sides: impl Into<Sides<usize>>) -> Self {
        self.padding = sides.into();
        self
    }

    pub fn padding_top(mut self, n: usize) -> Self {
        self.padding.top = n;
        self
    }

    pub fn padding_right(mut self, n: usize) -> Self {
        self.padding.right = n;
        self
    }

    pub fn padding_bottom(mut self, n: usize) -> Self {
        self.padding.bottom = n;
        self
    }

    pub fn padding_left(mut self, n: usize) -> Self {
        self.padding.left = n;
        self
    }

    /// Outer spacing, never colored. Same shorthands as [`Style::padding`].
    ///
    /// The margin sits outside the border.
    pub fn margin(mut self, sides: impl Into<Sides<usize>>) -> Self {
        self.margin = sides.into();
        self
    }

    pub fn margin_top(mut self, n: usize) -> Self {
        self.margin.top = n;
        self
    }

    pub fn margin_right(mut self, n: usize) -> Self {
        self.margin.right = n;
        self
    }

    pub fn margin_bottom(mut self, n: usize) -> Self {
        self.margin.bottom = n;
        self
    }

    pub fn margin_left(mut self, n: usize) -> Self {
        self.margin.left = n;
        self
    }

    // Sizing and alignment

    /// Fixed width including horizontal padding. Longer lines are truncated.
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }

    /// Minimum height including vertical padding.
    pub fn height(mut self, h: usize) -> Self {
        self.height = Some(h);
        self
    }

    pub fn align_horizontal(mut self, pos: Position) -> Self {
        self.horizontal_align = pos;
        self
    }

    pub fn align_vertical(mut self, pos: Position) -> Self {
        self.vertical_align = pos;
        self
    }

    // Border

    pub fn border(mut self, border: BorderSpec) -> Self {
        self.border = Some(border);
        self
    }

    // Unsetters

    pub fn unset_attributes(self) -> Self {
        Attribute::ALL
            .into_iter()
            .fold(self, |style, attr| style.attribute(attr, false))
    }

    pub fn unset_foreground(mut self) -> Self {
        self.foreground = None;
        self
    }

    pub fn unset_background(mut self) -> Self {
        self.background = None;
        self
    }

    pub fn unset_padding(mut self) -> Self {
        self.padding = Sides::default();
        self
    }

    pub fn unset_margin(mut self) -> Self {
        self.margin = Sides::default();
        self
    }

    pub fn unset_width(mut self) -> Self {
        self.width = None;
        self
    }

    pub fn unset_height(mut self) -> Self {
        self.height = None;
        self
    }

    pub fn unset_align(mut self) -> Self {
        self.horizontal_align = Position::default();
        self.vertical_align = Position::default();
        self
    }

    pub fn unset_border(mut self) -> Self {
        self.border = None;
        self
    }

    // Getters

    pub fn get_foreground(&self) -> Option<&Color> {
        self.foreground.as_ref()
    }

    pub fn get_background(&self) -> Option<&Color> {
        self.background.as_ref()
    }

    pub fn get_padding(&self) -> Sides<usize> {
        self.padding
    }

    pub fn get_margin(&self) -> Sides<usize> {
        self.margin
    }

    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    pub fn get_height(&self) -> Option<usize> {
        self.height
    }

    pub fn get_border(&self) -> Option<&BorderSpec> {
        self.border.as_ref()
    }

    pub fn horizontal_padding(&self) -> usize {
        self.padding.horizontal()
    }

    pub fn vertical_padding(&self) -> usize {
        self.padding.vertical()
    }

    pub fn horizontal_margin(&self) -> usize {
        self.margin.horizontal()
    }

    pub fn vertical_margin(&self) -> usize {
        self.margin.vertical()
    }

    pub fn horizontal_border_size(&self) -> usize {
        self.border.as_ref().map_or(0, BorderSpec::horizontal_size)
    }

    pub fn vertical_border_size(&self) -> usize {
        self.border.as_ref().map_or(0, BorderSpec::vertical_size)
    }

    /// Columns added around the content by padding, border and margin.
    pub fn horizontal_frame_size(&self) -> usize {
        self.horizontal_padding() + self.horizontal_border_size() + self.horizontal_margin()
    }

    /// Rows added around the content by padding, border and margin.
    pub fn vertical_frame_size(&self) -> usize {
        self.vertical_padding() + self.vertical_border_size() + self.vertical_margin()
    }

    /// Opening escapes: attributes, then foreground, then background.
    fn open_sequence(&self, appearance: Appearance) -> String {
        let mut buf = String::new();
        for attr in Attribute::ALL {
            if self.has(attr) {
                buf.push_str(attribute_code(attr));
            }
        }
        if let Some(fg) = &self.foreground {
            push_foreground(fg, appearance, &mut buf);
        }
        self.push_background_sequence(appearance, &mut buf);
        buf
    }

    fn push_background_sequence(&self, appearance: Appearance, buf: &mut String) {
        if let Some(bg) = &self.background {
            push_background(bg, appearance, buf);
        }
    }
}
