//! Box borders.
//!
//! Border styles are plain data: nine characters plus which sides are drawn
//! and optional border colors. Border characters are colored on their own,
//! independently of whatever escapes the content carries.

use crate::ansi::{push_background, push_foreground, RESET};
use crate::color::{Appearance, Color};
use crate::layout::{pad_line, Position};
use crate::measure::{max_width, split_lines};
use crate::style::Sides;

/// The characters of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderChars {
    pub top: char,
    pub bottom: char,
    pub left: char,
    pub right: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    /// Fill character for divider rows between sections.
    pub divider: Option<char>,
}

impl BorderChars {
    pub const NORMAL: BorderChars = BorderChars {
        top: '─',
        bottom: '─',
        left: '│',
        right: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        divider: Some('─'),
    };

    pub const ROUNDED: BorderChars = BorderChars {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::NORMAL
    };

    pub const DOUBLE: BorderChars = BorderChars {
        top: '═',
        bottom: '═',
        left: '║',
        right: '║',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        divider: Some('═'),
    };

    pub const THICK: BorderChars = BorderChars {
        top: '━',
        bottom: '━',
        left: '┃',
        right: '┃',
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        divider: Some('━'),
    };

    pub const HIDDEN: BorderChars = BorderChars {
        top: ' ',
        bottom: ' ',
        left: ' ',
        right: ' ',
        top_left: ' ',
        top_right: ' ',
        bottom_left: ' ',
        bottom_right: ' ',
        divider: Some(' '),
    };

    pub const BLOCK: BorderChars = BorderChars {
        top: '█',
        bottom: '█',
        left: '█',
        right: '█',
        top_left: '█',
        top_right: '█',
        bottom_left: '█',
        bottom_right: '█',
        divider: Some('█'),
    };

    pub const ASCII: BorderChars = BorderChars {
        top: '-',
        bottom: '-',
        left: '|',
        right: '|',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        divider: Some('-'),
    };
}

/// A border: characters, enabled sides and colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSpec {
    pub chars: BorderChars,
    pub sides: Sides<bool>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self::normal()
    }
}

impl BorderSpec {
    /// A border using `chars` with all sides enabled and no colors.
    pub fn custom(chars: BorderChars) -> Self {
        Self {
            chars,
            sides: Sides::all(true),
            foreground: None,
            background: None,
        }
    }

    pub fn normal() -> Self {
        Self::custom(BorderChars::NORMAL)
    }

    pub fn rounded() -> Self {
        Self::custom(BorderChars::ROUNDED)
    }

    pub fn double() -> Self {
        Self::custom(BorderChars::DOUBLE)
    }

    pub fn thick() -> Self {
        Self::custom(BorderChars::THICK)
    }

    pub fn hidden() -> Self {
        Self::custom(BorderChars::HIDDEN)
    }

    pub fn block() -> Self {
        Self::custom(BorderChars::BLOCK)
    }

    pub fn ascii() -> Self {
        Self::custom(BorderChars::ASCII)
    }

    /// Look up a preset by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::normal()),
            "rounded" => Some(Self::rounded()),
            "double" => Some(Self::double()),
            "thick" => Some(Self::thick()),
            "hidden" => Some(Self::hidden()),
            "block" => Some(Self::block()),
            "ascii" => Some(Self::ascii()),
            _ => None,
        }
    }

    pub fn top(mut self, on: bool) -> Self {
        self.sides.top = on;
        self
    }

    pub fn right(mut self, on: bool) -> Self {
        self.sides.right = on;
        self
    }

    pub fn bottom(mut self, on: bool) -> Self {
        self.sides.bottom = on;
        self
    }

    pub fn left(mut self, on: bool) -> Self {
        self.sides.left = on;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Columns added by the left and right edges.
    pub fn horizontal_size(&self) -> usize {
        usize::from(self.sides.left) + usize::from(self.sides.right)
    }

    /// Rows added by the top and bottom edges.
    pub fn vertical_size(&self) -> usize {
        usize::from(self.sides.top) + usize::from(self.sides.bottom)
    }
}

/// Draws border pieces with the border's own colors.
struct Painter {
    open: String,
}

impl Painter {
    fn new(spec: &BorderSpec, appearance: Appearance) -> Self {
        let mut open = String::new();
        if let Some(fg) = &spec.foreground {
            push_foreground(fg, appearance, &mut open);
        }
        if let Some(bg) = &spec.background {
            push_background(bg, appearance, &mut open);
        }
        Self { open }
    }

    fn paint(&self, piece: &str) -> String {
        if self.open.is_empty() || piece.is_empty() {
            return piece.to_string();
        }
        format!("{}{}{}", self.open, piece, RESET)
    }

    /// A horizontal row: optional left corner, `fill` x `width`, optional right corner.
    fn row(&self, left: Option<char>, fill: char, width: usize, right: Option<char>) -> String {
        let mut piece = String::with_capacity(width + 2);
        piece.extend(left);
        piece.extend(std::iter::repeat(fill).take(width));
        piece.extend(right);
        self.paint(&piece)
    }
}

/// Draw `spec` around `content`.
pub fn draw(content: &str, spec: &BorderSpec, appearance: Appearance) -> String {
    draw_sections(&[content], spec, appearance)
}

/// Draw one frame around several stacked sections, separated by divider rows.
///
/// Sections are padded to the widest one. Without a divider character the
/// sections simply follow each other.
pub fn draw_sections(sections: &[&str], spec: &BorderSpec, appearance: Appearance) -> String {
    let painter = Painter::new(spec, appearance);
    let chars = &spec.chars;
    let sides = &spec.sides;
    let width = sections.iter().map(|s| max_width(s)).max().unwrap_or(0);

    // A corner is drawn only where its vertical edge is, so every row has the
    // same width.
    let corner = |on: bool, c: char| if on { Some(c) } else { None };
    let edge = |on: bool, c: char| {
        if on {
            painter.paint(&c.to_string())
        } else {
            String::new()
        }
    };
    let left_edge = edge(sides.left, chars.left);
    let right_edge = edge(sides.right, chars.right);

    let mut out = Vec::new();
    if sides.top {
        out.push(painter.row(
            corner(sides.left, chars.top_left),
            chars.top,
            width,
            corner(sides.right, chars.top_right),
        ));
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            if let Some(fill) = chars.divider {
                out.push(painter.row(
                    corner(sides.left, chars.left),
                    fill,
                    width,
                    corner(sides.right, chars.right),
                ));
            }
        }
        for line in split_lines(section) {
            out.push(format!(
                "{}{}{}",
                left_edge,
                pad_line(line, width, Position::Start),
                right_edge
            ));
        }
    }

    if sides.bottom {
        out.push(painter.row(
            corner(sides.left, chars.bottom_left),
            chars.bottom,
            width,
            corner(sides.right, chars.bottom_right),
        ));
    }

    out.join("\n")
}
