//! Block composition.
//!
//! Joins already-rendered blocks side by side or stacked, and places a block
//! inside a fixed canvas. Only visible width is used for sizing, so blocks
//! may carry escape sequences.

use crate::measure::{max_width, split_lines, width};

/// Alignment along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Start,
    Center,
    End,
}

impl Position {
    pub const TOP: Position = Position::Start;
    pub const BOTTOM: Position = Position::End;
    pub const LEFT: Position = Position::Start;
    pub const RIGHT: Position = Position::End;

    /// Split `gap` cells into `(before, after)`.
    ///
    /// `Center` puts the odd cell after.
    pub fn split(self, gap: usize) -> (usize, usize) {
        match self {
            Self::Start => (0, gap),
            Self::End => (gap, 0),
            Self::Center => (gap / 2, gap - gap / 2),
        }
    }
}

/// Pad `line` with spaces to `target` cells.
pub(crate) fn pad_line(line: &str, target: usize, pos: Position) -> String {
    let gap = target.saturating_sub(width(line));
    if gap == 0 {
        return line.to_string();
    }
    let (before, after) = pos.split(gap);
    let mut out = String::with_capacity(line.len() + gap);
    out.push_str(&" ".repeat(before));
    out.push_str(line);
    out.push_str(&" ".repeat(after));
    out
}

/// Pad `lines` with `filler` rows to `target` rows.
pub(crate) fn pad_rows(
    lines: Vec<String>,
    target: usize,
    pos: Position,
    filler: &str,
) -> Vec<String> {
    let gap = target.saturating_sub(lines.len());
    if gap == 0 {
        return lines;
    }
    let (above, below) = pos.split(gap);
    let mut out = Vec::with_capacity(target);
    out.extend(std::iter::repeat(filler.to_string()).take(above));
    out.extend(lines);
    out.extend(std::iter::repeat(filler.to_string()).take(below));
    out
}

/// Place blocks side by side.
///
/// Shorter blocks get blank rows per `align` (`TOP`, `Center`, `BOTTOM`);
/// every row of a block is right-padded to that block's own width, then rows
/// are concatenated with `separator` between blocks.
pub fn join_horizontal(align: Position, separator: &str, blocks: &[&str]) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let max_lines = blocks
        .iter()
        .map(|block| split_lines(block).len())
        .max()
        .unwrap_or(0);

    let columns: Vec<Vec<String>> = blocks
        .iter()
        .map(|block| {
            let block_width = max_width(block);
            let lines = split_lines(block)
                .into_iter()
                .map(|line| pad_line(line, block_width, Position::Start))
                .collect();
            pad_rows(lines, max_lines, align, &" ".repeat(block_width))
        })
        .collect();

    (0..max_lines)
        .map(|row| {
            columns
                .iter()
                .map(|column| column[row].as_str())
                .collect::<Vec<_>>()
                .join(separator)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stack blocks vertically, padding every line to the widest block per
/// `align` (`LEFT`, `Center`, `RIGHT`).
pub fn join_vertical(align: Position, blocks: &[&str]) -> String {
    let global_width = blocks.iter().map(|block| max_width(block)).max().unwrap_or(0);

    blocks
        .iter()
        .flat_map(|block| split_lines(block))
        .map(|line| pad_line(line, global_width, align))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Position `content` inside a `width` x `height` canvas of spaces.
///
/// Content larger than the canvas is left as is along that axis.
pub fn place(
    width: usize,
    height: usize,
    h_align: Position,
    v_align: Position,
    content: &str,
) -> String {
    place_vertical(height, v_align, &place_horizontal(width, h_align, content))
}

/// Pad every line of `content` to `width` cells.
pub fn place_horizontal(width: usize, align: Position, content: &str) -> String {
    let target = width.max(max_width(content));
    split_lines(content)
        .into_iter()
        .map(|line| pad_line(line, target, align))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pad `content` with blank rows to `height` lines.
pub fn place_vertical(height: usize, align: Position, content: &str) -> String {
    let blank = " ".repeat(max_width(content));
    let lines = split_lines(content)
        .into_iter()
        .map(str::to_string)
        .collect();
    pad_rows(lines, height, align, &blank).join("\n")
}
