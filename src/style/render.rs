//! Rendering a [`Style`] onto text.
//!
//! Each input line is styled on its own: it gets its own opening escapes and
//! its own reset, so nothing leaks across a line boundary. The block is then
//! grown outward in a fixed order: padding, height, border, margin.

use super::{Sides, Style};
use crate::ansi::RESET;
use crate::border;
use crate::color::Appearance;
use crate::layout::{pad_line, pad_rows, Position};
use crate::measure::{line_count, max_width, split_lines, truncate, width};

/// Tail used when a line is cut to the style's width.
pub const TRUNCATION_TAIL: &str = "...";

impl Style {
    /// Render `input` for the default (dark) appearance.
    pub fn render(&self, input: &str) -> String {
        self.render_with(input, Appearance::default())
    }

    /// Render `input`, resolving adaptive colors against `appearance`.
    pub fn render_with(&self, input: &str, appearance: Appearance) -> String {
        let open = self.open_sequence(appearance);
        let mut fill_open = String::new();
        self.push_background_sequence(appearance, &mut fill_open);

        let lines = split_lines(input);
        let padding = self.padding;
        let content_width = match self.width {
            Some(w) => {
                if w < padding.horizontal() {
                    tracing::trace!(
                        width = w,
                        padding = padding.horizontal(),
                        "width smaller than padding, content clamped to 0"
                    );
                }
                w.saturating_sub(padding.horizontal())
            }
            None => lines.iter().map(|line| width(line)).max().unwrap_or(0),
        };
        let block_width = content_width + padding.horizontal();

        let left_pad = fill(padding.left, &fill_open);
        let right_pad = fill(padding.right, &fill_open);
        let blank_row = fill(block_width, &fill_open);

        let mut rows: Vec<String> = Vec::with_capacity(lines.len() + padding.vertical());
        rows.extend(std::iter::repeat(blank_row.clone()).take(padding.top));
        for line in lines {
            let line = match self.width {
                Some(_) => truncate(line, content_width, TRUNCATION_TAIL),
                None => line.to_string(),
            };
            let aligned = pad_line(&line, content_width, self.horizontal_align);

            let mut row = String::with_capacity(aligned.len() + open.len() + 8);
            row.push_str(&left_pad);
            wrap(&mut row, &open, &aligned);
            row.push_str(&right_pad);
            rows.push(row);
        }
        rows.extend(std::iter::repeat(blank_row.clone()).take(padding.bottom));

        if let Some(height) = self.height {
            rows = pad_rows(rows, height, self.vertical_align, &blank_row);
        }

        let mut block = rows.join("\n");
        if let Some(spec) = &self.border {
            block = border::draw(&block, spec, appearance);
        }

        apply_margin(&block, self)
    }
}

/// Append `text` wrapped in `open` .. reset. Empty text stays bare.
fn wrap(out: &mut String, open: &str, text: &str) {
    if open.is_empty() || text.is_empty() {
        out.push_str(text);
        return;
    }
    out.push_str(open);
    out.push_str(text);
    out.push_str(RESET);
}

/// `n` spaces, colored with `open` when given.
fn fill(n: usize, open: &str) -> String {
    let mut out = String::new();
    wrap(&mut out, open, &" ".repeat(n));
    out
}

fn apply_margin(block: &str, style: &Style) -> String {
    let margin = style.margin;
    if margin == Sides::default() {
        return block.to_string();
    }

    let inner_width = max_width(block);
    let left = " ".repeat(margin.left);
    let right = " ".repeat(margin.right);
    let blank = " ".repeat(inner_width + margin.horizontal());

    let mut rows = Vec::with_capacity(line_count(block) + margin.vertical());
    rows.extend(std::iter::repeat(blank.clone()).take(margin.top));
    for line in split_lines(block) {
        let padded = pad_line(line, inner_width, Position::Start);
        rows.push(format!("{}{}{}", left, padded, right));
    }
    rows.extend(std::iter::repeat(blank).take(margin.bottom));
    rows.join("\n")
}
