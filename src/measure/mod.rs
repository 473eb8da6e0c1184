//! Display-width measurement.
//!
//! Width is what every sizing and alignment decision reasons about: escape
//! sequences cost nothing, control characters (tab included) cost nothing,
//! zero-width and combining marks cost nothing, East Asian wide runes and
//! most emoji cost two cells, everything else costs one.

mod segment;
mod truncate;

use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

pub use segment::{segments, Segment, Segments};
pub use truncate::truncate;

/// Display width of a single rune.
#[inline]
pub fn rune_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Remove every escape unit, leaving all other runes intact.
///
/// Single pass over [`segments`]: the result contains no `ESC`, so stripping
/// again is a no-op, and its [`width`] equals the width of `s`. Borrows when
/// there is nothing to strip.
pub fn strip_escapes(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    for segment in segments(s) {
        if let Segment::Rune(c) = segment {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Display width of `s`, ignoring escape sequences.
pub fn width(s: &str) -> usize {
    segments(s)
        .map(|segment| match segment {
            Segment::Escape(_) => 0,
            Segment::Rune(c) => rune_width(c),
        })
        .sum()
}

/// Split on `\n`. N newlines always give N + 1 lines, empty ones included.
pub fn split_lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

/// [`width`] of every line.
pub fn width_per_line(s: &str) -> Vec<usize> {
    s.split('\n').map(width).collect()
}

/// Width of the widest line; 0 for an empty string.
pub fn max_width(s: &str) -> usize {
    s.split('\n').map(width).max().unwrap_or(0)
}

/// Number of lines, i.e. the number of `\n` plus one.
pub fn line_count(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count() + 1
}

/// `(max_width, line_count)` of a block.
pub fn size(s: &str) -> (usize, usize) {
    (max_width(s), line_count(s))
}
