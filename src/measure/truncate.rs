//! Width-bounded truncation with a tail marker.

use super::segment::{segments, Segment};
use super::{rune_width, width};
use crate::ansi::RESET;

/// Truncate `s` to at most `max_width` display cells, ending with `tail`.
///
/// - `max_width == 0` yields an empty string.
/// - Strings that already fit are returned unchanged.
/// - Escape sequences before the cut are kept verbatim, so any style they
///   open stays active for the tail; a reset is appended when the result
///   carries escapes.
/// - Runes are never split: a wide rune that would overflow is dropped.
/// - A tail at least as wide as `max_width` replaces `s` entirely and is
///   itself cut to fit.
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if max_width == 0 {
        return String::new();
    }
    if width(s) <= max_width {
        return s.to_string();
    }

    let tail_width = width(tail);
    if tail_width >= max_width {
        return finish(take_width(tail, max_width));
    }

    let mut cut = take_width(s, max_width - tail_width);
    cut.text.push_str(tail);
    cut.has_escape |= tail.contains("\x1b[");
    finish(cut)
}

struct Cut {
    text: String,
    has_escape: bool,
}

/// Copy units of `s` until the next visible rune would exceed `budget`.
///
/// Broken sequences and stray `ESC`s are dropped so they cannot swallow the
/// tail.
fn take_width(s: &str, budget: usize) -> Cut {
    let mut text = String::with_capacity(s.len());
    let mut used = 0;
    let mut has_escape = false;

    for segment in segments(s) {
        match segment {
            Segment::Escape(seq) => {
                if segment.is_complete() {
                    text.push_str(seq);
                    has_escape = true;
                }
            }
            Segment::Rune(c) => {
                let w = rune_width(c);
                if used + w > budget {
                    break;
                }
                used += w;
                text.push(c);
            }
        }
    }

    Cut { text, has_escape }
}

fn finish(mut cut: Cut) -> String {
    if cut.has_escape && !cut.text.ends_with(RESET) {
        cut.text.push_str(RESET);
    }
    cut.text
}
