//! Width, line and truncation properties.

use termgloss::{line_count, max_width, strip_escapes, truncate, width, width_per_line};

const SAMPLES: &[&str] = &[
    "",
    "hello",
    "你好",
    "👋 wave",
    "\x1b[1;31mbold red\x1b[0m",
    "tab\there",
    "cafe\u{301}",
    "a\nbb\n",
    "\x1b[38;2;10;20;30m你好世界\x1b[0m and more",
    "\x1b[\x1b[31mx",
    "\x1b\x1b[m[1mbracket",
    "open \x1b[31",
];

// ============================================================================
// Width
// ============================================================================

#[test]
fn width_follows_east_asian_rules() {
    assert_eq!(width(""), 0);
    assert_eq!(width("hello"), 5);
    assert_eq!(width("你好"), 4);
    assert_eq!(width("👋"), 2);
}

#[test]
fn width_of_escaped_text_equals_width_of_stripped_text() {
    for s in SAMPLES {
        for line in s.split('\n') {
            assert_eq!(width(line), width(&strip_escapes(line)), "{:?}", line);
        }
    }
}

// ============================================================================
// Strip
// ============================================================================

#[test]
fn strip_is_idempotent() {
    for s in SAMPLES {
        let once = strip_escapes(s).into_owned();
        assert_eq!(strip_escapes(&once), once);
    }
}

#[test]
fn strip_of_broken_sequence_keeps_visible_text() {
    let s = "\x1b[\x1b[31mx";
    assert_eq!(strip_escapes(s), "x");
    assert_eq!(width(s), width(&strip_escapes(s)));
}

#[test]
fn strip_of_long_broken_run_is_single_pass() {
    let s = format!("{}mxxx", "\x1b[".repeat(10_000));
    assert_eq!(strip_escapes(&s), "xxx");
    assert_eq!(width(&s), 3);
}

#[test]
fn strip_is_identity_without_escapes() {
    for s in ["plain", "你好", "a\tb\nc", ""] {
        assert_eq!(strip_escapes(s), s);
    }
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn line_count_is_newlines_plus_one() {
    assert_eq!(line_count(""), 1);
    assert_eq!(line_count("a\nb\n"), 3);
    for s in SAMPLES {
        assert_eq!(line_count(s), s.matches('\n').count() + 1);
    }
}

#[test]
fn max_width_is_max_of_line_widths() {
    assert_eq!(max_width(""), 0);
    for s in SAMPLES {
        let widest = width_per_line(s).into_iter().max().unwrap_or(0);
        assert_eq!(max_width(s), widest, "{:?}", s);
    }
}

// ============================================================================
// Truncate
// ============================================================================

#[test]
fn truncate_respects_width_bound() {
    for s in SAMPLES {
        for line in s.split('\n') {
            for n in 1..15 {
                let out = truncate(line, n, "...");
                assert!(width(&out) <= n, "{:?} at {} -> {:?}", line, n, out);
            }
        }
    }
}

#[test]
fn truncate_to_zero_is_empty() {
    for s in SAMPLES {
        assert_eq!(truncate(s, 0, "..."), "");
    }
}

#[test]
fn truncate_is_idempotent() {
    for s in SAMPLES {
        for line in s.split('\n') {
            for n in 0..12 {
                let once = truncate(line, n, "…");
                assert_eq!(truncate(&once, n, "…"), once, "{:?} at {}", line, n);
            }
        }
    }
}

#[test]
fn truncate_tail_fixture() {
    assert_eq!(truncate("hello", 2, "..."), "..");
}

#[test]
fn truncate_keeps_style_active_for_tail() {
    let out = truncate("\x1b[31mhello world", 7, "...");
    assert_eq!(out, "\x1b[31mhell...\x1b[0m");
}
