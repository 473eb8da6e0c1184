//! Shared helpers for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Escape-stripped copy of `s`, for comparing layouts.
pub fn plain(s: &str) -> String {
    termgloss::strip_escapes(s).into_owned()
}

/// Assert every line of `block` has the same visible width, and return it.
pub fn uniform_width(block: &str) -> usize {
    let widths = termgloss::width_per_line(block);
    assert!(
        widths.iter().all(|w| *w == widths[0]),
        "ragged block {:?}: {:?}",
        widths,
        block
    );
    widths[0]
}

/// Write `content` to `theme.toml` in a fresh temp directory.
pub fn temp_theme(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("theme.toml");
    std::fs::write(&path, content).expect("Failed to write theme file");
    (dir, path)
}
