//! termgloss - terminal text styling and layout.
//!
//! Turns plain strings into ANSI-escaped, width-aware terminal output:
//!
//! - [`color`]: color specifications (`#RRGGBB`, names, palette indices, light/dark pairs)
//! - [`measure`]: escape-aware display width, line splitting and truncation
//! - [`ansi`]: SGR escape sequences for colors and attributes
//! - [`style`]: the immutable [`Style`] builder and its renderer
//! - [`border`]: box borders around rendered blocks
//! - [`layout`]: horizontal/vertical joins and placement of blocks
//! - [`theme`] and [`config`]: application themes, loadable from TOML
//!
//! Everything is synchronous and pure; the only external input is the
//! [`Appearance`] flag used to resolve adaptive colors, passed at render time.

pub mod ansi;
pub mod border;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod measure;
pub mod style;
pub mod theme;

pub use ansi::Attribute;
pub use border::{BorderChars, BorderSpec};
pub use color::{Appearance, Color, NamedColor};
pub use config::ThemeConfig;
pub use error::{ColorError, ConfigError};
pub use layout::{
    join_horizontal, join_vertical, place, place_horizontal, place_vertical, Position,
};
pub use measure::{
    line_count, max_width, split_lines, strip_escapes, truncate, width, width_per_line,
};
pub use style::{Sides, Style};
pub use theme::Theme;
