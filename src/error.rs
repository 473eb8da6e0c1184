//! Error types.
//!
//! Color parsing is the only fallible operation in the rendering core; theme
//! configuration adds file and TOML failures on top of it.

/// Errors raised while constructing a [`Color`](crate::Color) from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: &'static str },
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        tracing::debug!(input, reason, "rejected color");
        Self::InvalidColor {
            input: input.to_string(),
            reason,
        }
    }
}

/// Errors that can occur while loading a theme configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read theme config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Theme config has a bad color: {0}")]
    Color(#[from] ColorError),

    #[error("Unknown border style '{0}'")]
    UnknownBorder(String),
}
