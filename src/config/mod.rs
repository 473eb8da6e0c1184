//! Theme configuration file.
//!
//! Loads a [`Theme`] from TOML. Every field is optional; anything missing
//! falls back to [`Theme::default`].
//!
//! ```toml
//! appearance = "light"
//!
//! [colors]
//! primary = "#d0d0d0"
//! accent = { light = "blue", dark = "cyan" }
//!
//! [border]
//! style = "rounded"
//! foreground = "63"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::border::BorderSpec;
use crate::color::{Appearance, Color};
use crate::error::ConfigError;
use crate::theme::Theme;

/// Directory name under the platform config dir.
const APP_DIR: &str = "termgloss";

/// File name of the theme config.
const THEME_FILE: &str = "theme.toml";

/// A color as written in the config: a plain spec or a light/dark pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Plain(String),
    Adaptive { light: String, dark: String },
}

impl ColorValue {
    /// Parse into a [`Color`].
    pub fn to_color(&self) -> Result<Color, ConfigError> {
        match self {
            Self::Plain(spec) => Ok(Color::parse(spec)?),
            Self::Adaptive { light, dark } => {
                Ok(Color::adaptive(Color::parse(light)?, Color::parse(dark)?))
            }
        }
    }
}

/// `[colors]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub primary: Option<ColorValue>,
    pub secondary: Option<ColorValue>,
    pub accent: Option<ColorValue>,
    pub error: Option<ColorValue>,
    pub success: Option<ColorValue>,
}

/// `[border]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    /// Preset name: normal, rounded, double, thick, hidden, block, ascii.
    pub style: Option<String>,
    pub foreground: Option<ColorValue>,
    pub background: Option<ColorValue>,
}

/// Top-level theme config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub appearance: Option<Appearance>,
    pub colors: ColorsConfig,
    pub border: BorderConfig,
}

impl ThemeConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a config file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded theme config");
        Ok(config)
    }

    /// Default location: `<config dir>/termgloss/theme.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(THEME_FILE))
    }

    /// Load from [`ThemeConfig::config_path`], or the default config if the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no config directory, using default theme");
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no theme config, using default theme");
            return Ok(Self::default());
        }
        Self::load_from(&path)
            .with_context(|| format!("Failed to load theme config from {}", path.display()))
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize theme config")
    }

    /// Build the theme, filling gaps from [`Theme::default`].
    pub fn to_theme(&self) -> Result<Theme, ConfigError> {
        let mut theme = Theme::default();

        if let Some(appearance) = self.appearance {
            theme.appearance = appearance;
        }

        let colors = &self.colors;
        let slots = [
            (&colors.primary, &mut theme.text_primary),
            (&colors.secondary, &mut theme.text_secondary),
            (&colors.accent, &mut theme.accent),
            (&colors.error, &mut theme.error),
            (&colors.success, &mut theme.success),
        ];
        for (value, slot) in slots {
            if let Some(value) = value {
                *slot = value.to_color()?;
            }
        }

        if let Some(name) = &self.border.style {
            theme.border = BorderSpec::by_name(name)
                .ok_or_else(|| ConfigError::UnknownBorder(name.clone()))?;
        }
        if let Some(fg) = &self.border.foreground {
            theme.border.foreground = Some(fg.to_color()?);
        }
        if let Some(bg) = &self.border.background {
            theme.border.background = Some(bg.to_color()?);
        }

        Ok(theme)
    }
}
