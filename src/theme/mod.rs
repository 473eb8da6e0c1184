//! Theme configuration.
//!
//! Centralizes the colors an application styles its output with, and hands
//! out ready-made [`Style`]s and pre-rendered strings for them.

use crate::border::BorderSpec;
use crate::color::{Appearance, Color, NamedColor};
use crate::style::Style;

/// Named colors for an application's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Light/dark flag used when rendering through the theme.
    pub appearance: Appearance,
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Border used by [`Theme::panel_style`]
    pub border: BorderSpec,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Light gray text with a green accent; adapts primary text to the background.
    pub fn standard() -> Self {
        Self {
            appearance: Appearance::Dark,
            text_primary: Color::adaptive(
                Color::Named(NamedColor::Black),
                Color::Named(NamedColor::White),
            ),
            text_secondary: Color::Named(NamedColor::BrightBlack),
            accent: Color::Named(NamedColor::Green),
            error: Color::Named(NamedColor::Red),
            success: Color::Named(NamedColor::Green),
            border: BorderSpec::rounded(),
        }
    }

    /// Classic terminal theme - bright white text, yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::Named(NamedColor::BrightWhite),
            accent: Color::Named(NamedColor::Yellow),
            border: BorderSpec::normal(),
            ..Self::standard()
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Named(NamedColor::Cyan),
            accent: Color::Named(NamedColor::BrightCyan),
            border: BorderSpec::double(),
            ..Self::standard()
        }
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::new().foreground(self.text_primary.clone())
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::new().foreground(self.text_secondary.clone())
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::new().foreground(self.accent.clone())
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        self.accent_style().bold(true)
    }

    pub fn error_style(&self) -> Style {
        Style::new().foreground(self.error.clone())
    }

    pub fn success_style(&self) -> Style {
        Style::new().foreground(self.success.clone())
    }

    /// Bordered, padded box with the accent-colored border.
    pub fn panel_style(&self) -> Style {
        Style::new()
            .padding((0, 1))
            .border(self.border.clone().foreground(self.accent.clone()))
    }

    // Pre-rendered text

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.accent_style().render_with(text, self.appearance)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.text_style().render_with(text, self.appearance)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.text_secondary_style()
            .render_with(text, self.appearance)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.error_style().render_with(text, self.appearance)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.success_style().render_with(text, self.appearance)
    }

    /// Draw `text` inside the theme's panel.
    pub fn panel(&self, text: &str) -> String {
        self.panel_style().render_with(text, self.appearance)
    }
}
