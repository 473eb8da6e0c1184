//! Loading themes from TOML files.

use termgloss::{Appearance, Color, ConfigError, NamedColor, ThemeConfig};

use crate::helpers::{plain, temp_theme};

#[test]
fn load_from_file_builds_theme() {
    let (_dir, path) = temp_theme(
        r#"
appearance = "light"

[colors]
accent = { light = "blue", dark = "bright_cyan" }

[border]
style = "ascii"
"#,
    );

    let theme = ThemeConfig::load_from(&path)
        .expect("Should load theme config")
        .to_theme()
        .expect("Should build theme");

    assert_eq!(theme.appearance, Appearance::Light);
    assert!(theme.accent_text("hi").starts_with("\x1b[34m"));
    assert_eq!(plain(&theme.panel("ok")), "+----+\n| ok |\n+----+");
}

#[test]
fn load_from_missing_file_is_read_error() {
    let err = ThemeConfig::load_from("/nonexistent/termgloss/theme.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Read(_)));
}

#[test]
fn load_from_invalid_color_fails_at_theme_build() {
    let (_dir, path) = temp_theme("[colors]\nerror = \"crimson\"\n");
    let config = ThemeConfig::load_from(&path).expect("TOML itself is valid");
    let err = config.to_theme().unwrap_err();
    assert!(err.to_string().contains("crimson"), "{}", err);
}

#[test]
fn saved_config_loads_back() {
    let mut config = ThemeConfig::default();
    config.appearance = Some(Appearance::Dark);
    config.colors.success = Some(termgloss::config::ColorValue::Plain("#00ff00".into()));

    let text = config.to_toml_string().expect("Should serialize");
    let (_dir, path) = temp_theme(&text);
    let loaded = ThemeConfig::load_from(&path).expect("Should load");

    assert_eq!(loaded, config);
    assert_eq!(loaded.to_theme().unwrap().success, Color::Rgb(0, 255, 0));
    assert_ne!(
        loaded.to_theme().unwrap().success,
        Color::Named(NamedColor::Green)
    );
}
