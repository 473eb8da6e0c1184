//! Border drawing.

use termgloss::border::{draw, draw_sections};
use termgloss::{Appearance, BorderChars, BorderSpec, Color, NamedColor};

use crate::helpers::{plain, uniform_width};

#[test]
fn two_line_five_wide_block() {
    let out = draw("hello\nworld", &BorderSpec::normal(), Appearance::Dark);
    let rows: Vec<&str> = out.split('\n').collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1], "│hello│");
    assert_eq!(rows[2], "│world│");
    assert_eq!(uniform_width(&out), 5 + 2);
}

#[test]
fn presets_snapshot() {
    let presets = ["normal", "rounded", "double", "thick", "ascii", "block"];
    let rendered: Vec<String> = presets
        .iter()
        .map(|name| {
            let spec = BorderSpec::by_name(name).expect("preset exists");
            draw("ab", &spec, Appearance::Dark)
        })
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    ┌──┐
    │ab│
    └──┘
    ╭──╮
    │ab│
    ╰──╯
    ╔══╗
    ║ab║
    ╚══╝
    ┏━━┓
    ┃ab┃
    ┗━━┛
    +--+
    |ab|
    +--+
    ████
    █ab█
    ████
    ");
}

#[test]
fn custom_chars() {
    let chars = BorderChars {
        top: '~',
        bottom: '~',
        left: '<',
        right: '>',
        top_left: '/',
        top_right: '\\',
        bottom_left: '\\',
        bottom_right: '/',
        divider: None,
    };
    let out = draw("x", &BorderSpec::custom(chars), Appearance::Dark);
    assert_eq!(out, "/~\\\n<x>\n\\~/");
}

#[test]
fn adaptive_border_color_resolves() {
    let spec = BorderSpec::ascii().foreground(Color::adaptive(
        Color::Named(NamedColor::Blue),
        Color::Named(NamedColor::Yellow),
    ));
    let light = draw("x", &spec, Appearance::Light);
    let dark = draw("x", &spec, Appearance::Dark);
    assert!(light.starts_with("\x1b[34m"));
    assert!(dark.starts_with("\x1b[33m"));
    assert_eq!(plain(&light), plain(&dark));
}

#[test]
fn sections_without_divider_just_stack() {
    let chars = BorderChars {
        divider: None,
        ..BorderChars::ASCII
    };
    let out = draw_sections(&["a", "bc"], &BorderSpec::custom(chars), Appearance::Dark);
    assert_eq!(out, "+--+\n|a |\n|bc|\n+--+");
}
