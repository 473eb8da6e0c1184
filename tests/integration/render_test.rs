//! End-to-end rendering through `Style`.

use termgloss::{Appearance, BorderSpec, Color, NamedColor, Position, Style};

use crate::helpers::{plain, uniform_width};

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn bold_red_hi() {
    let style = Style::new()
        .bold(true)
        .foreground(Color::parse("red").unwrap());
    let out = style.render("hi");

    assert_eq!(plain(&out), "hi");
    let bold = out.find("\x1b[1m").expect("missing bold");
    let red = out.find("\x1b[31m").expect("missing red");
    let reset = out.rfind("\x1b[0m").expect("missing reset");
    assert!(bold < reset && red < reset);
}

#[test]
fn true_color_and_indexed_sequences() {
    let style = Style::new()
        .foreground(Color::parse("#ff0080").unwrap())
        .background(Color::parse("236").unwrap());
    assert_eq!(
        style.render("x"),
        "\x1b[38;2;255;0;128m\x1b[48;5;236mx\x1b[0m"
    );
}

#[test]
fn no_attribute_leaks_across_lines() {
    let style = Style::new()
        .italic(true)
        .background(Color::Named(NamedColor::Blue));
    let out = style.render("one\ntwo\nthree");
    for line in out.split('\n') {
        assert!(line.starts_with("\x1b[3m"), "{:?}", line);
        assert!(line.ends_with("\x1b[0m"), "{:?}", line);
    }
}

#[test]
fn pre_styled_input_passes_through() {
    let inner = Style::new().underline(true).render("link");
    let out = Style::new()
        .padding((0, 1))
        .render(&format!("see {}", inner));
    assert_eq!(plain(&out), " see link ");
    assert!(out.contains("\x1b[4mlink\x1b[0m"));
}

// ============================================================================
// Sizing
// ============================================================================

#[test]
fn fixed_width_truncates_every_line() {
    let style = Style::new().width(6);
    let out = style.render("short\na much longer line\n你好世界你好");
    assert_eq!(plain(&out), "short \na m...\n你... ");
    assert_eq!(uniform_width(&out), 6);
}

#[test]
fn style_is_reusable_after_render() {
    let base = Style::new().bold(true);
    let first = base.render("a");
    let boxed = base.clone().border(BorderSpec::ascii());
    assert_eq!(base.render("a"), first);
    assert_ne!(boxed.render("a"), first);
}

#[test]
fn full_frame_keeps_lines_uniform() {
    let style = Style::new()
        .foreground(Color::adaptive(
            Color::Named(NamedColor::Black),
            Color::Named(NamedColor::White),
        ))
        .padding((1, 2))
        .width(16)
        .height(6)
        .align_horizontal(Position::Center)
        .align_vertical(Position::Center)
        .border(BorderSpec::thick().foreground(Color::Indexed(63)))
        .margin(1);

    for appearance in [Appearance::Light, Appearance::Dark] {
        let out = style.render_with("title\n👋 你好", appearance);
        assert_eq!(uniform_width(&out), 16 + 2 + 2);
        assert_eq!(termgloss::line_count(&out), 6 + 2 + 2);
    }
}

#[test]
fn bordered_block_snapshot() {
    let out = Style::new()
        .padding((0, 1))
        .border(BorderSpec::rounded())
        .render("termgloss\nok");
    insta::assert_snapshot!(plain(&out), @r"
    ╭───────────╮
    │ termgloss │
    │ ok        │
    ╰───────────╯
    ");
}
