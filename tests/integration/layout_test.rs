//! Joining and placing rendered blocks.

use termgloss::{join_horizontal, join_vertical, line_count, place, BorderSpec, Position, Style};

use crate::helpers::{plain, uniform_width};

// ============================================================================
// Horizontal
// ============================================================================

#[test]
fn join_horizontal_pads_short_block_at_bottom() {
    let a = "a1\na2";
    let b = "b1";
    let out = join_horizontal(Position::TOP, "", &[a, b]);
    assert_eq!(line_count(&out), 2);
    assert_eq!(out, "a1b1\na2  ");
}

#[test]
fn join_horizontal_of_styled_boxes() {
    let boxed = Style::new().border(BorderSpec::normal());
    let left = boxed.render("left\nside");
    let right = Style::new().bold(true).render("right");
    let out = join_horizontal(Position::Center, " ", &[&left, &right]);

    assert_eq!(line_count(&out), 4);
    assert_eq!(uniform_width(&out), 6 + 1 + 5);
    insta::assert_snapshot!(plain(&out).replace(' ', "·"), @r"
    ┌────┐······
    │left│·right
    │side│······
    └────┘······
    ");
}

// ============================================================================
// Vertical
// ============================================================================

#[test]
fn join_vertical_center_splits_evenly() {
    let out = join_vertical(Position::Center, &["aaaaa", "bbb"]);
    let rows: Vec<&str> = out.split('\n').collect();
    assert_eq!(rows[1], " bbb ");
}

#[test]
fn join_vertical_keeps_block_order() {
    let out = join_vertical(Position::LEFT, &["1\n2", "3"]);
    assert_eq!(out, "1\n2\n3");
}

#[test]
fn join_vertical_of_styled_blocks_is_uniform() {
    let header = Style::new().bold(true).padding((0, 2)).render("Header");
    let body = Style::new().italic(true).render("body\nlines here");
    let out = join_vertical(Position::RIGHT, &[&header, &body]);
    assert_eq!(uniform_width(&out), 10);
    assert_eq!(plain(&out), "  Header  \nbody      \nlines here");
}

// ============================================================================
// Place
// ============================================================================

#[test]
fn place_in_canvas() {
    let out = place(6, 3, Position::End, Position::BOTTOM, "ab");
    assert_eq!(out, "      \n      \n    ab");
}

#[test]
fn place_styled_block() {
    let block = Style::new().border(BorderSpec::ascii()).render("x");
    let out = place(7, 5, Position::Center, Position::Center, &block);
    assert_eq!(uniform_width(&out), 7);
    assert_eq!(plain(&out), "       \n  +-+  \n  |x|  \n  +-+  \n       ");
}
