//! Escape-aware scanning.
//!
//! Splits a string into two kinds of units: escape units and single runes.
//! Every width, stripping and truncation routine walks this stream instead of
//! raw bytes, so they all agree on where an escape ends.
//!
//! An escape unit starts at every `ESC`:
//!
//! - `ESC [` parameter/intermediate bytes, then a final byte in `0x40..=0x7E`
//!   is a complete CSI sequence.
//! - A CSI interrupted by a byte outside `0x20..=0x7E` ends just before that
//!   byte; one left open at the end of input runs to the end.
//! - Any other `ESC` is a unit on its own.
//!
//! Removing every escape unit therefore leaves no `ESC` behind, and the text
//! that remains never re-forms a sequence.

const ESC: u8 = 0x1b;

/// One scanning unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// An escape unit, zero display width.
    Escape(&'a str),
    /// A displayable (or control) rune.
    Rune(char),
}

impl Segment<'_> {
    /// Whether this is a rune or a complete CSI sequence, as opposed to an
    /// interrupted sequence or a stray `ESC`.
    pub fn is_complete(&self) -> bool {
        match self {
            Segment::Rune(_) => true,
            Segment::Escape(seq) => {
                let bytes = seq.as_bytes();
                bytes.len() >= 3
                    && bytes[1] == b'['
                    && matches!(bytes[bytes.len() - 1], 0x40..=0x7e)
            }
        }
    }
}

/// Iterator over the [`Segment`]s of a string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    s: &'a str,
    pos: usize,
}

/// Scan `s` into escape and rune units.
pub fn segments(s: &str) -> Segments<'_> {
    Segments { s, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let s: &'a str = self.s;
        let rest = &s[self.pos..];
        let c = rest.chars().next()?;

        if c == '\x1b' {
            let len = escape_len(rest.as_bytes());
            self.pos += len;
            return Some(Segment::Escape(&rest[..len]));
        }

        self.pos += c.len_utf8();
        Some(Segment::Rune(c))
    }
}

/// Length of the escape unit at the start of `bytes`, which begins with `ESC`.
///
/// Every byte counted is ASCII, so the length always ends on a char boundary.
fn escape_len(bytes: &[u8]) -> usize {
    debug_assert_eq!(bytes.first(), Some(&ESC));
    if bytes.get(1) != Some(&b'[') {
        return 1;
    }
    for (i, &b) in bytes.iter().enumerate().skip(2) {
        match b {
            0x40..=0x7e => return i + 1,
            0x20..=0x3f => continue,
            _ => return i,
        }
    }
    bytes.len()
}
