//! A single terminal cell and its ANSI truecolor serialization.

use crate::color::{self, Color};

/// One character position: a symbol plus owned foreground and background
/// colors. The serialized form alone determines how the cell renders;
/// nothing outside the cell affects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub foreground: Color,
    pub background: Color,
}

impl Cell {
    pub fn new(symbol: char, foreground: Color, background: Color) -> Self {
        Self {
            symbol,
            foreground,
            background,
        }
    }

    /// Colors only; the symbol defaults to a space.
    pub fn from_colors(foreground: Color, background: Color) -> Self {
        Self::new(' ', foreground, background)
    }

    /// Inverts both owned colors in place.
    pub fn invert(&mut self) {
        self.foreground.invert();
        self.background.invert();
    }

    /// Appends this cell's escape sequence to `buf`:
    /// foreground set, background set, symbol, attribute reset.
    ///
    /// Channel values are the rounded integer views, so the emitted triples
    /// are always legal 0-255.
    pub fn write_ansi(&self, buf: &mut Vec<u8>) {
        write_fg(
            buf,
            self.foreground.red(),
            self.foreground.green(),
            self.foreground.blue(),
        );
        write_bg(
            buf,
            self.background.red(),
            self.background.green(),
            self.background.blue(),
        );
        let mut utf8 = [0u8; 4];
        buf.extend_from_slice(self.symbol.encode_utf8(&mut utf8).as_bytes());
        buf.extend_from_slice(b"\x1b[0m");
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', color::BLACK, color::WHITE)
    }
}

fn write_fg(buf: &mut Vec<u8>, r: u8, g: u8, b: u8) {
    buf.extend_from_slice(b"\x1b[38;2;");
    write_u8(buf, r);
    buf.push(b';');
    write_u8(buf, g);
    buf.push(b';');
    write_u8(buf, b);
    buf.push(b'm');
}

fn write_bg(buf: &mut Vec<u8>, r: u8, g: u8, b: u8) {
    buf.extend_from_slice(b"\x1b[48;2;");
    write_u8(buf, r);
    buf.push(b';');
    write_u8(buf, g);
    buf.push(b';');
    write_u8(buf, b);
    buf.push(b'm');
}

/// Fast integer-to-ASCII for u8 values (0-255), no allocation.
fn write_u8(buf: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        buf.push(b'0' + v / 100);
        buf.push(b'0' + (v / 10) % 10);
        buf.push(b'0' + v % 10);
    } else if v >= 10 {
        buf.push(b'0' + v / 10);
        buf.push(b'0' + v % 10);
    } else {
        buf.push(b'0' + v);
    }
}
