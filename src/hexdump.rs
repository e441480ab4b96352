//! Hex/ASCII rendering of a match with its surrounding bytes
//!
//! Output looks like `hexdump -C`, lines of 16 bytes aligned on 16 bytes offsets,
//! bytes outside the context window left blank :
//! ```text
//! 00000000  48 65 6c 6c 6f 2c 20 77 6f 72 6c 64 21 20 54 68  |Hello, world! Th|
//! ```

use std::cmp;
use std::io::{self, Write};

use crate::match_result::Match;
use crate::options::Options;

/// Bytes per dumped line
pub const LINE_SIZE: usize = 16;

const HIGHLIGHT_ON: &str = "\x1b[2;31m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

///
/// Renders matches of a buffer, with the context sizes and highlighting of the `Options`
#[derive(Debug, Clone, Copy)]
pub struct HexDump {
    before: usize,
    after: usize,
    color: bool,
}
impl HexDump {
    pub fn new(options: &Options) -> Self {
        Self {
            before: options.before,
            after: options.after,
            color: options.color,
        }
    }
    ///
    /// Write the lines of `buffer` covering the match and its context, then an empty line.
    /// The context window is clipped to the buffer bounds.
    pub fn write_match<W: Write>(&self, out: &mut W, buffer: &[u8], m: &Match) -> io::Result<()> {
        let start = m.offset.saturating_sub(self.before);
        let end = cmp::min(m.end().saturating_add(self.after), buffer.len());
        let mut cur = start - start % LINE_SIZE;

        while cur < end {
            let line = cur..cur + LINE_SIZE;
            write!(out, "{:08x} ", cur)?;
            for i in line.clone() {
                if i < start || i >= end {
                    write!(out, "   ")?;
                } else if self.highlighted(m, i) {
                    write!(out, " {HIGHLIGHT_ON}{:02x}{HIGHLIGHT_OFF}", buffer[i])?;
                } else {
                    write!(out, " {:02x}", buffer[i])?;
                }
            }
            write!(out, "  |")?;
            for i in line {
                if i < start || i >= end {
                    write!(out, " ")?;
                    continue;
                }
                let c = printable(buffer[i]);
                if self.highlighted(m, i) {
                    write!(out, "{HIGHLIGHT_ON}{c}{HIGHLIGHT_OFF}")?;
                } else {
                    write!(out, "{c}")?;
                }
            }
            writeln!(out, "|")?;
            cur += LINE_SIZE;
        }
        writeln!(out)
    }

    fn highlighted(&self, m: &Match, i: usize) -> bool {
        self.color && m.range().contains(&i)
    }
}

///
/// The byte as an ASCII char if printable, '.' otherwise
fn printable(b: u8) -> char {
    if b == b' ' || b.is_ascii_graphic() {
        b as char
    } else {
        '.'
    }
}
