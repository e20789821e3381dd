//! Newline-delimited line decoding for the host link.
//!
//! Decoding rules:
//! - Carriage returns are dropped, never stored.
//! - A line feed completes the current accumulation; empty accumulations
//!   are dropped so `\r\n` endings and stray blank lines cost nothing.
//! - Any other byte is appended while there is room. When the accumulator
//!   is full the whole partial line is discarded (the overflowing byte
//!   with it) and decoding resynchronizes at the next line feed.

use heapless::Vec;

/// Longest line the decoder will emit, in bytes.
///
/// Oversized accumulations are discarded wholesale rather than truncated,
/// so a line is either delivered exactly as sent or not at all.
pub const MAX_LINE_LEN: usize = 63;

/// A completed input line. Never empty, never contains `\r` or `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line {
    bytes: Vec<u8, MAX_LINE_LEN>,
}

impl Line {
    /// Raw bytes of the line, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The line as UTF-8 text, or `None` if it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }
}

/// Accumulates bytes from the link into completed [`Line`]s.
#[derive(Debug, Clone)]
pub struct LineReader {
    buf: Vec<u8, MAX_LINE_LEN>,
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader {
    /// Create a new line reader with an empty accumulator.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Drop any partial accumulation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Feed a single byte from the link.
    ///
    /// Returns `Some(line)` exactly when `byte` is a line feed that
    /// completes a non-empty line.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        match byte {
            b'\r' => None,
            b'\n' => {
                if self.buf.is_empty() {
                    None
                } else {
                    let bytes = core::mem::take(&mut self.buf);
                    Some(Line { bytes })
                }
            }
            other => {
                if self.buf.push(other).is_err() {
                    // Full: discard the partial line and resync at the
                    // next line feed.
                    self.buf.clear();
                }
                None
            }
        }
    }
}
