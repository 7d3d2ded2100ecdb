//! Line framing for the command byte stream.
//!
//! Bytes arrive one at a time from the transport's receive context and are
//! accumulated into a fixed buffer of `C` bytes:
//! - `\r` is ignored (no store, no cursor advance)
//! - `\n` completes the line; the terminator is not part of it
//! - any other byte is stored at the cursor
//!
//! A data byte arriving while the buffer already holds `C` bytes is an
//! overflow: the partial line and that byte are discarded and framing
//! restarts with the next byte.
//!
//! Only data bytes can overflow. A `\n` arriving with exactly `C` bytes
//! buffered completes a full-width line; it is not treated as overflow.

/// Line terminator
pub const LINE_FEED: u8 = b'\n';

/// Ignored in the stream
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Result of feeding one byte to the framer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEvent<'a> {
    /// Byte stored or ignored, line still in progress
    Pending,
    /// Terminator seen; the accumulated line, excluding the terminator
    Line(&'a [u8]),
    /// Line exceeded capacity and was discarded
    Overflow,
}

/// Accumulates stream bytes into bounded lines
#[derive(Debug, Clone)]
pub struct LineFramer<const C: usize> {
    buffer: [u8; C],
    cursor: usize,
}

impl<const C: usize> Default for LineFramer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> LineFramer<C> {
    /// Create a framer with an empty line buffer
    pub const fn new() -> Self {
        Self {
            buffer: [0; C],
            cursor: 0,
        }
    }

    /// Discard any partial line
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of bytes accumulated for the line in progress
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Maximum line length in bytes
    pub const fn capacity(&self) -> usize {
        C
    }

    /// Feed a single byte to the framer
    ///
    /// Returns [`LineEvent::Line`] when a terminator completes a line. The
    /// cursor is already reset at that point, so the caller owns the
    /// decision about the line (queue it or drop it) and the framer never
    /// retries it.
    pub fn feed(&mut self, byte: u8) -> LineEvent<'_> {
        match byte {
            CARRIAGE_RETURN => LineEvent::Pending,
            LINE_FEED => {
                let len = self.cursor;
                self.cursor = 0;
                LineEvent::Line(&self.buffer[..len])
            }
            _ if self.cursor >= C => {
                self.cursor = 0;
                LineEvent::Overflow
            }
            _ => {
                self.buffer[self.cursor] = byte;
                self.cursor += 1;
                LineEvent::Pending
            }
        }
    }
}
