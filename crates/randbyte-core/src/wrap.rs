//! Line-wrapping output decorator.
//!
//! Wraps any [`std::io::Write`] and injects a newline into the stream after
//! a fixed number of bytes, independent of what those bytes are. The column
//! check runs after counting each byte, so a newline follows every
//! (width + 1)-th raw byte: writing exactly `width` bytes emits none.
//!
//! The type implements `Write` only. There is no read half to misuse, which
//! is the whole contract: this is a write-only decorator.

use std::io::{self, Write};
use std::num::NonZeroUsize;

/// Writer decorator inserting periodic newlines.
pub struct LineWriter<W: Write> {
    inner: W,
    width: NonZeroUsize,
    column: usize,
}

impl<W: Write> LineWriter<W> {
    /// Wrap `inner`, emitting a newline whenever the running byte count
    /// since the last newline exceeds `width`.
    pub fn new(inner: W, width: NonZeroUsize) -> Self {
        Self {
            inner,
            width,
            column: 0,
        }
    }

    /// Unwrap, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while !rest.is_empty() {
            // Bytes until the column exceeds the width, post-increment.
            let room = self.width.get() + 1 - self.column;
            let n = room.min(rest.len());
            self.inner.write_all(&rest[..n])?;
            self.column += n;
            rest = &rest[n..];
            if self.column > self.width.get() {
                self.inner.write_all(b"\n")?;
                self.column = 0;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
