//! Position- and column-tracking output sink.
//!
//! PDF lines outside stream bodies should not exceed 255 bytes. The sink keeps
//! a running column count for the current line. Every separator is told the
//! length of the unbreakable run that follows it (the next token plus any
//! delimiters glued to it) and is written as a line feed instead of a space
//! when that run would push the line past the limit. Breaks therefore never
//! change the number of bytes written, which keeps
//! [`crate::object::Object::byte_len`] exact.

use crate::error::Result;
use std::io::{self, Write};

/// Maximum line length outside stream bodies.
pub const MAX_LINE_LENGTH: usize = 255;

/// Output sink that tracks the byte position and current line column.
pub struct PdfOutput<W: Write> {
    inner: W,
    position: u64,
    column: usize,
    max_line_length: usize,
}

impl<W: Write> PdfOutput<W> {
    /// Wrap a sink, starting at position 0.
    pub fn new(inner: W) -> Self {
        Self::with_max_line_length(inner, MAX_LINE_LENGTH)
    }

    /// Wrap a sink with a custom line-length limit.
    pub fn with_max_line_length(inner: W, max_line_length: usize) -> Self {
        Self {
            inner,
            position: 0,
            column: 0,
            max_line_length,
        }
    }

    /// Bytes written so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bytes on the current line so far.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Write one whitespace byte ahead of an unbreakable run of `next_run` bytes.
    ///
    /// The byte is a space, or a line feed if the run would overflow the
    /// current line. Returns the number of bytes written (always 1).
    pub fn separator(&mut self, next_run: usize) -> Result<usize> {
        let overflow = self.column > 0 && self.column + 1 + next_run > self.max_line_length;
        self.emit(if overflow { b"\n" } else { b" " })?;
        Ok(1)
    }

    /// Write one indivisible token. Returns the number of bytes written.
    pub fn token(&mut self, bytes: &[u8]) -> Result<usize> {
        self.emit(bytes)?;
        Ok(bytes.len())
    }

    /// End the current line.
    pub fn newline(&mut self) -> Result<usize> {
        self.emit(b"\n")?;
        Ok(1)
    }

    /// Write stream payload bytes. Payload is not counted against the line.
    pub fn payload(&mut self, bytes: &[u8]) -> Result<usize> {
        self.inner.write_all(bytes)?;
        self.position += bytes.len() as u64;
        Ok(bytes.len())
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)?;
        self.position += bytes.len() as u64;
        match bytes.iter().rposition(|&b| b == b'\n') {
            Some(i) => self.column = bytes.len() - i - 1,
            None => self.column += bytes.len(),
        }
        Ok(())
    }
}

/// Raw writes (xref entries, trailer keywords) still move position and column.
impl<W: Write> Write for PdfOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.emit(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
