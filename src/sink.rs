//! Output sinks.
//!
//! The serializer hands its output over in ordered chunks. A [`Sink`] is
//! anything that accepts those chunks and may fail; the failure is returned
//! to the caller of the serialization unchanged.

use crate::Result;
use std::io;

/// Receiver for serialized text.
pub trait Sink {
    /// Appends a chunk of output.
    ///
    /// # Errors
    ///
    /// Returns the sink's own failure; the serializer stops at the first one.
    fn write_str(&mut self, chunk: &str) -> Result<()>;
}

impl Sink for String {
    #[inline]
    fn write_str(&mut self, chunk: &str) -> Result<()> {
        self.push_str(chunk);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write_str(&mut self, chunk: &str) -> Result<()> {
        (**self).write_str(chunk)
    }
}

/// Adapts any `io::Write` into a [`Sink`], encoding chunks as UTF-8.
///
/// # Examples
///
/// ```rust
/// use etwriter::{IoSink, Sink};
///
/// let mut sink = IoSink::new(Vec::new());
/// sink.write_str("<a/>").unwrap();
/// assert_eq!(sink.into_inner(), b"<a/>");
/// ```
#[derive(Debug)]
pub struct IoSink<W> {
    writer: W,
    written: usize,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        IoSink { writer, written: 0 }
    }

    /// Number of bytes handed to the writer so far.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Flushes the writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's flush failure.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_str(&mut self, chunk: &str) -> Result<()> {
        self.writer.write_all(chunk.as_bytes())?;
        self.written += chunk.len();
        Ok(())
    }
}

/// Adapts any `fmt::Write` (for example a `fmt::Formatter`) into a [`Sink`].
#[derive(Debug)]
pub struct FmtSink<W>(pub W);

impl<W: std::fmt::Write> Sink for FmtSink<W> {
    #[inline]
    fn write_str(&mut self, chunk: &str) -> Result<()> {
        self.0.write_str(chunk)?;
        Ok(())
    }
}
