//! Error types for XML serialization.
//!
//! Serialization itself never fails: any tree and any [`WriterOptions`]
//! produce output. The only failures come from the sink that receives the
//! text, and they are handed back to the caller untouched.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: the `io::Write` behind an [`IoSink`] failed
//! - **Formatting Errors**: a `fmt::Write` based sink failed
//! - **Custom Errors**: raised by caller-defined [`Sink`] implementations
//!
//! ## Examples
//!
//! ```rust
//! use etwriter::{Element, Error};
//! use std::io;
//!
//! struct Broken;
//!
//! impl io::Write for Broken {
//!     fn write(&mut self, _: &[u8]) -> io::Result<usize> {
//!         Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
//!     }
//!     fn flush(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let err = etwriter::to_writer(Broken, &Element::new("root")).unwrap_err();
//! assert!(matches!(err, Error::Io(_)));
//! ```
//!
//! [`WriterOptions`]: crate::WriterOptions
//! [`IoSink`]: crate::IoSink
//! [`Sink`]: crate::Sink

use std::{fmt, io};
use thiserror::Error;

/// Represents every way a serialization call can fail.
///
/// All variants originate in the sink; none of them describe a problem with
/// the tree being written.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying writer failed. The original error is kept as the source.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A `fmt::Write` sink refused the text.
    #[error("formatting error: {0}")]
    Fmt(#[from] fmt::Error),

    /// Custom error raised by a caller-provided sink.
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use etwriter::Error;
    ///
    /// let err = Error::custom("socket went away");
    /// assert!(err.to_string().contains("socket went away"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the I/O error kind if this error came from an `io::Write`.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
