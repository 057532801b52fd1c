//! # etwriter
//!
//! A deterministic pretty printer for XML element trees.
//!
//! ## What does it do?
//!
//! `etwriter` writes an in-memory element tree as XML text following strict,
//! configurable formatting rules. The same tree and options always produce
//! byte-identical output, which keeps generated files stable under version
//! control and easy to diff.
//!
//! ## Key Features
//!
//! - **Attribute Ordering**: Attributes follow a configured rank list, then
//!   alphabetical order
//! - **Selective CDATA**: Text of chosen tags is written as CDATA instead of
//!   escaped
//! - **Embedded Comments**: Comments before and after any element, at that
//!   element's indent
//! - **Indentation Control**: Separate indents for the first level and
//!   deeper levels, optional re-indenting of multi-line text
//! - **Namespace Localisation**: `{uri}local` names rewritten to
//!   `prefix:local` with declarations on the root or at first use
//! - **Streaming Output**: Writes chunk by chunk to any [`Sink`] or
//!   `io::Write`
//!
//! ## Quick Start
//!
//! ```rust
//! use etwriter::{attribute_order, to_string_with_options, Element, WriterOptions};
//!
//! let root = Element::new("root")
//!     .with_attribute("id", "1")
//!     .with_child(Element::new("leaf").with_text("x<y"));
//!
//! let options = WriterOptions::new()
//!     .with_attribute_order(attribute_order(["id"]))
//!     .with_indent(" ");
//!
//! let xml = to_string_with_options(&root, &options).unwrap();
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root id=\"1\">\n <leaf>x&lt;y</leaf>\n</root>\n"
//! );
//! ```
//!
//! ### Building Trees with the element! Macro
//!
//! ```rust
//! use etwriter::{element, to_string};
//!
//! let tree = element!("fontinfo", { "version" => "3" }, [
//!     element!("key"),
//!     element!("string", { "lang" => "en" }),
//! ]);
//!
//! let xml = to_string(&tree).unwrap();
//! assert!(xml.contains("  <string lang=\"en\"/>\n"));
//! ```
//!
//! ## Errors
//!
//! Any tree is accepted; nothing is validated. Tag names are written as
//! given and text is only escaped for `&`, `<`, `>` (and `"` in attributes),
//! so a malformed tree gives malformed XML rather than an error. The only
//! errors are failures of the output sink, returned unchanged.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug` for each document and
//! each generated namespace prefix, `trace` for each element, `warn` for
//! ignored metadata. Install any logger to see them.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - A small document with comments and a doctype
//! - **`custom_options.rs`** - Attribute ranks, CDATA tags and indents
//! - **`namespaces.rs`** - Hoisted and local namespace declarations
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod escape;
pub mod layout;
pub mod macros;
pub mod map;
pub mod node;
pub mod options;
pub mod order;
pub mod ser;
pub mod sink;

pub use error::{Error, Result};
pub use escape::{escape_attribute, escape_text, unescape};
pub use map::AttributeMap;
pub use node::Element;
pub use options::{NamespaceMode, WriterOptions};
pub use order::attribute_order;
pub use ser::Serializer;
pub use sink::{FmtSink, IoSink, Sink};

use log::debug;
use std::io;

/// Serialize an element tree to an XML string with default options.
///
/// # Examples
///
/// ```rust
/// use etwriter::{to_string, Element};
///
/// let xml = to_string(&Element::new("empty")).unwrap();
/// assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<empty/>\n");
/// ```
///
/// # Errors
///
/// Never fails in practice; the `String` sink cannot fail.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(root: &Element) -> Result<String> {
    to_string_with_options(root, &WriterOptions::default())
}

/// Serialize an element tree to an XML string with custom options.
///
/// # Examples
///
/// ```rust
/// use etwriter::{to_string_with_options, Element, WriterOptions};
///
/// let root = Element::new("a").with_child(Element::new("b"));
/// let options = WriterOptions::new().with_indent("\t");
/// let xml = to_string_with_options(&root, &options).unwrap();
/// assert!(xml.ends_with("<a>\n\t<b/>\n</a>\n"));
/// ```
///
/// # Errors
///
/// Never fails in practice; the `String` sink cannot fail.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(root: &Element, options: &WriterOptions) -> Result<String> {
    let mut output = String::with_capacity(256);
    Serializer::new(options).serialize(root, &mut output)?;
    debug!("serialized <{}> into {} bytes", root.tag, output.len());
    Ok(output)
}

/// Serialize an element tree to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use etwriter::{to_writer, Element};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Element::new("a")).unwrap();
/// assert!(buffer.ends_with(b"<a/>\n"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, root: &Element) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, root, &WriterOptions::default())
}

/// Serialize an element tree to a writer with custom options.
///
/// Output is written element by element as it is produced; the writer is
/// flushed at the end.
///
/// # Errors
///
/// Returns [`Error::Io`] with the writer's own error if any write or the
/// final flush fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, root: &Element, options: &WriterOptions) -> Result<()>
where
    W: io::Write,
{
    let mut sink = IoSink::new(writer);
    Serializer::new(options).serialize(root, &mut sink)?;
    sink.flush()?;
    debug!("wrote <{}> as {} bytes", root.tag, sink.bytes_written());
    Ok(())
}
