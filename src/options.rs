//! Configuration options for XML pretty printing.
//!
//! This module provides types to customize the writer's output:
//!
//! - [`WriterOptions`]: Main configuration struct
//! - [`NamespaceMode`]: Whether and where `{uri}local` names are localised
//!
//! Options are plain data. They can be built with the `with_*` methods or
//! deserialized with serde, which makes it easy to keep per-document-type
//! settings in a configuration file.
//!
//! ## Examples
//!
//! ```rust
//! use etwriter::{attribute_order, WriterOptions};
//!
//! let options = WriterOptions::new()
//!     .with_attribute_order(attribute_order(["name", "format"]))
//!     .with_cdata_tag("note")
//!     .with_indent("\t")
//!     .with_indent_first("  ");
//!
//! assert!(options.takes_cdata("note"));
//! assert_eq!(options.indent_for_children(true), "  ");
//! assert_eq!(options.indent_for_children(false), "\t");
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Namespace URI that is bound to the `xml` prefix without a declaration.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// How names of the form `{uri}local` are written.
///
/// # Examples
///
/// ```rust
/// use etwriter::NamespaceMode;
///
/// assert!(!NamespaceMode::Off.is_qualifying());
/// assert!(NamespaceMode::Hoisted.is_qualifying());
/// assert_eq!(NamespaceMode::Local.as_str(), "local");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceMode {
    /// Names are written exactly as they appear in the tree.
    #[default]
    Off,
    /// Names are localised and every namespace is declared on the root.
    Hoisted,
    /// Names are localised and each namespace is declared on the first
    /// element that uses it, unless an ancestor already declared it.
    Local,
}

impl NamespaceMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NamespaceMode::Off => "off",
            NamespaceMode::Hoisted => "hoisted",
            NamespaceMode::Local => "local",
        }
    }

    #[must_use]
    pub const fn is_qualifying(&self) -> bool {
        !matches!(self, NamespaceMode::Off)
    }
}

/// Configuration options for XML pretty printing.
///
/// # Examples
///
/// ```rust
/// use etwriter::{NamespaceMode, WriterOptions};
///
/// let options = WriterOptions::new()
///     .with_namespace("http://www.w3.org/2000/svg", "svg")
///     .with_namespace_mode(NamespaceMode::Hoisted)
///     .with_indent_multiline(true);
///
/// assert_eq!(options.namespaces.get("http://www.w3.org/2000/svg").map(String::as_str), Some("svg"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Namespace URI to prefix.
    pub namespaces: IndexMap<String, String>,
    /// Attribute name to rank; lower ranks are written first.
    pub attribute_order: IndexMap<String, usize>,
    /// Tags whose text is written as CDATA instead of escaped.
    pub cdata_tags: IndexSet<String>,
    /// Indent added per nesting level below the root's children.
    pub indent_increment: String,
    /// Indent of the root's direct children.
    pub indent_first: String,
    /// Re-indent continuation lines of multi-line text.
    pub indent_multiline: bool,
    pub namespace_mode: NamespaceMode,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            namespaces: IndexMap::new(),
            attribute_order: IndexMap::new(),
            cdata_tags: IndexSet::new(),
            indent_increment: "  ".to_string(),
            indent_first: "  ".to_string(),
            indent_multiline: false,
            namespace_mode: NamespaceMode::default(),
        }
    }
}

impl WriterOptions {
    /// Creates default options: two-space indents, no ordering, no CDATA,
    /// names written as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use etwriter::WriterOptions;
    ///
    /// let options = WriterOptions::new();
    /// assert_eq!(options.indent_increment, "  ");
    /// assert!(!options.indent_multiline);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the same indent for every level, including the first.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        let indent = indent.into();
        self.indent_first = indent.clone();
        self.indent_increment = indent;
        self
    }

    /// Sets the indent of the root's children only.
    #[must_use]
    pub fn with_indent_first(mut self, indent: impl Into<String>) -> Self {
        self.indent_first = indent.into();
        self
    }

    /// Sets the per-level indent used below the first level.
    #[must_use]
    pub fn with_indent_increment(mut self, indent: impl Into<String>) -> Self {
        self.indent_increment = indent.into();
        self
    }

    /// Re-indents the continuation lines of multi-line text to the
    /// element's indent. CDATA text is always re-indented.
    #[must_use]
    pub fn with_indent_multiline(mut self, enabled: bool) -> Self {
        self.indent_multiline = enabled;
        self
    }

    /// Replaces the attribute ranks, typically with the result of
    /// [`attribute_order`](crate::attribute_order).
    #[must_use]
    pub fn with_attribute_order(mut self, order: IndexMap<String, usize>) -> Self {
        self.attribute_order = order;
        self
    }

    /// Writes the text of `tag` as a CDATA section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use etwriter::WriterOptions;
    ///
    /// let options = WriterOptions::new().with_cdata_tag("note");
    /// assert!(options.takes_cdata("note"));
    /// assert!(!options.takes_cdata("name"));
    /// ```
    #[must_use]
    pub fn with_cdata_tag(mut self, tag: impl Into<String>) -> Self {
        self.cdata_tags.insert(tag.into());
        self
    }

    /// Adds several CDATA tags at once.
    #[must_use]
    pub fn with_cdata_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cdata_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Maps a namespace URI to a prefix, replacing any earlier mapping.
    #[must_use]
    pub fn with_namespace(mut self, uri: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.namespaces.insert(uri.into(), prefix.into());
        self
    }

    /// Chooses how `{uri}local` names are written.
    #[must_use]
    pub fn with_namespace_mode(mut self, mode: NamespaceMode) -> Self {
        self.namespace_mode = mode;
        self
    }

    /// Registers `prefix` for `uri` unless the URI already has one, and
    /// returns the prefix now in effect for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use etwriter::WriterOptions;
    ///
    /// let mut options = WriterOptions::new();
    /// assert_eq!(options.add_namespace("urn:a", "a"), "a");
    /// assert_eq!(options.add_namespace("urn:a", "other"), "a");
    /// ```
    pub fn add_namespace(&mut self, uri: impl Into<String>, prefix: impl Into<String>) -> String {
        self.namespaces
            .entry(uri.into())
            .or_insert_with(|| prefix.into())
            .clone()
    }

    /// `true` if text of elements named `tag` is written as CDATA.
    #[must_use]
    pub fn takes_cdata(&self, tag: &str) -> bool {
        self.cdata_tags.contains(tag)
    }

    /// Indent step for the children of an element.
    #[must_use]
    pub fn indent_for_children(&self, parent_is_root: bool) -> &str {
        if parent_is_root {
            &self.indent_first
        } else {
            &self.indent_increment
        }
    }
}
