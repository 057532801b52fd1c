//! The document tree handed to the serializer.
//!
//! An [`Element`] mirrors the usual element-tree shape: a tag, attributes,
//! optional `text` before the first child, optional `tail` after the closing
//! tag, and ordered children. Formatting metadata (comments around the
//! element and the document type) are typed fields instead of attributes.
//!
//! ## Reserved attribute keys
//!
//! Trees built by other tools often carry metadata as dot-prefixed
//! attributes. [`Element::set_attribute`] understands them:
//!
//! | Key              | Destination                 |
//! |------------------|-----------------------------|
//! | `.comments`      | [`Element::comments`]       |
//! | `.commentsafter` | [`Element::comments_after`] |
//! | `.doctype`       | [`Element::doctype`]        |
//!
//! Comment lists are split on `,`. Other dot-prefixed keys are stored but
//! never written.
//!
//! Reserved keys that reach [`Element::attributes`] some other way (a tree
//! loaded with serde, or a direct [`AttributeMap::insert`]) are still
//! honoured: [`Element::leading_comments`], [`Element::trailing_comments`]
//! and [`Element::document_type`] read both places.
//!
//! ## Examples
//!
//! ```rust
//! use etwriter::Element;
//!
//! let mut glyph = Element::new("glyph");
//! glyph.set_attribute("name", "a");
//! glyph.set_attribute(".comments", "first,second");
//!
//! assert_eq!(glyph.comments, vec!["first", "second"]);
//! assert_eq!(glyph.attributes.len(), 1);
//! ```

use crate::map::{is_metadata_key, AttributeMap};
use serde::{Deserialize, Serialize};

pub const COMMENTS_KEY: &str = ".comments";
pub const COMMENTS_AFTER_KEY: &str = ".commentsafter";
pub const DOCTYPE_KEY: &str = ".doctype";

/// One element of a document tree.
///
/// # Examples
///
/// ```rust
/// use etwriter::Element;
///
/// let root = Element::new("root")
///     .with_attribute("id", "1")
///     .with_child(Element::new("leaf").with_text("x<y"));
///
/// assert_eq!(root.children.len(), 1);
/// assert!(!root.children[0].is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    /// Tag name, possibly in `{uri}local` form.
    pub tag: String,
    /// Attributes in insertion order, including any dot-prefixed metadata.
    pub attributes: AttributeMap,
    /// Content between the opening tag and the first child.
    pub text: Option<String>,
    /// Content after this element's closing tag, before the next sibling.
    pub tail: Option<String>,
    /// Child elements in document order.
    pub children: Vec<Element>,
    /// Comments written on their own lines before the opening tag.
    pub comments: Vec<String>,
    /// Comments written on their own lines after the closing tag.
    pub comments_after: Vec<String>,
    /// `<!DOCTYPE ...>` body. Only honoured on the root element.
    pub doctype: Option<String>,
}

impl Element {
    /// Creates an element with no attributes, text or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Sets an attribute, routing reserved metadata keys to their fields.
    ///
    /// Comment keys append to any comments already present.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            COMMENTS_KEY => self.comments.extend(split_comments(&value)),
            COMMENTS_AFTER_KEY => self.comments_after.extend(split_comments(&value)),
            DOCTYPE_KEY => self.doctype = Some(value),
            _ => {
                self.attributes.insert(key, value);
            }
        }
    }

    /// Returns the value of a content or metadata attribute.
    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Adds a comment written before the opening tag.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Adds a comment written after the closing tag.
    #[must_use]
    pub fn with_comment_after(mut self, comment: impl Into<String>) -> Self {
        self.comments_after.push(comment.into());
        self
    }

    #[must_use]
    pub fn with_doctype(mut self, doctype: impl Into<String>) -> Self {
        self.doctype = Some(doctype.into());
        self
    }

    /// Appends a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Text that is present and not just whitespace.
    #[must_use]
    pub fn significant_text(&self) -> Option<&str> {
        significant(self.text.as_deref())
    }

    /// Tail that is present and not just whitespace.
    #[must_use]
    pub fn significant_tail(&self) -> Option<&str> {
        significant(self.tail.as_deref())
    }

    /// `true` when the element would be written self-closing: no children
    /// and no significant text. Attributes do not matter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.significant_text().is_none()
    }

    /// Comments to write before the opening tag: the [`comments`](Self::comments)
    /// field, then any `.comments` attribute split on `,`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use etwriter::Element;
    ///
    /// let mut el = Element::new("a").with_comment("typed");
    /// el.attributes.insert(".comments", "x,y");
    ///
    /// let comments: Vec<_> = el.leading_comments().collect();
    /// assert_eq!(comments, vec!["typed", "x", "y"]);
    /// ```
    pub fn leading_comments(&self) -> impl Iterator<Item = &str> + '_ {
        self.comments
            .iter()
            .map(String::as_str)
            .chain(self.reserved_comments(COMMENTS_KEY))
    }

    /// Comments to write after the closing tag: the
    /// [`comments_after`](Self::comments_after) field, then any
    /// `.commentsafter` attribute split on `,`.
    pub fn trailing_comments(&self) -> impl Iterator<Item = &str> + '_ {
        self.comments_after
            .iter()
            .map(String::as_str)
            .chain(self.reserved_comments(COMMENTS_AFTER_KEY))
    }

    /// The document type body, from the [`doctype`](Self::doctype) field or
    /// else a `.doctype` attribute.
    #[must_use]
    pub fn document_type(&self) -> Option<&str> {
        self.doctype
            .as_deref()
            .or_else(|| self.attributes.get(DOCTYPE_KEY))
    }

    /// `true` if any attribute key is dot-prefixed metadata that is neither
    /// written nor routed to comments or the doctype.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use etwriter::Element;
    ///
    /// assert!(Element::new("a").with_attribute(".private", "v").has_hidden_attributes());
    /// assert!(!Element::new("a").with_attribute(".comments", "c").has_hidden_attributes());
    /// ```
    #[must_use]
    pub fn has_hidden_attributes(&self) -> bool {
        self.attributes
            .keys()
            .any(|k| is_metadata_key(k) && !is_reserved_key(k))
    }

    fn reserved_comments(&self, key: &str) -> impl Iterator<Item = &str> + '_ {
        self.attributes
            .get(key)
            .into_iter()
            .flat_map(|value| value.split(','))
    }

    /// Depth-first, pre-order iterator over this element and its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

fn significant(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

fn is_reserved_key(key: &str) -> bool {
    matches!(key, COMMENTS_KEY | COMMENTS_AFTER_KEY | DOCTYPE_KEY)
}

fn split_comments(value: &str) -> impl Iterator<Item = String> + '_ {
    value.split(',').map(str::to_string)
}

/// Iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
