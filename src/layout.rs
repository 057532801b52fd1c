//! Output Layout
//!
//! This module documents the exact text produced by the [`Serializer`].
//! It contains no code.
//!
//! # Document
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE {root doctype}>          (only if the root has one)
//! {root element}
//! ```
//!
//! The document always ends with a newline after the root element (or after
//! its trailing comments).
//!
//! # Element
//!
//! With `I` the element's indent (empty for the root):
//!
//! 1. each leading comment: `I<!--{comment}-->` and a newline
//! 2. `I<{tag}` and the attributes, each as ` {name}="{escaped value}"`
//! 3. `/>` when the element has no children and its text is absent or only
//!    whitespace; otherwise `>`, the text, the children and `</{tag}>`
//! 4. the tail, escaped, if it is not only whitespace
//! 5. a newline
//! 6. each trailing comment: `I<!--{comment}-->` and a newline
//!
//! When an element has children, a newline follows its text (or its `>`),
//! each child is written at `I` plus one indent step, and `I` precedes the
//! closing tag. The step below the root is `indent_first`; every deeper
//! step is `indent_increment`.
//!
//! ```text
//! <root id="1">
//!   <leaf>x&lt;y</leaf>
//!   <!--explains the next element-->
//!   <empty attr="v"/>tail text
//! </root>
//! ```
//!
//! # Text
//!
//! Whether text is written depends on a trimmed copy, but the text itself is
//! written untrimmed.
//!
//! | Case                         | Output                                     |
//! |------------------------------|--------------------------------------------|
//! | default                      | text with `&`, `<`, `>` escaped            |
//! | `indent_multiline`           | each `\n` followed by `I`, then escaped    |
//! | tag in `cdata_tags`          | `<![CDATA[`, `\n\tI`, text with every `\n` replaced by `\n\tI`, `\n`, `I`, `]]>` |
//!
//! CDATA text is never escaped. A `]]>` inside it is not split.
//!
//! # Attributes
//!
//! Attributes are sorted by `(rank, name)`. Ranks come from
//! `attribute_order`; unlisted names rank after all listed ones. Values escape
//! `&`, `<`, `>` and `"`. Keys starting with `.` are never written.
//!
//! # Namespaces
//!
//! With [`NamespaceMode::Off`] names are written verbatim. Otherwise every
//! `{uri}local` tag or attribute name becomes `prefix:local`:
//!
//! - the prefix is the configured one for `uri`, else `ns_1`, `ns_2`, ...
//!   in order of first use within the call
//! - the XML namespace is always `xml` and never declared
//! - [`NamespaceMode::Hoisted`] declares all configured namespaces and all
//!   namespaces used in the tree on the root
//! - [`NamespaceMode::Local`] declares a namespace on each element that uses
//!   it while no ancestor has declared it
//!
//! Declarations are `xmlns:{prefix}="{uri}"` attributes and are sorted
//! along with the others.
//!
//! [`Serializer`]: crate::Serializer
//! [`NamespaceMode::Off`]: crate::NamespaceMode::Off
//! [`NamespaceMode::Hoisted`]: crate::NamespaceMode::Hoisted
//! [`NamespaceMode::Local`]: crate::NamespaceMode::Local
