//! XML pretty printing.
//!
//! This module provides the [`Serializer`] that turns an [`Element`] tree
//! into formatted XML text.
//!
//! ## Overview
//!
//! The output is fully determined by the tree and the [`WriterOptions`]:
//!
//! - **Prolog**: `<?xml version="1.0" encoding="UTF-8"?>`, then the root's
//!   doctype if it has one
//! - **Attribute order**: by configured rank, then by name
//! - **Self-closing tags**: for elements without children or significant text
//! - **CDATA**: for the text of configured tags
//! - **Comments**: on their own lines around the element, at its indent
//!
//! See the [`layout`](crate::layout) module for the exact rules.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use etwriter::{to_string, Element};
//!
//! let root = Element::new("root").with_child(Element::new("leaf"));
//! let xml = to_string(&root).unwrap();
//! assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n  <leaf/>\n</root>\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! The serializer writes to any [`Sink`]. It only borrows the options, so
//! one serializer can write many documents, and each call starts from a
//! clean namespace state.
//!
//! ```rust
//! use etwriter::{Element, Serializer, WriterOptions};
//!
//! let options = WriterOptions::new().with_indent(" ");
//! let serializer = Serializer::new(&options);
//!
//! let mut out = String::new();
//! serializer.serialize(&Element::new("a").with_text("1"), &mut out).unwrap();
//! assert!(out.ends_with("<a>1</a>\n"));
//! ```

use crate::escape::{escape_attribute, escape_text};
use crate::options::XML_NAMESPACE;
use crate::order::sort_attributes;
use crate::{Element, NamespaceMode, Result, Sink, WriterOptions};
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::borrow::Cow;

/// Fixed first line of every document.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

type Attribute<'a> = (Cow<'a, str>, Cow<'a, str>);

/// The XML pretty printer.
///
/// Holds nothing but a borrow of the options; all per-document state lives
/// inside a [`serialize`](Serializer::serialize) call.
#[derive(Clone, Copy, Debug)]
pub struct Serializer<'o> {
    options: &'o WriterOptions,
}

impl<'o> Serializer<'o> {
    /// Creates a serializer that formats with `options`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use etwriter::{Element, Serializer, WriterOptions};
    ///
    /// let options = WriterOptions::new();
    /// let mut out = String::new();
    /// Serializer::new(&options).serialize(&Element::new("a"), &mut out).unwrap();
    /// assert!(out.ends_with("<a/>\n"));
    /// ```
    pub fn new(options: &'o WriterOptions) -> Self {
        Serializer { options }
    }

    /// Writes the whole document rooted at `root` to `sink`.
    ///
    /// # Errors
    ///
    /// Only sink failures are returned, unchanged. Output written before the
    /// failure stays in the sink.
    pub fn serialize<S>(&self, root: &Element, sink: &mut S) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        debug!(
            "serializing <{}> (namespace mode: {})",
            root.tag,
            self.options.namespace_mode.as_str()
        );

        let mut prolog = String::from(XML_DECLARATION);
        if let Some(doctype) = root.document_type() {
            prolog.push_str("<!DOCTYPE ");
            prolog.push_str(doctype);
            prolog.push_str(">\n");
        }
        sink.write_str(&prolog)?;

        let mut namespaces = if self.options.namespace_mode.is_qualifying() {
            let mut ns = Namespaces::new(&self.options.namespaces);
            if self.options.namespace_mode == NamespaceMode::Hoisted {
                ns.hoist(root);
            }
            Some(ns)
        } else {
            None
        };

        self.write_element(root, "", true, &mut namespaces, sink)?;
        debug!("finished <{}>", root.tag);
        Ok(())
    }

    fn write_element<S>(
        &self,
        el: &Element,
        indent: &str,
        is_root: bool,
        namespaces: &mut Option<Namespaces<'o>>,
        sink: &mut S,
    ) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        if !is_root && el.document_type().is_some() {
            warn!("ignoring doctype on non-root element <{}>", el.tag);
        }
        if el.has_hidden_attributes() {
            trace!("<{}> carries metadata attributes that are not written", el.tag);
        }

        let scope = namespaces.as_ref().map_or(0, Namespaces::depth);
        let (name, mut attributes) = match namespaces.as_mut() {
            Some(ns) => ns.localise(el, is_root),
            None => (
                Cow::Borrowed(el.tag.as_str()),
                el.attributes
                    .content()
                    .map(|(k, v)| (Cow::Borrowed(k), Cow::Borrowed(v)))
                    .collect(),
            ),
        };
        sort_attributes(&self.options.attribute_order, &mut attributes);
        trace!("writing <{}> with {} attributes", name, attributes.len());

        let mut out = String::new();
        write_comments(&mut out, el.leading_comments(), indent);
        out.push_str(indent);
        out.push('<');
        out.push_str(&name);
        for (key, value) in &attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }

        if el.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            if let Some(text) = el.significant_text() {
                self.write_text(&mut out, &name, text, indent);
            }
            if !el.children.is_empty() {
                out.push('\n');
                sink.write_str(&out)?;
                out.clear();

                let child_indent = format!("{indent}{}", self.options.indent_for_children(is_root));
                for child in &el.children {
                    self.write_element(child, &child_indent, false, namespaces, sink)?;
                }
                out.push_str(indent);
            }
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
        }

        if let Some(tail) = el.significant_tail() {
            out.push_str(&escape_text(tail));
        }
        out.push('\n');
        write_comments(&mut out, el.trailing_comments(), indent);
        sink.write_str(&out)?;

        if let Some(ns) = namespaces.as_mut() {
            ns.leave(scope);
        }
        Ok(())
    }

    fn write_text(&self, out: &mut String, tag: &str, text: &str, indent: &str) {
        if self.options.takes_cdata(tag) {
            let continuation = format!("\n\t{indent}");
            out.push_str("<![CDATA[");
            out.push_str(&continuation);
            out.push_str(&text.replace('\n', &continuation));
            out.push('\n');
            out.push_str(indent);
            out.push_str("]]>");
        } else if self.options.indent_multiline {
            let text = text.replace('\n', &format!("\n{indent}"));
            out.push_str(&escape_text(&text));
        } else {
            out.push_str(&escape_text(text));
        }
    }
}

fn write_comments<'a>(out: &mut String, comments: impl Iterator<Item = &'a str>, indent: &str) {
    for comment in comments {
        out.push_str(indent);
        out.push_str("<!--");
        out.push_str(comment);
        out.push_str("-->\n");
    }
}

/// Splits a `{uri}local` name. Returns `None` for names without a namespace.
#[must_use]
pub fn split_clark(name: &str) -> Option<(&str, &str)> {
    name.strip_prefix('{')?.split_once('}')
}

/// Namespace state for one serialization call.
///
/// `assigned` only grows during a call. `in_scope` is a stack of URIs that
/// are declared on the current element or one of its ancestors.
struct Namespaces<'o> {
    configured: &'o IndexMap<String, String>,
    assigned: IndexMap<String, String>,
    generated: usize,
    in_scope: Vec<String>,
    pending_root: Vec<String>,
}

impl<'o> Namespaces<'o> {
    fn new(configured: &'o IndexMap<String, String>) -> Self {
        Namespaces {
            configured,
            assigned: IndexMap::new(),
            generated: 0,
            in_scope: Vec::new(),
            pending_root: Vec::new(),
        }
    }

    fn depth(&self) -> usize {
        self.in_scope.len()
    }

    fn leave(&mut self, depth: usize) {
        self.in_scope.truncate(depth);
    }

    fn prefix_for(&mut self, uri: &str) -> String {
        if uri == XML_NAMESPACE {
            return "xml".to_string();
        }
        let configured = self.configured.get(uri).filter(|p| !p.is_empty());
        if let Some(prefix) = configured.or_else(|| self.assigned.get(uri)) {
            return prefix.clone();
        }
        let prefix = loop {
            self.generated += 1;
            let candidate = format!("ns_{}", self.generated);
            if !self.is_prefix_taken(&candidate) {
                break candidate;
            }
        };
        debug!("no prefix configured for {uri}, using {prefix}");
        self.assigned.insert(uri.to_string(), prefix.clone());
        prefix
    }

    fn is_prefix_taken(&self, prefix: &str) -> bool {
        self.configured
            .values()
            .chain(self.assigned.values())
            .any(|p| p == prefix)
    }

    /// Rewrites `{uri}local` to `prefix:local`, returning the URI it used.
    fn qualify<'a>(&mut self, name: &'a str) -> (Cow<'a, str>, Option<&'a str>) {
        match split_clark(name) {
            Some(("", local)) => (Cow::Borrowed(local), None),
            Some((uri, local)) => {
                let prefix = self.prefix_for(uri);
                (Cow::Owned(format!("{prefix}:{local}")), Some(uri))
            }
            None => (Cow::Borrowed(name), None),
        }
    }

    /// Puts `uri` in scope, returning the declaration to emit if it was not.
    fn declare<'a>(&mut self, uri: &str) -> Option<Attribute<'a>> {
        if uri == XML_NAMESPACE || self.in_scope.iter().any(|u| u == uri) {
            return None;
        }
        let prefix = self.prefix_for(uri);
        self.in_scope.push(uri.to_string());
        Some((
            Cow::Owned(format!("xmlns:{prefix}")),
            Cow::Owned(uri.to_string()),
        ))
    }

    /// Queues every configured namespace, then every namespace used in the
    /// tree, for declaration on the root.
    fn hoist(&mut self, root: &Element) {
        let mut uris: Vec<String> = self.configured.keys().cloned().collect();
        for el in root.descendants() {
            let names = std::iter::once(el.tag.as_str())
                .chain(el.attributes.content().map(|(k, _)| k));
            for name in names {
                if let Some((uri, _)) = split_clark(name).filter(|(uri, _)| !uri.is_empty()) {
                    if !uris.iter().any(|u| u == uri) {
                        uris.push(uri.to_string());
                    }
                }
            }
        }
        self.pending_root = uris;
    }

    fn localise<'a>(&mut self, el: &'a Element, is_root: bool) -> (Cow<'a, str>, Vec<Attribute<'a>>) {
        let mut declarations: Vec<Attribute<'a>> = Vec::new();
        if is_root {
            for uri in std::mem::take(&mut self.pending_root) {
                declarations.extend(self.declare(&uri));
            }
        }

        let (name, uri) = self.qualify(&el.tag);
        if let Some(uri) = uri {
            declarations.extend(self.declare(uri));
        }

        let mut attributes = Vec::with_capacity(el.attributes.len());
        for (key, value) in el.attributes.content() {
            let (qname, uri) = self.qualify(key);
            if let Some(uri) = uri {
                declarations.extend(self.declare(uri));
            }
            attributes.push((qname, Cow::Borrowed(value)));
        }
        attributes.extend(declarations);
        (name, attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attribute_order, NamespaceMode};

    fn render(root: &Element, options: &WriterOptions) -> String {
        let mut out = String::new();
        Serializer::new(options).serialize(root, &mut out).unwrap();
        out
    }

    fn body(xml: &str) -> &str {
        xml.strip_prefix(XML_DECLARATION).unwrap()
    }

    #[test]
    fn test_self_closing_root() {
        let out = render(&Element::new("root"), &WriterOptions::new());
        assert_eq!(body(&out), "<root/>\n");
    }

    #[test]
    fn test_whitespace_text_is_self_closing() {
        let el = Element::new("a").with_attribute("k", "v").with_text("  \n ");
        assert_eq!(body(&render(&el, &WriterOptions::new())), "<a k=\"v\"/>\n");
    }

    #[test]
    fn test_text_not_stripped() {
        let el = Element::new("a").with_text(" padded ");
        assert_eq!(body(&render(&el, &WriterOptions::new())), "<a> padded </a>\n");
    }

    #[test]
    fn test_attribute_order() {
        let options = WriterOptions::new().with_attribute_order(attribute_order(["b", "a"]));
        let el = Element::new("n")
            .with_attribute("c", "3")
            .with_attribute("a", "1")
            .with_attribute("b", "2");
        assert_eq!(body(&render(&el, &options)), "<n b=\"2\" a=\"1\" c=\"3\"/>\n");
    }

    #[test]
    fn test_attribute_values_escaped() {
        let el = Element::new("n").with_attribute("v", "a\"b<c>&d");
        assert_eq!(
            body(&render(&el, &WriterOptions::new())),
            "<n v=\"a&quot;b&lt;c&gt;&amp;d\"/>\n"
        );
    }

    #[test]
    fn test_first_level_indent() {
        let options = WriterOptions::new().with_indent_first("\t").with_indent_increment("  ");
        let root = Element::new("r").with_child(
            Element::new("a").with_child(Element::new("b").with_child(Element::new("c"))),
        );
        assert_eq!(
            body(&render(&root, &options)),
            "<r>\n\t<a>\n\t  <b>\n\t    <c/>\n\t  </b>\n\t</a>\n</r>\n"
        );
    }

    #[test]
    fn test_text_before_children() {
        let root = Element::new("r")
            .with_text("lead")
            .with_child(Element::new("a"));
        assert_eq!(
            body(&render(&root, &WriterOptions::new())),
            "<r>lead\n  <a/>\n</r>\n"
        );
    }

    #[test]
    fn test_tail_follows_closing_tag() {
        let root = Element::new("r")
            .with_child(Element::new("a").with_tail("after & more"))
            .with_child(Element::new("b").with_text("t").with_tail("   "));
        assert_eq!(
            body(&render(&root, &WriterOptions::new())),
            "<r>\n  <a/>after &amp; more\n  <b>t</b>\n</r>\n"
        );
    }

    #[test]
    fn test_cdata_layout() {
        let options = WriterOptions::new().with_cdata_tag("note");
        let root = Element::new("r").with_child(Element::new("note").with_text("a<b\nc"));
        assert_eq!(
            body(&render(&root, &options)),
            "<r>\n  <note><![CDATA[\n\t  a<b\n\t  c\n  ]]></note>\n</r>\n"
        );
    }

    #[test]
    fn test_multiline_text_indent() {
        let options = WriterOptions::new().with_indent_multiline(true);
        let root = Element::new("r").with_child(Element::new("p").with_text("one\ntwo&"));
        assert_eq!(
            body(&render(&root, &options)),
            "<r>\n  <p>one\n  two&amp;</p>\n</r>\n"
        );
    }

    #[test]
    fn test_multiline_text_without_indent() {
        let root = Element::new("r").with_child(Element::new("p").with_text("one\ntwo"));
        assert_eq!(
            body(&render(&root, &WriterOptions::new())),
            "<r>\n  <p>one\ntwo</p>\n</r>\n"
        );
    }

    #[test]
    fn test_comments_around_element() {
        let root = Element::new("r").with_child(
            Element::new("a")
                .with_attribute(".comments", "c1,c2")
                .with_attribute(".commentsafter", "c3"),
        );
        assert_eq!(
            body(&render(&root, &WriterOptions::new())),
            "<r>\n  <!--c1-->\n  <!--c2-->\n  <a/>\n  <!--c3-->\n</r>\n"
        );
    }

    #[test]
    fn test_doctype_only_from_root() {
        let root = Element::new("r")
            .with_doctype("r SYSTEM \"r.dtd\"")
            .with_child(Element::new("a").with_doctype("ignored"));
        let out = render(&root, &WriterOptions::new());
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE r SYSTEM \"r.dtd\">\n<r>\n  <a/>\n</r>\n"
        );
    }

    #[test]
    fn test_clark_names_untouched_when_off() {
        let el = Element::new("{urn:x}a");
        assert_eq!(body(&render(&el, &WriterOptions::new())), "<{urn:x}a/>\n");
    }

    #[test]
    fn test_split_clark() {
        assert_eq!(split_clark("{urn:x}a"), Some(("urn:x", "a")));
        assert_eq!(split_clark("a"), None);
        assert_eq!(split_clark("{broken"), None);
    }

    #[test]
    fn test_local_declares_at_first_use() {
        let options = WriterOptions::new()
            .with_namespace("urn:x", "x")
            .with_namespace_mode(NamespaceMode::Local);
        let root = Element::new("r").with_child(
            Element::new("{urn:x}a").with_child(Element::new("{urn:x}b")),
        );
        assert_eq!(
            body(&render(&root, &options)),
            "<r>\n  <x:a xmlns:x=\"urn:x\">\n    <x:b/>\n  </x:a>\n</r>\n"
        );
    }

    #[test]
    fn test_local_redeclares_in_sibling_scope() {
        let options = WriterOptions::new()
            .with_namespace("urn:x", "x")
            .with_namespace_mode(NamespaceMode::Local);
        let root = Element::new("r")
            .with_child(Element::new("{urn:x}a"))
            .with_child(Element::new("{urn:x}b"));
        assert_eq!(
            body(&render(&root, &options)),
            "<r>\n  <x:a xmlns:x=\"urn:x\"/>\n  <x:b xmlns:x=\"urn:x\"/>\n</r>\n"
        );
    }

    #[test]
    fn test_hoisted_declares_on_root() {
        let options = WriterOptions::new()
            .with_namespace("urn:x", "x")
            .with_namespace_mode(NamespaceMode::Hoisted);
        let root = Element::new("r")
            .with_child(Element::new("{urn:y}a").with_attribute("{urn:x}k", "v"));
        assert_eq!(
            body(&render(&root, &options)),
            "<r xmlns:ns_1=\"urn:y\" xmlns:x=\"urn:x\">\n  <ns_1:a x:k=\"v\"/>\n</r>\n"
        );
    }

    #[test]
    fn test_synthetic_prefix_reused_and_reset_per_call() {
        let options = WriterOptions::new().with_namespace_mode(NamespaceMode::Local);
        let root = Element::new("r")
            .with_child(Element::new("{urn:a}x"))
            .with_child(Element::new("{urn:b}y"))
            .with_child(Element::new("{urn:a}z"));
        let expected = "<r>\n  <ns_1:x xmlns:ns_1=\"urn:a\"/>\n  <ns_2:y xmlns:ns_2=\"urn:b\"/>\n  <ns_1:z xmlns:ns_1=\"urn:a\"/>\n</r>\n";
        let serializer = Serializer::new(&options);
        for _ in 0..2 {
            let mut out = String::new();
            serializer.serialize(&root, &mut out).unwrap();
            assert_eq!(body(&out), expected);
        }
    }

    #[test]
    fn test_xml_namespace_never_declared() {
        let options = WriterOptions::new().with_namespace_mode(NamespaceMode::Local);
        let el = Element::new("r").with_attribute(format!("{{{XML_NAMESPACE}}}lang"), "en");
        assert_eq!(body(&render(&el, &options)), "<r xml:lang=\"en\"/>\n");
    }

    #[test]
    fn test_namespace_mode_keeps_metadata() {
        let options = WriterOptions::new().with_namespace_mode(NamespaceMode::Hoisted);
        let root = Element::new("r")
            .with_doctype("r")
            .with_comment("before")
            .with_attribute(".hidden", "x");
        let out = render(&root, &options);
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE r>\n<!--before-->\n<r/>\n"
        );
        assert_eq!(root.get_attribute(".hidden"), Some("x"));
    }
    #[test]
    fn test_empty_configured_prefix_falls_back_to_synthetic() {
        let options = WriterOptions::new()
            .with_namespace("urn:x", "")
            .with_namespace_mode(NamespaceMode::Local);
        let el = Element::new("{urn:x}a");
        assert_eq!(
            body(&render(&el, &options)),
            "<ns_1:a xmlns:ns_1=\"urn:x\"/>\n"
        );
    }

    #[test]
    fn test_synthetic_prefix_skips_configured_prefix() {
        let options = WriterOptions::new()
            .with_namespace("urn:x", "ns_1")
            .with_namespace_mode(NamespaceMode::Hoisted);
        let root = Element::new("{urn:x}a").with_child(Element::new("{urn:y}b"));
        assert_eq!(
            body(&render(&root, &options)),
            "<ns_1:a xmlns:ns_1=\"urn:x\" xmlns:ns_2=\"urn:y\">\n  <ns_2:b/>\n</ns_1:a>\n"
        );
    }

    #[test]
    fn test_reserved_keys_inserted_into_attributes_are_written() {
        let mut root = Element::new("r").with_text("t");
        root.attributes.insert(".doctype", "r");
        root.attributes.insert(".comments", "c1,c2");
        root.attributes.insert(".commentsafter", "c3");
        assert_eq!(
            render(&root, &WriterOptions::new()),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE r>\n<!--c1-->\n<!--c2-->\n<r>t</r>\n<!--c3-->\n"
        );
    }
}
