//! Character escaping for element content and attribute values.
//!
//! Only the reserved characters are touched. Element text and tails escape
//! `&`, `<` and `>`; attribute values additionally escape `"`. Everything
//! else, including newlines and non-ASCII text, is passed through as is.

use std::borrow::Cow;

static ENTITIES: [(&str, char); 4] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>'), ("&quot;", '"')];

#[inline]
fn needs_escape(text: &str, quote: bool) -> bool {
    text.bytes()
        .any(|b| matches!(b, b'&' | b'<' | b'>') || (quote && b == b'"'))
}

fn escape(text: &str, quote: bool) -> Cow<'_, str> {
    if !needs_escape(text, quote) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Escapes element text or tail content.
///
/// # Examples
///
/// ```rust
/// use etwriter::escape_text;
///
/// assert_eq!(escape_text("a < b & \"c\""), "a &lt; b &amp; \"c\"");
/// ```
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escapes an attribute value for use inside double quotes.
///
/// # Examples
///
/// ```rust
/// use etwriter::escape_attribute;
///
/// assert_eq!(escape_attribute("say \"hi\" <now>"), "say &quot;hi&quot; &lt;now&gt;");
/// ```
#[must_use]
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

/// Reverses [`escape_text`] and [`escape_attribute`].
///
/// Only the four entities those functions produce are recognised; any other
/// `&` sequence is kept verbatim.
#[must_use]
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let decoded = ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity));
        match decoded {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
