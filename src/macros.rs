/// Builds an [`Element`](crate::Element) tree.
///
/// Attributes go through [`Element::set_attribute`](crate::Element::set_attribute),
/// so the reserved `.comments`, `.commentsafter` and `.doctype` keys work here too.
///
/// # Examples
///
/// ```rust
/// use etwriter::element;
///
/// let tree = element!("root", { "id" => "1", ".comments" => "generated" }, [
///     element!("leaf"),
///     element!("leaf", { "n" => 2 }),
/// ]);
///
/// assert_eq!(tree.comments, vec!["generated"]);
/// assert_eq!(tree.children[1].get_attribute("n"), Some("2"));
/// ```
#[macro_export]
macro_rules! element {
    // Tag, attributes and children
    ($tag:expr, { $($key:expr => $value:expr),* $(,)? }, [ $($child:expr),* $(,)? ]) => {{
        let mut element = $crate::element!($tag, { $($key => $value),* });
        $(
            element.push($child);
        )*
        element
    }};

    // Tag and attributes
    ($tag:expr, { $($key:expr => $value:expr),* $(,)? }) => {{
        let mut element = $crate::Element::new($tag);
        $(
            element.set_attribute($key, ($value).to_string());
        )*
        element
    }};

    // Tag and children
    ($tag:expr, [ $($child:expr),* $(,)? ]) => {
        $crate::element!($tag, {}, [ $($child),* ])
    };

    ($tag:expr) => {
        $crate::Element::new($tag)
    };
}

#[cfg(test)]
mod tests {
    use crate::Element;

    #[test]
    fn test_element_macro_forms() {
        assert_eq!(element!("a"), Element::new("a"));
        assert_eq!(
            element!("a", { "k" => "v" }),
            Element::new("a").with_attribute("k", "v")
        );
        assert_eq!(
            element!("a", [element!("b")]),
            Element::new("a").with_child(Element::new("b"))
        );
    }

    #[test]
    fn test_element_macro_trailing_commas() {
        let el = element!("a", { "x" => 1, }, [element!("b"), ]);
        assert_eq!(el.get_attribute("x"), Some("1"));
        assert_eq!(el.children.len(), 1);
    }
}
