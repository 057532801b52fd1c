use etwriter::{element, to_string, Element};

#[test]
fn test_macro_tag_only() {
    let el = element!("br");
    assert_eq!(el.tag, "br");
    assert!(el.attributes.is_empty());
    assert!(el.children.is_empty());
}

#[test]
fn test_macro_with_attributes() {
    let el = element!("point", { "x" => 10, "y" => -5, "type" => "line" });
    assert_eq!(el.get_attribute("x"), Some("10"));
    assert_eq!(el.get_attribute("y"), Some("-5"));
    assert_eq!(el.get_attribute("type"), Some("line"));
}

#[test]
fn test_macro_routes_metadata_keys() {
    let el = element!("root", {
        ".comments" => "one,two",
        ".commentsafter" => "three",
        ".doctype" => "root",
    });
    assert_eq!(el.comments, vec!["one", "two"]);
    assert_eq!(el.comments_after, vec!["three"]);
    assert_eq!(el.doctype.as_deref(), Some("root"));
    assert!(el.attributes.is_empty());
}

#[test]
fn test_macro_with_children_only() {
    let el = element!("list", [element!("item"), element!("item")]);
    assert_eq!(el.children.len(), 2);
    assert!(el.attributes.is_empty());
}

#[test]
fn test_macro_nested() {
    let el = element!("a", { "k" => "v" }, [
        element!("b", [element!("c")]),
        element!("d").with_text("text"),
    ]);
    let expected = Element::new("a")
        .with_attribute("k", "v")
        .with_child(Element::new("b").with_child(Element::new("c")))
        .with_child(Element::new("d").with_text("text"));
    assert_eq!(el, expected);
}

#[test]
fn test_macro_with_runtime_values() {
    let names = ["x", "y"];
    let children: Vec<Element> = names.iter().map(|n| element!("axis", { "tag" => n })).collect();
    let el = Element::new("axes").with_children(children);
    let xml = to_string(&el).unwrap();
    assert!(xml.contains("  <axis tag=\"x\"/>\n  <axis tag=\"y\"/>\n"));
}
