//! Writing a small document with comments, a doctype and a text tail.
//!
//! Run with: cargo run --example simple

use etwriter::{element, to_string, Element};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let root = element!("library", {
        ".doctype" => "library SYSTEM \"library.dtd\"",
        ".comments" => " generated file ",
    }, [
        element!("book", { "isbn" => "0-00-000000-0", "title" => "Fish & Chips" }),
        element!("book", { "title" => "<untitled>" }).with_tail("trailing text"),
        Element::new("shelf").with_text("  ").with_comment_after("empty shelf above"),
    ]);

    let xml = to_string(&root)?;
    println!("{xml}");

    Ok(())
}
