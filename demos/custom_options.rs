//! Customizing the output with WriterOptions.
//!
//! Run with: cargo run --example custom_options

use etwriter::{attribute_order, element, to_string_with_options, to_writer_with_options, WriterOptions};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let glyph = element!("glyph", { "format" => "2", "name" => "a" }, [
        element!("unicode", { "hex" => "0061" }),
        element!("note").with_text("Drawn from the 1930 specimen.\nSpacing checked."),
        element!("outline", [
            element!("contour", [
                element!("point", { "type" => "line", "y" => 0, "x" => 40 }),
                element!("point", { "type" => "line", "y" => 700, "x" => 40 }),
            ]),
        ]),
    ]);

    // Default: two-space indents, alphabetical attributes, escaped text
    println!("Default options:");
    println!("{}", to_string_with_options(&glyph, &WriterOptions::new())?);

    // Ranked attributes and a CDATA note
    let glif = WriterOptions::new()
        .with_attribute_order(attribute_order(["name", "format", "hex", "x", "y", "type"]))
        .with_cdata_tag("note")
        .with_indent_first("  ")
        .with_indent_increment("\t");
    println!("Ranked attributes, CDATA note, tab indents:");
    if let Err(err) = to_writer_with_options(io::stdout().lock(), &glyph, &glif) {
        // `cargo run --example custom_options | head` closes stdout early
        if err.io_kind() == Some(io::ErrorKind::BrokenPipe) {
            return Ok(());
        }
        return Err(err.into());
    }

    // The same options, loaded from JSON
    let from_json: WriterOptions = serde_json::from_str(
        r#"{"attribute_order": {"name": 0, "format": 1}, "indent_multiline": true}"#,
    )?;
    println!("\nOptions from JSON:");
    println!("{}", to_string_with_options(&glyph, &from_json)?);

    Ok(())
}
