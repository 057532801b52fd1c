//! Localising `{uri}local` names into prefixed names.
//!
//! Run with: cargo run --example namespaces

use etwriter::{element, to_string_with_options, NamespaceMode, WriterOptions};
use std::error::Error;

const SVG: &str = "http://www.w3.org/2000/svg";
const XLINK: &str = "http://www.w3.org/1999/xlink";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let drawing = element!(format!("{{{SVG}}}svg"), { "width" => 100 }, [
        element!(format!("{{{SVG}}}g"), [
            element!(format!("{{{SVG}}}use"), { format!("{{{XLINK}}}href") => "#dot" }),
            element!("{urn:example:meta}author").with_text("unknown"),
        ]),
    ]);

    for mode in [NamespaceMode::Hoisted, NamespaceMode::Local] {
        let options = WriterOptions::new()
            .with_namespace(SVG, "svg")
            .with_namespace(XLINK, "xlink")
            .with_namespace_mode(mode);
        println!("Namespace mode: {}", mode.as_str());
        println!("{}", to_string_with_options(&drawing, &options)?);
    }

    Ok(())
}
