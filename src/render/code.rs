//! Component-code renderer: a single `GeneratedUI` function returning JSX.

use crate::model::Document;

use super::element::{write_element, JSX};
use super::view::view;

/// Name of the generated component function.
pub const COMPONENT_NAME: &str = "GeneratedUI";

const FRAGMENT_INDENT: usize = 6;

pub fn render_code(doc: &Document) -> String {
    let mut out = format!("function {}() {{\n  return (\n    <div>\n", COMPONENT_NAME);
    for node in doc.nodes() {
        write_element(&mut out, &view(node), FRAGMENT_INDENT, JSX);
        out.push('\n');
    }
    out.push_str("    </div>\n  );\n}\n\n");
    out.push_str(&format!("export default {};\n", COMPONENT_NAME));
    out
}
