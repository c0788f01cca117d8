//! Live preview renderer: one editable block per node, routable by index.

use serde::Serialize;

use crate::model::Document;

use super::element::{write_element, PREVIEW};
use super::view::view;

/// Rendered preview for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewBlock {
    /// Position of the node in the document; the editor addresses nodes by it.
    pub index: usize,
    pub kind: String,
    pub html: String,
}

pub fn render_preview(doc: &Document) -> Vec<PreviewBlock> {
    doc.nodes()
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let mut inner = String::new();
            write_element(&mut inner, &view(node), 2, PREVIEW);
            let html = format!(
                "<div class=\"node\" data-node-index=\"{}\" data-kind=\"{}\">\n{}\n</div>",
                index,
                super::escape::escape_attr(node.kind.tag()),
                inner
            );
            PreviewBlock {
                index,
                kind: node.kind.tag().to_string(),
                html,
            }
        })
        .collect()
}

/// All preview blocks concatenated, for embedding in a page.
pub fn render_preview_html(doc: &Document) -> String {
    render_preview(doc)
        .into_iter()
        .map(|block| block.html)
        .collect::<Vec<_>>()
        .join("\n")
}
