//! Static markup renderer.

use crate::model::Document;

use super::element::{write_element, HTML};
use super::view::view;

/// Static HTML for the document: one fragment per node, blank-line separated.
pub fn render_markup(doc: &Document) -> String {
    doc.nodes()
        .iter()
        .map(|node| {
            let mut out = String::new();
            write_element(&mut out, &view(node), 0, HTML);
            out
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, NodeKind, PropValue};

    #[test]
    fn form_markup() {
        let doc = Document::from_nodes(vec![Node::new(NodeKind::Form)
            .with("title", "Login")
            .with("fields", PropValue::list(["Email", "Password"]))
            .with("submit", "Login")]);
        let html = render_markup(&doc);
        assert_eq!(
            html,
            "<form class=\"card\">\n  <h3 class=\"card-title\">Login</h3>\n  <div class=\"form-field\">\n    <label>Email</label>\n    <input class=\"input\" placeholder=\"Email\">\n  </div>\n  <div class=\"form-field\">\n    <label>Password</label>\n    <input class=\"input\" placeholder=\"Password\">\n  </div>\n  <button class=\"button\" type=\"button\">Login</button>\n</form>"
        );
    }

    #[test]
    fn fragments_are_blank_line_separated() {
        let doc = Document::from_nodes(vec![
            Node::new(NodeKind::Button).with("text", "A"),
            Node::new(NodeKind::Button).with("text", "B"),
        ]);
        assert_eq!(
            render_markup(&doc),
            "<button class=\"button\" type=\"button\">A</button>\n\n<button class=\"button\" type=\"button\">B</button>"
        );
    }

    #[test]
    fn no_editing_markers_in_static_output() {
        let doc = Document::from_nodes(vec![Node::new(NodeKind::Hero)]);
        let html = render_markup(&doc);
        assert!(!html.contains("contenteditable"));
        assert!(!html.contains("data-prop"));
    }

    #[test]
    fn user_text_is_escaped() {
        let doc = Document::from_nodes(vec![Node::new(NodeKind::Block).with("text", "<script>&")]);
        assert_eq!(
            render_markup(&doc),
            "<div class=\"card\">\n  <p>&lt;script&gt;&amp;</p>\n</div>"
        );
    }
}
