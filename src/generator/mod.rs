//! Rule-based prompt → document generator.
//!
//! ```text
//! prompt → lowercase → [rule 1 .. rule N] → nodes (catalog order) → Document
//! ```
//!
//! Generation is total: when no rule fires, a single block node carrying the
//! raw prompt is emitted.

mod catalog;
mod extract;

pub use catalog::{trigger_catalog, Prompt, TriggerRule, BASE_PRICE, GRID_RANGE, PRICING_RANGE};
pub use extract::{cta_override, extract_count, title_override, CountRange, DEFAULT_COUNT};

use crate::model::{Document, Node, NodeKind};

/// Generate a document from free text. Never fails, never returns an empty document.
pub fn generate(prompt: &str) -> Document {
    let parsed = Prompt::new(prompt);
    let mut nodes = Vec::new();
    let mut fired = Vec::new();

    for rule in trigger_catalog() {
        if rule.matches(&parsed) {
            fired.push(rule.name);
            nodes.extend(rule.emit(&parsed));
        }
    }

    if nodes.is_empty() {
        nodes.push(Node::new(NodeKind::Block).with("text", prompt));
    }

    tracing::debug!(rules = ?fired, nodes = nodes.len(), "Generated document from rules");
    Document::from_nodes(nodes)
}
