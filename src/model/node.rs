//! Nodes and documents.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::kind::NodeKind;
use super::value::{parse_number, split_list, PropValue, QaPair};

/// Insertion-ordered property bag.
pub type Properties = IndexMap<String, PropValue>;

/// One visual block of the generated UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, alias = "properties")]
    pub props: Properties,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            props: Properties::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Display text for `name`, or `default` when missing or blank.
    pub fn text_or(&self, name: &str, default: &str) -> String {
        match self.props.get(name) {
            Some(value) if !value.is_blank() => match value {
                PropValue::Text(s) => s.clone(),
                other => other.to_display(),
            },
            _ => default.to_string(),
        }
    }

    /// Optional display text, `None` when missing or blank.
    pub fn text_opt(&self, name: &str) -> Option<String> {
        self.props
            .get(name)
            .filter(|v| !v.is_blank())
            .map(PropValue::to_display)
    }

    /// List items for `name`, accepting either a list or comma-separated text.
    /// Falls back to `default` when missing or empty.
    pub fn list_or(&self, name: &str, default: &[&str]) -> Vec<String> {
        let items: Vec<String> = self
            .props
            .get(name)
            .map(PropValue::to_list)
            .unwrap_or_default()
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if items.is_empty() {
            default.iter().map(|s| s.to_string()).collect()
        } else {
            items
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.props.get(name).and_then(PropValue::as_number)
    }

    pub fn pairs_or(&self, name: &str, default: &[(&str, &str)]) -> Vec<QaPair> {
        match self.props.get(name) {
            Some(PropValue::Pairs(pairs)) if !pairs.is_empty() => pairs.clone(),
            _ => default.iter().map(|(q, a)| QaPair::new(*q, *a)).collect(),
        }
    }

    /// Reconcile property representations with this kind's schema.
    ///
    /// List-like properties given as comma-separated text become lists;
    /// numeric properties given as numeric text become numbers.
    pub fn normalize(&mut self) {
        let kind = self.kind.clone();
        for (name, value) in self.props.iter_mut() {
            if kind.is_list_prop(name) {
                if let PropValue::Text(raw) = value {
                    *value = PropValue::List(split_list(raw));
                }
            } else if kind.is_numeric_prop(name) {
                if let PropValue::Text(raw) = value {
                    if let Some(n) = parse_number(raw) {
                        *value = PropValue::Number(n);
                    }
                }
            }
        }
    }
}

/// Ordered, flat sequence of nodes. Order is render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub components: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(components: Vec<Node>) -> Self {
        let mut doc = Self { components };
        doc.normalize();
        doc
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.components
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.components.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.components.get_mut(index)
    }

    pub fn push(&mut self, node: Node) {
        self.components.push(node);
    }

    /// Splice a node out of the sequence.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index < self.components.len() {
            Some(self.components.remove(index))
        } else {
            None
        }
    }

    pub fn normalize(&mut self) {
        for node in &mut self.components {
            node.normalize();
        }
    }

    /// Kind tags in document order, handy for logs.
    pub fn kinds(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|n| n.kind.tag().to_string())
            .collect()
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self::from_nodes(nodes)
    }
}
