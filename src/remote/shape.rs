//! Tolerant response-shape contract for remote generation.

use serde_json::Value;

use crate::model::{Document, Node};
use crate::remote::error::RemoteError;

const COMPONENTS_KEY: &str = "components";

/// Accepted response structures, in precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// `{"components": [...]}`
    Document(Vec<Node>),
    /// `[...]`
    Bare(Vec<Node>),
    /// `{"<key>": {"components": [...]}}`, first such key wins
    Nested { key: String, components: Vec<Node> },
}

impl ResponseShape {
    /// Classify a response body.
    ///
    /// Anything outside the three accepted shapes is an explicit
    /// [`RemoteError::UnrecognizedShape`]; nothing is passed through unchecked.
    pub fn classify(body: Value) -> Result<Self, RemoteError> {
        match body {
            Value::Object(mut map) => {
                if let Some(Value::Array(items)) = map.get(COMPONENTS_KEY) {
                    return Ok(ResponseShape::Document(parse_nodes(items)?));
                }
                let nested_key = map.iter().find_map(|(key, value)| {
                    value
                        .get(COMPONENTS_KEY)
                        .filter(|c| c.is_array())
                        .map(|_| key.clone())
                });
                match nested_key.and_then(|key| map.remove(&key).map(|v| (key, v))) {
                    Some((key, inner)) => {
                        let items = inner
                            .get(COMPONENTS_KEY)
                            .and_then(Value::as_array)
                            .cloned()
                            .unwrap_or_default();
                        Ok(ResponseShape::Nested {
                            key,
                            components: parse_nodes(&items)?,
                        })
                    }
                    None => Err(RemoteError::UnrecognizedShape {
                        found: "object without components",
                    }),
                }
            }
            Value::Array(items) => Ok(ResponseShape::Bare(parse_nodes(&items)?)),
            Value::Null => Err(RemoteError::UnrecognizedShape { found: "null" }),
            Value::Bool(_) => Err(RemoteError::UnrecognizedShape { found: "boolean" }),
            Value::Number(_) => Err(RemoteError::UnrecognizedShape { found: "number" }),
            Value::String(_) => Err(RemoteError::UnrecognizedShape { found: "string" }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResponseShape::Document(_) => "document",
            ResponseShape::Bare(_) => "bare",
            ResponseShape::Nested { .. } => "nested",
        }
    }

    pub fn into_document(self) -> Document {
        let nodes = match self {
            ResponseShape::Document(nodes) | ResponseShape::Bare(nodes) => nodes,
            ResponseShape::Nested { components, .. } => components,
        };
        Document::from_nodes(nodes)
    }
}

fn parse_nodes(items: &[Value]) -> Result<Vec<Node>, RemoteError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<Node>(item.clone())
                .map_err(|e| RemoteError::InvalidBody(format!("component {}: {}", i, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;
    use serde_json::json;

    #[test]
    fn document_shape() {
        let shape = ResponseShape::classify(json!({
            "components": [{ "type": "button", "props": { "text": "Go" } }]
        }))
        .unwrap();
        assert_eq!(shape.name(), "document");
        let doc = shape.into_document();
        assert_eq!(doc.get(0).unwrap().kind, NodeKind::Button);
    }

    #[test]
    fn bare_array_shape() {
        let shape = ResponseShape::classify(json!([{ "type": "hero" }, { "type": "footer" }])).unwrap();
        assert_eq!(shape.name(), "bare");
        assert_eq!(shape.into_document().kinds(), vec!["hero", "footer"]);
    }

    #[test]
    fn nested_shape() {
        let shape = ResponseShape::classify(json!({
            "status": "ok",
            "data": { "components": [{ "type": "card" }] }
        }))
        .unwrap();
        match &shape {
            ResponseShape::Nested { key, components } => {
                assert_eq!(key, "data");
                assert_eq!(components.len(), 1);
            }
            other => panic!("expected nested, got {:?}", other),
        }
    }

    #[test]
    fn top_level_components_take_precedence() {
        let shape = ResponseShape::classify(json!({
            "components": [{ "type": "hero" }],
            "data": { "components": [{ "type": "footer" }] }
        }))
        .unwrap();
        assert_eq!(shape.name(), "document");
    }

    #[test]
    fn empty_components_is_success() {
        let doc = ResponseShape::classify(json!({ "components": [] }))
            .unwrap()
            .into_document();
        assert!(doc.is_empty());
    }

    #[test]
    fn unrecognized_shapes_are_errors() {
        assert!(matches!(
            ResponseShape::classify(json!({ "message": "hi" })),
            Err(RemoteError::UnrecognizedShape { .. })
        ));
        assert!(matches!(
            ResponseShape::classify(Value::Null),
            Err(RemoteError::UnrecognizedShape { found: "null" })
        ));
    }

    #[test]
    fn malformed_node_is_invalid_body() {
        let err = ResponseShape::classify(json!({ "components": [{ "props": {} }] })).unwrap_err();
        assert!(matches!(err, RemoteError::InvalidBody(_)));
    }
}
