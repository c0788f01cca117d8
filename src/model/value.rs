//! Property values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single question/answer entry (used by the FAQ kind).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    #[serde(alias = "q")]
    pub question: String,
    #[serde(alias = "a")]
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Value stored in a node's property bag.
///
/// Serialized as plain JSON: a string, a number, an array of strings, or an
/// array of `{question, answer}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum PropValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
    Pairs(Vec<QaPair>),
}

impl PropValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropValue::Text(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view: numbers directly, text when it parses as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            PropValue::Text(s) => parse_number(s),
            _ => None,
        }
    }

    /// List view: lists directly, text split on commas.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            PropValue::List(items) => items.clone(),
            PropValue::Text(s) => split_list(s),
            PropValue::Number(n) => vec![format_number(*n)],
            PropValue::Pairs(pairs) => pairs.iter().map(|p| p.question.clone()).collect(),
        }
    }

    /// Whether this value carries nothing displayable.
    pub fn is_blank(&self) -> bool {
        match self {
            PropValue::Text(s) => s.trim().is_empty(),
            PropValue::Number(n) => !n.is_finite(),
            PropValue::List(items) => items.iter().all(|i| i.trim().is_empty()),
            PropValue::Pairs(pairs) => pairs.is_empty(),
        }
    }

    /// Text shown in an editor input for this value.
    pub fn to_display(&self) -> String {
        match self {
            PropValue::Text(s) => s.clone(),
            PropValue::Number(n) => format_number(*n),
            PropValue::List(items) => items.join(", "),
            PropValue::Pairs(pairs) => pairs
                .iter()
                .map(|p| format!("{} | {}", p.question, p.answer))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }

    /// Short shape name, for the editor and logs.
    pub fn shape(&self) -> &'static str {
        match self {
            PropValue::Text(_) => "text",
            PropValue::Number(_) => "number",
            PropValue::List(_) => "list",
            PropValue::Pairs(_) => "pairs",
        }
    }
}

/// Split a comma-delimited string into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Format a number without a trailing `.0` for integral values.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PropValue::Text(String::new()),
            Value::Bool(b) => PropValue::Text(b.to_string()),
            Value::Number(n) => n
                .as_f64()
                .map(PropValue::Number)
                .unwrap_or_else(|| PropValue::Text(n.to_string())),
            Value::String(s) => PropValue::Text(s),
            Value::Array(items) => {
                let pairs: Option<Vec<QaPair>> = if items.is_empty() {
                    None
                } else {
                    items
                        .iter()
                        .map(|item| serde_json::from_value::<QaPair>(item.clone()).ok())
                        .collect()
                };
                match pairs {
                    Some(pairs) => PropValue::Pairs(pairs),
                    None => PropValue::List(items.into_iter().map(scalar_to_string).collect()),
                }
            }
            Value::Object(_) => PropValue::Text(value.to_string()),
        }
    }
}

impl From<PropValue> for Value {
    fn from(value: PropValue) -> Self {
        match value {
            PropValue::Text(s) => Value::String(s),
            PropValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Value::from(n as i64),
            PropValue::Number(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            PropValue::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
            PropValue::Pairs(pairs) => Value::Array(
                pairs
                    .into_iter()
                    .map(|p| serde_json::json!({ "question": p.question, "answer": p.answer }))
                    .collect(),
            ),
        }
    }
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Text(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Number(f64::from(value))
    }
}

impl From<Vec<String>> for PropValue {
    fn from(value: Vec<String>) -> Self {
        PropValue::List(value)
    }
}

impl From<Vec<QaPair>> for PropValue {
    fn from(value: Vec<QaPair>) -> Self {
        PropValue::Pairs(value)
    }
}
