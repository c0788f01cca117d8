//! Interpretation of edited property text.
//!
//! Never fails: anything that does not classify cleanly is kept as text.

use crate::editor::intent::PropInput;
use crate::model::{parse_number, split_list, PropValue, QaPair};

/// Reconcile an edited value against the shape of the value it replaces.
pub fn reconcile(previous: Option<&PropValue>, input: PropInput) -> PropValue {
    match input {
        PropInput::List(items) => PropValue::List(
            items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        ),
        PropInput::Number(n) => PropValue::Number(n),
        PropInput::Flag(flag) => PropValue::Text(flag.to_string()),
        PropInput::Raw(raw) => reconcile_raw(previous, &raw),
    }
}

fn reconcile_raw(previous: Option<&PropValue>, raw: &str) -> PropValue {
    match previous {
        Some(prev) if looks_numeric(prev) => match parse_number(raw) {
            Some(n) => PropValue::Number(n),
            None => PropValue::Text(raw.to_string()),
        },
        Some(PropValue::List(_)) => PropValue::List(split_list(raw)),
        Some(PropValue::Pairs(_)) => parse_pairs(raw).unwrap_or_else(|| general(raw)),
        _ => general(raw),
    }
}

fn looks_numeric(value: &PropValue) -> bool {
    match value {
        PropValue::Number(_) => true,
        PropValue::Text(t) => parse_number(t).is_some(),
        _ => false,
    }
}

fn general(raw: &str) -> PropValue {
    if raw.contains(',') {
        PropValue::List(split_list(raw))
    } else {
        PropValue::Text(raw.to_string())
    }
}

/// `question | answer` items separated by `;` or newlines.
fn parse_pairs(raw: &str) -> Option<PropValue> {
    let items: Vec<&str> = raw
        .split(|c| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        return None;
    }

    items
        .into_iter()
        .map(|item| {
            item.split_once('|')
                .map(|(q, a)| QaPair::new(q.trim(), a.trim()))
        })
        .collect::<Option<Vec<_>>>()
        .map(PropValue::Pairs)
}
