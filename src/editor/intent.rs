use serde::Deserialize;

use crate::editor::mvi::Intent;
use crate::model::Document;
use crate::render::OutputMode;

/// A property value as typed by the user.
///
/// Lists arrive either as an array or as comma-delimited text; both are
/// reconciled to one representation before they reach the document.
/// Bare JSON numbers and booleans are accepted as well.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropInput {
    List(Vec<String>),
    Number(f64),
    Flag(bool),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// A generation finished; its document replaces the current one wholesale.
    ReplaceDocument {
        prompt: String,
        document: Document,
        status: String,
    },
    Clear,
    SetMode(OutputMode),
    Select {
        index: usize,
    },
    SetProperty {
        index: usize,
        name: String,
        value: PropInput,
    },
    /// Add an empty-valued property by name.
    AddProperty {
        index: usize,
        name: String,
    },
    /// First step of a confirmed removal.
    RequestRemove {
        index: usize,
    },
    ConfirmRemove,
    CancelRemove,
    /// Removal the client has already confirmed with the user.
    RemoveNode {
        index: usize,
    },
    SetStatus(String),
}

impl Intent for EditorIntent {}
