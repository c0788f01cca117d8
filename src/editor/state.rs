use serde::Serialize;

use crate::editor::mvi::State;
use crate::model::{Document, Node};
use crate::render::OutputMode;

/// Everything one editing session knows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    /// Prompt that produced the current document.
    pub prompt: String,
    pub document: Document,
    pub mode: OutputMode,
    /// Node whose properties are open in the editor panel.
    pub selected: Option<usize>,
    /// Node awaiting a removal confirmation.
    pub pending_removal: Option<usize>,
    /// Latest user-facing status line.
    pub status: Option<String>,
}

impl State for SessionState {}

impl SessionState {
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.and_then(|i| self.document.get(i))
    }
}
