use crate::editor::intent::EditorIntent;
use crate::editor::mvi::Reducer;
use crate::editor::reconcile::reconcile;
use crate::editor::state::SessionState;
use crate::model::{Document, PropValue};

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = SessionState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::ReplaceDocument {
                prompt,
                document,
                status,
            } => SessionState {
                prompt,
                document,
                mode: state.mode,
                selected: None,
                pending_removal: None,
                status: Some(status),
            },
            EditorIntent::Clear => SessionState {
                prompt: String::new(),
                document: Document::new(),
                mode: state.mode,
                selected: None,
                pending_removal: None,
                status: Some("Cleared".to_string()),
            },
            EditorIntent::SetMode(mode) => SessionState { mode, ..state },
            EditorIntent::Select { index } => {
                if index < state.document.len() {
                    SessionState {
                        selected: Some(index),
                        status: None,
                        ..state
                    }
                } else {
                    missing_node(state, index)
                }
            }
            EditorIntent::SetProperty { index, name, value } => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return with_status(state, "Property name must not be empty");
                }
                let mut state = state;
                match state.document.get_mut(index) {
                    Some(node) => {
                        let reconciled = reconcile(node.props.get(&name), value);
                        node.props.insert(name, reconciled);
                        node.normalize();
                        state.status = None;
                        state
                    }
                    None => missing_node(state, index),
                }
            }
            EditorIntent::AddProperty { index, name } => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return with_status(state, "Property name must not be empty");
                }
                let exists = match state.document.get(index) {
                    Some(node) => node.props.contains_key(&name),
                    None => return missing_node(state, index),
                };
                if exists {
                    let message = format!("Property '{}' already exists", name);
                    return with_status(state, &message);
                }
                let mut state = state;
                if let Some(node) = state.document.get_mut(index) {
                    node.props.insert(name, PropValue::text(""));
                }
                state.selected = Some(index);
                state.status = None;
                state
            }
            EditorIntent::RequestRemove { index } => match state.document.get(index) {
                Some(node) => {
                    let status = format!("Remove {} component?", node.kind);
                    SessionState {
                        pending_removal: Some(index),
                        status: Some(status),
                        ..state
                    }
                }
                None => missing_node(state, index),
            },
            EditorIntent::ConfirmRemove => match state.pending_removal {
                Some(index) => remove_node(state, index),
                None => state,
            },
            EditorIntent::CancelRemove => SessionState {
                pending_removal: None,
                status: None,
                ..state
            },
            EditorIntent::RemoveNode { index } => remove_node(state, index),
            EditorIntent::SetStatus(status) => SessionState {
                status: Some(status),
                ..state
            },
        }
    }
}

fn with_status(state: SessionState, status: &str) -> SessionState {
    SessionState {
        status: Some(status.to_string()),
        ..state
    }
}

fn missing_node(state: SessionState, index: usize) -> SessionState {
    let status = format!("No component at index {}", index);
    with_status(state, &status)
}

fn remove_node(mut state: SessionState, index: usize) -> SessionState {
    let removed = match state.document.remove(index) {
        Some(node) => node,
        None => return missing_node(state, index),
    };

    state.selected = match state.selected {
        Some(s) if s == index => None,
        Some(s) if s > index => Some(s - 1),
        other => other,
    };
    state.pending_removal = None;
    state.status = Some(format!("Removed {} component", removed.kind));
    state
}
