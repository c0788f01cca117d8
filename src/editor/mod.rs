//! Property editor, expressed as a pure reducer over [`SessionState`].
//!
//! Generation results, property edits and node removals all arrive as
//! [`EditorIntent`]s; nothing mutates a session except [`EditorReducer`].

mod intent;
mod mvi;
mod reconcile;
mod reducer;
mod state;

pub use intent::{EditorIntent, PropInput};
pub use mvi::{Intent, Reducer, State};
pub use reconcile::reconcile;
pub use reducer::EditorReducer;
pub use state::SessionState;
