use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::editor::{EditorIntent, EditorReducer, Reducer, SessionState};
use crate::pipeline::{GenerateError, GenerationPipeline, GenerationSource};
use crate::render::{render, OutputMode};
use crate::server::error::ApiError;

/// Shared handler state: one editing session and its generation pipeline.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<SessionState>>,
    pipeline: Arc<GenerationPipeline>,
}

impl AppState {
    pub fn new(pipeline: GenerationPipeline, mode: OutputMode) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState::with_mode(mode))),
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn pipeline(&self) -> &GenerationPipeline {
        &self.pipeline
    }

    pub fn snapshot(&self) -> SessionState {
        self.session.lock().clone()
    }

    pub fn dispatch(&self, intent: EditorIntent) -> SessionState {
        let mut session = self.session.lock();
        let next = EditorReducer::reduce(std::mem::take(&mut *session), intent);
        *session = next.clone();
        next
    }

    /// Dispatch an intent that targets one node, rejecting stale indices.
    pub fn dispatch_on(&self, index: usize, intent: EditorIntent) -> Result<SessionState, ApiError> {
        let mut session = self.session.lock();
        if index >= session.document.len() {
            return Err(ApiError::NodeNotFound { index });
        }
        let next = EditorReducer::reduce(std::mem::take(&mut *session), intent);
        *session = next.clone();
        Ok(next)
    }

    /// Run the pipeline, then swap the result in.
    ///
    /// The session lock is not held while the pipeline awaits, so a failed
    /// or rejected generation leaves the session untouched.
    pub async fn generate(&self, prompt: &str) -> Result<(SessionState, GenerationSource), GenerateError> {
        let generation = self.pipeline.generate(prompt).await?;
        let status = generation.status();
        let state = self.dispatch(EditorIntent::ReplaceDocument {
            prompt: generation.prompt,
            document: generation.document,
            status,
        });
        Ok((state, generation.source))
    }

    pub fn view(&self, session: SessionState, source: Option<GenerationSource>) -> StateView {
        StateView::new(session, self.pipeline.is_busy(), source)
    }
}

/// Session plus its rendering in the current mode.
#[derive(Debug, Serialize)]
pub struct StateView {
    #[serde(flatten)]
    pub session: SessionState,
    pub output: String,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<GenerationSource>,
}

impl StateView {
    pub fn new(session: SessionState, busy: bool, source: Option<GenerationSource>) -> Self {
        let output = render(&session.document, session.mode);
        Self {
            session,
            output,
            busy,
            source,
        }
    }
}
