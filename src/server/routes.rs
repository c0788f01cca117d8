use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::editor::{EditorIntent, PropInput};
use crate::render::{export_document, render, OutputMode, EXPORT_FILE_NAME};
use crate::server::error::ApiError;
use crate::server::page::build_index_html;
use crate::server::state::{AppState, StateView};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/state", get(get_state))
        .route("/api/generate", post(generate))
        .route("/api/clear", post(clear))
        .route("/api/mode", put(set_mode))
        .route("/api/render", get(render_output))
        .route("/api/nodes/{index}", get(get_node).delete(delete_node))
        .route("/api/nodes/{index}/props", post(add_property))
        .route("/api/nodes/{index}/props/{name}", put(set_property))
        .route("/api/removal", post(resolve_removal))
        .route("/export", get(export))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct GenerateBody {
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct ModeBody {
    mode: OutputMode,
}

#[derive(Debug, Deserialize)]
struct RenderQuery {
    mode: Option<OutputMode>,
}

#[derive(Debug, Deserialize)]
struct SetPropertyBody {
    value: PropInput,
}

#[derive(Debug, Deserialize)]
struct AddPropertyBody {
    name: String,
}

#[derive(Debug, Deserialize)]
struct DeleteQuery {
    #[serde(default)]
    confirmed: bool,
}

#[derive(Debug, Deserialize)]
struct RemovalBody {
    confirm: bool,
}

async fn index() -> Html<String> {
    Html(build_index_html())
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "uisketch",
        "remote": state.pipeline().remote_endpoint(),
    }))
}

async fn get_state(State(state): State<AppState>) -> Json<StateView> {
    Json(state.view(state.snapshot(), None))
}

async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<StateView>, ApiError> {
    let (session, source) = state.generate(&body.prompt).await?;
    Ok(Json(state.view(session, Some(source))))
}

async fn clear(State(state): State<AppState>) -> Json<StateView> {
    let session = state.dispatch(EditorIntent::Clear);
    Json(state.view(session, None))
}

async fn set_mode(State(state): State<AppState>, Json(body): Json<ModeBody>) -> Json<StateView> {
    let session = state.dispatch(EditorIntent::SetMode(body.mode));
    Json(state.view(session, None))
}

/// Render in any mode without changing the session's mode.
async fn render_output(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Json<Value> {
    let session = state.snapshot();
    let mode = query.mode.unwrap_or(session.mode);
    Json(json!({
        "mode": mode,
        "output": render(&session.document, mode),
    }))
}

async fn get_node(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Value>, ApiError> {
    let session = state.dispatch_on(index, EditorIntent::Select { index })?;
    let node = session
        .document
        .get(index)
        .ok_or(ApiError::NodeNotFound { index })?;
    Ok(Json(json!({ "index": index, "node": node })))
}

async fn set_property(
    State(state): State<AppState>,
    Path((index, name)): Path<(usize, String)>,
    Json(body): Json<SetPropertyBody>,
) -> Result<Json<StateView>, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::InvalidRequest("property name must not be empty".to_string()));
    }
    let session = state.dispatch_on(
        index,
        EditorIntent::SetProperty {
            index,
            name,
            value: body.value,
        },
    )?;
    Ok(Json(state.view(session, None)))
}

async fn add_property(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(body): Json<AddPropertyBody>,
) -> Result<Json<StateView>, ApiError> {
    let name = body.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::InvalidRequest("property name must not be empty".to_string()));
    }
    let session = state.dispatch_on(index, EditorIntent::AddProperty { index, name })?;
    Ok(Json(state.view(session, None)))
}

/// Without `?confirmed=true` this only asks; `POST /api/removal` answers.
async fn delete_node(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<StateView>, ApiError> {
    let intent = if query.confirmed {
        EditorIntent::RemoveNode { index }
    } else {
        EditorIntent::RequestRemove { index }
    };
    let session = state.dispatch_on(index, intent)?;
    Ok(Json(state.view(session, None)))
}

async fn resolve_removal(
    State(state): State<AppState>,
    Json(body): Json<RemovalBody>,
) -> Json<StateView> {
    let intent = if body.confirm {
        EditorIntent::ConfirmRemove
    } else {
        EditorIntent::CancelRemove
    };
    let session = state.dispatch(intent);
    Json(state.view(session, None))
}

async fn export(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.snapshot();
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);
    (
        [
            (CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        export_document(&session.document),
    )
}
