use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::{update, Action};
use crate::page::render_page;
use crate::render::View;
use crate::state::AppState;

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// GET /
/// Opens a page session and serves the form with its initial render.
pub async fn page_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (id, form) = state.sessions.open().await;
    Ok(Html(render_page(id, &state.catalog, &form)?))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<View>, AppError> {
    let catalog = state.catalog.clone();
    state
        .sessions
        .with_session(id, |form| View::build(form, &catalog, Vec::new()))
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/sessions/:id/actions
pub async fn handle_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Action>, JsonRejection>,
) -> Result<Json<View>, AppError> {
    let Json(action) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let catalog = state.catalog.clone();
    let wired = state.contract.wires(&action);
    if !wired {
        debug!(session = %id, action = action.name(), "control absent from page; skipping");
    }
    state
        .sessions
        .with_session(id, move |form| {
            let effects = if wired {
                update(form, action).effects
            } else {
                Vec::new()
            };
            View::build(form, &catalog, effects)
        })
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_close(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.close(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}
