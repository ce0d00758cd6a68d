//! Thread handlers for Web API.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::board::{DeleteOutcome, NewThread};
use crate::web::dto::{
    CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest, ThreadQuery, ThreadResponse,
};
use crate::web::error::ApiError;
use crate::web::extract::FormOrJson;
use crate::web::handlers::{parse_id, AppState};

/// POST /api/threads/:board - Create a new thread.
///
/// Creates the board on first use.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<CreateThreadRequest>,
) -> Result<Json<ThreadResponse>, ApiError> {
    // Validate input
    if req.text.trim().is_empty() {
        return Err(ApiError::bad_request("text is required"));
    }
    if req.delete_password.is_empty() {
        return Err(ApiError::bad_request("delete_password is required"));
    }

    let new_thread = NewThread::new(req.text, req.delete_password);
    let view = state.store.post_thread(&board, &new_thread).await?;

    Ok(Json(ThreadResponse::from(view)))
}

/// GET /api/threads/:board - List recent threads, or fetch one by id.
///
/// Without `thread_id` this returns the ten most recently bumped threads,
/// each carrying its three newest replies. With `thread_id` it returns that
/// thread with every reply.
pub async fn get_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Response, ApiError> {
    match query.thread_id {
        Some(raw) => {
            let thread_id = parse_id(&raw, "thread_id")?;
            let view = state.store.get_thread(&board, thread_id).await?;
            Ok(Json(ThreadResponse::from(view)).into_response())
        }
        None => {
            let views = state.store.list_threads(&board).await?;
            let responses: Vec<ThreadResponse> =
                views.into_iter().map(ThreadResponse::from).collect();
            Ok(Json(responses).into_response())
        }
    }
}

/// PUT /api/threads/:board - Report a thread.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    state.store.report_thread(&board, req.thread_id).await?;
    Ok("reported")
}

/// DELETE /api/threads/:board - Delete a thread.
///
/// Requires the password chosen at creation. A wrong password answers
/// 200 with the distinguished `"incorrect password"` body.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    let outcome = state
        .store
        .delete_thread(&board, req.thread_id, &req.delete_password)
        .await?;

    Ok(match outcome {
        DeleteOutcome::Deleted => "success",
        DeleteOutcome::IncorrectPassword => "incorrect password",
    })
}
