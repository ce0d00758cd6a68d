//! Reply handlers for Web API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::board::{DeleteOutcome, NewReply};
use crate::web::dto::{
    CreateReplyRequest, DeleteReplyRequest, ReplyQuery, ReplyResponse, ReportReplyRequest,
    ThreadResponse,
};
use crate::web::error::ApiError;
use crate::web::extract::FormOrJson;
use crate::web::handlers::{parse_id, AppState};

/// POST /api/replies/:board - Add a reply to a thread.
///
/// Bumps the thread to the top of the board listing.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<CreateReplyRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    // Validate input
    if req.text.trim().is_empty() {
        return Err(ApiError::bad_request("text is required"));
    }
    if req.delete_password.is_empty() {
        return Err(ApiError::bad_request("delete_password is required"));
    }

    let new_reply = NewReply::new(req.text, req.delete_password);
    let view = state
        .store
        .post_reply(&board, req.thread_id, &new_reply)
        .await?;

    Ok(Json(ReplyResponse::from(view)))
}

/// GET /api/replies/:board - Fetch a thread with all of its replies.
pub async fn get_replies(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ReplyQuery>,
) -> Result<Json<ThreadResponse>, ApiError> {
    let raw = query
        .thread_id
        .ok_or_else(|| ApiError::bad_request("thread_id is required"))?;
    let thread_id = parse_id(&raw, "thread_id")?;

    let view = state.store.get_thread(&board, thread_id).await?;
    Ok(Json(ThreadResponse::from(view)))
}

/// PUT /api/replies/:board - Report a reply.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    state
        .store
        .report_reply(&board, req.thread_id, req.reply_id)
        .await?;
    Ok("reported")
}

/// DELETE /api/replies/:board - Delete a reply.
///
/// The reply stays in the thread with its text replaced by the deletion
/// placeholder; its id and position do not change.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    FormOrJson(req): FormOrJson<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    let outcome = state
        .store
        .delete_reply(&board, req.thread_id, req.reply_id, &req.delete_password)
        .await?;

    Ok(match outcome {
        DeleteOutcome::Deleted => "success",
        DeleteOutcome::IncorrectPassword => "incorrect password",
    })
}
