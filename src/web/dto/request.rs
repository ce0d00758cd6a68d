//! Request DTOs for Web API.

use serde::Deserialize;
use uuid::Uuid;

// ============================================================================
// Thread Requests
// ============================================================================

/// Thread creation request.
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    /// Thread text.
    pub text: String,
    /// Password authorizing later deletion.
    pub delete_password: String,
}

/// Thread report request.
#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    /// Thread to report.
    pub thread_id: Uuid,
}

/// Thread deletion request.
#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    /// Thread to delete.
    pub thread_id: Uuid,
    /// Password chosen when the thread was created.
    pub delete_password: String,
}

// ============================================================================
// Reply Requests
// ============================================================================

/// Reply creation request.
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    /// Thread being replied to.
    pub thread_id: Uuid,
    /// Reply text.
    pub text: String,
    /// Password authorizing later deletion.
    pub delete_password: String,
}

/// Reply report request.
#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    /// Thread containing the reply.
    pub thread_id: Uuid,
    /// Reply to report.
    pub reply_id: Uuid,
}

/// Reply deletion request.
#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    /// Thread containing the reply.
    pub thread_id: Uuid,
    /// Reply to delete.
    pub reply_id: Uuid,
    /// Password chosen when the reply was created.
    pub delete_password: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for GET /api/threads/:board.
///
/// The id stays a string here; the handler parses it and answers a
/// controlled 400 on malformed values.
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    /// Thread to fetch; omitted for the board listing.
    #[serde(default)]
    pub thread_id: Option<String>,
}

/// Query parameters for GET /api/replies/:board.
#[derive(Debug, Deserialize)]
pub struct ReplyQuery {
    /// Thread whose replies to fetch.
    #[serde(default)]
    pub thread_id: Option<String>,
}
