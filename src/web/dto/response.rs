//! Response DTOs for Web API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::board::{ReplyView, ThreadView};

/// Thread as exposed over the wire.
///
/// Built from a [`ThreadView`], so moderation fields never reach clients.
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Replies included with the thread.
    pub replies: Vec<ReplyResponse>,
}

impl From<ThreadView> for ThreadResponse {
    fn from(view: ThreadView) -> Self {
        Self {
            id: view.id,
            text: view.text,
            created_on: view.created_on,
            bumped_on: view.bumped_on,
            replies: view.replies.into_iter().map(ReplyResponse::from).collect(),
        }
    }
}

/// Reply as exposed over the wire.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Reply text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<ReplyView> for ReplyResponse {
    fn from(view: ReplyView) -> Self {
        Self {
            id: view.id,
            text: view.text,
            created_on: view.created_on,
        }
    }
}
