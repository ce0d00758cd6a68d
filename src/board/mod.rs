//! Board module for corkboard.
//!
//! This module provides the message-board domain:
//! - Board documents with embedded threads and replies
//! - Thread posting, listing, and password-authorized deletion
//! - Reply posting, redaction-style deletion, and thread bumping
//! - Abuse reporting for threads and replies
//! - Delete-password hashing

pub mod password;
mod store;
mod types;

pub use store::{BoardStore, DeleteOutcome, REPLY_PREVIEW_LIMIT, THREAD_LIST_LIMIT};
pub use types::{
    Board, NewReply, NewThread, Reply, ReplyView, Thread, ThreadView, DELETED_TEXT,
};
