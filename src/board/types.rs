//! Board model for corkboard.
//!
//! This module defines the Board document and its embedded Thread and Reply
//! entities, together with the public view types handed to the web layer.
//! A Board owns its threads exclusively and a Thread owns its replies; the
//! whole tree serializes as one document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Replacement text for a deleted reply. Replies are never removed from a
/// thread, only redacted.
pub const DELETED_TEXT: &str = "[deleted]";

/// Board document owning an ordered list of threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Board name (unique).
    pub name: String,
    /// Threads in insertion order. Listings re-sort by bump time.
    pub threads: Vec<Thread>,
}

impl Board {
    /// Create an empty board.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            threads: Vec::new(),
        }
    }

    /// Find a thread by id.
    pub fn thread(&self, id: Uuid) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id == id)
    }

    /// Find a thread by id, mutably.
    pub fn thread_mut(&mut self, id: Uuid) -> Option<&mut Thread> {
        self.threads.iter_mut().find(|t| t.id == id)
    }

    /// Remove a thread by id.
    ///
    /// Returns true if a thread was removed, false if no thread matched.
    pub fn remove_thread(&mut self, id: Uuid) -> bool {
        let before = self.threads.len();
        self.threads.retain(|t| t.id != id);
        self.threads.len() < before
    }

    /// Most recently bumped threads, as previews.
    ///
    /// Threads are sorted by bumped_on descending with a stable sort, so
    /// threads bumped at the same instant keep their insertion order. The
    /// result is truncated to `thread_limit` entries, each carrying at most
    /// `reply_limit` of its newest replies.
    pub fn recent_threads(&self, thread_limit: usize, reply_limit: usize) -> Vec<ThreadView> {
        let mut threads: Vec<&Thread> = self.threads.iter().collect();
        threads.sort_by(|a, b| b.bumped_on.cmp(&a.bumped_on));
        threads
            .into_iter()
            .take(thread_limit)
            .map(|t| t.preview(reply_limit))
            .collect()
    }
}

/// Thread entity embedded in a board document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Unique thread id, generated at creation.
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Stored delete password (Argon2 hash).
    pub delete_password: String,
    /// Whether the thread has been reported.
    pub reported: bool,
    /// Creation timestamp, set once.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp. Equals created_on until a reply arrives.
    pub bumped_on: DateTime<Utc>,
    /// Replies in insertion order.
    pub replies: Vec<Reply>,
}

impl Thread {
    /// Create a new thread with a generated id.
    ///
    /// `delete_password` is the already-hashed stored form. created_on and
    /// bumped_on are set to the same instant.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            delete_password: delete_password.into(),
            reported: false,
            created_on: now,
            bumped_on: now,
            replies: Vec::new(),
        }
    }

    /// Find a reply by id.
    pub fn reply(&self, id: Uuid) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == id)
    }

    /// Find a reply by id, mutably.
    pub fn reply_mut(&mut self, id: Uuid) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == id)
    }

    /// Append a reply and bump the thread to the reply's creation time.
    pub fn push_reply(&mut self, reply: Reply) {
        self.bumped_on = reply.created_on;
        self.replies.push(reply);
    }

    /// Public view with the newest replies only.
    ///
    /// Replies are sorted by created_on descending and truncated to
    /// `reply_limit` entries.
    pub fn preview(&self, reply_limit: usize) -> ThreadView {
        let mut replies: Vec<&Reply> = self.replies.iter().collect();
        replies.sort_by(|a, b| b.created_on.cmp(&a.created_on));
        ThreadView {
            id: self.id,
            text: self.text.clone(),
            created_on: self.created_on,
            bumped_on: self.bumped_on,
            replies: replies
                .into_iter()
                .take(reply_limit)
                .map(ReplyView::from)
                .collect(),
        }
    }

    /// Public view with all replies in insertion order.
    pub fn detail(&self) -> ThreadView {
        ThreadView {
            id: self.id,
            text: self.text.clone(),
            created_on: self.created_on,
            bumped_on: self.bumped_on,
            replies: self.replies.iter().map(ReplyView::from).collect(),
        }
    }
}

/// Reply entity embedded in a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Unique reply id, generated at creation.
    pub id: Uuid,
    /// Reply text. Becomes DELETED_TEXT when the reply is deleted.
    pub text: String,
    /// Stored delete password (Argon2 hash).
    pub delete_password: String,
    /// Whether the reply has been reported.
    pub reported: bool,
    /// Creation timestamp, set once.
    pub created_on: DateTime<Utc>,
}

impl Reply {
    /// Create a new reply with a generated id.
    ///
    /// `delete_password` is the already-hashed stored form.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            delete_password: delete_password.into(),
            reported: false,
            created_on: Utc::now(),
        }
    }

    /// Redact the reply text. The reply and its id stay in the thread.
    pub fn redact(&mut self) {
        self.text = DELETED_TEXT.to_string();
    }
}

/// Data for creating a new thread. Carries the caller's cleartext password;
/// the service hashes it before the thread is stored.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Thread text.
    pub text: String,
    /// Cleartext delete password.
    pub delete_password: String,
}

impl NewThread {
    /// Create new-thread data.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

/// Data for creating a new reply. Carries the caller's cleartext password;
/// the service hashes it before the reply is stored.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// Reply text.
    pub text: String,
    /// Cleartext delete password.
    pub delete_password: String,
}

impl NewReply {
    /// Create new-reply data.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

/// Public projection of a thread. Never carries the stored password or the
/// reported flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadView {
    /// Thread id.
    pub id: Uuid,
    /// Thread text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last bump timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Replies included in this view.
    pub replies: Vec<ReplyView>,
}

/// Public projection of a reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyView {
    /// Reply id.
    pub id: Uuid,
    /// Reply text.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}
