//! Board store service for corkboard.
//!
//! This module provides the high-level operations over boards, threads, and
//! replies: posting, listing, reporting, and password-authorized deletion.
//! Arguments arrive already validated by the caller. Every mutation is a
//! read-modify-write of one board document, serialized per board name by a
//! lock registry; reads take no lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use super::password::{hash_password, verify_password};
use super::types::{Board, NewReply, NewThread, Reply, ReplyView, Thread, ThreadView};
use crate::db::{BoardRepository, Database};
use crate::{CorkboardError, Result};

/// Maximum number of threads returned by a board listing.
pub const THREAD_LIST_LIMIT: usize = 10;

/// Maximum number of replies included per thread in a board listing.
pub const REPLY_PREVIEW_LIMIT: usize = 3;

/// Outcome of a password-authorized delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Password matched; the delete was applied.
    Deleted,
    /// Password did not match; nothing was modified.
    IncorrectPassword,
}

/// Registry handing out one mutation lock per board name.
///
/// Locks are created on first use and kept for the life of the store.
#[derive(Debug, Default)]
struct BoardLocks {
    inner: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl BoardLocks {
    /// Acquire the mutation lock for a board name.
    async fn acquire(&self, name: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().await;
            locks
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

/// Service for board, thread, and reply operations.
pub struct BoardStore {
    db: Database,
    locks: BoardLocks,
}

impl BoardStore {
    /// Create a new BoardStore over the given database.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            locks: BoardLocks::default(),
        }
    }

    /// Post a new thread, creating the board on first use.
    ///
    /// Returns the created thread's public view, including its generated id.
    pub async fn post_thread(
        &self,
        board_name: &str,
        new_thread: &NewThread,
    ) -> Result<ThreadView> {
        let _guard = self.locks.acquire(board_name).await;

        let repo = BoardRepository::new(self.db.pool());
        let mut board = match repo.get(board_name).await? {
            Some(board) => board,
            None => {
                tracing::debug!(board = board_name, "creating board on first post");
                Board::new(board_name)
            }
        };

        let hash = hash_password(&new_thread.delete_password)?;
        let thread = Thread::new(new_thread.text.clone(), hash);
        let view = thread.detail();
        board.threads.push(thread);

        repo.save(&board).await?;
        Ok(view)
    }

    /// Mark a thread as reported. Idempotent.
    pub async fn report_thread(&self, board_name: &str, thread_id: Uuid) -> Result<()> {
        let _guard = self.locks.acquire(board_name).await;

        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .get(board_name)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("board".to_string()))?;
        let thread = board
            .thread_mut(thread_id)
            .ok_or_else(|| CorkboardError::NotFound("thread".to_string()))?;

        thread.reported = true;

        repo.save(&board).await?;
        Ok(())
    }

    /// Delete a thread after verifying its delete password.
    ///
    /// A password mismatch is reported as an outcome, not an error, and
    /// leaves the board unmodified.
    pub async fn delete_thread(
        &self,
        board_name: &str,
        thread_id: Uuid,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let _guard = self.locks.acquire(board_name).await;

        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .get(board_name)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("board".to_string()))?;
        let thread = board
            .thread(thread_id)
            .ok_or_else(|| CorkboardError::NotFound("thread".to_string()))?;

        if !verify_password(password, &thread.delete_password)? {
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        board.remove_thread(thread_id);

        repo.save(&board).await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// List the most recently bumped threads of a board.
    ///
    /// An unknown board yields an empty list, not an error. Returns at most
    /// THREAD_LIST_LIMIT threads, each carrying at most REPLY_PREVIEW_LIMIT
    /// of its newest replies.
    pub async fn list_threads(&self, board_name: &str) -> Result<Vec<ThreadView>> {
        let repo = BoardRepository::new(self.db.pool());
        let board = match repo.get(board_name).await? {
            Some(board) => board,
            None => return Ok(Vec::new()),
        };

        Ok(board.recent_threads(THREAD_LIST_LIMIT, REPLY_PREVIEW_LIMIT))
    }

    /// Get one thread with all of its replies in insertion order.
    pub async fn get_thread(&self, board_name: &str, thread_id: Uuid) -> Result<ThreadView> {
        let repo = BoardRepository::new(self.db.pool());
        let board = repo
            .get(board_name)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("board".to_string()))?;
        let thread = board
            .thread(thread_id)
            .ok_or_else(|| CorkboardError::NotFound("thread".to_string()))?;

        Ok(thread.detail())
    }

    /// Post a reply to a thread, bumping the thread to the reply's creation
    /// time.
    ///
    /// Returns the created reply's public view.
    pub async fn post_reply(
        &self,
        board_name: &str,
        thread_id: Uuid,
        new_reply: &NewReply,
    ) -> Result<ReplyView> {
        let _guard = self.locks.acquire(board_name).await;

        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .get(board_name)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("board".to_string()))?;
        let thread = board
            .thread_mut(thread_id)
            .ok_or_else(|| CorkboardError::NotFound("thread".to_string()))?;

        let hash = hash_password(&new_reply.delete_password)?;
        let reply = Reply::new(new_reply.text.clone(), hash);
        let view = ReplyView::from(&reply);
        thread.push_reply(reply);

        repo.save(&board).await?;
        Ok(view)
    }

    /// Mark a reply as reported. Idempotent.
    pub async fn report_reply(
        &self,
        board_name: &str,
        thread_id: Uuid,
        reply_id: Uuid,
    ) -> Result<()> {
        let _guard = self.locks.acquire(board_name).await;

        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .get(board_name)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("board".to_string()))?;
        let thread = board
            .thread_mut(thread_id)
            .ok_or_else(|| CorkboardError::NotFound("thread".to_string()))?;
        let reply = thread
            .reply_mut(reply_id)
            .ok_or_else(|| CorkboardError::NotFound("reply".to_string()))?;

        reply.reported = true;

        repo.save(&board).await?;
        Ok(())
    }

    /// Redact a reply after verifying its delete password.
    ///
    /// A password mismatch is reported as an outcome, not an error. On a
    /// match the reply text becomes the deletion placeholder; the reply and
    /// its id stay in the thread.
    pub async fn delete_reply(
        &self,
        board_name: &str,
        thread_id: Uuid,
        reply_id: Uuid,
        password: &str,
    ) -> Result<DeleteOutcome> {
        let _guard = self.locks.acquire(board_name).await;

        let repo = BoardRepository::new(self.db.pool());
        let mut board = repo
            .get(board_name)
            .await?
            .ok_or_else(|| CorkboardError::NotFound("board".to_string()))?;
        let thread = board
            .thread_mut(thread_id)
            .ok_or_else(|| CorkboardError::NotFound("thread".to_string()))?;
        let reply = thread
            .reply_mut(reply_id)
            .ok_or_else(|| CorkboardError::NotFound("reply".to_string()))?;

        if !verify_password(password, &reply.delete_password)? {
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        reply.redact();

        repo.save(&board).await?;
        Ok(DeleteOutcome::Deleted)
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore").finish()
    }
}
