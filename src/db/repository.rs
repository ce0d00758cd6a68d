//! Board document repository for corkboard.
//!
//! This module loads and stores whole board documents. A board and all of
//! its threads and replies serialize to a single JSON document keyed by
//! board name; every mutation is a read-modify-write of one document.

use super::DbPool;
use crate::board::Board;
use crate::{CorkboardError, Result};

/// Repository for board document access.
pub struct BoardRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> BoardRepository<'a> {
    /// Create a new BoardRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Load a board document by name.
    pub async fn get(&self, name: &str) -> Result<Option<Board>> {
        let doc: Option<String> = sqlx::query_scalar("SELECT doc FROM boards WHERE name = $1")
            .bind(name)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;

        match doc {
            Some(doc) => {
                let board = serde_json::from_str(&doc)?;
                Ok(Some(board))
            }
            None => Ok(None),
        }
    }

    /// Store a board document, inserting or replacing by name.
    pub async fn save(&self, board: &Board) -> Result<()> {
        let doc = serde_json::to_string(board)?;

        sqlx::query(
            "INSERT INTO boards (name, doc) VALUES ($1, $2)
             ON CONFLICT(name) DO UPDATE SET doc = excluded.doc, updated_at = datetime('now')",
        )
        .bind(&board.name)
        .bind(&doc)
        .execute(self.pool)
        .await
        .map_err(|e| CorkboardError::Database(e.to_string()))?;

        Ok(())
    }

    /// Check if a board exists.
    pub async fn exists(&self, name: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM boards WHERE name = $1)")
            .bind(name)
            .fetch_one(self.pool)
            .await
            .map_err(|e| CorkboardError::Database(e.to_string()))?;
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Reply, Thread};
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_board() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        let board = repo.get("nonexistent").await.unwrap();
        assert!(board.is_none());
    }

    #[tokio::test]
    async fn test_save_and_get_roundtrip() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        let mut board = Board::new("general");
        let mut thread = Thread::new("first thread", "hash-t");
        thread.push_reply(Reply::new("first reply", "hash-r"));
        board.threads.push(thread);

        repo.save(&board).await.unwrap();

        let loaded = repo.get("general").await.unwrap().unwrap();
        assert_eq!(loaded.name, "general");
        assert_eq!(loaded.threads.len(), 1);

        let thread = &loaded.threads[0];
        assert_eq!(thread.text, "first thread");
        assert_eq!(thread.delete_password, "hash-t");
        assert_eq!(thread.replies.len(), 1);
        assert_eq!(thread.replies[0].text, "first reply");
        assert_eq!(thread.id, board.threads[0].id);
        assert_eq!(thread.created_on, board.threads[0].created_on);
        assert_eq!(thread.bumped_on, board.threads[0].bumped_on);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_document() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        let mut board = Board::new("general");
        repo.save(&board).await.unwrap();

        board.threads.push(Thread::new("added later", "hash"));
        repo.save(&board).await.unwrap();

        let loaded = repo.get("general").await.unwrap().unwrap();
        assert_eq!(loaded.threads.len(), 1);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_exists() {
        let db = setup_db().await;
        let repo = BoardRepository::new(db.pool());

        assert!(!repo.exists("general").await.unwrap());

        repo.save(&Board::new("general")).await.unwrap();

        assert!(repo.exists("general").await.unwrap());
        assert!(!repo.exists("other").await.unwrap());
    }
}
