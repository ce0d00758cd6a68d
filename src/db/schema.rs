//! Database schema and migrations for corkboard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - board documents
    r#"
-- Board documents. Each board stores its threads and replies embedded in
-- one JSON document keyed by board name.
CREATE TABLE boards (
    name        TEXT PRIMARY KEY,
    doc         TEXT NOT NULL,           -- serialized Board document
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_boards_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE boards"));
        assert!(first.contains("name"));
        assert!(first.contains("doc"));
    }
}
