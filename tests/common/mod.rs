//! Test helpers for Web API tests.
//!
//! Provides an axum-test server backed by an in-memory database.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use corkboard::web::{create_router, AppState};
use corkboard::Database;

/// Create a test server with an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone()));
    let router = create_router(app_state, &[]);

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Post a thread and return the response body.
pub async fn post_thread(server: &TestServer, board: &str, text: &str, password: &str) -> Value {
    let response = server
        .post(&format!("/api/threads/{}", board))
        .json(&json!({
            "text": text,
            "delete_password": password,
        }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

/// Post a reply and return the response body.
pub async fn post_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> Value {
    let response = server
        .post(&format!("/api/replies/{}", board))
        .json(&json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password,
        }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}
