//! API handlers for the Web API.

use uuid::Uuid;

use crate::board::BoardStore;
use crate::db::Database;
use crate::web::error::ApiError;

pub mod replies;
pub mod threads;

pub use replies::*;
pub use threads::*;

/// Application state shared across handlers.
pub struct AppState {
    /// Board store backing every handler.
    pub store: BoardStore,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database) -> Self {
        Self {
            store: BoardStore::new(db),
        }
    }
}

/// Parse an id supplied as a query string value.
pub(crate) fn parse_id(raw: &str, field: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("invalid {}", field)))
}
