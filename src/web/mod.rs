//! Web API module for corkboard.
//!
//! This module provides the REST API over the board store: thread and
//! reply CRUD, reporting, and password-checked deletion.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use extract::FormOrJson;
pub use handlers::AppState;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
