//! corkboard - Anonymous message board backend
//!
//! Boards, threads and replies kept as documents in a SQLite-backed
//! store, exposed through a REST API.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use board::{BoardStore, DeleteOutcome};
pub use config::Config;
pub use db::Database;
pub use error::{CorkboardError, Result};
pub use web::WebServer;
