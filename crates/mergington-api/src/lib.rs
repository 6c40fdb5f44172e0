//! HTTP API for the Mergington High School activity signup.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /`** redirecting to the static landing page
//! - **`GET /activities`** returning every activity with its roster
//! - **`POST /activities/{activity_name}/signup?email=`** adding a student
//!   to an activity after the duplicate, capacity, and email checks
//! - **`/static`** serving the landing page assets from disk
//!
//! # Architecture
//!
//! The API holds a single in-memory [`ActivityDirectory`] inside
//! [`AppState`]. Nothing is persisted; a restart returns to the seed data.
//!
//! [`ActivityDirectory`]: mergington_directory::ActivityDirectory

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ApiConfig, ConfigError, LoggingConfig, ServerConfig};
pub use error::ApiError;
pub use router::build_router;
pub use server::{bind_listener, serve, start_server, ServerError};
pub use state::AppState;
