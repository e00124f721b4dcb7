//! roster-server: HTTP service for user records
//!
//! Exposes list, lookup and create over a single `users` table.
//! Storage sits behind the [`db::UserStore`] trait so the router can run
//! against PostgreSQL or the in-process store.

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use error::{Result, ServerError};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{NewUser, User};
pub use state::AppState;
