pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the database URL from the flag or the `DATABASE_URL` env
fn require_database_url(database_url: Option<String>) -> Result<String> {
    database_url.context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
}
