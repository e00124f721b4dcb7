//! Apply the schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::db::{migrate, PoolConfig};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = super::require_database_url(args.database_url)?;

    let pool = PoolConfig {
        max_connections: 1,
        ..PoolConfig::default()
    }
    .connect(&database_url)
    .await
        .context("Failed to connect to database")?;

    migrate::run(&pool)
        .await
        .context("Failed to apply migrations")?;

    pool.close().await;
    Ok(())
}
