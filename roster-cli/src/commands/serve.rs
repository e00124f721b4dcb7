//! HTTP server command
//!
//! Connects the pool, applies migrations once, then serves until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::db::{
    migrate, MemoryUserStore, PgUserStore, PoolConfig, UserStore, DEFAULT_ACQUIRE_TIMEOUT_SECS,
    DEFAULT_MAX_CONNECTIONS,
};
use roster_server::http::server::DEFAULT_REQUEST_TIMEOUT_SECS;
use roster_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ROSTER_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(
        long,
        env = "ROSTER_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before answering 503
    #[arg(
        long,
        env = "ROSTER_ACQUIRE_TIMEOUT",
        default_value_t = DEFAULT_ACQUIRE_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub acquire_timeout: u64,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "ROSTER_REQUEST_TIMEOUT",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep users in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let users: Arc<dyn UserStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; users are lost on exit");
        Arc::new(MemoryUserStore::new())
    } else {
        let database_url = super::require_database_url(args.database_url)?;

        let pool_config = PoolConfig {
            max_connections: args.max_connections,
            acquire_timeout: Duration::from_secs(args.acquire_timeout),
        };
        let pool = pool_config
            .connect(&database_url)
            .await
            .context("Failed to create database pool")?;

        migrate::run(&pool)
            .await
            .context("Failed to apply migrations")?;

        Arc::new(PgUserStore::new(pool))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(args.request_timeout),
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting roster server on {}", config.bind_addr);

    run_server(AppState::new(users), config)
        .await
        .context("Server error")?;

    Ok(())
}
