//! roster CLI - serve and migrate the user record service

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    author,
    version,
    about = "HTTP service for user records backed by PostgreSQL"
)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (applies migrations first)
    Serve(commands::serve::ServeArgs),
    /// Apply database migrations and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so clap's env fallbacks can see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["roster", "serve", "--in-memory"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };

        assert_eq!(args.bind.port(), 8000);
        assert_eq!(args.request_timeout, 30);
        assert_eq!(args.acquire_timeout, 5);
        assert!(args.in_memory);
        assert!(!args.cors_permissive);
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        for flag in ["--request-timeout", "--acquire-timeout"] {
            let result = Cli::try_parse_from(["roster", "serve", "--in-memory", flag, "0"]);
            assert!(result.is_err(), "{} 0 was accepted", flag);
        }

        let cli = Cli::try_parse_from(["roster", "serve", "--request-timeout", "1"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.request_timeout, 1);
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let result = Cli::try_parse_from(["roster", "serve", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }
}
