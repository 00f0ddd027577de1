//! HTTP server command for the postkeep API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use postkeep_server::db::create_pool;
use postkeep_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// SQLite database URL; the file is created on first run
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://postkeep.db"
    )]
    pub database_url: String,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting postkeep server on {}", args.bind);

    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to open database")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown signal
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
