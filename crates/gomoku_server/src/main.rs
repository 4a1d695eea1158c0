//! Gomoku HTTP server.

use anyhow::Result;
use clap::Parser;
use gomoku_server::cli::Cli;
use gomoku_server::{GameSession, router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    info!(?config, "Starting gomoku server");

    let session = GameSession::new(*config.board_size(), config.opponent().difficulty())?;
    let app = router(Arc::new(session));

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());
    info!("Endpoints: GET /api/state, POST /api/move");

    axum::serve(listener, app).await?;

    Ok(())
}
