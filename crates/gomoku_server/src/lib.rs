//! Gomoku server library - one game of five-in-a-row over HTTP.
//!
//! # Architecture
//!
//! - **Session**: owns the single [`gomoku_engine::Game`] behind a lock
//! - **Server**: axum router exposing `GET /api/state` and `POST /api/move`
//! - **Config**: defaults, TOML file, `PORT` and CLI flags
//!
//! # Example
//!
//! ```no_run
//! use gomoku_server::{GameSession, ServerConfig, router};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let session = GameSession::new(*config.board_size(), config.opponent().difficulty())?;
//! let app = router(Arc::new(session));
//! let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod server;
mod session;

pub use config::{ConfigError, OpponentSetting, ServerConfig};
pub use server::{ApiError, ErrorBody, router};
pub use session::{GameSession, GameSnapshot, MoveRequest};
