//! Command-line interface for the gomoku server.

use crate::config::{ConfigError, OpponentSetting, ServerConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Gomoku server - play five-in-a-row over HTTP
#[derive(Parser, Debug)]
#[command(name = "gomoku_server")]
#[command(about = "Five-in-a-row game server with a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Board side length
    #[arg(short = 's', long)]
    pub board_size: Option<usize>,

    /// Computer opponent for White: off, easy or normal
    #[arg(short, long)]
    pub opponent: Option<OpponentSetting>,
}

impl Cli {
    /// Builds the effective configuration: defaults, then the config file,
    /// then `PORT`, then command-line flags.
    pub fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        self.resolve_with(std::env::var("PORT").ok().as_deref())
    }

    /// Same as [`Cli::resolve`], with the `PORT` value passed in.
    #[instrument(skip(self))]
    pub fn resolve_with(&self, env_port: Option<&str>) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        config.apply_port(env_port)?;

        if let Some(host) = &self.host {
            config.set_host(host.clone());
        }
        if let Some(port) = self.port {
            config.set_port(port);
        }
        if let Some(size) = self.board_size {
            config.set_board_size(size);
        }
        if let Some(opponent) = self.opponent {
            config.set_opponent(opponent);
        }

        config.validate()?;
        Ok(config)
    }
}
