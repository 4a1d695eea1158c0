//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gomoku_engine::{Difficulty, MAX_SIZE, STANDARD_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Computer opponent setting: a difficulty, or `off` for two human players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentSetting {
    /// No computer opponent; both colors are played over the API.
    Off,
    /// Plays White with the first-empty-cell strategy.
    Easy,
    /// Plays White with the win/block/centre heuristic.
    #[default]
    Normal,
}

impl OpponentSetting {
    /// Difficulty of the enabled opponent, or `None` when off.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            OpponentSetting::Off => None,
            OpponentSetting::Easy => Some(Difficulty::Easy),
            OpponentSetting::Normal => Some(Difficulty::Normal),
        }
    }
}

impl std::str::FromStr for OpponentSetting {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(OpponentSetting::Off),
            other => other
                .parse::<Difficulty>()
                .map(|d| match d {
                    Difficulty::Easy => OpponentSetting::Easy,
                    Difficulty::Normal => OpponentSetting::Normal,
                })
                .map_err(|_| ConfigError::new(format!("Unknown opponent setting: {}", s))),
        }
    }
}

/// Settings for one server process.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    host: String,

    /// Port to bind.
    port: u16,

    /// Side length of the board.
    board_size: usize,

    /// Computer opponent playing White.
    opponent: OpponentSetting,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            board_size: STANDARD_SIZE,
            opponent: OpponentSetting::default(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(port = config.port, board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the port from the `PORT` environment variable, if set.
    #[instrument(skip(self))]
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_port(std::env::var("PORT").ok().as_deref())
    }

    /// Overrides the port from a `PORT`-style string, if given.
    #[instrument(skip(self))]
    pub fn apply_port(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid PORT {:?}: {}", port, e)))?;
            debug!(port = self.port, "Port taken from environment");
        }
        Ok(())
    }

    /// Sets the bind address.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    /// Sets the port.
    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Sets the board size.
    pub fn set_board_size(&mut self, board_size: usize) {
        self.board_size = board_size;
    }

    /// Sets the opponent.
    pub fn set_opponent(&mut self, opponent: OpponentSetting) {
        self.opponent = opponent;
    }

    /// Checks values that deserialization cannot.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("Board size must be positive".to_string()));
        }
        if self.board_size > MAX_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} exceeds maximum of {}",
                self.board_size, MAX_SIZE
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(*config.port(), 3000);
        assert_eq!(*config.board_size(), 15);
        assert_eq!(config.opponent().difficulty(), Some(Difficulty::Normal));
    }

    #[test]
    fn test_opponent_setting_parses() {
        assert_eq!("off".parse::<OpponentSetting>().unwrap(), OpponentSetting::Off);
        assert_eq!("Easy".parse::<OpponentSetting>().unwrap(), OpponentSetting::Easy);
        assert_eq!("normal".parse::<OpponentSetting>().unwrap(), OpponentSetting::Normal);
        let err = "brutal".parse::<OpponentSetting>().unwrap_err();
        assert!(err.message.contains("brutal"));
    }

    #[test]
    fn test_zero_board_rejected() {
        let mut config = ServerConfig::default();
        config.set_board_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_board_rejected() {
        let mut config = ServerConfig::default();
        config.set_board_size(MAX_SIZE);
        assert!(config.validate().is_ok());
        config.set_board_size(MAX_SIZE + 1);
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("exceeds maximum"));
    }

    #[test]
    fn test_port_override() {
        let mut config = ServerConfig::default();
        config.apply_port(None).unwrap();
        assert_eq!(*config.port(), 3000);
        config.apply_port(Some("8080")).unwrap();
        assert_eq!(*config.port(), 8080);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = ServerConfig::default();
        for bad in ["http", "70000", "-1", ""] {
            let err = config.apply_port(Some(bad)).unwrap_err();
            assert!(err.message.starts_with("Invalid PORT"), "{}", err.message);
        }
        assert_eq!(*config.port(), 3000);
    }
}
