//! Configuration loading and management.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid command prefix {0:?}: must not be '|' or whitespace")]
    InvalidPrefix(char),
}

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server information.
    #[serde(default)]
    pub server: ServerConfig,
    /// Network listen configuration.
    #[serde(default)]
    pub listen: ListenConfig,
    /// Wire protocol knobs.
    #[serde(default)]
    pub protocol: ProtocolConfig,
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name, shown in the greeting.
    #[serde(default = "default_server_name")]
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { name: default_server_name() }
    }
}

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind to (e.g., "0.0.0.0:8000").
    #[serde(default = "default_listen_address")]
    pub address: SocketAddr,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self { address: default_listen_address() }
    }
}

/// Wire protocol configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolConfig {
    /// One-character command prefix clients must use (default '!').
    #[serde(default = "default_prefix")]
    pub prefix: char,
    /// How many stored messages a join/im replays (default 10).
    #[serde(default = "default_replay_depth")]
    pub replay_depth: usize,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            replay_depth: default_replay_depth(),
        }
    }
}

fn default_server_name() -> String {
    "the chat program".to_string()
}

fn default_listen_address() -> SocketAddr {
    "0.0.0.0:8000".parse().expect("static address")
}

fn default_prefix() -> char {
    '!'
}

fn default_replay_depth() -> usize {
    10
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field rules serde cannot express.
    ///
    /// The prefix doubles as a forbidden character in room names, so it must
    /// not collide with the `|` divider or with token whitespace.
    fn validate(&self) -> Result<(), ConfigError> {
        let prefix = self.protocol.prefix;
        if prefix == linechat_proto::DIVIDER || prefix.is_whitespace() {
            return Err(ConfigError::InvalidPrefix(prefix));
        }
        Ok(())
    }
}
