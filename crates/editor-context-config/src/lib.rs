//! Layered configuration for the editor context daemon.
//!
//! Values resolve with the usual `ortho_config` precedence: built-in defaults,
//! then a TOML file (`--config-path` or `EDITOR_CONTEXT_CONFIG_PATH`), then
//! `EDITOR_CONTEXT_*` environment variables, then command-line flags.

mod defaults;
mod endpoint;
mod logging;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_SERVER_PORT, LOOPBACK_HOST, default_log_filter,
    default_log_filter_string, default_log_format, default_server_endpoint, default_server_port,
};
pub use endpoint::ServerEndpoint;
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration shared by the daemon and the debug command.
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "EDITOR_CONTEXT")]
pub struct Config {
    /// Loopback TCP port of the resource server (1-65535).
    #[ortho_config(default = DEFAULT_SERVER_PORT)]
    #[serde(default = "default_server_port")]
    pub mcp_server_port: u16,
    /// JSON document describing the live editor state, if an editor
    /// integration publishes one.
    #[serde(default)]
    pub host_state_path: Option<Utf8PathBuf>,
    /// `tracing` filter expression.
    #[ortho_config(default = default_log_filter_string())]
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Log output format.
    #[ortho_config(default = default_log_format())]
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mcp_server_port: DEFAULT_SERVER_PORT,
            host_state_path: None,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Rejects values that deserialise cleanly but cannot be served.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when the port is `0`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.mcp_server_port == 0 {
            return Err(ConfigError::InvalidPort {
                port: self.mcp_server_port,
            });
        }
        Ok(())
    }

    /// Loopback endpoint the resource server binds.
    #[must_use]
    pub fn server_endpoint(&self) -> ServerEndpoint {
        ServerEndpoint::loopback(self.mcp_server_port)
    }

    /// Path of the host-state document, when configured.
    #[must_use]
    pub fn host_state_path(&self) -> Option<&Utf8Path> {
        self.host_state_path.as_deref()
    }

    /// Log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

/// Semantic configuration errors detected after loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The server port is outside 1-65535.
    #[error("mcp_server_port must be between 1 and 65535, got {port}")]
    InvalidPort {
        /// Rejected port value.
        port: u16,
    },
}
