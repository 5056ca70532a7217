//! Test configuration loaders for scenarios covering success and failure paths.

use std::ffi::OsString;
use std::fs;
use std::net::{Ipv4Addr, TcpListener};
use std::sync::Arc;

use camino::Utf8PathBuf;
use ortho_config::{OrthoConfig, OrthoError};
use tempfile::TempDir;

use editor_context_config::{Config, LogFormat};

use crate::bootstrap::ConfigLoader;

/// Asks the OS for a loopback port that is currently unused.
fn free_port() -> u16 {
    let probe = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind probe listener");
    probe.local_addr().expect("probe address").port()
}

/// Loader that resolves a free port and a host-state document under a
/// temporary directory.
pub struct TestConfigLoader {
    port: u16,
    state_dir: TempDir,
}

impl TestConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            port: free_port(),
            state_dir: TempDir::new().expect("failed to create temporary state directory"),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host_state_path(&self) -> Utf8PathBuf {
        let path = self.state_dir.path().join("editor-state.json");
        Utf8PathBuf::from_path_buf(path).expect("temporary state path was not valid UTF-8")
    }

    /// Publishes a host-state document for the daemon to read.
    pub fn write_host_state(&self, document: &serde_json::Value) {
        let text = serde_json::to_string(document).expect("serialise host state");
        fs::write(self.host_state_path(), text).expect("write host state");
    }
}

impl ConfigLoader for TestConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(Config {
            mcp_server_port: self.port,
            host_state_path: Some(self.host_state_path()),
            log_format: LogFormat::Compact,
            ..Config::default()
        })
    }
}

/// Loader that intentionally fails by passing invalid CLI arguments.
pub struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let args = vec![
            OsString::from("editor-contextd"),
            OsString::from("--mcp-server-port"),
            OsString::from("not-a-port"),
        ];
        Config::load_from_iter(args)
    }
}
