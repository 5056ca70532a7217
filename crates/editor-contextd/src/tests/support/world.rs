//! Scenario state for the bootstrap feature.

use std::cell::RefCell;
use std::sync::Arc;

use editor_context_config::Config;

use crate::bootstrap::{BootstrapError, ConfigLoader, FixedConfigLoader, Runtime, bootstrap_with};

use super::config_loader::{FailingConfigLoader, TestConfigLoader};
use super::reporter::RecordingHealthReporter;

/// Loader, reporter and the single bootstrap outcome of one scenario.
pub struct BootstrapWorld {
    loader: Box<dyn ConfigLoader>,
    pub reporter: Arc<RecordingHealthReporter>,
    outcome: Option<Result<Runtime, BootstrapError>>,
}

impl BootstrapWorld {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loader: Box::new(TestConfigLoader::new()),
            reporter: Arc::new(RecordingHealthReporter::default()),
            outcome: None,
        }
    }

    /// Swaps the loader; any earlier outcome is discarded.
    pub fn load_with(&mut self, loader: impl ConfigLoader + 'static) {
        self.loader = Box::new(loader);
        self.outcome = None;
    }

    pub fn load_failing(&mut self) {
        self.load_with(FailingConfigLoader);
    }

    pub fn load_port(&mut self, port: u16) {
        self.load_with(FixedConfigLoader::new(Config {
            mcp_server_port: port,
            ..Config::default()
        }));
    }

    /// Bootstraps unless this scenario already did.
    pub fn bootstrap(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(bootstrap_with(&*self.loader, self.reporter.clone()));
        }
    }

    pub fn runtime(&self) -> Result<&Runtime, String> {
        match &self.outcome {
            Some(Ok(runtime)) => Ok(runtime),
            Some(Err(error)) => Err(format!("bootstrap failed: {error}")),
            None => Err("bootstrap has not run".to_owned()),
        }
    }

    pub fn error(&self) -> Result<&BootstrapError, String> {
        match &self.outcome {
            Some(Err(error)) => Ok(error),
            Some(Ok(_)) => Err("bootstrap succeeded unexpectedly".to_owned()),
            None => Err("bootstrap has not run".to_owned()),
        }
    }
}

impl Default for BootstrapWorld {
    fn default() -> Self {
        Self::new()
    }
}

pub fn world() -> RefCell<BootstrapWorld> {
    RefCell::new(BootstrapWorld::new())
}
