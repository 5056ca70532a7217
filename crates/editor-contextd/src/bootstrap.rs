//! Startup sequence shared by the daemon and the tests: resolve
//! configuration, check it, then bring up telemetry.

use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;

use editor_context_config::{Config, ConfigError};

use crate::health::HealthReporter;
use crate::telemetry::{self, TelemetryError, TelemetryHandle};

/// Source of the resolved [`Config`].
pub trait ConfigLoader: Send + Sync {
    /// Resolves every configuration layer into one value.
    ///
    /// # Errors
    ///
    /// Returns the `ortho_config` error when a layer cannot be read or
    /// merged.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Reads defaults, the configuration file, `EDITOR_CONTEXT_*` variables and
/// the process arguments.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayeredConfigLoader;

impl ConfigLoader for LayeredConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Hands out a configuration resolved elsewhere.
#[derive(Debug, Clone)]
pub struct FixedConfigLoader(Config);

impl FixedConfigLoader {
    /// Serves `config` on every load.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self(config)
    }
}

impl ConfigLoader for FixedConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.0.clone())
    }
}

/// Why startup stopped before the server was created.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A configuration layer could not be read or merged.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Loader diagnostic.
        #[source]
        source: Arc<OrthoError>,
    },
    /// The merged configuration cannot be served.
    #[error("invalid configuration: {source}")]
    Validation {
        /// Offending value.
        #[source]
        source: ConfigError,
    },
    /// The tracing subscriber could not be installed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Subscriber diagnostic.
        #[source]
        source: TelemetryError,
    },
}

/// Everything a successful startup produced.
pub struct Runtime {
    config: Config,
    telemetry: TelemetryHandle,
    reporter: Arc<dyn HealthReporter>,
}

impl Runtime {
    /// Validated configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Installed telemetry.
    #[must_use]
    pub const fn telemetry(&self) -> TelemetryHandle {
        self.telemetry
    }

    /// Reporter that observed startup; later lifecycle events go here too.
    #[must_use]
    pub fn reporter(&self) -> Arc<dyn HealthReporter> {
        Arc::clone(&self.reporter)
    }
}

/// Runs the startup sequence, reporting its start and its outcome.
///
/// Telemetry is only touched once the configuration has validated.
///
/// # Errors
///
/// Returns the first [`BootstrapError`] hit; `reporter` has already seen it.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
) -> Result<Runtime, BootstrapError> {
    reporter.bootstrap_starting();
    match prepare(loader) {
        Ok((config, telemetry)) => {
            reporter.bootstrap_succeeded(&config);
            Ok(Runtime {
                config,
                telemetry,
                reporter,
            })
        }
        Err(error) => {
            reporter.bootstrap_failed(&error);
            Err(error)
        }
    }
}

fn prepare(loader: &dyn ConfigLoader) -> Result<(Config, TelemetryHandle), BootstrapError> {
    let config = loader
        .load()
        .map_err(|source| BootstrapError::Configuration { source })?;
    config
        .validate()
        .map_err(|source| BootstrapError::Validation { source })?;
    let telemetry =
        telemetry::initialise(&config).map_err(|source| BootstrapError::Telemetry { source })?;
    Ok((config, telemetry))
}
