//! Process-wide `tracing` setup.
//!
//! Events go to stderr so the state report can keep stdout for JSON.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, fmt};

use editor_context_config::{Config, LogFormat};

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

static INSTALLED_FORMAT: OnceCell<LogFormat> = OnceCell::new();

/// Proof that the global subscriber is in place.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryHandle {
    format: LogFormat,
}

impl TelemetryHandle {
    /// Format chosen by whichever call installed the subscriber.
    #[must_use]
    pub const fn format(self) -> LogFormat {
        self.format
    }
}

/// Failures while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// `log_filter` is not a valid `EnvFilter` directive.
    #[error("log filter '{filter}' is invalid: {message}")]
    Filter {
        /// Rejected directive.
        filter: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Some other code already owns the global subscriber.
    #[error("a global tracing subscriber is already installed: {0}")]
    Subscriber(#[source] SetGlobalDefaultError),
}

/// Installs the global subscriber on first use.
///
/// Later calls leave the installed subscriber alone and report its format.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter does not parse or a foreign
/// subscriber is already registered.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    let format = INSTALLED_FORMAT.get_or_try_init(|| {
        let subscriber = build_subscriber(config)?;
        tracing::subscriber::set_global_default(subscriber)
            .map_err(TelemetryError::Subscriber)?;
        Ok::<_, TelemetryError>(config.log_format())
    })?;
    Ok(TelemetryHandle { format: *format })
}

fn parse_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|error| TelemetryError::Filter {
        filter: directive.to_owned(),
        message: error.to_string(),
    })
}

fn build_subscriber(config: &Config) -> Result<BoxedSubscriber, TelemetryError> {
    let common = fmt::Subscriber::builder()
        .with_env_filter(parse_filter(config.log_filter())?)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_thread_names(true)
        .with_target(true);

    Ok(match config.log_format() {
        LogFormat::Json => Box::new(common.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(common.compact().finish()),
    })
}
