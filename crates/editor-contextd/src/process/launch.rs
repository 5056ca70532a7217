//! Supervises server launch sequencing and runtime orchestration.

use std::sync::Arc;

use tracing::info;

use crate::StructuredHealthReporter;
use crate::bootstrap::{ConfigLoader, LayeredConfigLoader, bootstrap_with};
use crate::health::HealthReporter;
use crate::host::{DocumentHost, HostThread};

use super::PROCESS_TARGET;
use super::errors::LaunchError;
use super::server::ContextServer;
use super::shutdown::{ShutdownSignal, SignalShutdown};

/// Collaborators required to launch the server runtime.
pub(crate) struct LaunchPlan<L, S> {
    pub(crate) loader: L,
    pub(crate) reporter: Arc<dyn HealthReporter>,
    pub(crate) shutdown: S,
}

/// Runs the server using the production collaborators.
///
/// Blocks until a termination signal arrives.
///
/// # Errors
///
/// Returns [`LaunchError`] when bootstrap, the host thread or the listener
/// fails. A start failure has already been reported when this returns; see
/// [`LaunchError::is_reported`].
pub fn run_server() -> Result<(), LaunchError> {
    let plan = LaunchPlan {
        loader: LayeredConfigLoader,
        reporter: Arc::new(StructuredHealthReporter::new()),
        shutdown: SignalShutdown::install()?,
    };
    run_server_with(plan)
}

/// Runs the server with injected collaborators.
pub(crate) fn run_server_with<L, S>(plan: LaunchPlan<L, S>) -> Result<(), LaunchError>
where
    L: ConfigLoader,
    S: ShutdownSignal,
{
    let LaunchPlan {
        loader,
        reporter,
        shutdown,
    } = plan;

    let runtime = bootstrap_with(&loader, reporter)?;
    let config = runtime.config().clone();
    info!(
        target: PROCESS_TARGET,
        endpoint = %config.server_endpoint(),
        log_format = %runtime.telemetry().format(),
        "starting server runtime"
    );

    let host_state_path = config.host_state_path.clone();
    let host = HostThread::spawn(move || DocumentHost::new(host_state_path))?;
    let mut server = ContextServer::new(
        config.server_endpoint(),
        Arc::new(host.handle()),
        runtime.reporter(),
    );
    server
        .start()
        .map_err(|source| LaunchError::Start { source })?;
    shutdown.wait()?;

    server.stop()?;
    host.shutdown()?;
    info!(
        target: PROCESS_TARGET,
        "shutdown sequence completed"
    );
    Ok(())
}
