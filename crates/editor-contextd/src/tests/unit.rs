//! Unit tests for bootstrap and server lifecycle reporting.

use std::net::{Ipv4Addr, TcpListener};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rstest::{fixture, rstest};

use editor_context_config::{Config, ServerEndpoint};

use crate::{
    BootstrapError, ContextServer, FixedConfigLoader, ListenerError, ServerState, bootstrap_with,
};

use super::support::{FixedSnapshot, HealthEvent, RecordingHealthReporter, TestConfigLoader};

#[fixture]
fn reporter() -> Arc<RecordingHealthReporter> {
    Arc::new(RecordingHealthReporter::default())
}

fn server_on(port: u16, reporter: &Arc<RecordingHealthReporter>) -> ContextServer {
    ContextServer::new(
        ServerEndpoint::loopback(port),
        Arc::new(FixedSnapshot::empty()),
        reporter.clone(),
    )
}

#[rstest]
fn bootstrap_reports_start_and_success(reporter: Arc<RecordingHealthReporter>) {
    let loader = TestConfigLoader::new();

    let runtime = bootstrap_with(&loader, reporter.clone()).expect("bootstrap should succeed");

    assert_eq!(runtime.config().mcp_server_port, loader.port());
    assert_eq!(
        reporter.events(),
        vec![HealthEvent::BootstrapStarting, HealthEvent::BootstrapSucceeded]
    );
}

#[rstest]
fn bootstrap_rejects_port_zero_before_telemetry(reporter: Arc<RecordingHealthReporter>) {
    let loader = FixedConfigLoader::new(Config {
        mcp_server_port: 0,
        ..Config::default()
    });

    let Err(error) = bootstrap_with(&loader, reporter.clone()) else {
        panic!("port zero should be rejected");
    };

    assert!(matches!(error, BootstrapError::Validation { .. }), "{error:?}");
    assert_eq!(
        reporter.events(),
        vec![
            HealthEvent::BootstrapStarting,
            HealthEvent::BootstrapFailed(error.to_string()),
        ]
    );
}

#[rstest]
fn server_starts_stopped_and_reports_lifecycle(reporter: Arc<RecordingHealthReporter>) {
    let mut server = server_on(0, &reporter);
    assert_eq!(server.state(), ServerState::Stopped);

    let address = server.start().expect("server should start");
    assert_eq!(server.state(), ServerState::Listening { address });
    assert!(address.ip().is_loopback());

    server.stop().expect("server should stop");
    server.stop().expect("second stop is a no-op");
    assert_eq!(server.state(), ServerState::Stopped);
    assert_eq!(
        reporter.events(),
        vec![
            HealthEvent::ServerListening(address),
            HealthEvent::ServerStopped(address),
        ]
    );
}

#[rstest]
fn starting_a_listening_server_keeps_its_address(reporter: Arc<RecordingHealthReporter>) {
    let mut server = server_on(0, &reporter);
    let first = server.start().expect("server should start");
    let second = server.start().expect("restart is a no-op");

    assert_eq!(first, second);
    assert_eq!(reporter.events(), vec![HealthEvent::ServerListening(first)]);
}

#[rstest]
fn occupied_port_is_reported_once_and_leaves_server_stopped(
    reporter: Arc<RecordingHealthReporter>,
) {
    let blocker = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("bind blocker");
    let port = blocker.local_addr().expect("blocker address").port();
    let mut server = server_on(port, &reporter);

    let error = server.start().expect_err("port is taken");

    assert!(matches!(error, ListenerError::PortInUse { .. }), "{error:?}");
    assert_eq!(server.state(), ServerState::Stopped);
    assert_eq!(reporter.bind_failures(), 1);
}

#[rstest]
fn dropping_a_server_releases_its_port(reporter: Arc<RecordingHealthReporter>) {
    let address = {
        let mut server = server_on(0, &reporter);
        server.start().expect("server should start")
    };

    let deadline = Instant::now() + Duration::from_secs(2);
    while let Err(error) = TcpListener::bind(address) {
        assert!(Instant::now() < deadline, "port was not released: {error}");
        thread::sleep(Duration::from_millis(10));
    }
    assert!(
        reporter
            .events()
            .contains(&HealthEvent::ServerStopped(address))
    );
}
