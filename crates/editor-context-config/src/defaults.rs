use crate::endpoint::ServerEndpoint;
use crate::logging::LogFormat;

/// Port the resource server listens on unless configured otherwise.
pub const DEFAULT_SERVER_PORT: u16 = 8765;

/// Interface the resource server binds to. Never configurable.
pub const LOOPBACK_HOST: &str = "127.0.0.1";

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default resource server port.
#[must_use]
pub const fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Default log filter expression used by the binaries.
#[must_use]
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binaries.
#[must_use]
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Endpoint the server binds when nothing overrides the port.
#[must_use]
pub fn default_server_endpoint() -> ServerEndpoint {
    ServerEndpoint::loopback(DEFAULT_SERVER_PORT)
}
