use std::fmt;

use serde::{Deserialize, Serialize};

use crate::defaults::LOOPBACK_HOST;

/// Address the resource server binds to.
///
/// The host is always the IPv4 loopback interface; binding to localhost is
/// the only access boundary the server has.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerEndpoint {
    host: String,
    port: u16,
}

impl ServerEndpoint {
    /// Builds a loopback endpoint for the given port.
    ///
    /// Port `0` asks the operating system for an ephemeral port, which the
    /// test suites rely on; [`crate::Config::validate`] rejects it for
    /// operator-supplied configuration.
    #[must_use]
    pub fn loopback(port: u16) -> Self {
        Self {
            host: LOOPBACK_HOST.to_owned(),
            port,
        }
    }

    /// Host name or address to bind.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// TCP port to bind.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for ServerEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "http://{}:{}", self.host, self.port)
    }
}
