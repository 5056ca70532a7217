//! Method routing for JSON-RPC dispatch.
//!
//! The router recognises the handful of methods the read-only resource
//! surface supports. Everything else, including write and subscribe
//! requests, is rejected without side effects.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::host::SnapshotSource;

use super::errors::DispatchError;
use super::request::RpcRequest;
use super::resources::{InitializeResult, ResourceList, read_resource};

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::dispatch");

/// Methods the server answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcMethod {
    /// Session handshake.
    Initialize,
    /// Liveness probe.
    Ping,
    /// Enumerates resources.
    ListResources,
    /// Reads one resource.
    ReadResource,
    /// Any `notifications/*` message; acknowledged and ignored.
    Notification,
    /// Anything else.
    Unsupported(String),
}

impl RpcMethod {
    /// Classifies a method name. Matching is exact.
    #[must_use]
    pub fn parse(method: &str) -> Self {
        match method {
            "initialize" => Self::Initialize,
            "ping" => Self::Ping,
            "resources/list" => Self::ListResources,
            "resources/read" => Self::ReadResource,
            other if other.starts_with("notifications/") => Self::Notification,
            other => Self::Unsupported(other.to_owned()),
        }
    }
}

/// Routes requests to their result builders.
pub struct RpcRouter {
    source: Arc<dyn SnapshotSource>,
}

impl RpcRouter {
    /// Creates a router reading snapshots from `source`.
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    /// Produces the `result` member for a request.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported methods, bad parameters and snapshot
    /// failures.
    pub fn route(&self, request: &RpcRequest) -> Result<Value, DispatchError> {
        let method = RpcMethod::parse(&request.method);
        debug!(
            target: DISPATCH_TARGET,
            method = %request.method,
            "routing request"
        );

        match method {
            RpcMethod::Initialize => Ok(serde_json::to_value(InitializeResult::current())?),
            RpcMethod::Ping | RpcMethod::Notification => Ok(Value::Object(serde_json::Map::new())),
            RpcMethod::ListResources => Ok(serde_json::to_value(ResourceList::current())?),
            RpcMethod::ReadResource => {
                let uri = request
                    .params
                    .get("uri")
                    .and_then(Value::as_str)
                    .ok_or_else(|| DispatchError::invalid_params("params.uri must be a string"))?;
                let result = read_resource(self.source.as_ref(), uri)?;
                Ok(serde_json::to_value(result)?)
            }
            RpcMethod::Unsupported(method) => Err(DispatchError::method_not_supported(method)),
        }
    }
}
