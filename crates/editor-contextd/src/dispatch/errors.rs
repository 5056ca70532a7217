//! Error types for request dispatch failures.
//!
//! Each variant maps to a JSON-RPC error code and to the HTTP status the
//! response is sent with.

use thiserror::Error;

use crate::snapshot::HostError;

/// JSON-RPC error code for unknown resources.
pub const RESOURCE_NOT_FOUND: i32 = -32002;

/// Errors surfaced while parsing or dispatching a JSON-RPC message.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The body is not valid JSON.
    #[error("parse error: {message}")]
    Parse {
        /// Parser diagnostic.
        message: String,
    },
    /// The body is JSON but not a request object.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request.
        message: String,
    },
    /// The body exceeded the transport limit.
    #[error("invalid request: body exceeds {max_size} bytes")]
    RequestTooLarge {
        /// Limit in bytes.
        max_size: usize,
    },
    /// The method is outside the read-only resource surface.
    #[error("method not supported: {method}")]
    MethodNotSupported {
        /// Requested method.
        method: String,
    },
    /// The parameters do not fit the method.
    #[error("invalid params: {message}")]
    InvalidParams {
        /// What was wrong with the parameters.
        message: String,
    },
    /// No resource exists under the URI.
    #[error("Unknown resource URI: {uri}")]
    ResourceNotFound {
        /// Requested URI.
        uri: String,
    },
    /// The editor state could not be captured.
    #[error("failed to capture editor state: {0}")]
    Snapshot(#[from] HostError),
    /// The result could not be serialised.
    #[error("failed to serialise result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DispatchError {
    /// JSON-RPC error code.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Parse { .. } => -32700,
            Self::InvalidRequest { .. } | Self::RequestTooLarge { .. } => -32600,
            Self::MethodNotSupported { .. } => -32601,
            Self::InvalidParams { .. } => -32602,
            Self::ResourceNotFound { .. } => RESOURCE_NOT_FOUND,
            Self::Snapshot(_) | Self::Serialize(_) => -32603,
        }
    }

    /// HTTP status the error response is sent with.
    ///
    /// Protocol-level failures that still produce a well-formed JSON-RPC
    /// response use `200`.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Parse { .. } | Self::InvalidRequest { .. } => 400,
            Self::RequestTooLarge { .. } => 413,
            Self::Snapshot(_) | Self::Serialize(_) => 500,
            Self::MethodNotSupported { .. }
            | Self::InvalidParams { .. }
            | Self::ResourceNotFound { .. } => 200,
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a method-not-supported error.
    pub fn method_not_supported(method: impl Into<String>) -> Self {
        Self::MethodNotSupported {
            method: method.into(),
        }
    }

    /// Creates an invalid params error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Creates a resource-not-found error.
    pub fn resource_not_found(uri: impl Into<String>) -> Self {
        Self::ResourceNotFound { uri: uri.into() }
    }
}
