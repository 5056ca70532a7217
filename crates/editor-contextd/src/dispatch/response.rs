//! JSON-RPC response serialisation.

use serde::Serialize;
use serde_json::Value;

use super::errors::DispatchError;

const JSONRPC_VERSION: &str = "2.0";

/// Error member of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcError {
    /// JSON-RPC error code.
    pub code: i32,
    /// Human-readable description.
    pub message: String,
}

/// A JSON-RPC 2.0 response carrying either a result or an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcResponse {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
    id: Value,
}

impl RpcResponse {
    /// Successful response.
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Error response for a dispatch failure.
    #[must_use]
    pub fn failure(id: Value, error: &DispatchError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: None,
            error: Some(RpcError {
                code: error.code(),
                message: error.to_string(),
            }),
            id,
        }
    }

    /// Serialises the response.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
