//! Connection handler that dispatches JSON-RPC messages.
//!
//! This module provides the `DispatchConnectionHandler` which implements the
//! `ConnectionHandler` trait from the transport layer. It answers health
//! probes, parses JSON-RPC bodies, routes them and renders the response with
//! the matching HTTP status.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::host::SnapshotSource;
use crate::transport::{
    ConnectionHandler, HttpMethod, HttpReply, HttpRequest, MAX_REQUEST_BYTES, RequestBody,
};

use super::errors::DispatchError;
use super::request::RpcRequest;
use super::response::RpcResponse;
use super::router::{DISPATCH_TARGET, RpcRouter};

const HEALTH_PATH: &str = "/health";
const SERIALISATION_FALLBACK: &[u8] =
    br#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"failed to serialise response"},"id":null}"#;

/// Handler serving the health probe and the JSON-RPC endpoint.
pub struct DispatchConnectionHandler {
    router: RpcRouter,
}

impl DispatchConnectionHandler {
    /// Creates a handler answering resource reads from `source`.
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            router: RpcRouter::new(source),
        }
    }

    fn get(&self, path: &str) -> HttpReply {
        if path == HEALTH_PATH {
            plain_json(200, &json!({"status": "ok"}))
        } else {
            debug!(target: DISPATCH_TARGET, path, "unknown GET path");
            plain_json(404, &json!({"error": "not found"}))
        }
    }

    fn post(&self, body: RequestBody) -> HttpReply {
        let bytes = match body {
            RequestBody::Complete(bytes) => bytes,
            RequestBody::TooLarge => {
                let error = DispatchError::RequestTooLarge {
                    max_size: MAX_REQUEST_BYTES,
                };
                warn!(target: DISPATCH_TARGET, %error, "request rejected");
                return error_reply(Value::Null, &error);
            }
        };

        let request = match RpcRequest::parse(&bytes) {
            Ok(request) => request,
            Err(error) => {
                warn!(target: DISPATCH_TARGET, %error, "malformed request");
                return error_reply(Value::Null, &error);
            }
        };

        if request.is_notification() {
            debug!(
                target: DISPATCH_TARGET,
                method = %request.method,
                "notification acknowledged"
            );
            return HttpReply::empty(202);
        }

        match self.router.route(&request) {
            Ok(result) => render(200, &RpcResponse::success(request.response_id(), result)),
            Err(error) => {
                if error.http_status() >= 500 {
                    warn!(target: DISPATCH_TARGET, method = %request.method, %error, "dispatch failed");
                } else {
                    debug!(target: DISPATCH_TARGET, method = %request.method, %error, "request refused");
                }
                error_reply(request.response_id(), &error)
            }
        }
    }
}

impl ConnectionHandler for DispatchConnectionHandler {
    fn respond(&self, request: HttpRequest) -> HttpReply {
        match request.method {
            HttpMethod::Get => self.get(&request.path),
            HttpMethod::Post => self.post(request.body),
            HttpMethod::Other(verb) => {
                debug!(target: DISPATCH_TARGET, %verb, "unsupported HTTP method");
                plain_json(405, &json!({"error": "method not supported"}))
            }
        }
    }
}

fn error_reply(id: Value, error: &DispatchError) -> HttpReply {
    render(error.http_status(), &RpcResponse::failure(id, error))
}

fn render(status: u16, response: &RpcResponse) -> HttpReply {
    match response.to_bytes() {
        Ok(bytes) => HttpReply::json(status, bytes),
        Err(error) => {
            warn!(target: DISPATCH_TARGET, %error, "failed to serialise response");
            HttpReply::json(500, SERIALISATION_FALLBACK.to_vec())
        }
    }
}

fn plain_json(status: u16, body: &Value) -> HttpReply {
    HttpReply::json(status, body.to_string().into_bytes())
}
