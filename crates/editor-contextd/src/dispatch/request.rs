//! JSON-RPC request parsing.
//!
//! Parsing is lenient in the same places most MCP clients are: `jsonrpc` is
//! not checked and `params` may be omitted.

use serde_json::{Map, Value};

use super::errors::DispatchError;

const NOTIFICATION_PREFIX: &str = "notifications/";

/// A parsed JSON-RPC request or notification.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    /// Request id; `None` when the message carried no `id` member.
    pub id: Option<Value>,
    /// Method name.
    pub method: String,
    /// Parameters, `Value::Null` when absent.
    pub params: Value,
}

impl RpcRequest {
    /// Parses a request body.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Parse`] for invalid JSON and
    /// [`DispatchError::InvalidRequest`] when the JSON is not a request
    /// object with a string `method`.
    pub fn parse(body: &[u8]) -> Result<Self, DispatchError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(DispatchError::parse("empty request body"));
        }
        let value: Value =
            serde_json::from_slice(body).map_err(|error| DispatchError::parse(error.to_string()))?;
        let Value::Object(mut object) = value else {
            return Err(DispatchError::invalid_request(
                "request must be a JSON object",
            ));
        };
        let method = take_method(&mut object)?;
        Ok(Self {
            id: object.remove("id"),
            method,
            params: object.remove("params").unwrap_or(Value::Null),
        })
    }

    /// A notification expects no response body.
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.id.is_none() && self.method.starts_with(NOTIFICATION_PREFIX)
    }

    /// Id echoed in the response; `null` when the request had none.
    #[must_use]
    pub fn response_id(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }
}

fn take_method(object: &mut Map<String, Value>) -> Result<String, DispatchError> {
    match object.remove("method") {
        Some(Value::String(method)) if !method.trim().is_empty() => Ok(method),
        Some(Value::String(_)) => Err(DispatchError::invalid_request("method is empty")),
        Some(_) => Err(DispatchError::invalid_request("method must be a string")),
        None => Err(DispatchError::invalid_request("method is missing")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn parses_request_with_params() {
        let body = br#"{"jsonrpc":"2.0","id":7,"method":"resources/read","params":{"uri":"x"}}"#;
        let request = RpcRequest::parse(body).expect("parse request");
        assert_eq!(request.id, Some(json!(7)));
        assert_eq!(request.method, "resources/read");
        assert_eq!(request.params, json!({"uri": "x"}));
        assert!(!request.is_notification());
    }

    #[test]
    fn string_ids_are_preserved() {
        let request =
            RpcRequest::parse(br#"{"id":"abc","method":"ping"}"#).expect("parse request");
        assert_eq!(request.response_id(), json!("abc"));
        assert_eq!(request.params, Value::Null);
    }

    #[rstest]
    #[case(br#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#.as_slice(), true)]
    #[case(br#"{"jsonrpc":"2.0","id":1,"method":"notifications/initialized"}"#.as_slice(), false)]
    #[case(br#"{"jsonrpc":"2.0","method":"ping"}"#.as_slice(), false)]
    fn notifications_need_prefix_and_no_id(#[case] body: &[u8], #[case] expected: bool) {
        let request = RpcRequest::parse(body).expect("parse request");
        assert_eq!(request.is_notification(), expected);
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"  \n".as_slice())]
    #[case(b"{not json".as_slice())]
    fn rejects_unparseable_bodies(#[case] body: &[u8]) {
        assert!(matches!(
            RpcRequest::parse(body),
            Err(DispatchError::Parse { .. })
        ));
    }

    #[rstest]
    #[case(br#"[1,2,3]"#.as_slice())]
    #[case(br#"{"id":1}"#.as_slice())]
    #[case(br#"{"id":1,"method":42}"#.as_slice())]
    #[case(br#"{"id":1,"method":"  "}"#.as_slice())]
    fn rejects_non_request_json(#[case] body: &[u8]) {
        assert!(matches!(
            RpcRequest::parse(body),
            Err(DispatchError::InvalidRequest { .. })
        ));
    }
}
