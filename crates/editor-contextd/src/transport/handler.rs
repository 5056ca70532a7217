//! Request and reply types exchanged with connection handlers.

use std::io::{self, Read};

use tiny_http::{Header, Method, Response};

/// Largest request body accepted, in bytes.
pub(crate) const MAX_REQUEST_BYTES: usize = 1024 * 1024;

const JSON_CONTENT_TYPE: &[u8] = b"application/json";

/// HTTP verbs the handlers distinguish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
    Other(String),
}

impl From<&Method> for HttpMethod {
    fn from(method: &Method) -> Self {
        match method {
            Method::Get => Self::Get,
            Method::Post => Self::Post,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Body of a request, capped at [`MAX_REQUEST_BYTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RequestBody {
    Complete(Vec<u8>),
    TooLarge,
}

/// A request as seen by a handler.
#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub(crate) method: HttpMethod,
    /// Request path without the query string.
    pub(crate) path: String,
    pub(crate) body: RequestBody,
}

impl HttpRequest {
    pub(crate) fn new(method: HttpMethod, url: &str, body: RequestBody) -> Self {
        let path = url.split_once('?').map_or(url, |(path, _)| path);
        Self {
            method,
            path: path.to_owned(),
            body,
        }
    }
}

/// A handler's answer. A reply without a body is sent with an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HttpReply {
    pub(crate) status: u16,
    pub(crate) body: Option<Vec<u8>>,
}

impl HttpReply {
    /// JSON reply with the given status.
    pub(crate) fn json(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// Reply without a body.
    pub(crate) fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    pub(crate) fn into_response(self) -> Response<io::Cursor<Vec<u8>>> {
        match self.body {
            Some(body) => {
                let response = Response::from_data(body).with_status_code(self.status);
                match Header::from_bytes(&b"Content-Type"[..], JSON_CONTENT_TYPE) {
                    Ok(header) => response.with_header(header),
                    Err(()) => response,
                }
            }
            None => Response::from_data(Vec::new()).with_status_code(self.status),
        }
    }
}

/// Handles accepted requests.
pub(crate) trait ConnectionHandler: Send + Sync + 'static {
    /// Produces the reply for one request. Implementations should avoid
    /// panicking.
    fn respond(&self, request: HttpRequest) -> HttpReply;
}

/// Reads at most [`MAX_REQUEST_BYTES`] from `reader`.
///
/// A declared length over the limit is rejected without reading.
pub(crate) fn read_body(
    reader: &mut dyn Read,
    declared_length: Option<usize>,
) -> io::Result<RequestBody> {
    if declared_length.is_some_and(|length| length > MAX_REQUEST_BYTES) {
        return Ok(RequestBody::TooLarge);
    }
    let mut buffer = Vec::new();
    let limit = u64::try_from(MAX_REQUEST_BYTES).unwrap_or(u64::MAX);
    reader.take(limit + 1).read_to_end(&mut buffer)?;
    if buffer.len() > MAX_REQUEST_BYTES {
        return Ok(RequestBody::TooLarge);
    }
    Ok(RequestBody::Complete(buffer))
}
