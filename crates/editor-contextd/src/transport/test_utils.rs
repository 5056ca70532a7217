//! Test helpers for the transport module.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use super::{ConnectionHandler, HttpReply, HttpRequest};

pub(crate) struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    pub(crate) fn new() -> (Arc<AtomicUsize>, Arc<Self>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = Arc::new(Self {
            count: Arc::clone(&count),
        });
        (count, handler)
    }
}

impl ConnectionHandler for CountingHandler {
    fn respond(&self, _request: HttpRequest) -> HttpReply {
        self.count.fetch_add(1, Ordering::SeqCst);
        HttpReply::json(200, b"{}".to_vec())
    }
}

/// Status code and body of a raw HTTP exchange.
#[derive(Debug)]
pub(crate) struct HttpExchange {
    pub(crate) status: u16,
    pub(crate) body: String,
}

impl HttpExchange {
    pub(crate) fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|error| panic!("body is not JSON ({error}): {:?}", self.body))
    }
}

/// Sends one HTTP/1.1 request and reads the response until the server
/// closes the connection.
pub(crate) fn http_exchange(
    address: SocketAddr,
    method: &str,
    path: &str,
    body: &str,
) -> HttpExchange {
    let mut stream = TcpStream::connect(address).expect("connect client");
    stream
        .set_read_timeout(Some(Duration::from_secs(10)))
        .expect("set read timeout");
    let request = format!(
        "{method} {path} HTTP/1.1\r\nHost: {address}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(request.as_bytes()).expect("write request");

    let mut raw = String::new();
    stream.read_to_string(&mut raw).expect("read response");
    parse_response(&raw)
}

fn parse_response(raw: &str) -> HttpExchange {
    let (head, body) = raw
        .split_once("\r\n\r\n")
        .unwrap_or_else(|| panic!("malformed HTTP response: {raw:?}"));
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .unwrap_or_else(|| panic!("missing status code: {head:?}"));
    HttpExchange {
        status,
        body: body.to_owned(),
    }
}
