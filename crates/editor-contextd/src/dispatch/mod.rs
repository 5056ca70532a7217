//! JSON-RPC dispatch for the resource server.
//!
//! Each HTTP request carries at most one JSON-RPC 2.0 message. The handler
//! answers health probes, parses the message, routes it by method and renders
//! the JSON-RPC response together with its HTTP status.
//!
//! ## Protocol
//!
//! ```json
//! {"jsonrpc":"2.0","id":1,"method":"resources/read","params":{"uri":"sublime-context://state"}}
//! ```
//!
//! The only resource is the editor state snapshot. Every method outside the
//! read-only resource surface is answered with `-32601`.

mod errors;
mod handler;
mod request;
mod resources;
mod response;
mod router;

pub use self::errors::DispatchError;
pub(crate) use self::handler::DispatchConnectionHandler;
