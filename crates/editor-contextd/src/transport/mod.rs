//! HTTP listener for the resource server.
//!
//! The transport module binds the loopback endpoint and accepts requests in a
//! background thread, handing each one to a [`ConnectionHandler`] on its own
//! thread.

mod errors;
mod handler;
mod listener;
#[cfg(test)]
pub(crate) mod test_utils;

pub use self::errors::ListenerError;
pub(crate) use self::handler::{
    ConnectionHandler, HttpMethod, HttpReply, HttpRequest, MAX_REQUEST_BYTES, RequestBody,
};
pub(crate) use self::listener::{ListenerHandle, SocketListener};
#[cfg(test)]
pub(crate) use self::test_utils::CountingHandler;

const LISTENER_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::transport");
