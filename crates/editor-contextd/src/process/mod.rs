//! Server lifecycle and process supervision.

mod errors;
pub(crate) mod launch;
mod server;
pub(crate) mod shutdown;

pub use errors::LaunchError;
pub use launch::run_server;
pub use server::{ContextServer, ServerState};
pub use shutdown::ShutdownError;

pub(crate) const PROCESS_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::process");
