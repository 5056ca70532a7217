//! Entrypoint for the editor context daemon.
//!
//! Runs the resource server until a termination signal arrives.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match editor_contextd::run_server() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) if error.is_reported() => ExitCode::FAILURE,
        Err(error) => {
            let _ = writeln!(io::stderr().lock(), "editor-contextd: {error}");
            ExitCode::FAILURE
        }
    }
}
