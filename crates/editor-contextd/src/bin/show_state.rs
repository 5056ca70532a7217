//! Prints the current editor state snapshot as JSON.
//!
//! Reads the same configuration as the daemon but never binds a port.

use std::io::{self, Write};
use std::process::ExitCode;

use editor_contextd::{LayeredConfigLoader, run_report};

fn main() -> ExitCode {
    match run_report(&LayeredConfigLoader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(io::stderr().lock(), "editor-context-show: {error}");
            ExitCode::FAILURE
        }
    }
}
