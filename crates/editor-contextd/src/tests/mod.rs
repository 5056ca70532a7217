//! Test suites for the editor context daemon.

mod support;
mod unit;
