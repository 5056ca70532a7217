//! Shared fixtures for the daemon behaviour and unit suites.

mod config_loader;
mod reporter;
mod source;
mod world;

pub use config_loader::TestConfigLoader;
pub use reporter::{HealthEvent, RecordingHealthReporter};
pub use source::FixedSnapshot;
pub use world::{BootstrapWorld, world};
