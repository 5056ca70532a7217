//! Shared data model for editor context snapshots.
//!
//! The daemon builds an [`EditorState`] on every resource read and serialises
//! it to JSON; clients (and the debug command) parse the same encoding back
//! into these types. Every value is constructed fresh per request and never
//! mutated afterwards.

mod position;
mod selection;
mod state;

pub use position::Position;
pub use selection::Selection;
pub use state::{EditorState, FileRef};

/// Identifier of the single readable resource exposed by the daemon.
pub const STATE_RESOURCE_URI: &str = "sublime-context://state";

/// MIME type reported for the state resource payload.
pub const STATE_RESOURCE_MIME_TYPE: &str = "application/json";
