//! Payloads of the resource surface.

use serde::Serialize;

use editor_context_types::{STATE_RESOURCE_MIME_TYPE, STATE_RESOURCE_URI};

use crate::host::SnapshotSource;
use crate::snapshot::render_state;

use super::errors::DispatchError;

/// MCP protocol revision the server speaks.
pub(crate) const PROTOCOL_VERSION: &str = "2024-11-05";
/// Name reported in `serverInfo`.
pub(crate) const SERVER_NAME: &str = "sublime-editor-context";

const STATE_RESOURCE_NAME: &str = "Editor State";
const STATE_RESOURCE_DESCRIPTION: &str =
    "Complete editor state with active files per window and other open files";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitializeResult {
    protocol_version: &'static str,
    capabilities: Capabilities,
    server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
struct Capabilities {
    resources: Empty,
}

#[derive(Debug, Serialize)]
struct Empty {}

#[derive(Debug, Serialize)]
struct ServerInfo {
    name: &'static str,
    version: &'static str,
}

impl InitializeResult {
    pub(crate) fn current() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            capabilities: Capabilities { resources: Empty {} },
            server_info: ServerInfo {
                name: SERVER_NAME,
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceDescriptor {
    uri: &'static str,
    name: &'static str,
    description: &'static str,
    mime_type: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResourceList {
    resources: Vec<ResourceDescriptor>,
}

impl ResourceList {
    pub(crate) fn current() -> Self {
        Self {
            resources: vec![ResourceDescriptor {
                uri: STATE_RESOURCE_URI,
                name: STATE_RESOURCE_NAME,
                description: STATE_RESOURCE_DESCRIPTION,
                mime_type: STATE_RESOURCE_MIME_TYPE,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceContents {
    uri: &'static str,
    mime_type: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReadResult {
    contents: Vec<ResourceContents>,
}

/// Captures the editor state and wraps it as resource contents.
///
/// The snapshot is serialised on the calling thread.
pub(crate) fn read_resource(
    source: &dyn SnapshotSource,
    uri: &str,
) -> Result<ReadResult, DispatchError> {
    if uri != STATE_RESOURCE_URI {
        return Err(DispatchError::resource_not_found(uri));
    }
    let state = source.snapshot()?;
    let text = render_state(&state)?;
    Ok(ReadResult {
        contents: vec![ResourceContents {
            uri: STATE_RESOURCE_URI,
            mime_type: STATE_RESOURCE_MIME_TYPE,
            text,
        }],
    })
}
