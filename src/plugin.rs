//! Request handling at the UI/plugin boundary.
//!
//! Every failure is answered with an `error` message; nothing escapes as a
//! fault.

use log::{error, info};
use serde_json::Value as JsonValue;

use crate::errors::Result;
use crate::host::HostNode;
use crate::models::messages::{PluginMessage, UiMessage};
use crate::serializer::NodeSerializer;

/// Answers one UI request against the current selection.
///
/// `get-figma-nodes` yields the serialized selection or an error message;
/// `close` yields no reply.
pub fn handle_request<N: HostNode>(request: &UiMessage, selection: &[N]) -> Option<PluginMessage> {
    handle_request_with(&NodeSerializer::default(), request, selection)
}

pub fn handle_request_with<N: HostNode>(
    serializer: &NodeSerializer,
    request: &UiMessage,
    selection: &[N],
) -> Option<PluginMessage> {
    match request {
        UiMessage::GetFigmaNodes => Some(match serializer.serialize_selection(selection) {
            Ok(nodes) => {
                info!("Serialized {} selected node(s)", nodes.len());
                PluginMessage::FigmaNodesData { nodes }
            }
            Err(e) => {
                error!("Failed to read selection: {}", e);
                PluginMessage::Error {
                    message: e.to_string(),
                }
            }
        }),
        UiMessage::Close => {
            info!("Close requested");
            None
        }
    }
}

/// JSON in, JSON out: parses the request, answers it and encodes the reply.
///
/// An unreadable request is answered with an `error` message.
pub fn handle_raw_message<N: HostNode>(request_json: &str, selection: &[N]) -> Result<Option<String>> {
    let reply = match serde_json::from_str::<UiMessage>(request_json) {
        Ok(request) => handle_request(&request, selection),
        Err(e) => Some(PluginMessage::Error {
            message: format!("Unrecognized request: {}", e),
        }),
    };
    Ok(reply.map(|msg| serde_json::to_string(&msg)).transpose()?)
}

/// Reads a selection sent as JSON: a list of nodes or a single node.
pub fn parse_selection(selection_json: &str) -> Result<Vec<JsonValue>> {
    let value: JsonValue = serde_json::from_str(selection_json)?;
    Ok(match value {
        JsonValue::Array(nodes) => nodes,
        JsonValue::Null => Vec::new(),
        node => vec![node],
    })
}
