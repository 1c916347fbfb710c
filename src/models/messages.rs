//! Messages exchanged between the UI shell and the plugin sandbox.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::models::node::SerializedNode;

/// A request sent by the UI to the plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Serialize the current selection.
    GetFigmaNodes,
    /// Close the plugin window.
    Close,
}

/// A reply sent by the plugin back to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    FigmaNodesData { nodes: Vec<SerializedNode> },
    Error { message: String },
}

/// Builder input as it arrives over the wire: one root node or a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodesPayload {
    Many(Vec<SerializedNode>),
    Single(Box<SerializedNode>),
}

// The JSON shape picks the variant, so a bad node reports its own error
// instead of "did not match any variant".
impl<'de> Deserialize<'de> for NodesPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        let payload = match &value {
            JsonValue::Array(_) => Vec::<SerializedNode>::deserialize(&value).map(NodesPayload::Many),
            JsonValue::Object(_) => SerializedNode::deserialize(&value)
                .map(|node| NodesPayload::Single(Box::new(node))),
            _ => {
                return Err(de::Error::invalid_type(
                    unexpected(&value),
                    &"a node object or a list of nodes",
                ))
            }
        };
        payload.map_err(de::Error::custom)
    }
}

fn unexpected(value: &JsonValue) -> Unexpected<'_> {
    match value {
        JsonValue::Null => Unexpected::Unit,
        JsonValue::Bool(b) => Unexpected::Bool(*b),
        JsonValue::Number(_) => Unexpected::Other("number"),
        JsonValue::String(s) => Unexpected::Str(s),
        JsonValue::Array(_) => Unexpected::Seq,
        JsonValue::Object(_) => Unexpected::Map,
    }
}
