//! The capability set the serializer needs from a host document node.
//!
//! The plugin runtime hands over live node objects; inside this crate they
//! are anything that implements [`HostNode`]. `serde_json::Value` implements
//! it, which is what the WebAssembly boundary and the tests use.

use indexmap::IndexMap;
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::errors::HostError;
use crate::models::node::NodeType;

/// Read access to one node of the host document.
pub trait HostNode: Sized {
    fn node_id(&self) -> Option<&str>;

    fn node_type(&self) -> Option<NodeType>;

    /// The raw value of a named attribute, if the node exposes it.
    fn property(&self, key: &str) -> Option<&JsonValue>;

    /// The ordered child list, or `None` when the node has no (readable) children.
    fn children(&self) -> Option<&[Self]>;

    /// Custom key/value data attached to the node by plugins.
    ///
    /// `Ok(None)` when the node carries none; `Err` when the store exists but
    /// cannot be read.
    fn plugin_data(&self) -> Result<Option<IndexMap<String, String>>, HostError>;

    /// `true` when the attribute is present and not null.
    fn has(&self, key: &str) -> bool {
        self.property(key).is_some_and(|value| !value.is_null())
    }

    /// Reads an attribute as `T`.
    ///
    /// Absent and null attributes are `None`. An attribute of the wrong shape
    /// is logged and also read as `None`, so one odd value never fails the node.
    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.property(key).filter(|value| !value.is_null())?;
        match T::deserialize(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(
                    "Ignoring attribute '{}' on node {}: {}",
                    key,
                    self.node_id().unwrap_or("<unknown>"),
                    e
                );
                None
            }
        }
    }
}

impl HostNode for JsonValue {
    fn node_id(&self) -> Option<&str> {
        self.get("id").and_then(JsonValue::as_str)
    }

    fn node_type(&self) -> Option<NodeType> {
        self.get("type")
            .and_then(JsonValue::as_str)
            .map(NodeType::from)
    }

    fn property(&self, key: &str) -> Option<&JsonValue> {
        self.get(key)
    }

    fn children(&self) -> Option<&[Self]> {
        self.get("children")
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
    }

    fn plugin_data(&self) -> Result<Option<IndexMap<String, String>>, HostError> {
        match self.get("pluginData") {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::Object(map)) => map
                .iter()
                .map(|(key, value)| match value {
                    JsonValue::String(text) => Ok((key.clone(), text.clone())),
                    other => Err(HostError::PluginDataUnavailable(format!(
                        "entry '{}' is not a string: {}",
                        key, other
                    ))),
                })
                .collect::<Result<IndexMap<_, _>, _>>()
                .map(Some),
            Some(other) => Err(HostError::PluginDataUnavailable(format!(
                "expected an object, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_identity_and_children() {
        let node = json!({
            "id": "1:2",
            "type": "FRAME",
            "children": [{ "id": "1:3", "type": "TEXT" }]
        });
        assert_eq!(node.node_id(), Some("1:2"));
        assert_eq!(node.node_type(), Some(NodeType::Frame));
        assert_eq!(node.children().map(<[_]>::len), Some(1));
    }

    #[test]
    fn wrongly_typed_attributes_read_as_absent() {
        let node = json!({ "id": "1", "type": "RECTANGLE", "opacity": "half", "rotation": null });
        assert_eq!(node.read::<f64>("opacity"), None);
        assert!(!node.has("rotation"));
        assert!(node.has("opacity"));
    }

    #[test]
    fn plugin_data_is_optional_and_fallible() {
        let none = json!({ "id": "1", "type": "TEXT" });
        assert_eq!(none.plugin_data(), Ok(None));

        let some = json!({ "id": "1", "type": "TEXT", "pluginData": { "role": "cta" } });
        let data = some.plugin_data().unwrap().unwrap();
        assert_eq!(data.get("role").map(String::as_str), Some("cta"));

        let broken = json!({ "id": "1", "type": "TEXT", "pluginData": 7 });
        assert!(broken.plugin_data().is_err());
    }
}
