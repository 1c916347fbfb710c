//! Turns host document nodes into plain [`SerializedNode`] trees.
//!
//! Every node gets its base record first, then the kind-specific handler
//! from [`nodes::handler_for`] attaches its sub-record. Container kinds
//! recurse into their children in order.
//!
//! Failure policy:
//! *   A malformed child (no id or type) is logged and skipped; its siblings
//!     are still serialized.
//! *   A `children` attribute that is not a list reads as an empty list.
//! *   Nesting deeper than the configured limit fails the whole request.

pub mod extract;
mod nodes;

use log::{debug, warn};

use crate::converters::elementor::constants::DEFAULT_MAX_DEPTH;
use crate::errors::{PluginError, Result};
use crate::host::HostNode;
use crate::models::node::SerializedNode;

pub use extract::{
    extract_base, extract_corner_radius, extract_effects, extract_extended_strokes,
    extract_fills, extract_strokes,
};

/// Serializes host nodes with a bounded recursion depth.
#[derive(Debug, Clone, Copy)]
pub struct NodeSerializer {
    max_depth: usize,
}

impl Default for NodeSerializer {
    fn default() -> Self {
        NodeSerializer {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NodeSerializer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the deepest nesting level accepted (the selection itself is level 0).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Serializes one node and its subtree.
    pub fn serialize_node<N: HostNode>(&self, node: &N) -> Result<SerializedNode> {
        self.serialize_at(node, 0)
    }

    /// Serializes the current selection, preserving its order.
    ///
    /// Malformed top-level nodes are skipped. The call fails when the
    /// selection is empty or when no node could be serialized at all.
    pub fn serialize_selection<N: HostNode>(&self, selection: &[N]) -> Result<Vec<SerializedNode>> {
        if selection.is_empty() {
            return Err(PluginError::EmptySelection);
        }

        let mut serialized = Vec::with_capacity(selection.len());
        let mut last_error = None;
        for node in selection {
            match self.serialize_node(node) {
                Ok(out) => serialized.push(out),
                Err(e @ PluginError::DepthLimitExceeded { .. }) => return Err(e),
                Err(e) => {
                    warn!("Skipping selected node: {}", e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if serialized.is_empty() => Err(e),
            _ => Ok(serialized),
        }
    }

    fn serialize_at<N: HostNode>(&self, node: &N, depth: usize) -> Result<SerializedNode> {
        if depth > self.max_depth {
            return Err(PluginError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }

        let mut out = SerializedNode::from_base(extract_base(node)?);
        let handler = nodes::handler_for::<N>(out.node_type());
        handler(node, &mut out);

        if nodes::has_child_list(out.node_type()) {
            out.children = Some(self.serialize_children(node, out.id(), depth)?);
        }

        debug!(
            "Serialized {} node {} at depth {}",
            out.node_type(),
            out.id(),
            depth
        );
        Ok(out)
    }

    fn serialize_children<N: HostNode>(
        &self,
        node: &N,
        parent_id: &str,
        depth: usize,
    ) -> Result<Vec<SerializedNode>> {
        let Some(children) = node.children() else {
            if node.has("children") {
                warn!("Node {} has an unreadable child list; using none", parent_id);
            }
            return Ok(Vec::new());
        };

        let mut serialized = Vec::with_capacity(children.len());
        for (index, child) in children.iter().enumerate() {
            match self.serialize_at(child, depth + 1) {
                Ok(out) => serialized.push(out),
                Err(e @ PluginError::DepthLimitExceeded { .. }) => return Err(e),
                Err(e) => warn!("Skipping child {} of node {}: {}", index, parent_id, e),
            }
        }
        Ok(serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::node::NodeType;
    use serde_json::{json, Value as JsonValue};

    #[test]
    fn empty_selection_is_an_error() {
        let selection: Vec<JsonValue> = Vec::new();
        assert!(matches!(
            NodeSerializer::new().serialize_selection(&selection),
            Err(PluginError::EmptySelection)
        ));
    }

    #[test]
    fn children_keep_their_order_and_malformed_ones_are_skipped() {
        let frame = json!({
            "id": "f",
            "type": "FRAME",
            "children": [
                { "id": "a", "type": "TEXT", "characters": "A" },
                { "type": "TEXT", "characters": "no id" },
                { "id": "b", "type": "RECTANGLE" },
                { "id": "c", "type": "GROUP", "children": [] }
            ]
        });
        let out = NodeSerializer::new().serialize_node(&frame).unwrap();
        let ids: Vec<&str> = out.children().iter().map(SerializedNode::id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(out.children()[2].node_type(), &NodeType::Group);
    }

    #[test]
    fn non_list_children_read_as_empty() {
        let frame = json!({ "id": "f", "type": "FRAME", "children": "oops" });
        let out = NodeSerializer::new().serialize_node(&frame).unwrap();
        assert_eq!(out.children, Some(Vec::new()));
    }

    #[test]
    fn leaf_kinds_have_no_child_list() {
        let text = json!({ "id": "t", "type": "TEXT", "children": [{ "id": "x", "type": "TEXT" }] });
        let out = NodeSerializer::new().serialize_node(&text).unwrap();
        assert_eq!(out.children, None);
    }

    #[test]
    fn depth_limit_is_reported() {
        let mut node = json!({ "id": "leaf", "type": "FRAME" });
        for level in 0..5 {
            node = json!({ "id": format!("f{}", level), "type": "FRAME", "children": [node] });
        }
        let serializer = NodeSerializer::new().with_max_depth(3);
        assert!(matches!(
            serializer.serialize_node(&node),
            Err(PluginError::DepthLimitExceeded { limit: 3 })
        ));
        assert!(NodeSerializer::new().serialize_node(&node).is_ok());
    }

    #[test]
    fn selection_fails_only_when_every_node_is_malformed() {
        let selection = vec![json!({ "type": "TEXT" }), json!({ "id": "ok", "type": "TEXT" })];
        let out = NodeSerializer::new().serialize_selection(&selection).unwrap();
        assert_eq!(out.len(), 1);

        let broken = vec![json!({ "type": "TEXT" })];
        assert!(matches!(
            NodeSerializer::new().serialize_selection(&broken),
            Err(PluginError::MalformedNode(_))
        ));
    }
}
