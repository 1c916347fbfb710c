//! The recursive node -> element conversion.

use log::{debug, error};

use crate::converters::elementor::constants::DEFAULT_MAX_DEPTH;
use crate::converters::elementor::error::{ElementorConversionError, Result};
use crate::converters::elementor::factory::create_widget_from_node;
use crate::converters::elementor::policy::{is_container, widget_kind_for};
use crate::models::element::{ElementorElement, WidgetKind};
use crate::models::node::{NodeType, SerializedNode};

/// Converts serialized node trees into page-builder element trees.
#[derive(Debug, Clone, Copy)]
pub struct ElementorBuilder {
    max_depth: usize,
}

impl Default for ElementorBuilder {
    fn default() -> Self {
        ElementorBuilder {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ElementorBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Converts `node` as an element at `depth`.
    ///
    /// Returns `Ok(None)` when the node is not convertible; its whole subtree
    /// is dropped with it. Containers convert their children at `depth + 1`
    /// in source order, leaving out the ones that are dropped.
    pub fn convert(&self, node: &SerializedNode, depth: usize) -> Result<Option<ElementorElement>> {
        if depth > self.max_depth {
            return Err(ElementorConversionError::DepthLimitExceeded {
                node_id: node.id().to_string(),
                limit: self.max_depth,
            });
        }

        let Some(kind) = widget_kind_for(node) else {
            debug!(
                "Skipping node: {} - {}",
                node.node_type(),
                if node.name().is_empty() { "unnamed" } else { node.name() }
            );
            return Ok(None);
        };

        let mut element = create_widget_from_node(kind, node, depth)?;

        // Image widgets are leaves even when the source rectangle has children.
        if kind == WidgetKind::Container && is_container(node) && node.has_children() {
            element.elements = self.convert_many(node.children(), depth + 1)?;
        }

        Ok(Some(element))
    }

    /// Converts a list of sibling nodes, keeping order and dropping the
    /// unconvertible ones.
    pub fn convert_many(&self, nodes: &[SerializedNode], depth: usize) -> Result<Vec<ElementorElement>> {
        let mut elements = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(element) = self.convert(node, depth)? {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    /// Converts a single page root, which must be a frame or a group.
    pub fn convert_root(&self, node: &SerializedNode) -> Result<ElementorElement> {
        let invalid_root = || ElementorConversionError::InvalidRoot {
            node_id: node.id().to_string(),
            node_type: node.node_type().clone(),
        };

        if !matches!(node.node_type(), NodeType::Frame | NodeType::Group) {
            error!("Root node must be a FRAME or GROUP, got {}", node.node_type());
            return Err(invalid_root());
        }
        self.convert(node, 0)?.ok_or_else(invalid_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::ElementType;
    use serde_json::json;

    fn node(value: serde_json::Value) -> SerializedNode {
        serde_json::from_value(value).unwrap()
    }

    fn assert_depths(element: &ElementorElement, depth: usize) {
        assert_eq!(element.is_inner(), depth > 0);
        for child in &element.elements {
            assert_depths(child, depth + 1);
        }
    }

    #[test]
    fn simple_text_becomes_a_heading() {
        let text = node(json!({ "type": "TEXT", "id": "t1", "text": { "characters": "Hi" } }));
        let element = ElementorBuilder::new().convert(&text, 0).unwrap().unwrap();
        assert_eq!(element.settings["title"], "Hi");
        assert_eq!(element.el_type, ElementType::Widget);
        assert_eq!(element.widget_type, Some(WidgetKind::Heading));
        assert!(!element.is_inner());
    }

    #[test]
    fn frame_with_two_texts_becomes_a_container_with_two_headings() {
        let frame = node(json!({
            "id": "f",
            "type": "FRAME",
            "children": [
                { "id": "a", "type": "TEXT", "text": { "characters": "A" } },
                { "id": "b", "type": "TEXT", "text": { "characters": "B" } }
            ]
        }));
        let element = ElementorBuilder::new().convert_root(&frame).unwrap();
        assert!(element.is_container());
        assert_eq!(element.elements.len(), 2);
        assert!(element.elements.iter().all(|child| child.is_inner()));
        assert_eq!(element.elements[0].settings["title"], "A");
        assert_eq!(element.elements[1].settings["title"], "B");
    }

    #[test]
    fn dropped_children_leave_the_rest_in_order() {
        let frame = node(json!({
            "id": "f",
            "type": "FRAME",
            "children": [
                { "id": "a", "type": "TEXT", "text": { "characters": "1" } },
                { "id": "l", "type": "LINE" },
                { "id": "g", "type": "GROUP", "children": [
                    { "id": "v", "type": "VECTOR" },
                    { "id": "c", "type": "TEXT", "text": { "characters": "3" } }
                ] },
                { "id": "b", "type": "TEXT", "text": { "characters": "2" } }
            ]
        }));
        let element = ElementorBuilder::new().convert(&frame, 0).unwrap().unwrap();
        let kinds: Vec<ElementType> = element.elements.iter().map(|e| e.el_type).collect();
        assert_eq!(kinds, [ElementType::Widget, ElementType::Container, ElementType::Widget]);
        assert_eq!(element.elements[1].elements.len(), 1);
        assert_depths(&element, 0);
    }

    #[test]
    fn image_rectangle_drops_its_children() {
        let rect = node(json!({
            "id": "r",
            "type": "RECTANGLE",
            "fills": [{ "type": "IMAGE", "imageRef": "https://cdn/a.png" }],
            "children": [{ "id": "t", "type": "TEXT" }]
        }));
        let element = ElementorBuilder::new().convert(&rect, 1).unwrap().unwrap();
        assert_eq!(element.widget_type, Some(WidgetKind::Image));
        assert!(element.elements.is_empty());
        assert_eq!(element.settings["image"]["url"], "https://cdn/a.png");
        assert_eq!(element.settings["image"]["id"], "r");
    }

    #[test]
    fn rectangle_with_a_hidden_image_fill_stays_a_container() {
        let rect = node(json!({
            "id": "r",
            "type": "RECTANGLE",
            "fills": [
                { "type": "IMAGE", "visible": false, "imageRef": "x" },
                { "type": "SOLID", "color": { "r": 0, "g": 0, "b": 1 } }
            ],
            "children": [{ "id": "t", "type": "TEXT", "text": { "characters": "On blue" } }]
        }));
        let element = ElementorBuilder::new().convert(&rect, 0).unwrap().unwrap();
        assert!(element.is_container());
        assert_eq!(element.settings["background_color"], "#0000FF");
        assert_eq!(element.elements.len(), 1);
        assert_eq!(element.elements[0].settings["title"], "On blue");
    }

    #[test]
    fn a_lone_line_converts_to_nothing() {
        let line = node(json!({ "id": "l", "type": "LINE" }));
        let elements = ElementorBuilder::new().convert_many(&[line], 0).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn non_container_roots_are_rejected() {
        let text = node(json!({ "id": "t", "type": "TEXT" }));
        assert!(matches!(
            ElementorBuilder::new().convert_root(&text),
            Err(ElementorConversionError::InvalidRoot { .. })
        ));
    }

    #[test]
    fn conversions_differ_only_in_ids() {
        let frame = node(json!({
            "id": "f",
            "type": "FRAME",
            "children": [{ "id": "a", "type": "TEXT", "text": { "characters": "A" } }]
        }));
        let builder = ElementorBuilder::new();
        let mut first = builder.convert(&frame, 0).unwrap().unwrap();
        let mut second = builder.convert(&frame, 0).unwrap().unwrap();
        assert_ne!(first.id, second.id);
        assert_ne!(first.elements[0].id, second.elements[0].id);
        first.id.clear();
        second.id.clear();
        first.elements[0].id.clear();
        second.elements[0].id.clear();
        assert_eq!(first, second);
    }

    #[test]
    fn depth_limit_is_reported() {
        let mut tree = json!({ "id": "leaf", "type": "TEXT" });
        for level in 0..4 {
            tree = json!({ "id": format!("f{}", level), "type": "FRAME", "children": [tree] });
        }
        let result = ElementorBuilder::new().with_max_depth(2).convert(&node(tree), 0);
        assert!(matches!(
            result,
            Err(ElementorConversionError::DepthLimitExceeded { limit: 2, .. })
        ));
    }
}
