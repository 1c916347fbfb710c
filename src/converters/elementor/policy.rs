//! Which source nodes become which page-builder elements.

use crate::converters::elementor::utils::first_paint;
use crate::models::element::WidgetKind;
use crate::models::node::{NodeType, SerializedNode};
use crate::models::paint::PaintType;

/// `true` when any visible fill of the node is an image paint.
///
/// Hidden image fills are ignored, matching the paint the image mapper
/// takes its URL from.
pub fn has_image_fill(node: &SerializedNode) -> bool {
    first_paint(node.fills(), PaintType::Image).is_some()
}

/// The kind a node type maps to on its own, before any fill inspection.
fn mapped_kind(node_type: &NodeType) -> Option<WidgetKind> {
    match node_type {
        NodeType::Text => Some(WidgetKind::Heading),
        NodeType::Image => Some(WidgetKind::Image),
        NodeType::Frame | NodeType::Group | NodeType::Rectangle => Some(WidgetKind::Container),
        NodeType::Ellipse
        | NodeType::Line
        | NodeType::Polygon
        | NodeType::Star
        | NodeType::Vector
        | NodeType::Component
        | NodeType::ComponentSet
        | NodeType::Instance
        | NodeType::BooleanOperation
        | NodeType::Other(_) => None,
    }
}

pub fn is_convertible(node: &SerializedNode) -> bool {
    widget_kind_for(node).is_some()
}

/// The element kind a node converts to, or `None` when it is skipped.
///
/// A rectangle with an image fill is always an image widget, even when it
/// has children.
pub fn widget_kind_for(node: &SerializedNode) -> Option<WidgetKind> {
    if *node.node_type() == NodeType::Rectangle && has_image_fill(node) {
        return Some(WidgetKind::Image);
    }
    mapped_kind(node.node_type())
}

/// Whether the node's children are converted as nested elements.
pub fn is_container(node: &SerializedNode) -> bool {
    match node.node_type() {
        NodeType::Frame | NodeType::Group => true,
        NodeType::Rectangle => node.has_children(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::colors::Rgb;
    use crate::models::paint::Paint;

    fn with_fills(node_type: NodeType, fills: Vec<Paint>) -> SerializedNode {
        let mut node = SerializedNode::new("n", node_type);
        node.fill.fills = Some(fills.into());
        node
    }

    #[test]
    fn mapped_types_are_convertible() {
        for (node_type, kind) in [
            (NodeType::Text, WidgetKind::Heading),
            (NodeType::Image, WidgetKind::Image),
            (NodeType::Frame, WidgetKind::Container),
            (NodeType::Group, WidgetKind::Container),
            (NodeType::Rectangle, WidgetKind::Container),
        ] {
            let node = SerializedNode::new("n", node_type);
            assert!(is_convertible(&node));
            assert_eq!(widget_kind_for(&node), Some(kind));
        }
    }

    #[test]
    fn unmapped_types_are_skipped() {
        for node_type in [
            NodeType::Line,
            NodeType::Ellipse,
            NodeType::Vector,
            NodeType::Instance,
            NodeType::Other("SLICE".to_string()),
        ] {
            let node = SerializedNode::new("n", node_type);
            assert!(!is_convertible(&node));
            assert_eq!(widget_kind_for(&node), None);
        }
    }

    #[test]
    fn image_fill_turns_a_rectangle_into_an_image() {
        let mut node = with_fills(
            NodeType::Rectangle,
            vec![Paint::solid(Rgb::new(1.0, 1.0, 1.0)), Paint::image("abc")],
        );
        node.children = Some(vec![SerializedNode::new("c", NodeType::Text)]);
        assert!(has_image_fill(&node));
        assert_eq!(widget_kind_for(&node), Some(WidgetKind::Image));
    }

    #[test]
    fn hidden_image_fill_leaves_a_rectangle_a_container() {
        let mut hidden = Paint::image("x");
        hidden.visible = Some(false);
        let mut node = with_fills(
            NodeType::Rectangle,
            vec![hidden, Paint::solid(Rgb::new(0.0, 0.0, 1.0))],
        );
        node.children = Some(vec![SerializedNode::new("c", NodeType::Text)]);

        assert!(!has_image_fill(&node));
        assert_eq!(widget_kind_for(&node), Some(WidgetKind::Container));
        assert!(is_container(&node));
    }

    #[test]
    fn image_fill_on_a_frame_keeps_it_a_container() {
        let node = with_fills(NodeType::Frame, vec![Paint::image("abc")]);
        assert_eq!(widget_kind_for(&node), Some(WidgetKind::Container));
    }

    #[test]
    fn rectangles_are_containers_only_with_children() {
        let mut node = SerializedNode::new("r", NodeType::Rectangle);
        assert!(!is_container(&node));
        node.children = Some(vec![SerializedNode::new("c", NodeType::Text)]);
        assert!(is_container(&node));
        assert!(is_container(&SerializedNode::new("f", NodeType::Frame)));
        assert!(!is_container(&SerializedNode::new("t", NodeType::Text)));
    }
}
