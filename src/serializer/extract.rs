//! Attribute-group extractors.
//!
//! Each function reads one fixed group of attributes off any host node.
//! Absent attributes come back as `None`; nothing here fails.

use log::warn;

use crate::errors::{PluginError, Result};
use crate::host::HostNode;
use crate::models::layout::CornerRadiusGroup;
use crate::models::node::{EffectGroup, ExtendedStrokeGroup, FillGroup, NodeBase, StrokeGroup};

/// Identity, visibility, geometry and plugin data shared by every node.
///
/// Fails only when the node has no id or no type.
pub fn extract_base<N: HostNode>(node: &N) -> Result<NodeBase> {
    let id = node
        .node_id()
        .ok_or_else(|| PluginError::MalformedNode("node has no id".to_string()))?;
    let node_type = node
        .node_type()
        .ok_or_else(|| PluginError::MalformedNode(format!("node {} has no type", id)))?;

    let plugin_data = match node.plugin_data() {
        Ok(data) => data,
        Err(e) => {
            warn!("Omitting plugin data of node {}: {}", id, e);
            None
        }
    };

    Ok(NodeBase {
        id: id.to_string(),
        name: node.read("name").unwrap_or_default(),
        node_type,
        visible: node.read("visible").unwrap_or(true),
        locked: node.read("locked").unwrap_or(false),
        opacity: node.read("opacity"),
        blend_mode: node.read("blendMode"),
        is_mask: node.read("isMask"),
        x: node.read("x"),
        y: node.read("y"),
        rotation: node.read("rotation"),
        width: node.read("width"),
        height: node.read("height"),
        absolute_transform: node.read("absoluteTransform"),
        absolute_bounding_box: node.read("absoluteBoundingBox"),
        relative_transform: node.read("relativeTransform"),
        constraints: node.read("constraints"),
        layout_align: node.read("layoutAlign"),
        layout_grow: node.read("layoutGrow"),
        layout_positioning: node.read("layoutPositioning"),
        export_settings: node.read("exportSettings"),
        plugin_data,
    })
}

pub fn extract_fills<N: HostNode>(node: &N) -> FillGroup {
    FillGroup {
        fills: node.read("fills"),
        fill_style_id: node.read("fillStyleId"),
    }
}

pub fn extract_strokes<N: HostNode>(node: &N) -> StrokeGroup {
    StrokeGroup {
        strokes: node.read("strokes"),
        stroke_style_id: node.read("strokeStyleId"),
        stroke_weight: node.read("strokeWeight"),
        stroke_align: node.read("strokeAlign"),
    }
}

/// Cap, join, miter limit and dash pattern.
pub fn extract_extended_strokes<N: HostNode>(node: &N) -> ExtendedStrokeGroup {
    ExtendedStrokeGroup {
        stroke_cap: node.read("strokeCap"),
        stroke_join: node.read("strokeJoin"),
        stroke_miter_limit: node.read("strokeMiterLimit"),
        dash_pattern: node.read("dashPattern"),
    }
}

pub fn extract_effects<N: HostNode>(node: &N) -> EffectGroup {
    EffectGroup {
        effects: node.read("effects"),
        effect_style_id: node.read("effectStyleId"),
    }
}

/// The uniform radius, smoothing and the four independent corner radii.
pub fn extract_corner_radius<N: HostNode>(node: &N) -> CornerRadiusGroup {
    CornerRadiusGroup {
        corner_radius: node.read("cornerRadius"),
        corner_smoothing: node.read("cornerSmoothing"),
        top_left_radius: node.read("topLeftRadius"),
        top_right_radius: node.read("topRightRadius"),
        bottom_left_radius: node.read("bottomLeftRadius"),
        bottom_right_radius: node.read("bottomRightRadius"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::node::{NodeType, StrokeAlign};
    use crate::models::paint::PaintType;
    use serde_json::json;

    #[test]
    fn base_requires_id_and_type() {
        let missing_id = json!({ "type": "TEXT" });
        assert!(matches!(
            extract_base(&missing_id),
            Err(PluginError::MalformedNode(_))
        ));

        let missing_type = json!({ "id": "1" });
        assert!(matches!(
            extract_base(&missing_type),
            Err(PluginError::MalformedNode(_))
        ));
    }

    #[test]
    fn base_omits_unreadable_plugin_data() {
        let node = json!({ "id": "1", "type": "FRAME", "name": "Card", "pluginData": [1, 2] });
        let base = extract_base(&node).unwrap();
        assert_eq!(base.node_type, NodeType::Frame);
        assert_eq!(base.name, "Card");
        assert!(base.visible);
        assert_eq!(base.plugin_data, None);
    }

    #[test]
    fn fills_and_strokes_tolerate_absence() {
        let empty = json!({ "id": "1", "type": "LINE" });
        assert_eq!(extract_fills(&empty), FillGroup::default());
        assert_eq!(extract_strokes(&empty), StrokeGroup::default());
        assert_eq!(extract_effects(&empty), EffectGroup::default());
    }

    #[test]
    fn strokes_are_read_with_weight_and_alignment() {
        let node = json!({
            "id": "1",
            "type": "RECTANGLE",
            "strokes": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }],
            "strokeWeight": 2,
            "strokeAlign": "INSIDE"
        });
        let group = extract_strokes(&node);
        assert_eq!(group.strokes.as_ref().map(Vec::len), Some(1));
        assert_eq!(group.strokes.unwrap()[0].paint_type, PaintType::Solid);
        assert_eq!(group.stroke_align, Some(StrokeAlign::Inside));
        assert!(group.stroke_weight.is_some());
    }

    #[test]
    fn mixed_corner_radius_keeps_individual_corners() {
        let node = json!({
            "id": "1",
            "type": "RECTANGLE",
            "cornerRadius": "MIXED",
            "topLeftRadius": 4,
            "topRightRadius": 4,
            "bottomLeftRadius": 0,
            "bottomRightRadius": 0
        });
        let corners = extract_corner_radius(&node);
        assert_eq!(corners.uniform(), None);
        assert_eq!(corners.corners(), Some([4.0, 4.0, 0.0, 0.0]));
    }
}
