//! Per-kind serialization handlers.
//!
//! `handler_for` is a total match over [`NodeType`]: a new node kind does
//! not compile until it is given a handler here.

use crate::host::HostNode;
use crate::models::layout::{CornerRadiusGroup, FrameData};
use crate::models::node::{
    BooleanOperationData, ComponentData, ComponentSetData, EllipseData, GroupData, InstanceData,
    LineData, NodeType, PolygonData, RectangleData, SerializedNode, VectorData,
};
use crate::models::text::TextData;
use crate::serializer::extract::{
    extract_corner_radius, extract_effects, extract_extended_strokes, extract_fills,
    extract_strokes,
};

/// Attaches the kind-specific sub-record and paint groups to a base record.
pub(crate) type NodeHandler<N> = fn(&N, &mut SerializedNode);

pub(crate) fn handler_for<N: HostNode>(node_type: &NodeType) -> NodeHandler<N> {
    match node_type {
        NodeType::Text => serialize_text::<N>,
        NodeType::Frame => serialize_frame::<N>,
        NodeType::Component => serialize_component::<N>,
        NodeType::ComponentSet => serialize_component_set::<N>,
        NodeType::Instance => serialize_instance::<N>,
        NodeType::Group => serialize_group::<N>,
        // Standalone image nodes carry the same geometry and paint as rectangles.
        NodeType::Rectangle | NodeType::Image => serialize_rectangle::<N>,
        NodeType::Ellipse => serialize_ellipse::<N>,
        NodeType::Line => serialize_line::<N>,
        NodeType::Polygon | NodeType::Star => serialize_polygon::<N>,
        NodeType::Vector => serialize_vector::<N>,
        NodeType::BooleanOperation => serialize_boolean_operation::<N>,
        NodeType::Other(_) => serialize_unknown::<N>,
    }
}

/// Whether nodes of this kind carry a `children` list.
pub(crate) fn has_child_list(node_type: &NodeType) -> bool {
    match node_type {
        NodeType::Frame
        | NodeType::Group
        | NodeType::Component
        | NodeType::ComponentSet
        | NodeType::Instance
        | NodeType::BooleanOperation
        | NodeType::Other(_) => true,
        NodeType::Text
        | NodeType::Rectangle
        | NodeType::Image
        | NodeType::Ellipse
        | NodeType::Line
        | NodeType::Polygon
        | NodeType::Star
        | NodeType::Vector => false,
    }
}

fn serialize_text<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.text = Some(TextData {
        characters: node.read("characters"),
        font_size: node.read("fontSize"),
        font_name: node.read("fontName"),
        font_weight: node.read("fontWeight"),
        line_height: node.read("lineHeight"),
        letter_spacing: node.read("letterSpacing"),
        paragraph_indent: node.read("paragraphIndent"),
        paragraph_spacing: node.read("paragraphSpacing"),
        text_align_horizontal: node.read("textAlignHorizontal"),
        text_align_vertical: node.read("textAlignVertical"),
        text_case: node.read("textCase"),
        text_decoration: node.read("textDecoration"),
        text_auto_resize: node.read("textAutoResize"),
        text_style_id: node.read("textStyleId"),
        hyperlink: node.read("hyperlink"),
        has_missing_font: node.read("hasMissingFont"),
    });
    out.fill = extract_fills(node);
    out.stroke = extract_strokes(node);
    out.effect = extract_effects(node);
}

fn frame_data<N: HostNode>(node: &N) -> FrameData {
    FrameData {
        layout_mode: node.read("layoutMode"),
        primary_axis_sizing_mode: node.read("primaryAxisSizingMode"),
        counter_axis_sizing_mode: node.read("counterAxisSizingMode"),
        primary_axis_align_items: node.read("primaryAxisAlignItems"),
        counter_axis_align_items: node.read("counterAxisAlignItems"),
        padding_left: node.read("paddingLeft"),
        padding_right: node.read("paddingRight"),
        padding_top: node.read("paddingTop"),
        padding_bottom: node.read("paddingBottom"),
        item_spacing: node.read("itemSpacing"),
        counter_axis_spacing: node.read("counterAxisSpacing"),
        clips_content: node.read("clipsContent"),
        layout_grids: node.read("layoutGrids"),
        grid_style_id: node.read("gridStyleId"),
        corners: extract_corner_radius(node),
    }
}

fn attach_paint<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.fill = extract_fills(node);
    out.stroke = extract_strokes(node);
    out.extended_stroke = extract_extended_strokes(node);
    out.effect = extract_effects(node);
}

fn serialize_frame<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.frame = Some(frame_data(node));
    attach_paint(node, out);
}

fn serialize_component<N: HostNode>(node: &N, out: &mut SerializedNode) {
    serialize_frame(node, out);
    out.component = Some(ComponentData {
        key: node.read("key"),
        description: node.read("description"),
        remote: node.read("remote"),
    });
}

fn serialize_component_set<N: HostNode>(node: &N, out: &mut SerializedNode) {
    serialize_frame(node, out);
    out.component_set = Some(ComponentSetData {
        key: node.read("key"),
        description: node.read("description"),
    });
}

fn serialize_instance<N: HostNode>(node: &N, out: &mut SerializedNode) {
    serialize_frame(node, out);
    out.instance = Some(InstanceData {
        // Unresolvable components serialize as an explicit null reference.
        main_component: node.read("mainComponent"),
        scale_factor: node.read("scaleFactor"),
    });
}

fn serialize_group<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.group = Some(GroupData {
        clips_content: node.read("clipsContent"),
    });
}

fn serialize_rectangle<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.rectangle = Some(RectangleData {
        corners: extract_corner_radius(node),
    });
    attach_paint(node, out);
}

fn serialize_ellipse<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.ellipse = Some(EllipseData {
        arc_data: node.read("arcData"),
    });
    out.fill = extract_fills(node);
    out.stroke = extract_strokes(node);
    out.effect = extract_effects(node);
}

fn serialize_line<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.line = Some(LineData {
        stroke_cap: node.read("strokeCap"),
    });
    out.stroke = extract_strokes(node);
    out.effect = extract_effects(node);
}

fn serialize_polygon<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.polygon = Some(PolygonData {
        point_count: node.read("pointCount"),
    });
    out.fill = extract_fills(node);
    out.stroke = extract_strokes(node);
    out.effect = extract_effects(node);
}

fn serialize_vector<N: HostNode>(node: &N, out: &mut SerializedNode) {
    let CornerRadiusGroup {
        corner_radius,
        corner_smoothing,
        ..
    } = extract_corner_radius(node);
    out.vector = Some(VectorData {
        vector_paths: node.read("vectorPaths"),
        vector_network: node.read("vectorNetwork"),
        handle_mirroring: node.read("handleMirroring"),
        corner_radius,
        corner_smoothing,
    });
    attach_paint(node, out);
}

fn serialize_boolean_operation<N: HostNode>(node: &N, out: &mut SerializedNode) {
    out.boolean_operation = Some(BooleanOperationData {
        boolean_operation: node.read("booleanOperation"),
    });
    out.fill = extract_fills(node);
    out.stroke = extract_strokes(node);
    out.effect = extract_effects(node);
}

fn serialize_unknown<N: HostNode>(_node: &N, _out: &mut SerializedNode) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::extract::extract_base;
    use serde_json::{json, Value as JsonValue};

    fn run(node: &JsonValue) -> SerializedNode {
        let mut out = SerializedNode::from_base(extract_base(node).unwrap());
        let handler: NodeHandler<JsonValue> = handler_for(out.node_type());
        handler(node, &mut out);
        out
    }

    #[test]
    fn text_nodes_get_a_text_record_and_fills() {
        let node = json!({
            "id": "t",
            "type": "TEXT",
            "characters": "Hello",
            "fontSize": 18,
            "fontName": { "family": "Roboto", "style": "Bold" },
            "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }],
            "effects": [{ "type": "DROP_SHADOW" }]
        });
        let out = run(&node);
        let text = out.text.as_ref().unwrap();
        assert_eq!(text.characters.as_deref(), Some("Hello"));
        assert_eq!(out.fills().map(<[_]>::len), Some(1));
        assert_eq!(out.effect.effects.as_ref().map(Vec::len), Some(1));
        assert!(out.frame.is_none());
    }

    #[test]
    fn lines_never_carry_fills() {
        let node = json!({
            "id": "l",
            "type": "LINE",
            "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }],
            "strokeCap": "ROUND"
        });
        let out = run(&node);
        assert!(out.line.is_some());
        assert_eq!(out.fills(), None);
    }

    #[test]
    fn ellipses_and_lines_skip_the_extended_stroke_group() {
        let ellipse = run(&json!({
            "id": "e",
            "type": "ELLIPSE",
            "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 1, "b": 0 } }],
            "strokeJoin": "ROUND",
            "dashPattern": [4, 2],
            "arcData": { "startingAngle": 0, "endingAngle": 3.14, "innerRadius": 0 }
        }));
        assert!(ellipse.ellipse.is_some());
        assert_eq!(ellipse.extended_stroke, Default::default());
        assert_eq!(ellipse.fills().map(<[_]>::len), Some(1));

        let line = run(&json!({
            "id": "l",
            "type": "LINE",
            "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 1, "b": 0 } }],
            "strokeCap": "ARROW_LINES",
            "strokeJoin": "ROUND",
            "dashPattern": [4, 2]
        }));
        assert_eq!(line.extended_stroke, Default::default());
        assert_eq!(line.fill, Default::default());
        assert!(line.line.as_ref().and_then(|l| l.stroke_cap.as_ref()).is_some());
    }

    #[test]
    fn groups_carry_only_the_clip_flag() {
        let node = json!({
            "id": "g",
            "type": "GROUP",
            "clipsContent": true,
            "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }]
        });
        let out = run(&node);
        assert_eq!(out.group.as_ref().and_then(|g| g.clips_content), Some(true));
        assert_eq!(out.fills(), None);
    }

    #[test]
    fn instances_without_a_component_keep_a_null_reference() {
        let node = json!({ "id": "i", "type": "INSTANCE", "layoutMode": "HORIZONTAL" });
        let out = run(&node);
        assert!(out.frame.is_some());
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["instance"]["mainComponent"], JsonValue::Null);
    }

    #[test]
    fn vectors_keep_only_uniform_corner_radius() {
        let node = json!({ "id": "v", "type": "VECTOR", "cornerRadius": 3, "topLeftRadius": 9 });
        let out = run(&node);
        let vector = out.vector.as_ref().unwrap();
        assert!(vector.corner_radius.is_some());
        assert!(out.rectangle.is_none());
    }

    #[test]
    fn unknown_kinds_keep_the_base_record_only() {
        let node = json!({ "id": "s", "type": "SLICE", "fills": [] });
        let out = run(&node);
        assert_eq!(out.node_type(), &NodeType::Other("SLICE".to_string()));
        assert_eq!(out.fill, Default::default());
        assert!(has_child_list(out.node_type()));
    }
}
