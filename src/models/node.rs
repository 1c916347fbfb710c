//! The plain-data projection of a host document node.
//!
//! A `SerializedNode` is a common base record plus one optional sub-record
//! per shape kind. The serializer fills in exactly the sub-record that the
//! node's type carries, so the mappers never probe for attributes at runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::common::{ArcData, Constraints, Rect, Transform};
use crate::models::effects::Effect;
use crate::models::keyword::keyword_enum;
use crate::models::layout::{CornerRadiusGroup, FrameData};
use crate::models::mixed::{uniform, Mixable};
use crate::models::paint::Paint;
use crate::models::text::TextData;

keyword_enum! {
    /// The kind of a document node.
    pub enum NodeType {
        Text => "TEXT",
        Frame => "FRAME",
        Group => "GROUP",
        Rectangle => "RECTANGLE",
        Ellipse => "ELLIPSE",
        Line => "LINE",
        Polygon => "POLYGON",
        Star => "STAR",
        Vector => "VECTOR",
        Component => "COMPONENT",
        ComponentSet => "COMPONENT_SET",
        Instance => "INSTANCE",
        BooleanOperation => "BOOLEAN_OPERATION",
        Image => "IMAGE",
    }
}

keyword_enum! {
    pub enum StrokeAlign {
        Center => "CENTER",
        Inside => "INSIDE",
        Outside => "OUTSIDE",
    }
}

keyword_enum! {
    pub enum BooleanOperationType {
        Union => "UNION",
        Intersect => "INTERSECT",
        Subtract => "SUBTRACT",
        Exclude => "EXCLUDE",
    }
}

fn default_visible() -> bool {
    true
}

/// Identity, visibility and geometry shared by every node kind.
///
/// Everything after `locked` is only present when the host exposes it for
/// the node's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeBase {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mask: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<Rect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_transform: Option<Transform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_grow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_positioning: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_settings: Option<Vec<JsonValue>>,
    /// Custom key-value data other plugins attached to the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_data: Option<IndexMap<String, String>>,
}

impl NodeBase {
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        NodeBase {
            id: id.into(),
            name: String::new(),
            node_type,
            visible: true,
            locked: false,
            opacity: None,
            blend_mode: None,
            is_mask: None,
            x: None,
            y: None,
            rotation: None,
            width: None,
            height: None,
            absolute_transform: None,
            absolute_bounding_box: None,
            relative_transform: None,
            constraints: None,
            layout_align: None,
            layout_grow: None,
            layout_positioning: None,
            export_settings: None,
            plugin_data: None,
        }
    }
}

/// Fill paints and the shared style they come from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Mixable<Vec<Paint>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_style_id: Option<Mixable<String>>,
}

/// Stroke paints, weight and alignment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_style_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<Mixable<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<StrokeAlign>,
}

/// Line-end and dash details that only path-like shapes carry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedStrokeGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_cap: Option<Mixable<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_join: Option<Mixable<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_miter_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_style_id: Option<String>,
}

/// The main component an instance was created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub id: String,
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSetData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceData {
    /// `null` when the main component cannot be resolved (e.g. deleted library).
    #[serde(default)]
    pub main_component: Option<ComponentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_factor: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips_content: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleData {
    #[serde(flatten)]
    pub corners: CornerRadiusGroup,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EllipseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_data: Option<ArcData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_cap: Option<Mixable<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorPath {
    pub winding_rule: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_paths: Option<Vec<VectorPath>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_network: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_mirroring: Option<Mixable<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Mixable<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_smoothing: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanOperationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_operation: Option<BooleanOperationType>,
}

/// One serialized document node and its serialized subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedNode {
    #[serde(flatten)]
    pub base: NodeBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_set: Option<ComponentSetData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<InstanceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<RectangleData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ellipse: Option<EllipseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<PolygonData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<VectorData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_operation: Option<BooleanOperationData>,

    #[serde(flatten)]
    pub fill: FillGroup,
    #[serde(flatten)]
    pub stroke: StrokeGroup,
    #[serde(flatten)]
    pub extended_stroke: ExtendedStrokeGroup,
    #[serde(flatten)]
    pub effect: EffectGroup,

    /// Present (possibly empty) on container-capable kinds only, in layer order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SerializedNode>>,
}

impl SerializedNode {
    /// A node with only its identity set.
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        SerializedNode::from_base(NodeBase::new(id, node_type))
    }

    pub fn from_base(base: NodeBase) -> Self {
        SerializedNode {
            base,
            text: None,
            frame: None,
            component: None,
            component_set: None,
            instance: None,
            group: None,
            rectangle: None,
            ellipse: None,
            line: None,
            polygon: None,
            vector: None,
            boolean_operation: None,
            fill: FillGroup::default(),
            stroke: StrokeGroup::default(),
            extended_stroke: ExtendedStrokeGroup::default(),
            effect: EffectGroup::default(),
            children: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn node_type(&self) -> &NodeType {
        &self.base.node_type
    }

    /// Fill paints, or `None` when absent or mixed.
    pub fn fills(&self) -> Option<&[Paint]> {
        uniform(&self.fill.fills).map(Vec::as_slice)
    }

    pub fn strokes(&self) -> Option<&[Paint]> {
        self.stroke.strokes.as_deref()
    }

    /// Stroke weight, or `None` when absent or mixed.
    pub fn stroke_weight(&self) -> Option<f64> {
        uniform(&self.stroke.stroke_weight).copied()
    }

    /// Auto-layout configuration of frame-like nodes.
    pub fn auto_layout(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }

    /// Corner radii, from whichever sub-record carries them.
    pub fn corner_radii(&self) -> Option<&CornerRadiusGroup> {
        self.frame
            .as_ref()
            .map(|frame| &frame.corners)
            .or_else(|| self.rectangle.as_ref().map(|rect| &rect.corners))
    }

    pub fn children(&self) -> &[SerializedNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}
