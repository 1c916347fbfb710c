use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::keyword::keyword_enum;
use crate::models::mixed::Mixable;

keyword_enum! {
    /// Auto-layout direction of a frame.
    pub enum LayoutMode {
        None => "NONE",
        Horizontal => "HORIZONTAL",
        Vertical => "VERTICAL",
        Grid => "GRID",
    }
}

keyword_enum! {
    /// Child alignment along an auto-layout axis.
    pub enum AxisAlign {
        Min => "MIN",
        Center => "CENTER",
        Max => "MAX",
        SpaceBetween => "SPACE_BETWEEN",
        Baseline => "BASELINE",
    }
}

/// Uniform and per-corner radii of a rectangle-like node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadiusGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<Mixable<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_smoothing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right_radius: Option<f64>,
}

impl CornerRadiusGroup {
    /// The uniform radius, unless absent or mixed.
    pub fn uniform(&self) -> Option<f64> {
        self.corner_radius.as_ref().and_then(|r| r.uniform()).copied()
    }

    /// `[top_left, top_right, bottom_right, bottom_left]` when all four are known.
    pub fn corners(&self) -> Option<[f64; 4]> {
        Some([
            self.top_left_radius?,
            self.top_right_radius?,
            self.bottom_right_radius?,
            self.bottom_left_radius?,
        ])
    }
}

/// Auto-layout, clipping and corner configuration of frame-like nodes
/// (frames, components, component sets, instances).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_sizing_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_sizing_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<AxisAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<AxisAlign>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_spacing: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_grids: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_style_id: Option<String>,

    #[serde(flatten)]
    pub corners: CornerRadiusGroup,
}
