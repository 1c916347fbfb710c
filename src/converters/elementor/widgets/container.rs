//! Frame / group -> flexbox `container` settings.

use crate::converters::elementor::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_GAP_PX, DEFAULT_PADDING_PX,
};
use crate::converters::elementor::utils::{first_paint, first_solid_fill_hex, rgb_to_hex};
use crate::models::layout::{AxisAlign, FrameData, LayoutMode};
use crate::models::node::SerializedNode;
use crate::models::paint::PaintType;
use crate::models::settings::{BoxValue, ContainerSettings, GapValue, SliderValue};

fn flex_direction(frame: &FrameData) -> &'static str {
    match frame.layout_mode {
        Some(LayoutMode::Horizontal) => "row",
        _ => "column",
    }
}

fn justify_content(frame: &FrameData) -> &'static str {
    match frame.primary_axis_align_items {
        Some(AxisAlign::Center) => "center",
        Some(AxisAlign::Max) => "flex-end",
        Some(AxisAlign::SpaceBetween) => "space-between",
        _ => "flex-start",
    }
}

fn align_items(frame: &FrameData) -> &'static str {
    match frame.counter_axis_align_items {
        Some(AxisAlign::Center) => "center",
        Some(AxisAlign::Max) => "flex-end",
        _ => "flex-start",
    }
}

/// Maps a frame, group or rectangle to container settings.
///
/// Gap and padding defaults apply only when the value is absent; an
/// explicit zero stays zero.
pub fn map_frame_to_container(node: &SerializedNode) -> ContainerSettings {
    let fallback = FrameData::default();
    let frame = node.auto_layout().unwrap_or(&fallback);

    let padding = |side: Option<f64>| side.unwrap_or(DEFAULT_PADDING_PX);
    let radius = node
        .corner_radii()
        .and_then(|corners| corners.uniform())
        .unwrap_or(0.0);

    let mut settings = ContainerSettings {
        flex_direction: flex_direction(frame).to_string(),
        flex_justify_content: justify_content(frame).to_string(),
        flex_align_items: align_items(frame).to_string(),
        flex_gap: GapValue::px(frame.item_spacing.unwrap_or(DEFAULT_GAP_PX)),
        padding: BoxValue::px(
            padding(frame.padding_top),
            padding(frame.padding_right),
            padding(frame.padding_bottom),
            padding(frame.padding_left),
            false,
        ),
        background_background: "classic".to_string(),
        background_color: first_solid_fill_hex(node)
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
        border_radius: BoxValue::uniform_px(radius),
        border_border: None,
        border_width: None,
        border_color: None,
        element_opacity: None,
    };

    let stroke = first_paint(node.strokes(), PaintType::Solid);
    let weight = node.stroke_weight().filter(|w| *w > 0.0);
    if let (Some(color), Some(weight)) = (stroke.and_then(|s| s.color.as_ref()), weight) {
        settings.border_border = Some("solid".to_string());
        settings.border_width = Some(BoxValue::uniform_px(weight));
        settings.border_color = Some(rgb_to_hex(color));
    }

    if let Some(opacity) = node.base.opacity.filter(|o| *o < 1.0) {
        settings.element_opacity = Some(SliderValue::new("", opacity));
    }

    settings
}
