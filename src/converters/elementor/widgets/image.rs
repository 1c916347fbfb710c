//! Image fill -> `image` widget settings.

use crate::converters::elementor::constants::IMAGE_HASH_URL_PREFIX;
use crate::converters::elementor::utils::{first_paint, rgb_to_hex};
use crate::models::node::SerializedNode;
use crate::models::paint::{Paint, PaintType, ScaleMode};
use crate::models::settings::{BoxValue, ImageSettings, ImageSource, SliderValue};

/// The URL of the node's first image fill.
///
/// Prefers the resolved `imageRef`; an image known only by its hash gets a
/// `figma://image/<hash>` reference. Empty when there is no image fill.
pub fn extract_image_url(node: &SerializedNode) -> String {
    first_paint(node.fills(), PaintType::Image)
        .and_then(image_url)
        .unwrap_or_default()
}

fn image_url(paint: &Paint) -> Option<String> {
    if let Some(image_ref) = paint.image_ref.as_ref().filter(|r| !r.is_empty()) {
        return Some(image_ref.clone());
    }
    paint
        .image_hash
        .as_ref()
        .filter(|hash| !hash.is_empty())
        .map(|hash| format!("{}{}", IMAGE_HASH_URL_PREFIX, hash))
}

fn object_fit(scale_mode: Option<&ScaleMode>) -> &'static str {
    match scale_mode {
        Some(ScaleMode::Fit) => "contain",
        Some(ScaleMode::Tile) => "none",
        _ => "cover",
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn border_radius(node: &SerializedNode) -> Option<BoxValue> {
    let corners = node.corner_radii()?;
    if let Some(radius) = corners.uniform().filter(|r| *r > 0.0) {
        return Some(BoxValue::uniform_px(radius.round()));
    }
    let [top_left, top_right, bottom_right, bottom_left] = corners.corners()?;
    let linked = top_left == top_right && top_right == bottom_right && bottom_right == bottom_left;
    Some(BoxValue::px(
        top_left.round(),
        top_right.round(),
        bottom_right.round(),
        bottom_left.round(),
        linked,
    ))
}

/// Maps a node with an image fill (or an IMAGE node) to image settings.
pub fn map_image_to_image(node: &SerializedNode) -> ImageSettings {
    let image_fill = first_paint(node.fills(), PaintType::Image);
    let bounds = node.base.absolute_bounding_box.as_ref();

    let width = nonzero(bounds.map(|b| b.width)).or(nonzero(node.base.width));
    let height = nonzero(bounds.map(|b| b.height)).or(nonzero(node.base.height));

    let mut settings = ImageSettings {
        image: image_fill.and_then(image_url).map(|url| ImageSource {
            url,
            id: node.id().to_string(),
        }),
        image_size: "full".to_string(),
        object_fit: object_fit(image_fill.and_then(|fill| fill.scale_mode.as_ref())).to_string(),
        width: width.map(|w| SliderValue::px(w.round())),
        height: height.map(|h| SliderValue::px(h.round())),
        border_radius: border_radius(node),
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
        settings.element_opacity = Some(SliderValue::px(opacity));
    }

    settings
}
