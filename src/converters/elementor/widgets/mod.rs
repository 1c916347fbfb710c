//! Settings mappers for the supported widget kinds.
//!
//! Each mapper turns one [`SerializedNode`] into the typed settings of its
//! widget; `map_settings` dispatches on the kind and flattens the result
//! into the free-form settings map.

pub mod container;
pub mod heading;
pub mod image;

use crate::models::element::WidgetKind;
use crate::models::node::SerializedNode;
use crate::models::settings::{to_settings, Settings};

pub use container::map_frame_to_container;
pub use heading::{font_weight_from_style, map_text_to_heading};
pub use image::{extract_image_url, map_image_to_image};

/// Runs the mapper for `kind` on `node`.
pub fn map_settings(kind: WidgetKind, node: &SerializedNode) -> serde_json::Result<Settings> {
    match kind {
        WidgetKind::Heading => to_settings(&map_text_to_heading(node)),
        WidgetKind::Image => to_settings(&map_image_to_image(node)),
        WidgetKind::Container => to_settings(&map_frame_to_container(node)),
    }
}
