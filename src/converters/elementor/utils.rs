//! Color, number and paint helpers shared by the widget mappers.

use crate::models::colors::Rgb;
use crate::models::node::SerializedNode;
use crate::models::paint::{first_visible, Paint, PaintType};

pub use crate::models::settings::format_number;

/// Converts a 0..1 color to `#RRGGBB` (uppercase hex).
///
/// Channels are clamped to 0..1 and rounded after scaling to 0..255.
pub fn rgb_to_hex(color: &Rgb) -> String {
    fn channel(value: f64) -> u8 {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        (value * 255.0).round() as u8
    }
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

/// The first visible SOLID fill's color as hex.
pub fn first_solid_fill_hex(node: &SerializedNode) -> Option<String> {
    first_paint(node.fills(), PaintType::Solid)
        .and_then(|paint| paint.color.as_ref())
        .map(rgb_to_hex)
}

/// The first visible paint of `paint_type` in an optional paint list.
pub fn first_paint(paints: Option<&[Paint]>, paint_type: PaintType) -> Option<&Paint> {
    paints.and_then(|paints| first_visible(paints, &paint_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex_uses_uppercase_and_rounding() {
        assert_eq!(rgb_to_hex(&Rgb::new(1.0, 0.0, 0.0)), "#FF0000");
        assert_eq!(rgb_to_hex(&Rgb::new(0.0, 0.0, 0.0)), "#000000");
        assert_eq!(rgb_to_hex(&Rgb::new(0.95, 0.95, 0.98)), "#F2F2FA");
        assert_eq!(rgb_to_hex(&Rgb::new(1.4, -0.2, f64::NAN)), "#FF0000");
    }

    #[test]
    fn first_solid_fill_skips_hidden_and_non_solid_paints() {
        let mut hidden = Paint::solid(Rgb::new(1.0, 0.0, 0.0));
        hidden.visible = Some(false);
        let mut node = SerializedNode::new("r", crate::models::node::NodeType::Rectangle);
        node.fill.fills = Some(
            vec![
                Paint::image("ref"),
                hidden,
                Paint::solid(Rgb::new(0.0, 0.0, 1.0)),
            ]
            .into(),
        );
        assert_eq!(first_solid_fill_hex(&node).as_deref(), Some("#0000FF"));
    }
}
