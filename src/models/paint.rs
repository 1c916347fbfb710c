use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::colors::Rgb;
use crate::models::keyword::keyword_enum;

keyword_enum! {
    /// The kind of a paint in a fill or stroke list.
    pub enum PaintType {
        Solid => "SOLID",
        GradientLinear => "GRADIENT_LINEAR",
        GradientRadial => "GRADIENT_RADIAL",
        GradientAngular => "GRADIENT_ANGULAR",
        GradientDiamond => "GRADIENT_DIAMOND",
        Image => "IMAGE",
        Video => "VIDEO",
    }
}

keyword_enum! {
    /// How an image paint is fitted into its node.
    pub enum ScaleMode {
        Fill => "FILL",
        Fit => "FIT",
        Crop => "CROP",
        Tile => "TILE",
    }
}

/// One paint descriptor (solid color, gradient, image reference...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
    /// Set for SOLID paints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    /// Opaque handle of the image bytes inside the host document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
    /// Resolvable image reference (URL), when the host provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_mode: Option<ScaleMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_stops: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_transform: Option<JsonValue>,
}

impl Paint {
    /// A visible SOLID paint of the given color.
    pub fn solid(color: Rgb) -> Self {
        Paint {
            color: Some(color),
            ..Paint::of_type(PaintType::Solid)
        }
    }

    /// A visible IMAGE paint pointing at `image_ref`.
    pub fn image(image_ref: impl Into<String>) -> Self {
        Paint {
            image_ref: Some(image_ref.into()),
            ..Paint::of_type(PaintType::Image)
        }
    }

    fn of_type(paint_type: PaintType) -> Self {
        Paint {
            paint_type,
            visible: None,
            opacity: None,
            blend_mode: None,
            color: None,
            image_hash: None,
            image_ref: None,
            scale_mode: None,
            gradient_stops: None,
            gradient_transform: None,
        }
    }

    /// Paints are visible unless the host says otherwise.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// The first visible paint of `paint_type` in a paint list.
pub fn first_visible<'a>(paints: &'a [Paint], paint_type: &PaintType) -> Option<&'a Paint> {
    paints
        .iter()
        .find(|paint| paint.is_visible() && paint.paint_type == *paint_type)
}
