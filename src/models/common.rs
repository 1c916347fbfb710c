use serde::{Deserialize, Serialize};

/// A 2D point or offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned rectangle in canvas coordinates.
///
/// Missing fields read as 0; exported size-only boxes omit the position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A 2x3 affine matrix, row-major: `[[a, c, tx], [b, d, ty]]`.
pub type Transform = [[f64; 3]; 2];

/// How a node is pinned relative to its parent frame when that frame resizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub horizontal: String,
    pub vertical: String,
}

/// The sweep of an ellipse, used for arcs, pies and donuts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcData {
    pub starting_angle: f64,
    pub ending_angle: f64,
    pub inner_radius: f64,
}
