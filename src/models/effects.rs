use serde::{Deserialize, Serialize};

use crate::models::colors::Rgba;
use crate::models::common::Vector;
use crate::models::keyword::keyword_enum;

keyword_enum! {
    pub enum EffectType {
        DropShadow => "DROP_SHADOW",
        InnerShadow => "INNER_SHADOW",
        LayerBlur => "LAYER_BLUR",
        BackgroundBlur => "BACKGROUND_BLUR",
    }
}

/// A shadow or blur applied to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
}

fn default_visible() -> bool {
    true
}
