//! Value shapes of the page builder's widget controls.
//!
//! Settings travel as a free-form `key -> value` map, but each widget's
//! mapper produces one of the typed structs below first, so the key names
//! and value shapes are checked at compile time.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// The settings map attached to every element.
pub type Settings = IndexMap<String, JsonValue>;

/// Renders a number the way the page builder writes it: integers without
/// a fractional part (`10`, not `10.0`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn serialize_compact<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Turns a typed settings struct into the free-form map.
pub fn to_settings<T: Serialize>(value: &T) -> serde_json::Result<Settings> {
    match serde_json::to_value(value)? {
        JsonValue::Object(map) => Ok(map.into_iter().collect()),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "settings must serialize to an object, got {}",
            other
        ))),
    }
}

/// A single numeric control (`{unit, size, sizes}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderValue {
    pub unit: String,
    #[serde(serialize_with = "serialize_compact")]
    pub size: f64,
    #[serde(default)]
    pub sizes: Vec<JsonValue>,
}

impl SliderValue {
    pub fn new(unit: &str, size: f64) -> Self {
        SliderValue {
            unit: unit.to_string(),
            size,
            sizes: Vec::new(),
        }
    }

    pub fn px(size: f64) -> Self {
        SliderValue::new("px", size)
    }
}

/// A four-sided control (padding, margin, border width, border radius).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxValue {
    pub unit: String,
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
    #[serde(rename = "isLinked")]
    pub is_linked: bool,
}

impl BoxValue {
    /// All four sides in px.
    pub fn px(top: f64, right: f64, bottom: f64, left: f64, is_linked: bool) -> Self {
        BoxValue {
            unit: "px".to_string(),
            top: format_number(top),
            right: format_number(right),
            bottom: format_number(bottom),
            left: format_number(left),
            is_linked,
        }
    }

    /// The same px value on every side, linked.
    pub fn uniform_px(value: f64) -> Self {
        BoxValue::px(value, value, value, value, true)
    }
}

/// The flex gap control of a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapValue {
    #[serde(serialize_with = "serialize_compact")]
    pub size: f64,
    pub column: String,
    pub row: String,
    pub unit: String,
    #[serde(rename = "isLinked")]
    pub is_linked: bool,
}

impl GapValue {
    pub fn px(size: f64) -> Self {
        GapValue {
            size,
            column: format_number(size),
            row: format_number(size),
            unit: "px".to_string(),
            is_linked: true,
        }
    }
}

/// The media reference of an image widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
    pub id: String,
}

/// Settings of a `heading` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingSettings {
    pub title: String,
    pub header_size: String,
    pub align: String,
    pub typography_typography: String,
    pub typography_font_family: String,
    pub typography_font_size: SliderValue,
    pub typography_font_weight: String,
    pub typography_text_transform: String,
    pub typography_font_style: String,
    pub typography_text_decoration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography_line_height: Option<SliderValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography_letter_spacing: Option<SliderValue>,
    pub title_color: String,
}

/// Settings of an `image` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSource>,
    pub image_size: String,
    pub object_fit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<SliderValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<SliderValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BoxValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<BoxValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(rename = "_element_opacity", skip_serializing_if = "Option::is_none")]
    pub element_opacity: Option<SliderValue>,
}

/// Settings of a flexbox `container`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSettings {
    pub flex_direction: String,
    pub flex_justify_content: String,
    pub flex_align_items: String,
    pub flex_gap: GapValue,
    pub padding: BoxValue,
    pub background_background: String,
    pub background_color: String,
    pub border_radius: BoxValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<BoxValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(rename = "_element_opacity", skip_serializing_if = "Option::is_none")]
    pub element_opacity: Option<SliderValue>,
}
