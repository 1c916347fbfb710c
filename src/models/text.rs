use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::keyword::keyword_enum;
use crate::models::mixed::Mixable;

keyword_enum! {
    pub enum TextAlignHorizontal {
        Left => "LEFT",
        Center => "CENTER",
        Right => "RIGHT",
        Justified => "JUSTIFIED",
    }
}

keyword_enum! {
    pub enum TextAlignVertical {
        Top => "TOP",
        Center => "CENTER",
        Bottom => "BOTTOM",
    }
}

keyword_enum! {
    /// Case transform applied at render time; the stored characters are untouched.
    pub enum TextCase {
        Original => "ORIGINAL",
        Upper => "UPPER",
        Lower => "LOWER",
        Title => "TITLE",
        SmallCaps => "SMALL_CAPS",
        SmallCapsForced => "SMALL_CAPS_FORCED",
    }
}

keyword_enum! {
    pub enum TextDecoration {
        None => "NONE",
        Underline => "UNDERLINE",
        Strikethrough => "STRIKETHROUGH",
    }
}

keyword_enum! {
    /// Unit of a line height or letter spacing value.
    pub enum LengthUnit {
        Pixels => "PIXELS",
        Percent => "PERCENT",
        Auto => "AUTO",
    }
}

/// A font family plus its named style ("Bold", "Semibold Italic"...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineHeight {
    pub unit: LengthUnit,
    /// Absent when the unit is AUTO.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterSpacing {
    pub unit: LengthUnit,
    pub value: f64,
}

/// Text content and typography of a TEXT node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Mixable<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_name: Option<Mixable<FontName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Mixable<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Mixable<LineHeight>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Mixable<LetterSpacing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_indent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_spacing: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<TextAlignVertical>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<Mixable<TextCase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<Mixable<TextDecoration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_auto_resize: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style_id: Option<Mixable<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<Mixable<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_missing_font: Option<bool>,
}
