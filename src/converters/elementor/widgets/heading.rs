//! Text node -> `heading` widget settings.

use crate::converters::elementor::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_PX, DEFAULT_FONT_WEIGHT, DEFAULT_HEADER_SIZE,
    DEFAULT_HEADING_TITLE, DEFAULT_TEXT_COLOR,
};
use crate::converters::elementor::utils::{first_solid_fill_hex, format_number};
use crate::models::mixed::uniform;
use crate::models::node::SerializedNode;
use crate::models::settings::{HeadingSettings, SliderValue};
use crate::models::text::{
    LengthUnit, LetterSpacing, LineHeight, TextAlignHorizontal, TextCase, TextData,
    TextDecoration,
};

/// Numeric weight for a font style name such as `"Semi Bold Italic"`.
///
/// Case, spaces, hyphens and the italic marker are ignored.
pub fn font_weight_from_style(style: &str) -> Option<u32> {
    let key: String = style
        .to_lowercase()
        .replace("italic", "")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect();
    let weight = match key.as_str() {
        "thin" | "hairline" => 100,
        "extralight" | "ultralight" => 200,
        "light" => 300,
        "regular" | "normal" | "book" | "" => 400,
        "medium" => 500,
        "semibold" | "demibold" => 600,
        "bold" => 700,
        "extrabold" | "ultrabold" => 800,
        "black" | "heavy" => 900,
        _ => return None,
    };
    Some(weight)
}

fn font_weight(text: &TextData) -> String {
    if let Some(weight) = uniform(&text.font_weight) {
        return format_number(*weight);
    }
    let weight = uniform(&text.font_name)
        .and_then(|name| font_weight_from_style(&name.style))
        .unwrap_or(DEFAULT_FONT_WEIGHT);
    weight.to_string()
}

fn align(text: &TextData) -> &'static str {
    match text.text_align_horizontal {
        Some(TextAlignHorizontal::Center) => "center",
        Some(TextAlignHorizontal::Right) => "right",
        _ => "left",
    }
}

fn text_transform(text: &TextData) -> &'static str {
    match uniform(&text.text_case) {
        Some(TextCase::Upper) => "uppercase",
        Some(TextCase::Lower) => "lowercase",
        Some(TextCase::Title) => "capitalize",
        _ => "none",
    }
}

fn text_decoration(text: &TextData) -> &'static str {
    match uniform(&text.text_decoration) {
        Some(TextDecoration::Underline) => "underline",
        Some(TextDecoration::Strikethrough) => "line-through",
        _ => "none",
    }
}

fn line_height(value: &LineHeight) -> Option<SliderValue> {
    let size = value.value?;
    match value.unit {
        LengthUnit::Pixels => Some(SliderValue::px(size)),
        LengthUnit::Percent => Some(SliderValue::new("em", size / 100.0)),
        _ => None,
    }
}

fn letter_spacing(value: &LetterSpacing, font_size: f64) -> Option<SliderValue> {
    match value.unit {
        LengthUnit::Pixels => Some(SliderValue::px(value.value)),
        LengthUnit::Percent => Some(SliderValue::px(value.value * font_size / 100.0)),
        _ => None,
    }
}

/// Maps a text node to heading settings. Every control gets a value; the
/// typography comes from the node when it is uniform across the text.
pub fn map_text_to_heading(node: &SerializedNode) -> HeadingSettings {
    let fallback = TextData::default();
    let text = node.text.as_ref().unwrap_or(&fallback);

    let font_size = uniform(&text.font_size)
        .copied()
        .unwrap_or(DEFAULT_FONT_SIZE_PX);
    let font_name = uniform(&text.font_name);
    let italic = font_name.is_some_and(|name| name.style.to_lowercase().contains("italic"));

    HeadingSettings {
        title: text
            .characters
            .clone()
            .unwrap_or_else(|| DEFAULT_HEADING_TITLE.to_string()),
        header_size: DEFAULT_HEADER_SIZE.to_string(),
        align: align(text).to_string(),
        typography_typography: "custom".to_string(),
        typography_font_family: font_name
            .map(|name| name.family.clone())
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        typography_font_size: SliderValue::px(font_size),
        typography_font_weight: font_weight(text),
        typography_text_transform: text_transform(text).to_string(),
        typography_font_style: if italic { "italic" } else { "normal" }.to_string(),
        typography_text_decoration: text_decoration(text).to_string(),
        typography_line_height: uniform(&text.line_height).and_then(line_height),
        typography_letter_spacing: uniform(&text.letter_spacing)
            .and_then(|spacing| letter_spacing(spacing, font_size)),
        title_color: first_solid_fill_hex(node)
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
    }
}
