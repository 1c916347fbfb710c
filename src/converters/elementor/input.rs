//! Parsing builder input from JSON.
//!
//! Two node shapes are accepted. The plugin serializer nests kind-specific
//! attributes under `text`, `frame`, `rectangle`... Design files exported
//! elsewhere put them flat on the node (`characters`, `style.fontSize`,
//! `layoutMode`, `cornerRadius`). Flat attributes are moved into their
//! sub-record before deserializing, unless the node already has one.
//!
//! Decoding is lenient below the node: an attribute of the wrong shape is
//! dropped with a warning and reads as absent, and a child without a usable
//! id or type is skipped. Only a root node that cannot be read fails.

use log::warn;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::converters::elementor::error::{ElementorConversionError, Result};
use crate::models::messages::NodesPayload;
use crate::models::node::SerializedNode;

const IDENTITY_KEYS: &[&str] = &["id", "type"];

const TEXT_KEYS: &[&str] = &[
    "characters",
    "fontSize",
    "fontName",
    "fontWeight",
    "lineHeight",
    "letterSpacing",
    "paragraphIndent",
    "paragraphSpacing",
    "textAlignHorizontal",
    "textAlignVertical",
    "textCase",
    "textDecoration",
    "textAutoResize",
    "textStyleId",
    "hyperlink",
    "hasMissingFont",
];

const LAYOUT_KEYS: &[&str] = &[
    "layoutMode",
    "primaryAxisSizingMode",
    "counterAxisSizingMode",
    "primaryAxisAlignItems",
    "counterAxisAlignItems",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "paddingBottom",
    "itemSpacing",
    "counterAxisSpacing",
    "clipsContent",
    "layoutGrids",
    "gridStyleId",
];

const CORNER_KEYS: &[&str] = &[
    "cornerRadius",
    "cornerSmoothing",
    "topLeftRadius",
    "topRightRadius",
    "bottomLeftRadius",
    "bottomRightRadius",
];

/// Parses a single node or a list of nodes, in either shape.
///
/// Unreadable nodes in a list are skipped; if none can be read the last
/// error is returned.
pub fn parse_nodes_payload(json: &str) -> Result<NodesPayload> {
    let mut value: JsonValue = serde_json::from_str(json)?;
    lift_flat_attributes(&mut value);
    match value {
        JsonValue::Array(values) => {
            let mut nodes = Vec::with_capacity(values.len());
            let mut last_error = None;
            for (index, value) in values.into_iter().enumerate() {
                match decode_node(value, &format!("nodes[{}]", index)) {
                    Ok(node) => nodes.push(node),
                    Err(e) => {
                        warn!("Skipping top-level node: {}", e);
                        last_error = Some(e);
                    }
                }
            }
            match last_error {
                Some(e) if nodes.is_empty() => Err(e),
                _ => Ok(NodesPayload::Many(nodes)),
            }
        }
        value => Ok(NodesPayload::Single(Box::new(decode_node(value, "root")?))),
    }
}

/// Decodes one node and its subtree, dropping what cannot be read.
fn decode_node(value: JsonValue, path: &str) -> Result<SerializedNode> {
    let JsonValue::Object(mut fields) = value else {
        return Err(ElementorConversionError::InvalidInput(format!(
            "{} is not a node object",
            path
        )));
    };
    let children = fields.remove("children").filter(|c| !c.is_null());

    let mut value = JsonValue::Object(fields);
    if SerializedNode::deserialize(&value).is_err() {
        if let JsonValue::Object(fields) = &mut value {
            drop_unreadable(fields, path)?;
        }
    }
    let mut node =
        SerializedNode::deserialize(&value).map_err(|source| malformed(path, source))?;

    node.children = children.map(|children| decode_children(children, path));
    Ok(node)
}

fn decode_children(children: JsonValue, path: &str) -> Vec<SerializedNode> {
    let JsonValue::Array(children) = children else {
        warn!("Node at {} has a children value that is not a list; using none", path);
        return Vec::new();
    };
    let mut decoded = Vec::with_capacity(children.len());
    for (index, child) in children.into_iter().enumerate() {
        match decode_node(child, &format!("{}.children[{}]", path, index)) {
            Ok(child) => decoded.push(child),
            Err(e) => warn!("Skipping child: {}", e),
        }
    }
    decoded
}

/// Removes every attribute that fails to decode next to the node identity.
///
/// Object attributes are pruned one level down first, so a single bad
/// field inside `text` or `frame` does not cost the whole record.
fn drop_unreadable(fields: &mut Map<String, JsonValue>, path: &str) -> Result<()> {
    let identity: Map<String, JsonValue> = fields
        .iter()
        .filter(|(key, _)| IDENTITY_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    SerializedNode::deserialize(&JsonValue::Object(identity.clone()))
        .map_err(|source| malformed(path, source))?;

    let keys: Vec<String> = fields
        .keys()
        .filter(|key| !IDENTITY_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();
    for key in keys {
        let Some(value) = fields.remove(&key) else {
            continue;
        };
        let value = match value {
            JsonValue::Object(record) => {
                JsonValue::Object(prune_record(&identity, &key, record, path))
            }
            value => value,
        };
        match check(&identity, &key, &value) {
            Ok(()) => {
                fields.insert(key, value);
            }
            Err(e) => warn!("Dropping unreadable attribute `{}` of node at {}: {}", key, path, e),
        }
    }
    Ok(())
}

/// Keeps the entries of an object attribute that decode on their own.
fn prune_record(
    identity: &Map<String, JsonValue>,
    key: &str,
    record: Map<String, JsonValue>,
    path: &str,
) -> Map<String, JsonValue> {
    if check(identity, key, &JsonValue::Object(record.clone())).is_ok() {
        return record;
    }
    let mut kept = Map::new();
    for (inner_key, inner_value) in record {
        let single: Map<String, JsonValue> = [(inner_key.clone(), inner_value.clone())]
            .into_iter()
            .collect();
        match check(identity, key, &JsonValue::Object(single)) {
            Ok(()) => {
                kept.insert(inner_key, inner_value);
            }
            Err(e) => warn!(
                "Dropping unreadable attribute `{}.{}` of node at {}: {}",
                key, inner_key, path, e
            ),
        }
    }
    kept
}

/// Tries to decode a node made of its identity plus one attribute.
fn check(identity: &Map<String, JsonValue>, key: &str, value: &JsonValue) -> serde_json::Result<()> {
    let mut fields = identity.clone();
    fields.insert(key.to_string(), value.clone());
    SerializedNode::deserialize(&JsonValue::Object(fields)).map(|_| ())
}

fn malformed(path: &str, source: serde_json::Error) -> ElementorConversionError {
    ElementorConversionError::MalformedNode {
        path: path.to_string(),
        source,
    }
}

/// Moves flat kind-specific attributes into their sub-records, recursively.
pub fn lift_flat_attributes(value: &mut JsonValue) {
    match value {
        JsonValue::Array(nodes) => nodes.iter_mut().for_each(lift_flat_attributes),
        JsonValue::Object(node) => {
            let node_type = node
                .get("type")
                .and_then(JsonValue::as_str)
                .unwrap_or_default()
                .to_string();
            match node_type.as_str() {
                "TEXT" => lift_text(node),
                "FRAME" | "GROUP" | "COMPONENT" | "COMPONENT_SET" | "INSTANCE" => {
                    split_corner_radii(node);
                    lift(node, "frame", &[LAYOUT_KEYS, CORNER_KEYS]);
                }
                "RECTANGLE" | "IMAGE" => {
                    split_corner_radii(node);
                    lift(node, "rectangle", &[CORNER_KEYS]);
                }
                _ => {}
            }
            if let Some(children) = node.get_mut("children") {
                lift_flat_attributes(children);
            }
        }
        _ => {}
    }
}

fn lift(node: &mut Map<String, JsonValue>, record: &str, key_sets: &[&[&str]]) {
    if node.contains_key(record) {
        return;
    }
    let mut lifted = Map::new();
    for key in key_sets.iter().flat_map(|keys| keys.iter()) {
        if let Some(value) = node.remove(*key) {
            lifted.insert(key.to_string(), value);
        }
    }
    if !lifted.is_empty() {
        node.insert(record.to_string(), JsonValue::Object(lifted));
    }
}

/// `rectangleCornerRadii: [tl, tr, br, bl]` -> the four corner keys.
fn split_corner_radii(node: &mut Map<String, JsonValue>) {
    let Some(JsonValue::Array(radii)) = node.remove("rectangleCornerRadii") else {
        return;
    };
    if let [top_left, top_right, bottom_right, bottom_left] = radii.as_slice() {
        for (key, value) in [
            ("topLeftRadius", top_left),
            ("topRightRadius", top_right),
            ("bottomRightRadius", bottom_right),
            ("bottomLeftRadius", bottom_left),
        ] {
            node.entry(key).or_insert_with(|| value.clone());
        }
    }
}

/// Bare numbers for line height or letter spacing are pixel values.
fn pixel_lengths(record: &mut Map<String, JsonValue>) {
    for key in ["lineHeight", "letterSpacing"] {
        if let Some(value) = record.get_mut(key) {
            if let Some(px) = value.as_f64() {
                *value = serde_json::json!({ "unit": "PIXELS", "value": px });
            }
        }
    }
}

/// Text attributes, including the `style` block of exported files.
fn lift_text(node: &mut Map<String, JsonValue>) {
    if let Some(JsonValue::Object(text)) = node.get_mut("text") {
        pixel_lengths(text);
        return;
    }
    pixel_lengths(node);
    if let Some(JsonValue::Object(style)) = node.remove("style") {
        for (from, to) in [
            ("fontSize", "fontSize"),
            ("fontWeight", "fontWeight"),
            ("textAlignHorizontal", "textAlignHorizontal"),
            ("textAlignVertical", "textAlignVertical"),
            ("textCase", "textCase"),
            ("textDecoration", "textDecoration"),
        ] {
            if let Some(value) = style.get(from) {
                node.entry(to).or_insert_with(|| value.clone());
            }
        }
        if let Some(family) = style.get("fontFamily").and_then(JsonValue::as_str) {
            let italic = style.get("italic").and_then(JsonValue::as_bool) == Some(true);
            let font_style = style
                .get("fontPostScriptStyle")
                .and_then(JsonValue::as_str)
                .unwrap_or(if italic { "Italic" } else { "Regular" });
            node.entry("fontName").or_insert_with(
                || serde_json::json!({ "family": family, "style": font_style }),
            );
        }
        if let Some(px) = style.get("lineHeightPx").and_then(JsonValue::as_f64) {
            node.entry("lineHeight")
                .or_insert_with(|| serde_json::json!({ "unit": "PIXELS", "value": px }));
        }
        if let Some(px) = style.get("letterSpacing").and_then(JsonValue::as_f64) {
            node.entry("letterSpacing")
                .or_insert_with(|| serde_json::json!({ "unit": "PIXELS", "value": px }));
        }
    }
    lift(node, "text", &[TEXT_KEYS]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::layout::LayoutMode;
    use crate::models::mixed::uniform;
    use serde_json::json;

    #[test]
    fn flat_text_is_lifted_into_the_text_record() {
        let payload = parse_nodes_payload(
            r#"{"type":"TEXT","id":"t1","characters":"Hi","style":{"fontSize":32,"fontFamily":"Inter","fontWeight":700}}"#,
        )
        .unwrap();
        let NodesPayload::Single(node) = payload else {
            panic!("expected a single node");
        };
        let text = node.text.as_ref().unwrap();
        assert_eq!(text.characters.as_deref(), Some("Hi"));
        assert_eq!(uniform(&text.font_size), Some(&32.0));
        assert_eq!(uniform(&text.font_weight), Some(&700.0));
        assert_eq!(uniform(&text.font_name).map(|f| f.family.as_str()), Some("Inter"));
    }

    #[test]
    fn flat_layout_is_lifted_for_frames_and_children() {
        let mut value = json!([{
            "id": "f",
            "type": "FRAME",
            "layoutMode": "HORIZONTAL",
            "paddingTop": 40,
            "cornerRadius": 8,
            "fills": [],
            "children": [{ "id": "r", "type": "RECTANGLE", "rectangleCornerRadii": [1, 2, 3, 4] }]
        }]);
        lift_flat_attributes(&mut value);
        assert_eq!(value[0]["frame"]["layoutMode"], "HORIZONTAL");
        assert_eq!(value[0]["frame"]["cornerRadius"], 8);
        assert!(value[0].get("layoutMode").is_none());
        assert_eq!(value[0]["fills"], json!([]));
        assert_eq!(value[0]["children"][0]["rectangle"]["bottomRightRadius"], 3);

        let nodes: NodesPayload = serde_json::from_value(value).unwrap();
        let NodesPayload::Many(nodes) = nodes else {
            panic!("expected a list");
        };
        assert_eq!(
            nodes[0].auto_layout().and_then(|f| f.layout_mode.clone()),
            Some(LayoutMode::Horizontal)
        );
    }

    fn single(json: &str) -> SerializedNode {
        match parse_nodes_payload(json).unwrap() {
            NodesPayload::Single(node) => *node,
            NodesPayload::Many(_) => panic!("expected a single node"),
        }
    }

    #[test]
    fn bare_letter_spacing_is_read_as_pixels() {
        let payload = parse_nodes_payload(
            r#"[{"id":"t","type":"TEXT","characters":"Hi","letterSpacing":2,"lineHeight":30}]"#,
        )
        .unwrap();
        let NodesPayload::Many(nodes) = payload else {
            panic!("expected a list");
        };
        let text = nodes[0].text.as_ref().unwrap();
        let spacing = uniform(&text.letter_spacing).unwrap();
        assert_eq!((spacing.unit.as_str(), spacing.value), ("PIXELS", 2.0));
        assert_eq!(uniform(&text.line_height).and_then(|l| l.value), Some(30.0));
    }

    #[test]
    fn font_name_without_a_style_keeps_its_family() {
        let node = single(r#"{"id":"t","type":"TEXT","characters":"Hi","fontName":{"family":"Inter"}}"#);
        let text = node.text.as_ref().unwrap();
        assert_eq!(uniform(&text.font_name).map(|f| f.family.as_str()), Some("Inter"));
        assert_eq!(text.characters.as_deref(), Some("Hi"));
    }

    #[test]
    fn wrongly_typed_attributes_read_as_absent() {
        let node = single(
            r#"{"id":"t","type":"TEXT","opacity":"0.5","name":"Title","characters":"Hi","fontSize":"big","textCase":"UPPER"}"#,
        );
        assert_eq!(node.base.opacity, None);
        assert_eq!(node.name(), "Title");
        let text = node.text.as_ref().unwrap();
        assert_eq!(text.font_size, None);
        assert_eq!(text.characters.as_deref(), Some("Hi"));
        assert!(text.text_case.is_some());
    }

    #[test]
    fn unreadable_children_are_skipped() {
        let node = single(
            r#"{"id":"f","type":"FRAME","children":[
                {"type":"TEXT","characters":"no id"},
                {"id":"t","type":"TEXT","characters":"kept"},
                "not a node"
            ]}"#,
        );
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].id(), "t");
    }

    #[test]
    fn a_children_value_that_is_not_a_list_reads_as_empty() {
        let node = single(r#"{"id":"f","type":"FRAME","children":{"id":"x"}}"#);
        assert_eq!(node.children, Some(Vec::new()));
    }

    #[test]
    fn unreadable_roots_name_the_path_and_cause() {
        let err = parse_nodes_payload(r#"{"type":"FRAME"}"#).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("root"), "{}", message);
        assert!(message.contains("missing field `id`"), "{}", message);

        let err = parse_nodes_payload(r#"[{"id":7,"type":"TEXT"}]"#).unwrap_err();
        assert!(matches!(err, ElementorConversionError::MalformedNode { ref path, .. } if path == "nodes[0]"));
    }

    #[test]
    fn readable_nodes_in_a_list_survive_bad_siblings() {
        let payload = parse_nodes_payload(r#"[{"type":"TEXT"},{"id":"b","type":"TEXT"}]"#).unwrap();
        assert!(matches!(payload, NodesPayload::Many(ref nodes) if nodes.len() == 1 && nodes[0].id() == "b"));
    }

    #[test]
    fn nested_records_are_left_alone() {
        let mut value = json!({
            "id": "t",
            "type": "TEXT",
            "characters": "flat",
            "text": { "characters": "nested" }
        });
        lift_flat_attributes(&mut value);
        assert_eq!(value["text"]["characters"], "nested");
    }
}
