//! Page documents: the converted element tree plus page metadata.

use log::info;
use serde_json::json;

use crate::converters::elementor::builder::ElementorBuilder;
use crate::converters::elementor::constants::{ELEMENTOR_VERSION, PAGE_TYPE};
use crate::converters::elementor::error::Result;
use crate::models::element::ElementorElement;
use crate::models::messages::NodesPayload;
use crate::models::node::SerializedNode;
use crate::models::page::ElementorPage;
use crate::models::settings::Settings;

/// What a page is built from: one root (a frame or group) or a list of
/// independent top-level nodes.
#[derive(Debug, Clone, Copy)]
pub enum PageInput<'a> {
    Single(&'a SerializedNode),
    Many(&'a [SerializedNode]),
}

impl<'a> From<&'a SerializedNode> for PageInput<'a> {
    fn from(node: &'a SerializedNode) -> Self {
        PageInput::Single(node)
    }
}

impl<'a> From<&'a [SerializedNode]> for PageInput<'a> {
    fn from(nodes: &'a [SerializedNode]) -> Self {
        PageInput::Many(nodes)
    }
}

impl<'a> From<&'a Vec<SerializedNode>> for PageInput<'a> {
    fn from(nodes: &'a Vec<SerializedNode>) -> Self {
        PageInput::Many(nodes)
    }
}

impl<'a> From<&'a NodesPayload> for PageInput<'a> {
    fn from(payload: &'a NodesPayload) -> Self {
        match payload {
            NodesPayload::Single(node) => PageInput::Single(node),
            NodesPayload::Many(nodes) => PageInput::Many(nodes),
        }
    }
}

/// Zero margin and padding on a classic white background.
pub fn default_page_settings() -> Settings {
    let zero = || {
        json!({ "unit": "px", "top": "0", "right": "0", "bottom": "0", "left": "0", "isLinked": false })
    };
    let mut settings = Settings::new();
    settings.insert("margin".to_string(), zero());
    settings.insert("padding".to_string(), zero());
    settings.insert("background_background".to_string(), "classic".into());
    settings.insert("background_color".to_string(), "#FFFFFF".into());
    settings
}

pub(crate) fn convert_input(
    builder: &ElementorBuilder,
    input: PageInput<'_>,
) -> Result<Vec<ElementorElement>> {
    match input {
        PageInput::Single(root) => Ok(vec![builder.convert_root(root)?]),
        PageInput::Many(nodes) => builder.convert_many(nodes, 0),
    }
}

pub(crate) fn assemble_page(
    content: Vec<ElementorElement>,
    title: &str,
    page_settings: Settings,
) -> ElementorPage {
    info!(
        "Built page '{}' with {} top-level element(s)",
        title,
        content.len()
    );
    ElementorPage {
        content,
        page_settings,
        version: ELEMENTOR_VERSION.to_string(),
        title: title.to_string(),
        page_type: PAGE_TYPE.to_string(),
    }
}

/// Converts `nodes` and wraps them in a page with default settings.
///
/// A single root that is not a frame or group fails with `InvalidRoot`.
pub fn build_elementor_page<'a>(
    nodes: impl Into<PageInput<'a>>,
    title: &str,
) -> Result<ElementorPage> {
    let content = convert_input(&ElementorBuilder::default(), nodes.into())?;
    Ok(assemble_page(content, title, default_page_settings()))
}

/// Like [`build_elementor_page`], with `custom` merged key by key over the
/// default page settings.
pub fn build_elementor_page_with_settings<'a>(
    nodes: impl Into<PageInput<'a>>,
    title: &str,
    custom: Settings,
) -> Result<ElementorPage> {
    let mut page = build_elementor_page(nodes, title)?;
    page.page_settings.extend(custom);
    Ok(page)
}

/// Serializes a page, pretty-printed with 2-space indentation or compact.
pub fn export_elementor_page_as_json(page: &ElementorPage, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(page)?
    } else {
        serde_json::to_string(page)?
    };
    Ok(json)
}

pub fn build_and_export_elementor_page<'a>(
    nodes: impl Into<PageInput<'a>>,
    title: &str,
    pretty: bool,
) -> Result<String> {
    let page = build_elementor_page(nodes, title)?;
    export_elementor_page_as_json(&page, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::elementor::ElementorConversionError;
    use crate::models::node::NodeType;

    fn frame() -> SerializedNode {
        serde_json::from_value(json!({
            "id": "f",
            "type": "FRAME",
            "children": [{ "id": "t", "type": "TEXT", "text": { "characters": "Hi" } }]
        }))
        .unwrap()
    }

    #[test]
    fn single_root_becomes_one_top_level_container() {
        let root = frame();
        let page = build_elementor_page(&root, "Landing").unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.version, "0.4");
        assert_eq!(page.title, "Landing");
        assert_eq!(page.page_type, "page");
        assert_eq!(page.page_settings["background_color"], "#FFFFFF");
        assert_eq!(page.page_settings["margin"]["isLinked"], false);
    }

    #[test]
    fn lists_accept_non_container_nodes() {
        let nodes = vec![
            SerializedNode::new("t", NodeType::Text),
            SerializedNode::new("l", NodeType::Line),
        ];
        let page = build_elementor_page(&nodes, "List").unwrap();
        assert_eq!(page.content.len(), 1);
    }

    #[test]
    fn single_text_root_is_rejected() {
        let text = SerializedNode::new("t", NodeType::Text);
        assert!(matches!(
            build_elementor_page(&text, "Bad"),
            Err(ElementorConversionError::InvalidRoot { .. })
        ));
    }

    #[test]
    fn custom_settings_override_defaults_key_by_key() {
        let mut custom = Settings::new();
        custom.insert("background_color".to_string(), json!("#101010"));
        custom.insert("custom_css".to_string(), json!(".a{}"));
        let page = build_elementor_page_with_settings(&frame(), "Custom", custom).unwrap();
        assert_eq!(page.page_settings["background_color"], "#101010");
        assert_eq!(page.page_settings["background_background"], "classic");
        assert_eq!(page.page_settings["custom_css"], ".a{}");
    }

    #[test]
    fn export_is_pretty_or_compact() {
        let root = frame();
        let compact = build_and_export_elementor_page(&root, "P", false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.starts_with(r#"{"content":[{"id":""#));

        let pretty = build_and_export_elementor_page(&root, "P", true).unwrap();
        assert!(pretty.contains("\n  \"page_settings\": {"));
        assert!(pretty.contains("\"type\": \"page\""));
    }
}
