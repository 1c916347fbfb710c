//! Element construction with fresh ids.

use crate::converters::elementor::constants::DEFAULT_HEADING_TITLE;
use crate::converters::elementor::error::Result;
use crate::converters::elementor::ids::unique_id;
use crate::converters::elementor::widgets::{extract_image_url, map_settings};
use crate::models::element::{ElementorElement, WidgetKind};
use crate::models::node::SerializedNode;
use crate::models::settings::Settings;

/// Builds an element of `kind` with a fresh id and no children.
pub fn create_widget(kind: WidgetKind, settings: Settings, depth: usize) -> ElementorElement {
    ElementorElement::new(unique_id(), kind, settings, depth)
}

/// A heading whose `title` is `text` unless `settings` provides one.
pub fn create_heading_widget(text: &str, settings: Settings, depth: usize) -> ElementorElement {
    let mut merged = Settings::new();
    merged.insert("title".to_string(), text.into());
    merged.extend(settings);
    create_widget(WidgetKind::Heading, merged, depth)
}

/// An image pointing at `url` unless `settings` provides its own `image`.
pub fn create_image_widget(url: &str, settings: Settings, depth: usize) -> ElementorElement {
    let mut merged = Settings::new();
    merged.insert(
        "image".to_string(),
        serde_json::json!({ "url": url, "id": "" }),
    );
    merged.extend(settings);
    create_widget(WidgetKind::Image, merged, depth)
}

pub fn create_container_widget(settings: Settings, depth: usize) -> ElementorElement {
    create_widget(WidgetKind::Container, settings, depth)
}

/// Maps `node` with the mapper for `kind` and wraps the result in an element.
pub fn create_widget_from_node(
    kind: WidgetKind,
    node: &SerializedNode,
    depth: usize,
) -> Result<ElementorElement> {
    let settings = map_settings(kind, node)?;
    let element = match kind {
        WidgetKind::Heading => {
            let text = node
                .text
                .as_ref()
                .and_then(|text| text.characters.as_deref())
                .unwrap_or(DEFAULT_HEADING_TITLE);
            create_heading_widget(text, settings, depth)
        }
        WidgetKind::Image => create_image_widget(&extract_image_url(node), settings, depth),
        WidgetKind::Container => create_container_widget(settings, depth),
    };
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::ElementType;
    use crate::models::node::NodeType;
    use serde_json::json;

    #[test]
    fn depth_decides_is_inner() {
        let outer = create_container_widget(Settings::new(), 0);
        let inner = create_container_widget(Settings::new(), 3);
        assert!(!outer.is_inner());
        assert!(inner.is_inner());
        assert_ne!(outer.id, inner.id);
        assert!(outer.elements.is_empty());
    }

    #[test]
    fn mapped_settings_override_the_factory_base() {
        let mut settings = Settings::new();
        settings.insert("title".to_string(), json!("Mapped"));
        let heading = create_heading_widget("Base", settings, 0);
        assert_eq!(heading.settings["title"], "Mapped");

        let image = create_image_widget("u", Settings::new(), 1);
        assert_eq!(image.settings["image"], json!({ "url": "u", "id": "" }));
        assert_eq!(image.el_type, ElementType::Widget);
    }

    #[test]
    fn image_without_a_fill_keeps_an_empty_source() {
        let node = SerializedNode::new("i", NodeType::Image);
        let element = create_widget_from_node(WidgetKind::Image, &node, 0).unwrap();
        assert_eq!(element.settings["image"], json!({ "url": "", "id": "" }));
        assert_eq!(element.widget_type, Some(WidgetKind::Image));
    }

    #[test]
    fn heading_title_falls_back() {
        let node = SerializedNode::new("t", NodeType::Text);
        let element = create_widget_from_node(WidgetKind::Heading, &node, 0).unwrap();
        assert_eq!(element.settings["title"], "Heading");
        let keys: Vec<&str> = element.settings.keys().map(String::as_str).collect();
        assert_eq!(keys[0], "title");
    }
}
