use serde::{Deserialize, Serialize};

use crate::models::settings::Settings;

/// What a converted node becomes in the page builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Heading,
    Image,
    Container,
}

impl WidgetKind {
    pub fn element_type(self) -> ElementType {
        match self {
            WidgetKind::Container => ElementType::Container,
            WidgetKind::Heading | WidgetKind::Image => ElementType::Widget,
        }
    }

    /// The `widgetType` tag; containers have none.
    pub fn widget_type(self) -> Option<WidgetKind> {
        match self {
            WidgetKind::Container => None,
            kind => Some(kind),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::Heading => "heading",
            WidgetKind::Image => "image",
            WidgetKind::Container => "container",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Widget,
    Container,
}

/// One node of the output document: a leaf widget or a container.
///
/// `is_inner` is derived from the nesting depth at construction and cannot
/// be set on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementorElement {
    pub id: String,
    pub settings: Settings,
    #[serde(default)]
    pub elements: Vec<ElementorElement>,
    is_inner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_type: Option<WidgetKind>,
    pub el_type: ElementType,
}

/// `isInner` of an element at `depth`: everything below the top level.
pub fn is_inner(depth: usize) -> bool {
    depth > 0
}

impl ElementorElement {
    pub fn new(id: String, kind: WidgetKind, settings: Settings, depth: usize) -> Self {
        ElementorElement {
            id,
            settings,
            elements: Vec::new(),
            is_inner: is_inner(depth),
            widget_type: kind.widget_type(),
            el_type: kind.element_type(),
        }
    }

    /// `true` for every element that is not at the top level of the page.
    pub fn is_inner(&self) -> bool {
        self.is_inner
    }

    pub fn is_container(&self) -> bool {
        self.el_type == ElementType::Container
    }
}
