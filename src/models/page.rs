use serde::{Deserialize, Serialize};

use crate::models::element::ElementorElement;
use crate::models::settings::Settings;

/// The importable page document: top-level elements plus page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementorPage {
    pub content: Vec<ElementorElement>,
    pub page_settings: Settings,
    pub version: String,
    pub title: String,
    /// Always `"page"`.
    #[serde(rename = "type")]
    pub page_type: String,
}
