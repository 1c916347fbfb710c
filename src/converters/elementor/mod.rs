//! Converts serialized design nodes into page-builder documents.
//!
//! The conversion runs in three layers:
//! *   `policy` decides whether a node converts and into which widget kind.
//! *   `widgets` map a node's visual attributes to that widget's settings,
//!     and `factory` wraps them in an element with a fresh id.
//! *   `builder` recurses over the tree and `page` wraps the result in a
//!     page document.
//!
//! [`ConverterBuilder`] bundles the page title, page settings, depth limit
//! and output format for repeated use.

pub mod builder;
pub mod constants;
mod error;
pub mod factory;
pub mod ids;
pub mod input;
pub mod page;
pub mod policy;
pub mod utils;
pub mod widgets;

pub use builder::ElementorBuilder;
pub use error::{ElementorConversionError, Result};
pub use input::parse_nodes_payload;
pub use page::{
    build_and_export_elementor_page, build_elementor_page, build_elementor_page_with_settings,
    default_page_settings, export_elementor_page_as_json, PageInput,
};

use constants::{DEFAULT_MAX_DEPTH, DEFAULT_PAGE_TITLE};

use crate::models::page::ElementorPage;
use crate::models::settings::Settings;

/// Builder for creating a `Converter`.
#[derive(Debug, Clone)]
pub struct ConverterBuilder {
    title: String,
    page_settings: Settings,
    max_depth: usize,
    pretty: bool,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        ConverterBuilder {
            title: DEFAULT_PAGE_TITLE.to_string(),
            page_settings: Settings::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: true,
        }
    }
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Page settings merged over the defaults, key by key.
    pub fn page_settings(mut self, page_settings: Settings) -> Self {
        self.page_settings = page_settings;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    // Pretty (2-space) or compact JSON export.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Builds the `Converter`.
    /// Returns an error if the title is blank or the depth limit is zero.
    pub fn build(self) -> Result<Converter> {
        if self.title.trim().is_empty() {
            return Err(ElementorConversionError::InvalidInput(
                "Page title must not be empty".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(ElementorConversionError::InvalidInput(
                "Maximum depth must be at least 1".to_string(),
            ));
        }
        Ok(Converter {
            builder: ElementorBuilder::new().with_max_depth(self.max_depth),
            title: self.title,
            page_settings: self.page_settings,
            pretty: self.pretty,
        })
    }
}

/// Converts node trees into page documents with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Converter {
    builder: ElementorBuilder,
    title: String,
    page_settings: Settings,
    pretty: bool,
}

impl Converter {
    /// Converts `nodes` into a page document.
    pub fn build_page<'a>(&self, nodes: impl Into<PageInput<'a>>) -> Result<ElementorPage> {
        let content = page::convert_input(&self.builder, nodes.into())?;
        let mut settings = default_page_settings();
        settings.extend(self.page_settings.clone());
        Ok(page::assemble_page(content, &self.title, settings))
    }

    /// Converts `nodes` and returns the page as JSON text.
    pub fn export<'a>(&self, nodes: impl Into<PageInput<'a>>) -> Result<String> {
        let page = self.build_page(nodes)?;
        export_elementor_page_as_json(&page, self.pretty)
    }

    /// Parses builder input JSON (either node shape) and exports the page.
    pub fn export_json(&self, nodes_json: &str) -> Result<String> {
        let payload = parse_nodes_payload(nodes_json)?;
        self.export(&payload)
    }
}
