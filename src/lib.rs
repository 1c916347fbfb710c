pub mod converters;
pub mod errors;
pub mod host;
pub mod models;
pub mod plugin;
pub mod serializer;
pub mod wasm;

pub use converters::elementor::{
    build_and_export_elementor_page, build_elementor_page, build_elementor_page_with_settings,
    export_elementor_page_as_json, Converter, ConverterBuilder, ElementorBuilder,
    ElementorConversionError,
};
pub use errors::{HostError, PluginError, Result};
pub use host::HostNode;
pub use models::element::ElementorElement;
pub use models::node::SerializedNode;
pub use models::page::ElementorPage;
pub use serializer::NodeSerializer;
