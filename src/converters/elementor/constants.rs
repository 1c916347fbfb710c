//! Defines constants used throughout the page-builder conversion.

// Schema and document metadata
pub const ELEMENTOR_VERSION: &str = "0.4";
pub const PAGE_TYPE: &str = "page";
pub const DEFAULT_PAGE_TITLE: &str = "FigmaKit Page";

// Deepest nesting accepted by the serializer and the builder (top level is 0).
pub const DEFAULT_MAX_DEPTH: usize = 128;

// Heading fallbacks
pub const DEFAULT_HEADING_TITLE: &str = "Heading";
pub const DEFAULT_HEADER_SIZE: &str = "h2";
pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const DEFAULT_FONT_SIZE_PX: f64 = 24.0;
pub const DEFAULT_FONT_WEIGHT: u32 = 400;
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

// Container fallbacks
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_GAP_PX: f64 = 10.0;
pub const DEFAULT_PADDING_PX: f64 = 20.0;

// Images referenced only by an opaque hash get a synthesized URL with this prefix.
pub const IMAGE_HASH_URL_PREFIX: &str = "figma://image/";
