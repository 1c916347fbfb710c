use thiserror::Error;

/// Errors raised while reading the host document or answering a UI request.
#[derive(Error, Debug)]
pub enum PluginError {
    /// Nothing was selected when the UI asked for nodes.
    #[error("No nodes selected. Please select one or more nodes.")]
    EmptySelection,

    /// A host value does not look like a document node (no id or type).
    #[error("Malformed node: {0}")]
    MalformedNode(String),

    /// The document tree is nested deeper than the serializer allows.
    #[error("Node tree exceeds the maximum depth of {limit} levels")]
    DepthLimitExceeded { limit: usize },

    /// Error occurred while encoding or decoding a message.
    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A failed read of an optional host capability.
///
/// Callers treat this as "value unavailable", never as fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("Plugin data is unavailable: {0}")]
    PluginDataUnavailable(String),
}

/// A type alias for `Result<T, PluginError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, PluginError>;
