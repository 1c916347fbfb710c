use thiserror::Error;

use crate::models::node::NodeType;

/// Errors that can occur while building a page-builder document.
#[derive(Error, Debug)]
pub enum ElementorConversionError {
    /// A single root node must be a frame or a group.
    #[error("Root node {node_id} is a {node_type}; only FRAME or GROUP can be converted as a page root")]
    InvalidRoot { node_id: String, node_type: NodeType },

    #[error("Node {node_id} is nested deeper than the maximum of {limit} levels")]
    DepthLimitExceeded { node_id: String, limit: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A node in the input JSON lacks a usable id or type.
    #[error("Malformed node at {path}: {source}")]
    MalformedNode {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for page-builder conversion operations.
pub type Result<T> = std::result::Result<T, ElementorConversionError>;
