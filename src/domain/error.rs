//! Domain-level errors for tree construction and rendering

use thiserror::Error;

use crate::domain::arena::NodeId;

/// Errors raised by arena mutation, structural queries and renderers.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("child index {index} out of range for node with {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("node not found in arena: {0}")]
    NodeNotFound(NodeId),

    #[error("node {0} has no value")]
    AbsentValue(NodeId),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
