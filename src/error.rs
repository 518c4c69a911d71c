//! Error types for stepgraph
//!
//! Expected absences (empty heap, stale queue entries) are `Option`s or
//! silent skips, never errors. Only precondition violations surface here.

use crate::graph::types::NodeId;
use thiserror::Error;

/// Errors that can occur during stepgraph operations
#[derive(Error, Debug)]
pub enum StepgraphError {
    #[error("start node {node} is not in the graph")]
    InvalidStartNode { node: NodeId },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },
}

impl StepgraphError {
    /// Create an error for a traversal started from a node the graph
    /// does not contain
    pub fn invalid_start_node(node: NodeId) -> Self {
        StepgraphError::InvalidStartNode { node }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        StepgraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result type alias for stepgraph operations
pub type Result<T> = std::result::Result<T, StepgraphError>;
