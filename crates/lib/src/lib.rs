//!
//! nested-traversal: dotted-path access to JSON-like trees.
//!
//! This library wraps a nested value (objects, arrays and primitives) and
//! provides path navigation, path-based writes that create missing
//! containers, structural iteration and a recursive deep merge.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A tagged union of undefined, null, bool,
//!   number, string, array, object and opaque values. Arrays and objects are
//!   shared handles, so every clone sees the same contents.
//! * **Nodes (`node::Node`)**: The wrapper exposing the path API over one
//!   value. Nodes returned from navigation alias their parent's storage.
//! * **Paths (`path`)**: Dot-separated segments; all-digit segments index
//!   arrays, everything else names object keys.
//! * **Merging (`node::MergeOptions`)**: Objects merge recursively, arrays
//!   concatenate, and anything else is last-write-wins.

pub mod node;
pub mod path;
pub mod value;

pub use node::{Completion, Item, Key, MergeOptions, Node, NodeError};
pub use value::{Array, Kind, MAX_ARRAY_GAP, Object, Opaque, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured node errors from the node module
    #[error(transparent)]
    Node(NodeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serialize",
            Error::Node(_) => "node",
        }
    }

    /// Check if this error is a container shape conflict raised by a write.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is an array write refused for leaving too large a gap.
    pub fn is_index_out_of_range(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_index_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error came from parsing or printing JSON text.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
