//! Error types for node operations.
//!
//! Reading never fails: a path that leads nowhere resolves to "absent".
//! Writes fail when the final segment indexes a populated object, or when
//! an index lies so far past the end of an array that filling the gap is
//! refused.

use thiserror::Error;

use crate::value::Kind;

/// Structured error types for node operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeError {
    /// A path segment needs a container of a different kind than the
    /// populated one found at its position
    #[error("cannot set {} on a non-empty {actual} (path '{path}')", describe(*expected))]
    TypeMismatch {
        path: String,
        expected: Kind,
        actual: Kind,
    },

    /// An index would pad an array with more than
    /// [`MAX_ARRAY_GAP`](crate::value::MAX_ARRAY_GAP) undefined slots
    #[error("index {index} is too far past the end of an array of length {len} (path '{path}')")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}

impl NodeError {
    /// Check if this error is a container shape conflict
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, NodeError::TypeMismatch { .. })
    }

    /// Check if this error is a refused sparse array write
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, NodeError::IndexOutOfRange { .. })
    }

    /// Get the path whose assignment failed
    pub fn path(&self) -> &str {
        match self {
            NodeError::TypeMismatch { path, .. } | NodeError::IndexOutOfRange { path, .. } => path,
        }
    }
}

fn describe(expected: Kind) -> &'static str {
    match expected {
        Kind::Array => "an array index",
        _ => "an object key",
    }
}

// Conversion from NodeError to the main Error type
impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}
