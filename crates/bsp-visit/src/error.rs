//! Error types.

use thiserror::Error;

/// Failure of a BSP tree traversal.
///
/// `E` is the error type of the visitor driving the traversal. Visitor errors
/// are passed through untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraversalError<E> {
    /// The walk reached a node deeper than the configured limit.
    ///
    /// A tree this deep is treated as malformed; no node at or below the
    /// offending depth was visited.
    #[error("tree is deeper than the configured limit of {limit} levels")]
    DepthExceeded {
        /// The maximum depth that was allowed (the root is at depth 0).
        limit: usize,
    },

    /// The visitor itself failed.
    #[error("visitor failed: {0}")]
    Visitor(E),
}

impl<E> TraversalError<E> {
    /// Returns the visitor error, if that is what stopped the traversal.
    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            TraversalError::Visitor(e) => Some(e),
            TraversalError::DepthExceeded { .. } => None,
        }
    }
}

/// Invalid input to one of the reference geometries.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A hyperplane normal was zero-length or not finite.
    #[error("hyperplane normal must be finite and non-zero")]
    DegenerateNormal,

    /// Three points meant to span a plane lie on a single line.
    #[error("points are collinear and do not define a plane")]
    CollinearPoints,
}
