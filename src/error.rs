//! Error types for graph construction and shortest-path queries.
//!
//! A negative cycle is not an error: it is reported through
//! `ShortestPaths::has_negative_cycle`. Errors here cover malformed input
//! and arithmetic that would leave the `i64` range.

use thiserror::Error;

/// Broad classification of a [`ShortestPathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Vertex count, source, edge endpoint, or edge weight is out of range.
    InvalidArgument,
    /// A finite distance plus an edge weight does not fit in `i64`.
    Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortestPathError {
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    #[error("source vertex {vertex} out of range for {vertex_count} vertices")]
    SourceOutOfRange { vertex: usize, vertex_count: usize },

    #[error("edge {index} ({from} -> {to}) out of range for {vertex_count} vertices")]
    EdgeOutOfRange {
        index: usize,
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("edge {from} -> {to} weight is not an integer within i64 range")]
    InvalidWeight { from: usize, to: usize },

    #[error("distance overflow relaxing edge {from} -> {to}")]
    DistanceOverflow { from: usize, to: usize },
}

impl ShortestPathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShortestPathError::DistanceOverflow { .. } => ErrorKind::Overflow,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
