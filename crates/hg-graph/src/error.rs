//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `hg-graph`.
///
/// Loader errors (`Format`, `VertexIndex`, `Io`) abort construction: no
/// partially built graph is ever returned.  `EmptyGraph` is local to the
/// query that raised it.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("TMG format error on line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("line {line}: vertex index {index} out of range (graph has {vertex_count} vertices)")]
    VertexIndex {
        line:         usize,
        index:        i64,
        vertex_count: usize,
    },

    #[error("road endpoint {index} does not name a vertex (graph has {vertex_count} vertices)")]
    UnknownVertex { index: u32, vertex_count: usize },

    #[error("{count} {what}s do not fit in 32-bit ids")]
    IdSpaceExhausted { what: &'static str, count: usize },

    #[error("query has no answer on an empty graph")]
    EmptyGraph,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
