//! adjgraph — directed graphs over interchangeable storage backends.
//!
//! A [`Graph`] has a fixed number of vertices chosen at construction and
//! stores directed edges either in a dense adjacency matrix ([`MatrixGraph`])
//! or in per-vertex adjacency lists ([`ListGraph`]). Vertices and edges carry
//! an optional label and an integer weight.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use cli::{MenuCommand, OutputFormat, Session, SessionOptions};
pub use graph::{
    build_graph, EdgeSnapshot, Graph, GraphBuilder, GraphSnapshot, ListGraph, MatrixGraph,
    VertexSnapshot,
};
pub use types::{
    Backend, EdgeKey, GraphError, GraphResult, VertexId, Weight, MAX_LIST_VERTICES,
    MAX_MATRIX_VERTICES, NO_LABEL,
};
