//! In-memory directed graphs: the shared contract and its two backends.

pub mod builder;
pub mod contract;
pub mod list;
pub mod matrix;
pub mod snapshot;
pub mod vertices;

pub use builder::{build_graph, GraphBuilder};
pub use contract::Graph;
pub use list::ListGraph;
pub use matrix::MatrixGraph;
pub use snapshot::{EdgeSnapshot, GraphSnapshot, VertexSnapshot};
pub use vertices::VertexTable;
