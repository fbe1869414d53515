//! Shared value types for the adjgraph library.

pub mod backend;
pub mod edge;
pub mod error;

pub use backend::Backend;
pub use edge::EdgeKey;
pub use error::{GraphError, GraphResult};

/// Vertex index as accepted by the graph contract.
///
/// Signed so callers can probe with negative indices; anything outside
/// `[0, vertex_count)` is treated as absent.
pub type VertexId = i64;

/// Vertex and edge weight. Unset weights read as `0`.
pub type Weight = i64;

/// Largest vertex count the matrix backend will allocate (V² cells per table).
pub const MAX_MATRIX_VERTICES: usize = 4096;

/// Largest vertex count the list backend will allocate.
pub const MAX_LIST_VERTICES: usize = 1 << 20;

/// Label printed in place of a missing vertex or edge label.
pub const NO_LABEL: &str = "none";

/// Reject vertex counts above `backend`'s construction ceiling.
pub fn check_vertex_count(backend: Backend, vertex_count: usize) -> GraphResult<()> {
    let max = backend.max_vertices();
    if vertex_count > max {
        log::warn!("refusing {} graph with {} vertices", backend, vertex_count);
        return Err(GraphError::TooManyVertices {
            backend,
            count: vertex_count,
            max,
        });
    }
    Ok(())
}

/// Resolve a caller-supplied vertex index to a storage slot.
///
/// Returns `None` for negative indices and indices `>= vertex_count`.
pub fn slot(vertex: VertexId, vertex_count: usize) -> Option<usize> {
    match usize::try_from(vertex) {
        Ok(idx) if idx < vertex_count => Some(idx),
        _ => {
            log::trace!("vertex {} outside [0, {})", vertex, vertex_count);
            None
        }
    }
}
