//! Serializable view of a graph, used for JSON output.

use serde::Serialize;

use crate::types::{Backend, Weight};

/// Point-in-time copy of a graph's vertices, edges and metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub backend: Backend,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<VertexSnapshot>,
    /// Edges in the backend's render order.
    pub edges: Vec<EdgeSnapshot>,
}

/// One vertex with its attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexSnapshot {
    pub index: usize,
    pub label: Option<String>,
    pub weight: Weight,
}

/// One edge with its attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSnapshot {
    pub origin: usize,
    pub destination: usize,
    pub label: Option<String>,
    pub weight: Weight,
}

impl GraphSnapshot {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
