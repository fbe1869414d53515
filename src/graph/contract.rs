//! The graph contract shared by every storage backend.

use std::fmt::Write as _;

use crate::types::{slot, Backend, EdgeKey, VertexId, Weight, NO_LABEL};

use super::snapshot::{EdgeSnapshot, GraphSnapshot, VertexSnapshot};

/// A directed graph over a fixed set of vertices `[0, vertex_count)`.
///
/// Every operation validates its vertex indices. An index outside the range
/// turns a mutator into a no-op and makes a query return its default
/// (`false`, `None` or `0`). Nothing here panics or returns an error.
///
/// Edge metadata only exists while its edge does: setters on a missing edge
/// are dropped, getters on a missing edge return the default, and removing an
/// edge discards its label and weight.
pub trait Graph {
    /// Which storage strategy backs this graph.
    fn backend(&self) -> Backend;

    /// Add the edge `origin -> destination` if absent.
    fn add_edge(&mut self, origin: VertexId, destination: VertexId);

    /// Remove the edge `origin -> destination` and its metadata, if present.
    fn remove_edge(&mut self, origin: VertexId, destination: VertexId);

    /// Add the edge with an initial weight. An existing edge keeps its weight.
    fn add_weighted_edge(&mut self, origin: VertexId, destination: VertexId, weight: Weight);

    /// Whether the edge `origin -> destination` is present.
    fn edge_exists(&self, origin: VertexId, destination: VertexId) -> bool;

    /// Number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Number of edges currently present.
    fn edge_count(&self) -> usize;

    fn set_vertex_label(&mut self, vertex: VertexId, label: &str);
    fn vertex_label(&self, vertex: VertexId) -> Option<&str>;
    fn set_vertex_weight(&mut self, vertex: VertexId, weight: Weight);
    fn vertex_weight(&self, vertex: VertexId) -> Weight;

    fn set_edge_label(&mut self, origin: VertexId, destination: VertexId, label: &str);
    fn edge_label(&self, origin: VertexId, destination: VertexId) -> Option<&str>;
    fn set_edge_weight(&mut self, origin: VertexId, destination: VertexId, weight: Weight);
    fn edge_weight(&self, origin: VertexId, destination: VertexId) -> Weight;

    /// Destinations of `vertex`'s out-edges, in storage order.
    fn out_neighbors(&self, vertex: VertexId) -> Vec<usize>;

    /// Write the backend-specific adjacency section of [`Graph::render`].
    fn render_adjacency(&self, out: &mut String);

    /// All present edges, in render order.
    fn edges(&self) -> Vec<EdgeKey> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for origin in 0..self.vertex_count() {
            for destination in self.out_neighbors(origin as VertexId) {
                edges.push(EdgeKey::new(origin, destination));
            }
        }
        edges
    }

    /// Out-degree of `vertex`, or 0 if out of range.
    fn out_degree(&self, vertex: VertexId) -> usize {
        self.out_neighbors(vertex).len()
    }

    /// True if either `a -> b` or `b -> a` is present.
    fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.edge_exists(a, b) || self.edge_exists(b, a)
    }

    /// True if both edges exist and share at least one endpoint.
    fn edges_are_adjacent(
        &self,
        origin1: VertexId,
        destination1: VertexId,
        origin2: VertexId,
        destination2: VertexId,
    ) -> bool {
        match (
            self.present_key(origin1, destination1),
            self.present_key(origin2, destination2),
        ) {
            (Some(first), Some(second)) => first.shares_endpoint(&second),
            _ => false,
        }
    }

    /// True if the edge exists and `vertex` is one of its endpoints.
    fn edge_incides_on_vertex(
        &self,
        origin: VertexId,
        destination: VertexId,
        vertex: VertexId,
    ) -> bool {
        match (
            self.present_key(origin, destination),
            slot(vertex, self.vertex_count()),
        ) {
            (Some(edge), Some(v)) => edge.touches(v),
            _ => false,
        }
    }

    /// True if the graph has no edges.
    fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }

    /// True if the edge count equals `V * (V - 1)`.
    fn is_complete(&self) -> bool {
        let v = self.vertex_count();
        self.edge_count() == v * v.saturating_sub(1)
    }

    /// The validated key of an existing edge.
    fn present_key(&self, origin: VertexId, destination: VertexId) -> Option<EdgeKey> {
        if !self.edge_exists(origin, destination) {
            return None;
        }
        let n = self.vertex_count();
        Some(EdgeKey::new(slot(origin, n)?, slot(destination, n)?))
    }

    /// Human-readable dump: adjacency, vertex labels, then edge metadata.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_adjacency(&mut out);

        let _ = writeln!(out, "\nVertex labels:");
        for v in 0..self.vertex_count() {
            let label = self.vertex_label(v as VertexId).unwrap_or(NO_LABEL);
            let _ = writeln!(out, "Vertex {}: {}", v, label);
        }

        let _ = writeln!(out, "\nEdge weights and labels:");
        for edge in self.edges() {
            let (o, d) = (edge.origin as VertexId, edge.destination as VertexId);
            let _ = writeln!(
                out,
                "Edge {}: weight = {}, label = {}",
                edge,
                self.edge_weight(o, d),
                self.edge_label(o, d).unwrap_or(NO_LABEL)
            );
        }
        out
    }

    /// A serializable copy of the graph's current state.
    fn snapshot(&self) -> GraphSnapshot {
        let vertices = (0..self.vertex_count())
            .map(|v| VertexSnapshot {
                index: v,
                label: self.vertex_label(v as VertexId).map(str::to_owned),
                weight: self.vertex_weight(v as VertexId),
            })
            .collect();
        let edges = self
            .edges()
            .into_iter()
            .map(|key| {
                let (o, d) = (key.origin as VertexId, key.destination as VertexId);
                EdgeSnapshot {
                    origin: key.origin,
                    destination: key.destination,
                    label: self.edge_label(o, d).map(str::to_owned),
                    weight: self.edge_weight(o, d),
                }
            })
            .collect();
        GraphSnapshot {
            backend: self.backend(),
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            vertices,
            edges,
        }
    }
}
