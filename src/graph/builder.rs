//! Backend selection and a fluent API for populating graphs.

use crate::types::{Backend, GraphResult, VertexId, Weight};

use super::{Graph, ListGraph, MatrixGraph};

/// Construct an empty graph on the chosen backend.
///
/// Fails only when `vertex_count` exceeds [`Backend::max_vertices`].
pub fn build_graph(backend: Backend, vertex_count: usize) -> GraphResult<Box<dyn Graph>> {
    let graph: Box<dyn Graph> = match backend {
        Backend::Matrix => Box::new(MatrixGraph::try_new(vertex_count)?),
        Backend::List => Box::new(ListGraph::try_new(vertex_count)?),
    };
    log::info!("created {} graph with {} vertices", backend, vertex_count);
    Ok(graph)
}

enum Step {
    Edge(VertexId, VertexId, Option<Weight>),
    EdgeLabel(VertexId, VertexId, String),
    VertexLabel(VertexId, String),
    VertexWeight(VertexId, Weight),
}

/// Fluent builder for constructing a populated graph.
///
/// Steps are replayed in order through the [`Graph`] contract, so they follow
/// the same silent rules (labels on missing edges are dropped, and so on).
pub struct GraphBuilder {
    backend: Backend,
    vertex_count: usize,
    steps: Vec<Step>,
}

impl GraphBuilder {
    /// Start a graph with `vertex_count` vertices on `backend`.
    pub fn new(backend: Backend, vertex_count: usize) -> Self {
        Self {
            backend,
            vertex_count,
            steps: Vec::new(),
        }
    }

    /// Add an unweighted edge.
    pub fn edge(mut self, origin: VertexId, destination: VertexId) -> Self {
        self.steps.push(Step::Edge(origin, destination, None));
        self
    }

    /// Add a weighted edge.
    pub fn weighted_edge(mut self, origin: VertexId, destination: VertexId, weight: Weight) -> Self {
        self.steps.push(Step::Edge(origin, destination, Some(weight)));
        self
    }

    /// Label an edge added earlier.
    pub fn edge_label(mut self, origin: VertexId, destination: VertexId, label: &str) -> Self {
        self.steps.push(Step::EdgeLabel(origin, destination, label.to_owned()));
        self
    }

    pub fn vertex_label(mut self, vertex: VertexId, label: &str) -> Self {
        self.steps.push(Step::VertexLabel(vertex, label.to_owned()));
        self
    }

    pub fn vertex_weight(mut self, vertex: VertexId, weight: Weight) -> Self {
        self.steps.push(Step::VertexWeight(vertex, weight));
        self
    }

    /// Add every ordered pair of distinct vertices.
    pub fn complete(mut self) -> Self {
        let n = self.vertex_count as VertexId;
        for o in 0..n {
            for d in (0..n).filter(|&d| d != o) {
                self.steps.push(Step::Edge(o, d, None));
            }
        }
        self
    }

    /// Build the graph.
    pub fn build(self) -> GraphResult<Box<dyn Graph>> {
        let mut graph = build_graph(self.backend, self.vertex_count)?;
        for step in self.steps {
            match step {
                Step::Edge(o, d, None) => graph.add_edge(o, d),
                Step::Edge(o, d, Some(w)) => graph.add_weighted_edge(o, d, w),
                Step::EdgeLabel(o, d, label) => graph.set_edge_label(o, d, &label),
                Step::VertexLabel(v, label) => graph.set_vertex_label(v, &label),
                Step::VertexWeight(v, w) => graph.set_vertex_weight(v, w),
            }
        }
        Ok(graph)
    }
}
