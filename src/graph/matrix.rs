//! Adjacency-matrix backend: dense V×V tables.

use std::fmt::Write as _;

use crate::types::{check_vertex_count, slot, Backend, GraphResult, VertexId, Weight};

use super::{Graph, VertexTable};

/// A directed graph stored as a dense presence matrix.
///
/// Presence, weight and label live in three parallel row-major V×V tables.
/// Every contract operation is a single cell read or write.
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    /// Number of vertices (side of each table).
    size: usize,
    /// Row-major presence table.
    present: Vec<bool>,
    /// Row-major edge weights, 0 where no edge or no weight.
    weights: Vec<Weight>,
    /// Row-major edge labels.
    labels: Vec<Option<String>>,
    /// Number of cells marked present.
    edge_count: usize,
    vertices: VertexTable,
}

impl MatrixGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// `vertex_count` must not exceed [`MAX_MATRIX_VERTICES`]: the tables are
    /// allocated eagerly and larger sizes run out of memory. Use
    /// [`MatrixGraph::try_new`] for sizes that come from user input.
    ///
    /// [`MAX_MATRIX_VERTICES`]: crate::types::MAX_MATRIX_VERTICES
    pub fn new(vertex_count: usize) -> Self {
        let cells = vertex_count.saturating_mul(vertex_count);
        Self {
            size: vertex_count,
            present: vec![false; cells],
            weights: vec![0; cells],
            labels: vec![None; cells],
            edge_count: 0,
            vertices: VertexTable::new(vertex_count),
        }
    }

    /// Create a graph, rejecting sizes above [`MAX_MATRIX_VERTICES`].
    ///
    /// [`MAX_MATRIX_VERTICES`]: crate::types::MAX_MATRIX_VERTICES
    pub fn try_new(vertex_count: usize) -> GraphResult<Self> {
        check_vertex_count(Backend::Matrix, vertex_count)?;
        Ok(Self::new(vertex_count))
    }

    /// Flat index of the cell for `origin -> destination`, if both are valid.
    fn cell(&self, origin: VertexId, destination: VertexId) -> Option<usize> {
        let o = slot(origin, self.size)?;
        let d = slot(destination, self.size)?;
        Some(o * self.size + d)
    }

    /// Flat index of the cell for an existing edge.
    fn present_cell(&self, origin: VertexId, destination: VertexId) -> Option<usize> {
        self.cell(origin, destination).filter(|&c| self.present[c])
    }

    fn insert(&mut self, origin: VertexId, destination: VertexId, weight: Option<Weight>) {
        let Some(c) = self.cell(origin, destination) else {
            log::debug!("ignoring edge {}->{}: vertex out of range", origin, destination);
            return;
        };
        if self.present[c] {
            log::trace!("edge {}->{} already present", origin, destination);
            return;
        }
        self.present[c] = true;
        if let Some(w) = weight {
            self.weights[c] = w;
        }
        self.edge_count += 1;
    }
}

impl Graph for MatrixGraph {
    fn backend(&self) -> Backend {
        Backend::Matrix
    }

    fn add_edge(&mut self, origin: VertexId, destination: VertexId) {
        self.insert(origin, destination, None);
    }

    fn remove_edge(&mut self, origin: VertexId, destination: VertexId) {
        if let Some(c) = self.present_cell(origin, destination) {
            self.present[c] = false;
            self.weights[c] = 0;
            self.labels[c] = None;
            self.edge_count -= 1;
        }
    }

    fn add_weighted_edge(&mut self, origin: VertexId, destination: VertexId, weight: Weight) {
        self.insert(origin, destination, Some(weight));
    }

    fn edge_exists(&self, origin: VertexId, destination: VertexId) -> bool {
        self.present_cell(origin, destination).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn set_vertex_label(&mut self, vertex: VertexId, label: &str) {
        self.vertices.set_label(vertex, label);
    }

    fn vertex_label(&self, vertex: VertexId) -> Option<&str> {
        self.vertices.label(vertex)
    }

    fn set_vertex_weight(&mut self, vertex: VertexId, weight: Weight) {
        self.vertices.set_weight(vertex, weight);
    }

    fn vertex_weight(&self, vertex: VertexId) -> Weight {
        self.vertices.weight(vertex)
    }

    fn set_edge_label(&mut self, origin: VertexId, destination: VertexId, label: &str) {
        match self.present_cell(origin, destination) {
            Some(c) => self.labels[c] = Some(label.to_owned()),
            None => log::debug!("dropping label for missing edge {}->{}", origin, destination),
        }
    }

    fn edge_label(&self, origin: VertexId, destination: VertexId) -> Option<&str> {
        self.present_cell(origin, destination)
            .and_then(|c| self.labels[c].as_deref())
    }

    fn set_edge_weight(&mut self, origin: VertexId, destination: VertexId, weight: Weight) {
        match self.present_cell(origin, destination) {
            Some(c) => self.weights[c] = weight,
            None => log::debug!("dropping weight for missing edge {}->{}", origin, destination),
        }
    }

    fn edge_weight(&self, origin: VertexId, destination: VertexId) -> Weight {
        self.present_cell(origin, destination)
            .map_or(0, |c| self.weights[c])
    }

    fn out_neighbors(&self, vertex: VertexId) -> Vec<usize> {
        match slot(vertex, self.size) {
            Some(v) => {
                let row = &self.present[v * self.size..(v + 1) * self.size];
                row.iter()
                    .enumerate()
                    .filter_map(|(d, &on)| on.then_some(d))
                    .collect()
            }
            None => Vec::new(),
        }
    }

    fn render_adjacency(&self, out: &mut String) {
        let _ = writeln!(out, "Adjacency matrix:");
        for row in self.present.chunks(self.size.max(1)) {
            for &on in row {
                let _ = write!(out, "{} ", u8::from(on));
            }
            let _ = writeln!(out);
        }
    }
}
