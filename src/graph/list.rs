//! Adjacency-list backend: per-vertex destination sequences.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::types::{check_vertex_count, slot, Backend, EdgeKey, GraphResult, VertexId, Weight};

use super::{Graph, VertexTable};

/// A directed graph stored as one ordered destination list per vertex.
///
/// Memory grows with the edge count. Edge lookup scans the origin's list,
/// so it costs O(out-degree). Edge labels and weights are kept in maps keyed
/// by [`EdgeKey`]; entries are dropped together with their edge.
#[derive(Debug, Clone)]
pub struct ListGraph {
    /// Out-edges per vertex, in insertion order, without duplicates.
    adjacency: Vec<Vec<usize>>,
    edge_labels: HashMap<EdgeKey, String>,
    edge_weights: HashMap<EdgeKey, Weight>,
    edge_count: usize,
    vertices: VertexTable,
}

impl ListGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// Use [`ListGraph::try_new`] for sizes that come from user input.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_labels: HashMap::new(),
            edge_weights: HashMap::new(),
            edge_count: 0,
            vertices: VertexTable::new(vertex_count),
        }
    }

    /// Create a graph, rejecting sizes above [`MAX_LIST_VERTICES`].
    ///
    /// [`MAX_LIST_VERTICES`]: crate::types::MAX_LIST_VERTICES
    pub fn try_new(vertex_count: usize) -> GraphResult<Self> {
        check_vertex_count(Backend::List, vertex_count)?;
        Ok(Self::new(vertex_count))
    }

    /// Key for `origin -> destination` if both indices are valid.
    fn key(&self, origin: VertexId, destination: VertexId) -> Option<EdgeKey> {
        let n = self.adjacency.len();
        Some(EdgeKey::new(slot(origin, n)?, slot(destination, n)?))
    }

    /// Key for an existing edge.
    fn existing(&self, origin: VertexId, destination: VertexId) -> Option<EdgeKey> {
        self.key(origin, destination)
            .filter(|k| self.adjacency[k.origin].contains(&k.destination))
    }

    fn insert(&mut self, origin: VertexId, destination: VertexId, weight: Option<Weight>) {
        let Some(key) = self.key(origin, destination) else {
            log::debug!("ignoring edge {}->{}: vertex out of range", origin, destination);
            return;
        };
        let list = &mut self.adjacency[key.origin];
        if list.contains(&key.destination) {
            log::trace!("edge {} already present", key);
            return;
        }
        list.push(key.destination);
        if let Some(w) = weight {
            self.edge_weights.insert(key, w);
        }
        self.edge_count += 1;
    }
}

impl Graph for ListGraph {
    fn backend(&self) -> Backend {
        Backend::List
    }

    fn add_edge(&mut self, origin: VertexId, destination: VertexId) {
        self.insert(origin, destination, None);
    }

    fn remove_edge(&mut self, origin: VertexId, destination: VertexId) {
        let Some(key) = self.key(origin, destination) else {
            return;
        };
        let list = &mut self.adjacency[key.origin];
        if let Some(pos) = list.iter().position(|&d| d == key.destination) {
            list.remove(pos);
            self.edge_labels.remove(&key);
            self.edge_weights.remove(&key);
            self.edge_count -= 1;
        }
    }

    fn add_weighted_edge(&mut self, origin: VertexId, destination: VertexId, weight: Weight) {
        self.insert(origin, destination, Some(weight));
    }

    fn edge_exists(&self, origin: VertexId, destination: VertexId) -> bool {
        self.existing(origin, destination).is_some()
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
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
        match self.existing(origin, destination) {
            Some(key) => {
                self.edge_labels.insert(key, label.to_owned());
            }
            None => log::debug!("dropping label for missing edge {}->{}", origin, destination),
        }
    }

    fn edge_label(&self, origin: VertexId, destination: VertexId) -> Option<&str> {
        self.existing(origin, destination)
            .and_then(|key| self.edge_labels.get(&key))
            .map(String::as_str)
    }

    fn set_edge_weight(&mut self, origin: VertexId, destination: VertexId, weight: Weight) {
        match self.existing(origin, destination) {
            Some(key) => {
                self.edge_weights.insert(key, weight);
            }
            None => log::debug!("dropping weight for missing edge {}->{}", origin, destination),
        }
    }

    fn edge_weight(&self, origin: VertexId, destination: VertexId) -> Weight {
        self.existing(origin, destination)
            .and_then(|key| self.edge_weights.get(&key).copied())
            .unwrap_or(0)
    }

    fn out_neighbors(&self, vertex: VertexId) -> Vec<usize> {
        slot(vertex, self.adjacency.len())
            .map(|v| self.adjacency[v].clone())
            .unwrap_or_default()
    }

    fn out_degree(&self, vertex: VertexId) -> usize {
        slot(vertex, self.adjacency.len()).map_or(0, |v| self.adjacency[v].len())
    }

    fn render_adjacency(&self, out: &mut String) {
        let _ = writeln!(out, "Adjacency list:");
        for (v, list) in self.adjacency.iter().enumerate() {
            let _ = write!(out, "Vertex {}: ", v);
            for d in list {
                let _ = write!(out, "{} ", d);
            }
            let _ = writeln!(out);
        }
    }
}
