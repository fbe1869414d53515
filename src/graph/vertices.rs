//! Per-vertex label and weight storage, shared by both backends.

use crate::types::{slot, VertexId, Weight};

/// Fixed-size vertex attribute arrays.
#[derive(Debug, Clone)]
pub struct VertexTable {
    labels: Vec<Option<String>>,
    weights: Vec<Weight>,
}

impl VertexTable {
    /// Create attribute storage for `count` vertices, all unlabeled with weight 0.
    pub fn new(count: usize) -> Self {
        Self {
            labels: vec![None; count],
            weights: vec![0; count],
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn set_label(&mut self, vertex: VertexId, label: &str) {
        if let Some(v) = slot(vertex, self.len()) {
            self.labels[v] = Some(label.to_owned());
        } else {
            log::debug!("dropping label for out-of-range vertex {}", vertex);
        }
    }

    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        slot(vertex, self.len()).and_then(|v| self.labels[v].as_deref())
    }

    pub fn set_weight(&mut self, vertex: VertexId, weight: Weight) {
        if let Some(v) = slot(vertex, self.len()) {
            self.weights[v] = weight;
        } else {
            log::debug!("dropping weight for out-of-range vertex {}", vertex);
        }
    }

    pub fn weight(&self, vertex: VertexId) -> Weight {
        slot(vertex, self.len()).map_or(0, |v| self.weights[v])
    }
}
