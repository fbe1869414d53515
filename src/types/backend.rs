//! Storage backend selector.

use serde::Serialize;

use super::{MAX_LIST_VERTICES, MAX_MATRIX_VERTICES};

/// The storage strategy behind a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Backend {
    /// Dense V×V presence table. O(1) edge lookup, O(V²) memory.
    Matrix = 1,
    /// Per-vertex destination sequences. O(degree) edge lookup.
    List = 2,
}

impl Backend {
    /// Convert a menu selection to a Backend, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Matrix),
            2 => Some(Self::List),
            _ => None,
        }
    }

    /// Return a human-readable name for this backend.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::List => "list",
        }
    }

    /// Largest vertex count this backend accepts at construction.
    pub fn max_vertices(&self) -> usize {
        match self {
            Self::Matrix => MAX_MATRIX_VERTICES,
            Self::List => MAX_LIST_VERTICES,
        }
    }

    /// Parse a backend from its name or its menu number.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "matrix" | "adjacency_matrix" | "1" => Some(Self::Matrix),
            "list" | "adjacency_list" | "2" => Some(Self::List),
            _ => None,
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
