//! Edge identity.

use serde::Serialize;

/// A directed edge identified by its validated endpoint slots.
///
/// Used directly as the key of the list backend's metadata maps and as the
/// element type of edge listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    /// Origin vertex.
    pub origin: usize,
    /// Destination vertex.
    pub destination: usize,
}

impl EdgeKey {
    /// Create a key for the edge `origin -> destination`.
    pub fn new(origin: usize, destination: usize) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// True if `vertex` is one of this edge's endpoints.
    pub fn touches(&self, vertex: usize) -> bool {
        self.origin == vertex || self.destination == vertex
    }

    /// True if the two edges share at least one endpoint.
    pub fn shares_endpoint(&self, other: &EdgeKey) -> bool {
        self.touches(other.origin) || self.touches(other.destination)
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.origin, self.destination)
    }
}
