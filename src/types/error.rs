//! Error types for the adjgraph library.
//!
//! The graph contract itself never fails; these cover graph construction
//! and the interactive front end.

use thiserror::Error;

use super::Backend;

/// All errors that can occur outside the silent graph contract.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Backend selection did not name a known storage strategy.
    #[error("Invalid backend selection: {0}")]
    InvalidBackend(String),

    /// Vertex count too large for the chosen backend.
    #[error("Vertex count exceeds maximum for {backend} backend: {count} > {max}")]
    TooManyVertices {
        backend: Backend,
        count: usize,
        max: usize,
    },

    /// Expected an integer token.
    #[error("Expected an integer, got '{0}'")]
    InvalidInteger(String),

    /// Menu command number outside 0-20.
    #[error("Invalid menu option: {0}")]
    UnknownCommand(i64),

    /// Input ended while arguments were still expected.
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
