//! Error types for graph construction and queries.

use thiserror::Error;

use crate::SlotIndex;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a facility graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A facility needs at least one slot.
    #[error("facility graph must contain at least one slot")]
    Empty,

    /// Shortest-path source is not a node of the graph.
    #[error("source {index} is outside a graph of {len} slots")]
    SourceOutOfRange { index: SlotIndex, len: usize },

    /// Edge endpoint is not a node of the graph.
    #[error("edge {from} -> {to} is outside a graph of {len} slots")]
    EdgeOutOfRange {
        from: SlotIndex,
        to: SlotIndex,
        len: usize,
    },

    /// Edge weight is negative or not a finite number.
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight {
        from: SlotIndex,
        to: SlotIndex,
        weight: f64,
    },

    /// The diagonal carries no edges.
    #[error("slot {0} cannot have an edge to itself")]
    SelfLoop(SlotIndex),

    /// Slot count exceeds what the dense matrix is built for.
    #[error("facility graph of {len} slots exceeds the limit of {max}")]
    TooLarge { len: usize, max: usize },

    /// Adjacency matrix rows must all have the graph's length.
    #[error("adjacency row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        found: usize,
        expected: usize,
    },
}
