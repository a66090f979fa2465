//! Error types for Smartpark.

use thiserror::Error;

use crate::SlotId;

/// Result type for Smartpark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in facility operations.
///
/// Every variant is recoverable: the caller reports it and carries on.
#[derive(Debug, Error)]
pub enum Error {
    /// Slot id outside 1..=N
    #[error("Invalid slot: {0}")]
    InvalidSlot(SlotId),

    /// Slot is already occupied
    #[error("Slot {0} is unavailable")]
    SlotUnavailable(SlotId),

    /// Slot is not occupied
    #[error("Slot {0} is already free")]
    SlotAlreadyFree(SlotId),

    /// No available slot is reachable from the origin
    #[error("No available parking slot reachable from slot {0}")]
    NotFound(SlotId),

    /// Graph and registry disagree on the number of slots
    #[error("Graph has {graph} slots but registry has {slots}")]
    SizeMismatch { graph: usize, slots: usize },

    /// Graph error
    #[error("Graph error: {0}")]
    Graph(#[from] smartpark_graph::Error),

    /// Pricing error
    #[error("Pricing error: {0}")]
    Pricing(#[from] smartpark_pricing::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
