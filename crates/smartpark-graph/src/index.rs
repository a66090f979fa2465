//! Zero-based slot indices.
//!
//! The graph and every internal table address slots by position. User-facing
//! slot numbers are 1-based and live in the registry crate; this type is the
//! only index the graph understands.

use std::fmt;

/// Position of a slot inside the facility graph (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SlotIndex(pub usize);

impl SlotIndex {
    /// First slot of any facility.
    pub const FIRST: Self = Self(0);

    /// Create from a raw position.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw position.
    #[inline]
    pub const fn value(&self) -> usize {
        self.0
    }
}

impl From<usize> for SlotIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
