//! Parking slots and their user-facing ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use smartpark_graph::SlotIndex;

/// User-facing slot number (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create from a raw slot number.
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw slot number.
    #[inline]
    pub const fn value(&self) -> usize {
        self.0
    }

    /// Graph index for this id; `None` for id 0.
    ///
    /// Upper bounds are checked by the registry, which knows N.
    #[inline]
    pub const fn index(&self) -> Option<SlotIndex> {
        match self.0.checked_sub(1) {
            Some(i) => Some(SlotIndex::new(i)),
            None => None,
        }
    }

    /// Id of the slot at a graph index.
    #[inline]
    pub const fn from_index(index: SlotIndex) -> Self {
        Self(index.value() + 1)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single parking space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    id: SlotId,
    available: bool,
    base_rate: f64,
}

impl Slot {
    /// A free slot charging `base_rate` per hour.
    pub const fn new(id: SlotId, base_rate: f64) -> Self {
        Self {
            id,
            available: true,
            base_rate,
        }
    }

    /// The slot's id.
    #[inline]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// Whether no vehicle occupies the slot.
    #[inline]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Hourly rate before tiers and time multipliers.
    #[inline]
    pub const fn base_rate(&self) -> f64 {
        self.base_rate
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_index_conversion() {
        assert_eq!(SlotId::new(1).index(), Some(SlotIndex::new(0)));
        assert_eq!(SlotId::new(10).index(), Some(SlotIndex::new(9)));
        assert_eq!(SlotId::new(0).index(), None);
        assert_eq!(SlotId::from_index(SlotIndex::new(4)), SlotId::new(5));
    }

    #[test]
    fn new_slot_is_available() {
        let slot = Slot::new(SlotId::new(3), 80.0);
        assert!(slot.is_available());
        assert_eq!(slot.base_rate(), 80.0);
        assert_eq!(slot.id().to_string(), "3");
    }
}
