//! Slot Registry - occupancy and rates for every slot.
//!
//! Slot ids form the contiguous range 1..=N, fixed at construction. Every
//! operation validates the id before touching state, so a rejected call
//! never mutates anything.

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::slot::{Slot, SlotId};

/// Exclusive owner of the facility's slots.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRegistry {
    slots: Vec<Slot>,
}

impl SlotRegistry {
    /// One free slot per rate, ids assigned in order from 1.
    pub fn with_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let slots: Vec<Slot> = rates
            .into_iter()
            .enumerate()
            .map(|(i, rate)| Slot::new(SlotId::new(i + 1), rate))
            .collect();

        for slot in slots.iter().filter(|s| s.base_rate() <= 0.0) {
            warn!(
                slot = %slot.id(),
                rate = slot.base_rate(),
                "Slot has a non-positive base rate"
            );
        }

        Self { slots }
    }

    /// `len` slots whose rate starts at `base` and drops by `decrement` per slot.
    ///
    /// No floor is applied: large facilities can end up with zero or
    /// negative rates, which are logged but kept.
    pub fn linear(len: usize, base: f64, decrement: f64) -> Self {
        Self::with_rates((0..len).map(|i| base - i as f64 * decrement))
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the registry holds no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in id order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Look up a slot.
    pub fn get(&self, id: SlotId) -> Result<&Slot> {
        let pos = self.position(id)?;
        Ok(&self.slots[pos])
    }

    /// Whether the slot is free.
    pub fn is_available(&self, id: SlotId) -> Result<bool> {
        self.get(id).map(Slot::is_available)
    }

    /// Configured hourly rate of the slot.
    pub fn rate(&self, id: SlotId) -> Result<f64> {
        self.get(id).map(Slot::base_rate)
    }

    /// Mark a free slot occupied.
    pub fn occupy(&mut self, id: SlotId) -> Result<()> {
        let pos = self.position(id)?;
        let slot = &mut self.slots[pos];
        if !slot.is_available() {
            return Err(Error::SlotUnavailable(id));
        }
        slot.set_available(false);
        info!(slot = %id, "Slot occupied");
        Ok(())
    }

    /// Mark an occupied slot free.
    pub fn release(&mut self, id: SlotId) -> Result<()> {
        let pos = self.position(id)?;
        let slot = &mut self.slots[pos];
        if slot.is_available() {
            return Err(Error::SlotAlreadyFree(id));
        }
        slot.set_available(true);
        info!(slot = %id, "Slot released");
        Ok(())
    }

    /// Number of free slots.
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_available()).count()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.len() - self.available_count()
    }

    /// Ids of slots whose rate is zero or negative.
    pub fn non_positive_rates(&self) -> Vec<SlotId> {
        self.slots
            .iter()
            .filter(|s| s.base_rate() <= 0.0)
            .map(Slot::id)
            .collect()
    }

    fn position(&self, id: SlotId) -> Result<usize> {
        match id.index() {
            Some(index) if index.value() < self.slots.len() => Ok(index.value()),
            _ => Err(Error::InvalidSlot(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference() -> SlotRegistry {
        SlotRegistry::linear(10, 100.0, 10.0)
    }

    #[test]
    fn linear_rates() {
        let registry = reference();
        let rates: Vec<f64> = registry.slots().iter().map(Slot::base_rate).collect();
        assert_eq!(
            rates,
            vec![100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0]
        );
        assert_eq!(registry.rate(SlotId::new(4)).unwrap(), 70.0);
        assert!(registry.non_positive_rates().is_empty());
    }

    #[test]
    fn ids_are_contiguous_from_one() {
        let registry = reference();
        for (i, slot) in registry.slots().iter().enumerate() {
            assert_eq!(slot.id(), SlotId::new(i + 1));
            assert!(slot.is_available());
        }
        assert_eq!(registry.available_count(), 10);
        assert_eq!(registry.occupied_count(), 0);
    }

    #[test]
    fn rates_are_not_floored() {
        let registry = SlotRegistry::linear(12, 100.0, 10.0);
        assert_eq!(registry.rate(SlotId::new(11)).unwrap(), 0.0);
        assert_eq!(registry.rate(SlotId::new(12)).unwrap(), -10.0);
        assert_eq!(
            registry.non_positive_rates(),
            vec![SlotId::new(11), SlotId::new(12)]
        );
    }

    #[test]
    fn occupy_then_release() {
        let mut registry = reference();
        let id = SlotId::new(3);

        registry.occupy(id).unwrap();
        assert!(!registry.is_available(id).unwrap());
        assert_eq!(registry.occupied_count(), 1);

        registry.release(id).unwrap();
        assert!(registry.is_available(id).unwrap());
        assert_eq!(registry.occupied_count(), 0);
    }

    #[test]
    fn double_occupy_rejected() {
        let mut registry = reference();
        registry.occupy(SlotId::new(2)).unwrap();
        assert!(matches!(
            registry.occupy(SlotId::new(2)),
            Err(Error::SlotUnavailable(id)) if id == SlotId::new(2)
        ));
        assert!(!registry.is_available(SlotId::new(2)).unwrap());
    }

    #[test]
    fn repeated_release_is_already_free() {
        let mut registry = reference();
        for _ in 0..3 {
            assert!(matches!(
                registry.release(SlotId::new(5)),
                Err(Error::SlotAlreadyFree(_))
            ));
        }
        assert!(registry.is_available(SlotId::new(5)).unwrap());
    }

    #[test]
    fn invalid_ids() {
        let mut registry = reference();
        for raw in [0, 11, 1000] {
            let id = SlotId::new(raw);
            assert!(matches!(registry.is_available(id), Err(Error::InvalidSlot(_))));
            assert!(matches!(registry.occupy(id), Err(Error::InvalidSlot(_))));
            assert!(matches!(registry.release(id), Err(Error::InvalidSlot(_))));
            assert!(matches!(registry.rate(id), Err(Error::InvalidSlot(_))));
        }
        assert_eq!(registry, reference());
    }

    proptest! {
        #[test]
        fn out_of_range_never_mutates(raw in prop_oneof![Just(0usize), 11usize..10_000], occupied in 1usize..=10) {
            let mut registry = reference();
            registry.occupy(SlotId::new(occupied)).unwrap();
            let before = registry.clone();

            let id = SlotId::new(raw);
            prop_assert!(matches!(registry.occupy(id), Err(Error::InvalidSlot(_))));
            prop_assert!(matches!(registry.release(id), Err(Error::InvalidSlot(_))));
            prop_assert!(matches!(registry.is_available(id), Err(Error::InvalidSlot(_))));
            prop_assert_eq!(registry, before);
        }

        #[test]
        fn occupy_release_round_trip(raw in 1usize..=10, pre_occupied in proptest::collection::vec(1usize..=10, 0..5)) {
            let mut registry = reference();
            for p in pre_occupied {
                let _ = registry.occupy(SlotId::new(p));
            }
            let id = SlotId::new(raw);
            let prior = registry.is_available(id).unwrap();
            if prior {
                registry.occupy(id).unwrap();
                registry.release(id).unwrap();
            }
            prop_assert_eq!(registry.is_available(id).unwrap(), prior);
        }
    }
}
