//! Nearest available slot recommendation.
//!
//! Ranks every slot reachable from the origin by travel distance and picks
//! the first one that is free. The query only reads state: the returned
//! slot is not reserved.

use smartpark_graph::{FacilityGraph, ShortestPaths, SlotIndex};
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::SlotRegistry;
use crate::slot::SlotId;

/// A recommended slot and its travel distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    /// Recommended slot
    pub slot: SlotId,
    /// Travel cost from the origin
    pub distance: f64,
}

/// Read-only view combining the facility graph with slot availability.
#[derive(Debug, Clone, Copy)]
pub struct Allocator<'a> {
    graph: &'a FacilityGraph,
    registry: &'a SlotRegistry,
}

impl<'a> Allocator<'a> {
    /// Pair a graph with a registry of the same size.
    pub fn new(graph: &'a FacilityGraph, registry: &'a SlotRegistry) -> Result<Self> {
        if graph.len() != registry.len() {
            return Err(Error::SizeMismatch {
                graph: graph.len(),
                slots: registry.len(),
            });
        }
        Ok(Self { graph, registry })
    }

    /// Available slots reachable from `origin`, nearest first.
    ///
    /// Equal distances keep slot order. The origin itself ranks first
    /// when it is free.
    pub fn ranked_available(&self, origin: SlotId) -> Result<Vec<Allocation>> {
        let paths = ShortestPaths::from_source(self.graph, self.source(origin)?)?;

        let mut ranked = Vec::new();
        for (index, distance) in paths.ranked() {
            let slot = SlotId::from_index(index);
            if self.registry.is_available(slot)? {
                ranked.push(Allocation { slot, distance });
            }
        }
        Ok(ranked)
    }

    /// Nearest available slot to `origin`, or `None` when every reachable
    /// slot is taken.
    pub fn find_nearest(&self, origin: SlotId) -> Result<Option<Allocation>> {
        let paths = ShortestPaths::from_source(self.graph, self.source(origin)?)?;
        let ranked = paths.ranked();

        let mut nearest = None;
        for &(index, distance) in &ranked {
            let slot = SlotId::from_index(index);
            if self.registry.is_available(slot)? {
                nearest = Some(Allocation { slot, distance });
                break;
            }
        }

        debug!(
            origin = %origin,
            reachable = ranked.len(),
            nearest = ?nearest.map(|a| a.slot.value()),
            "Nearest slot query"
        );
        Ok(nearest)
    }

    fn source(&self, origin: SlotId) -> Result<SlotIndex> {
        self.registry.get(origin)?;
        origin.index().ok_or(Error::InvalidSlot(origin))
    }
}
