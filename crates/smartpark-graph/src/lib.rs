//! Smartpark Facility Graph
//!
//! Weighted graph over the parking slots of a facility, plus the
//! single-source shortest-path search used to rank slots by travel distance.
//!
//! # Edge Encoding
//!
//! The graph is a dense N×N matrix of non-negative travel costs. A weight of
//! `0` between two distinct slots means there is **no direct edge**; it is
//! never treated as free travel. The diagonal is always `0`.
//!
//! # Reference Topology
//!
//! Until a facility map is loaded, slots are wired by a deterministic
//! placeholder rule: slots `i` and `j` (`i != j`, 0-based) share an edge of
//! weight [`SYNTHETIC_EDGE_WEIGHT`] iff `(i + j) % 3 == 0`.
//!
//! # Distances
//!
//! Shortest-path results use [`Distance`], an explicit `Finite`/`Unreachable`
//! tag, instead of a large numeric sentinel.

mod distance;
mod error;
mod graph;
mod index;
mod shortest;

pub use distance::Distance;
pub use error::{Error, Result};
pub use graph::{Edge, FacilityGraph};
pub use index::SlotIndex;
pub use shortest::ShortestPaths;

/// Edge weight used by the synthetic reference topology.
pub const SYNTHETIC_EDGE_WEIGHT: f64 = 1.5;

/// Largest facility a dense graph is built for (the matrix holds N² weights).
pub const MAX_SLOTS: usize = 1024;

/// Modulus of the synthetic topology: `(i + j) % SYNTHETIC_EDGE_MODULUS == 0` forms an edge.
pub const SYNTHETIC_EDGE_MODULUS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_facility_ranks_from_first_slot() {
        let graph = FacilityGraph::synthetic(10, SYNTHETIC_EDGE_WEIGHT).unwrap();
        let paths = ShortestPaths::from_source(&graph, SlotIndex::new(0)).unwrap();

        // Slot 0 connects to 3, 6 and 9; everything else is on another residue class.
        let ranked: Vec<usize> = paths.ranked().into_iter().map(|(i, _)| i.value()).collect();
        assert_eq!(ranked, vec![0, 3, 6, 9]);
    }
}
