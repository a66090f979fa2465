//! Single-source shortest paths (Dijkstra, selection variant).
//!
//! The facility is small, so the O(N²) form is used: each round scans for
//! the closest unvisited slot instead of maintaining a heap. Ties on the
//! minimum go to the lowest index, which keeps results deterministic.
//!
//! Scratch state (distances, visited flags) is allocated per query and
//! never shared between calls.

use tracing::debug;

use crate::{Distance, Error, FacilityGraph, Result, SlotIndex};

/// Distances from one source slot to every slot of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: SlotIndex,
    distances: Vec<Distance>,
}

impl ShortestPaths {
    /// Run Dijkstra from `source` over the direct edges of `graph`.
    ///
    /// Pairs with weight `0` are skipped: they have no edge, and relaxing
    /// through them would teleport between slots for free.
    pub fn from_source(graph: &FacilityGraph, source: SlotIndex) -> Result<Self> {
        if !graph.contains(source) {
            return Err(Error::SourceOutOfRange {
                index: source,
                len: graph.len(),
            });
        }

        let mut distances = vec![Distance::Unreachable; graph.len()];
        let mut visited = vec![false; graph.len()];
        distances[source.value()] = Distance::ZERO;

        while let Some((u, base)) = closest_unvisited(&distances, &visited) {
            visited[u] = true;
            for (v, weight) in graph.neighbors(SlotIndex(u)) {
                if visited[v.value()] {
                    continue;
                }
                let candidate = Distance::Finite(base + weight);
                if candidate < distances[v.value()] {
                    distances[v.value()] = candidate;
                }
            }
        }

        let paths = Self { source, distances };
        debug!(
            source = %source,
            reachable = paths.reachable().count(),
            "Computed shortest paths"
        );
        Ok(paths)
    }

    /// The slot the query started from.
    #[inline]
    pub const fn source(&self) -> SlotIndex {
        self.source
    }

    /// Distance to `target`; `Unreachable` also for out-of-range indices.
    pub fn distance(&self, target: SlotIndex) -> Distance {
        self.distances
            .get(target.value())
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// All distances, indexed by slot.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Reachable slots and their distances, in index order.
    pub fn reachable(&self) -> impl Iterator<Item = (SlotIndex, f64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.finite().map(|d| (SlotIndex(i), d)))
    }

    /// Reachable slots sorted by ascending distance.
    ///
    /// The sort is stable, so equal distances keep index order. Unreachable
    /// slots are left out.
    pub fn ranked(&self) -> Vec<(SlotIndex, f64)> {
        let mut ranked: Vec<_> = self.reachable().collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }
}

/// First unvisited slot holding the minimum finite distance.
fn closest_unvisited(distances: &[Distance], visited: &[bool]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, distance) in distances.iter().enumerate() {
        if visited[i] {
            continue;
        }
        if let Distance::Finite(d) = *distance {
            match best {
                Some((_, current)) if d >= current => {}
                _ => best = Some((i, d)),
            }
        }
    }
    best
}
