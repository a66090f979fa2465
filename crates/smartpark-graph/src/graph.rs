//! Dense adjacency matrix over slot indices.
//!
//! The facility is small (tens of slots), so the matrix is stored flat in
//! row-major order and every lookup is a single index computation.

use tracing::debug;

use crate::{Error, Result, SlotIndex, MAX_SLOTS, SYNTHETIC_EDGE_MODULUS};

/// An undirected edge between two slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// One endpoint
    pub from: SlotIndex,
    /// The other endpoint
    pub to: SlotIndex,
    /// Travel cost; `0` removes the edge
    pub weight: f64,
}

impl Edge {
    /// Create an edge.
    pub const fn new(from: SlotIndex, to: SlotIndex, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// Travel costs between every pair of slots.
///
/// Invariants:
/// - `weight(i, i) == 0` for every slot
/// - every weight is finite and non-negative
/// - `0` between distinct slots means no direct edge
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityGraph {
    len: usize,
    weights: Vec<f64>,
}

impl FacilityGraph {
    /// A graph of `len` slots with no edges.
    ///
    /// `len` must be in `1..=MAX_SLOTS`.
    pub fn disconnected(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::Empty);
        }
        let too_large = Error::TooLarge {
            len,
            max: MAX_SLOTS,
        };
        if len > MAX_SLOTS {
            return Err(too_large);
        }
        let cells = len.checked_mul(len).ok_or(too_large)?;
        Ok(Self {
            len,
            weights: vec![0.0; cells],
        })
    }

    /// The placeholder topology: an edge of `weight` joins `i` and `j`
    /// (`i != j`) iff `(i + j) % 3 == 0`.
    pub fn synthetic(len: usize, weight: f64) -> Result<Self> {
        let mut graph = Self::disconnected(len)?;
        for i in 0..len {
            for j in (i + 1)..len {
                if (i + j) % SYNTHETIC_EDGE_MODULUS == 0 {
                    graph.set_edge(Edge::new(SlotIndex(i), SlotIndex(j), weight))?;
                }
            }
        }
        debug!(slots = len, weight, "Built synthetic facility graph");
        Ok(graph)
    }

    /// Build a symmetric graph from an explicit edge list.
    ///
    /// Later edges overwrite earlier ones for the same pair.
    pub fn from_edges<I>(len: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::disconnected(len)?;
        let mut count = 0usize;
        for edge in edges {
            graph.set_edge(edge)?;
            count += 1;
        }
        debug!(slots = len, edges = count, "Built facility graph from edge list");
        Ok(graph)
    }

    /// Build from a full (possibly asymmetric) adjacency matrix.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> Result<Self> {
        let len = rows.len();
        let mut graph = Self::disconnected(len)?;
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != len {
                return Err(Error::NotSquare {
                    row: i,
                    found: row.len(),
                    expected: len,
                });
            }
            for (j, weight) in row.into_iter().enumerate() {
                let (from, to) = (SlotIndex(i), SlotIndex(j));
                Self::check_weight(from, to, weight)?;
                if i == j {
                    if weight != 0.0 {
                        return Err(Error::SelfLoop(from));
                    }
                    continue;
                }
                graph.weights[i * len + j] = weight;
            }
        }
        Ok(graph)
    }

    /// Number of slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false for a constructed graph; present for API symmetry.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `index` names a slot of this graph.
    #[inline]
    pub const fn contains(&self, index: SlotIndex) -> bool {
        index.0 < self.len
    }

    /// Raw matrix entry, `None` if either index is out of range.
    ///
    /// `Some(0.0)` between distinct slots means "no direct edge".
    pub fn weight(&self, from: SlotIndex, to: SlotIndex) -> Option<f64> {
        if self.contains(from) && self.contains(to) {
            Some(self.weights[from.0 * self.len + to.0])
        } else {
            None
        }
    }

    /// Weight of the direct edge `from -> to`, if one exists.
    pub fn edge(&self, from: SlotIndex, to: SlotIndex) -> Option<f64> {
        if from == to {
            return None;
        }
        self.weight(from, to).filter(|&w| w > 0.0)
    }

    /// Direct edges leaving `from`, in index order.
    ///
    /// Yields nothing for an out-of-range index.
    pub fn neighbors(&self, from: SlotIndex) -> impl Iterator<Item = (SlotIndex, f64)> + '_ {
        let row: &[f64] = if self.contains(from) {
            &self.weights[from.0 * self.len..(from.0 + 1) * self.len]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter(move |&(j, &w)| j != from.0 && w > 0.0)
            .map(|(j, &w)| (SlotIndex(j), w))
    }

    /// Whether `weight(i, j) == weight(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.len).all(|i| {
            ((i + 1)..self.len).all(|j| self.weights[i * self.len + j] == self.weights[j * self.len + i])
        })
    }

    fn set_edge(&mut self, edge: Edge) -> Result<()> {
        let Edge { from, to, weight } = edge;
        if !self.contains(from) || !self.contains(to) {
            return Err(Error::EdgeOutOfRange {
                from,
                to,
                len: self.len,
            });
        }
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        Self::check_weight(from, to, weight)?;
        self.weights[from.0 * self.len + to.0] = weight;
        self.weights[to.0 * self.len + from.0] = weight;
        Ok(())
    }

    fn check_weight(from: SlotIndex, to: SlotIndex, weight: f64) -> Result<()> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidWeight { from, to, weight })
        }
    }
}
