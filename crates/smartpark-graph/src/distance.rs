//! Shortest-path distances with an explicit unreachable tag.

use std::cmp::Ordering;
use std::fmt;

/// Travel distance from a query source to a slot.
///
/// `Unreachable` orders after every finite distance, so a plain comparison
/// is enough to decide whether a relaxation improves a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Distance {
    /// Reached at this total travel cost.
    Finite(f64),
    /// No path from the source.
    #[default]
    Unreachable,
}

impl Distance {
    /// Distance from a slot to itself.
    pub const ZERO: Self = Self::Finite(0.0);

    /// Whether a path exists.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The travel cost, if a path exists.
    #[inline]
    pub const fn finite(&self) -> Option<f64> {
        match *self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.partial_cmp(b),
            (Self::Finite(_), Self::Unreachable) => Some(Ordering::Less),
            (Self::Unreachable, Self::Finite(_)) => Some(Ordering::Greater),
            (Self::Unreachable, Self::Unreachable) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}
