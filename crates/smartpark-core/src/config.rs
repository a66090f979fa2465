//! Facility configuration.
//!
//! Defaults describe the reference facility: ten slots, rates falling from
//! 100 by 10 per slot, the synthetic `(i + j) % 3` topology with edges of
//! 1.5, and a rupee display symbol. A JSON file and environment variables
//! can override any of it before the facility is built; afterwards the
//! slot count is fixed.

use std::path::Path;

use serde::{Deserialize, Serialize};
use smartpark_graph::{Edge, FacilityGraph, SlotIndex, MAX_SLOTS, SYNTHETIC_EDGE_WEIGHT};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::registry::SlotRegistry;
use crate::slot::SlotId;

/// Environment variable naming a JSON config file.
pub const ENV_CONFIG: &str = "SMARTPARK_CONFIG";
/// Environment override for the number of slots.
pub const ENV_SLOTS: &str = "SMARTPARK_SLOTS";
/// Environment override for the first slot's hourly rate.
pub const ENV_BASE_RATE: &str = "SMARTPARK_BASE_RATE";
/// Environment override for the per-slot rate decrement.
pub const ENV_RATE_DECREMENT: &str = "SMARTPARK_RATE_DECREMENT";
/// Environment override for the currency symbol.
pub const ENV_CURRENCY: &str = "SMARTPARK_CURRENCY";

/// An edge between two slots, by user-facing slot number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// One endpoint (1-based)
    pub from: SlotId,
    /// The other endpoint (1-based)
    pub to: SlotId,
    /// Travel cost between them
    pub weight: f64,
}

/// Everything needed to build a facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityConfig {
    /// Number of slots (N)
    pub slot_count: usize,

    /// Hourly rate of slot 1
    pub base_rate: f64,

    /// Rate drop per successive slot
    pub rate_decrement: f64,

    /// Explicit per-slot rates; overrides `base_rate`/`rate_decrement`
    pub rates: Option<Vec<f64>>,

    /// Edge weight of the synthetic topology
    pub edge_weight: f64,

    /// Explicit edge list; replaces the synthetic topology
    pub edges: Option<Vec<EdgeSpec>>,

    /// Display symbol for prices
    pub currency: String,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            slot_count: 10,
            base_rate: 100.0,
            rate_decrement: 10.0,
            rates: None,
            edge_weight: SYNTHETIC_EDGE_WEIGHT,
            edges: None,
            currency: "₹".to_string(),
        }
    }
}

impl FacilityConfig {
    /// Create config from the process environment with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    ///
    /// `SMARTPARK_CONFIG` selects a base file; the individual variables are
    /// applied on top of it.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(value) = lookup(ENV_SLOTS) {
            config.slot_count = parse_var(ENV_SLOTS, &value)?;
        }
        if let Some(value) = lookup(ENV_BASE_RATE) {
            config.base_rate = parse_var(ENV_BASE_RATE, &value)?;
        }
        if let Some(value) = lookup(ENV_RATE_DECREMENT) {
            config.rate_decrement = parse_var(ENV_RATE_DECREMENT, &value)?;
        }
        if let Some(value) = lookup(ENV_CURRENCY) {
            config.currency = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), slots = config.slot_count, "Loaded facility config");
        config.validate()?;
        Ok(config)
    }

    /// Check the config describes a buildable facility.
    ///
    /// Non-positive rates pass: they are reported, not rejected.
    pub fn validate(&self) -> Result<()> {
        if self.slot_count == 0 {
            return Err(Error::Config("slot_count must be at least 1".into()));
        }
        if self.slot_count > MAX_SLOTS {
            return Err(Error::Config(format!(
                "slot_count {} exceeds the limit of {}",
                self.slot_count, MAX_SLOTS
            )));
        }
        if let Some(rates) = &self.rates {
            if rates.len() != self.slot_count {
                return Err(Error::Config(format!(
                    "{} rates given for {} slots",
                    rates.len(),
                    self.slot_count
                )));
            }
            if let Some(rate) = rates.iter().find(|r| !r.is_finite()) {
                return Err(Error::Config(format!("rate {} is not a number", rate)));
            }
        } else if !self.base_rate.is_finite() || !self.rate_decrement.is_finite() {
            return Err(Error::Config("base_rate and rate_decrement must be finite".into()));
        }
        if let Some(edges) = &self.edges {
            for edge in edges {
                for end in [edge.from, edge.to] {
                    if end.value() == 0 || end.value() > self.slot_count {
                        return Err(Error::Config(format!(
                            "edge {} - {} references slot {} outside 1..={}",
                            edge.from, edge.to, end, self.slot_count
                        )));
                    }
                }
            }
        }

        let flagged = self.non_positive_rates();
        if !flagged.is_empty() {
            warn!(slots = ?flagged, "Configured rates reach zero or below; no floor is applied");
        }
        Ok(())
    }

    /// Per-slot hourly rates, slot 1 first.
    pub fn slot_rates(&self) -> Vec<f64> {
        match &self.rates {
            Some(rates) => rates.clone(),
            None => (0..self.slot_count)
                .map(|i| self.base_rate - i as f64 * self.rate_decrement)
                .collect(),
        }
    }

    /// Ids of slots that would get a zero or negative rate.
    pub fn non_positive_rates(&self) -> Vec<SlotId> {
        self.slot_rates()
            .iter()
            .enumerate()
            .filter(|&(_, &rate)| rate <= 0.0)
            .map(|(i, _)| SlotId::new(i + 1))
            .collect()
    }

    /// Build the slot registry.
    pub fn registry(&self) -> SlotRegistry {
        SlotRegistry::with_rates(self.slot_rates())
    }

    /// Build the facility graph.
    pub fn graph(&self) -> Result<FacilityGraph> {
        let graph = match &self.edges {
            Some(edges) => {
                let mut converted = Vec::with_capacity(edges.len());
                for spec in edges {
                    converted.push(Edge::new(
                        index_of(spec.from)?,
                        index_of(spec.to)?,
                        spec.weight,
                    ));
                }
                FacilityGraph::from_edges(self.slot_count, converted)?
            }
            None => FacilityGraph::synthetic(self.slot_count, self.edge_weight)?,
        };
        Ok(graph)
    }
}

fn index_of(id: SlotId) -> Result<SlotIndex> {
    id.index().ok_or(Error::InvalidSlot(id))
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid {}: {:?}", key, value)))
}
