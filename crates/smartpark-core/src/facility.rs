//! Facility - the context object every operation runs against.
//!
//! Owns the graph, the registry and the clock. Nothing is global: two
//! facilities built from the same config are fully independent.

use std::fmt;

use smartpark_graph::FacilityGraph;
use smartpark_pricing::{quote_now, Clock, Quote, SystemClock, TimeBand};
use tracing::info;

use crate::allocation::{Allocation, Allocator};
use crate::config::FacilityConfig;
use crate::error::{Error, Result};
use crate::registry::SlotRegistry;
use crate::slot::{Slot, SlotId};

/// Outcome of parking a vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Receipt {
    /// Slot the vehicle now occupies
    pub slot: SlotId,
    /// Price of the stay
    pub quote: Quote,
}

/// A parking facility: slots, the travel graph between them, and a clock.
pub struct Facility {
    graph: FacilityGraph,
    registry: SlotRegistry,
    clock: Box<dyn Clock>,
    currency: String,
}

impl fmt::Debug for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facility")
            .field("slots", &self.registry.len())
            .field("occupied", &self.registry.occupied_count())
            .field("clock", &self.clock)
            .field("currency", &self.currency)
            .finish()
    }
}

impl Facility {
    /// Assemble a facility from parts of matching size, using local time.
    pub fn new(graph: FacilityGraph, registry: SlotRegistry) -> Result<Self> {
        Allocator::new(&graph, &registry)?;
        Ok(Self {
            graph,
            registry,
            clock: Box::new(SystemClock),
            currency: FacilityConfig::default().currency,
        })
    }

    /// Build the facility a config describes.
    pub fn from_config(config: &FacilityConfig) -> Result<Self> {
        config.validate()?;
        let facility = Self::new(config.graph()?, config.registry())?
            .with_currency(config.currency.clone());
        info!(slots = facility.len(), "Facility initialized");
        Ok(facility)
    }

    /// Replace the clock used for pricing.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the display currency symbol.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Always false for a constructed facility.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Display symbol for prices.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The travel graph.
    pub fn graph(&self) -> &FacilityGraph {
        &self.graph
    }

    /// The slot registry.
    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    /// All slots in id order.
    pub fn slots(&self) -> &[Slot] {
        self.registry.slots()
    }

    /// Whether a slot is free.
    pub fn is_available(&self, id: SlotId) -> Result<bool> {
        self.registry.is_available(id)
    }

    /// Hourly rate of a slot.
    pub fn rate(&self, id: SlotId) -> Result<f64> {
        self.registry.rate(id)
    }

    /// Band the clock currently falls in.
    pub fn time_band(&self) -> TimeBand {
        TimeBand::for_hour(self.clock.current_hour())
    }

    /// Price a stay at a slot without occupying it.
    pub fn quote(&self, id: SlotId, duration_hours: f64) -> Result<Quote> {
        let rate = self.registry.rate(id)?;
        Ok(quote_now(rate, duration_hours, self.clock.as_ref())?)
    }

    /// Park a vehicle: occupy a free slot and price the stay.
    ///
    /// The slot is only occupied once the stay has been priced, so a
    /// rejected duration leaves it free.
    pub fn park(&mut self, id: SlotId, duration_hours: f64) -> Result<Receipt> {
        if !self.registry.is_available(id)? {
            return Err(Error::SlotUnavailable(id));
        }
        let quote = self.quote(id, duration_hours)?;
        self.registry.occupy(id)?;
        info!(
            slot = %id,
            duration_hours,
            total = quote.total,
            multiplier = quote.multiplier,
            "Vehicle parked"
        );
        Ok(Receipt { slot: id, quote })
    }

    /// Free an occupied slot.
    pub fn release(&mut self, id: SlotId) -> Result<()> {
        self.registry.release(id)
    }

    /// Nearest free slot reachable from `origin`.
    ///
    /// Fails with [`Error::NotFound`] when nothing reachable is free.
    pub fn find_nearest(&self, origin: SlotId) -> Result<Allocation> {
        self.allocator()?
            .find_nearest(origin)?
            .ok_or(Error::NotFound(origin))
    }

    /// Free slots reachable from `origin`, nearest first.
    pub fn ranked_available(&self, origin: SlotId) -> Result<Vec<Allocation>> {
        self.allocator()?.ranked_available(origin)
    }

    fn allocator(&self) -> Result<Allocator<'_>> {
        Allocator::new(&self.graph, &self.registry)
    }
}
