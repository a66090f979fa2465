//! Parking Fees
//!
//! Computes the cost of a stay from a slot's base hourly rate, the stay's
//! duration, and the hour of day the vehicle parks.
//!
//! # Tiers
//!
//! - up to 1 hour: flat base rate
//! - up to 1.5 hours: base rate × 1.5
//! - beyond: base rate × 1.5 plus the base rate for every further hour
//!
//! # Time of Day
//!
//! - 08:00-18:59: peak, ×1.5
//! - 19:00-22:59: evening, ×1.2
//! - otherwise: off-peak, ×1.0
//!
//! The multiplier covers the whole tiered cost, but only for stays longer
//! than one hour. The first hour is time-insensitive.

mod band;
mod clock;
mod error;
mod quote;
mod tier;

pub use band::TimeBand;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use quote::{compute_cost, quote_now, Quote};
pub use tier::{tiered_cost, PriceTier};

/// Stays up to this many hours pay the flat rate.
pub const FLAT_HOURS: f64 = 1.0;

/// Stays up to this many hours pay the extended rate.
pub const EXTENDED_HOURS: f64 = 1.5;

/// Extended-tier factor applied to the base rate.
pub const EXTENDED_FACTOR: f64 = 1.5;
