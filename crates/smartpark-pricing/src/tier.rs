//! Duration tiers applied before the time-of-day multiplier.

use std::fmt;

use crate::{EXTENDED_FACTOR, EXTENDED_HOURS, FLAT_HOURS};

/// Which duration tier a stay falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceTier {
    /// Up to one hour: the base rate, flat.
    Flat,
    /// Over one hour, up to one and a half: base rate × 1.5.
    Extended,
    /// Over one and a half hours: extended price plus the base rate per extra hour.
    Hourly,
}

impl PriceTier {
    /// Tier for a stay of `duration_hours`.
    pub fn for_duration(duration_hours: f64) -> Self {
        if duration_hours <= FLAT_HOURS {
            Self::Flat
        } else if duration_hours <= EXTENDED_HOURS {
            Self::Extended
        } else {
            Self::Hourly
        }
    }

    /// Whether the time-of-day multiplier applies to this tier.
    pub const fn time_sensitive(&self) -> bool {
        !matches!(self, Self::Flat)
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flat => "flat first hour",
            Self::Extended => "extended (up to 1.5h)",
            Self::Hourly => "hourly beyond 1.5h",
        };
        f.write_str(name)
    }
}

/// Cost of a stay before the time-of-day multiplier.
pub fn tiered_cost(base_rate: f64, duration_hours: f64) -> f64 {
    let extended = base_rate * EXTENDED_FACTOR;
    match PriceTier::for_duration(duration_hours) {
        PriceTier::Flat => base_rate,
        PriceTier::Extended => extended,
        PriceTier::Hourly => extended + (duration_hours - EXTENDED_HOURS) * base_rate,
    }
}
