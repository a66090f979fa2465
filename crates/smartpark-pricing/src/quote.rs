//! Priced stays.

use std::fmt;

use tracing::debug;

use crate::{tiered_cost, Clock, Error, PriceTier, Result, TimeBand};

/// The price of one stay, with everything the caller needs to explain it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Hourly rate of the slot
    pub base_rate: f64,
    /// Requested stay length
    pub duration_hours: f64,
    /// Hour of day the quote was priced at
    pub hour: u32,
    /// Duration tier
    pub tier: PriceTier,
    /// Band of `hour`, whether or not its multiplier applied
    pub band: TimeBand,
    /// Multiplier actually applied (1.0 for flat-tier stays)
    pub multiplier: f64,
    /// Final cost, unrounded
    pub total: f64,
}

impl Quote {
    /// Whether the time-of-day multiplier raised the price.
    pub fn surcharged(&self) -> bool {
        self.multiplier > 1.0
    }

    /// Total rounded to two decimals, prefixed with `currency`.
    pub fn format_total(&self, currency: &str) -> String {
        format!("{}{:.2}", currency, self.total)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} ({}, {} band x{})",
            self.total, self.tier, self.band, self.multiplier
        )
    }
}

/// Price a stay of `duration_hours` at a slot charging `base_rate` per hour,
/// starting at `hour` (0-23).
///
/// `duration_hours` must be finite and non-negative; anything else is
/// [`Error::InvalidDuration`] rather than a flat-rate charge. A zero-length
/// stay pays the flat first-hour rate. `base_rate` must be finite but may be
/// zero or negative.
///
/// # Examples
///
/// ```
/// use smartpark_pricing::compute_cost;
///
/// let quote = compute_cost(100.0, 1.5, 10).unwrap();
/// assert_eq!(quote.total, 225.0);   // 150 × 1.5 peak
/// assert_eq!(quote.multiplier, 1.5);
///
/// let first_hour = compute_cost(100.0, 1.0, 10).unwrap();
/// assert_eq!(first_hour.multiplier, 1.0); // first hour ignores time of day
/// ```
pub fn compute_cost(base_rate: f64, duration_hours: f64, hour: u32) -> Result<Quote> {
    if !base_rate.is_finite() {
        return Err(Error::InvalidRate(base_rate));
    }
    if !duration_hours.is_finite() || duration_hours < 0.0 {
        return Err(Error::InvalidDuration(duration_hours));
    }
    if hour > 23 {
        return Err(Error::InvalidHour(hour));
    }

    let tier = PriceTier::for_duration(duration_hours);
    let band = TimeBand::for_hour(hour);
    let multiplier = if tier.time_sensitive() {
        band.multiplier()
    } else {
        1.0
    };
    let total = tiered_cost(base_rate, duration_hours) * multiplier;

    debug!(base_rate, duration_hours, hour, %tier, %band, multiplier, total, "Priced stay");

    Ok(Quote {
        base_rate,
        duration_hours,
        hour,
        tier,
        band,
        multiplier,
        total,
    })
}

/// Price a stay against the clock's current hour, sampled once.
pub fn quote_now<C: Clock + ?Sized>(base_rate: f64, duration_hours: f64, clock: &C) -> Result<Quote> {
    compute_cost(base_rate, duration_hours, clock.current_hour())
}
