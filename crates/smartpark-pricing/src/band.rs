//! Time-of-day bands and their multipliers.

use std::fmt;

/// Peak band multiplier.
pub const PEAK_MULTIPLIER: f64 = 1.5;

/// Evening band multiplier.
pub const EVENING_MULTIPLIER: f64 = 1.2;

/// Off-peak multiplier (no surcharge).
pub const OFF_PEAK_MULTIPLIER: f64 = 1.0;

/// Pricing band for an hour of the day (24h, local time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBand {
    /// Hours 8 through 18
    Peak,
    /// Hours 19 through 22
    Evening,
    /// Every other hour
    OffPeak,
}

impl TimeBand {
    /// All bands, in display order.
    pub const ALL: [Self; 3] = [Self::Peak, Self::Evening, Self::OffPeak];

    /// Band for `hour`. Hours past 23 fall in no named window and are off-peak.
    pub const fn for_hour(hour: u32) -> Self {
        match hour {
            8..=18 => Self::Peak,
            19..=22 => Self::Evening,
            _ => Self::OffPeak,
        }
    }

    /// Factor applied to the tiered cost.
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Peak => PEAK_MULTIPLIER,
            Self::Evening => EVENING_MULTIPLIER,
            Self::OffPeak => OFF_PEAK_MULTIPLIER,
        }
    }

    /// Human-readable window, e.g. `"8 AM - 6 PM"`.
    pub const fn window(&self) -> &'static str {
        match self {
            Self::Peak => "8 AM - 6 PM",
            Self::Evening => "7 PM - 10 PM",
            Self::OffPeak => "Night",
        }
    }
}

impl fmt::Display for TimeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Peak => "Peak",
            Self::Evening => "Evening",
            Self::OffPeak => "Off-Peak",
        };
        f.write_str(name)
    }
}
