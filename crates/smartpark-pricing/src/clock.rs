//! Wall-clock hour sources.
//!
//! Pricing samples the hour once per call through a [`Clock`]; nothing is
//! cached, so consecutive calls can land in different bands.

use std::fmt;

use chrono::Timelike;

/// Source of the current hour of day (0-23, local time).
pub trait Clock: fmt::Debug + Send + Sync {
    /// The hour to price against.
    fn current_hour(&self) -> u32;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// A clock pinned to one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn current_hour(&self) -> u32 {
        (**self).current_hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_in_range() {
        assert!(SystemClock.current_hour() < 24);
    }

    #[test]
    fn fixed_clock_and_boxed() {
        let clock: Box<dyn Clock> = Box::new(FixedClock(20));
        assert_eq!(clock.current_hour(), 20);
        assert_eq!(FixedClock(3).current_hour(), 3);
    }
}
