//! Error types for pricing.

use thiserror::Error;

/// Result type for pricing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Inputs the pricing engine refuses to price.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Duration is negative or not a number.
    #[error("invalid parking duration: {0} hours")]
    InvalidDuration(f64),

    /// Hour of day outside 0-23.
    #[error("invalid hour of day: {0}")]
    InvalidHour(u32),

    /// Base rate is not a finite number.
    #[error("invalid base rate: {0}")]
    InvalidRate(f64),
}
