//! Smartpark Core
//!
//! Slot occupancy, nearest-slot allocation and the parking flow for a
//! small fixed-capacity facility.
//!
//! # Components
//!
//! - [`SlotRegistry`]: slot availability and base rates, ids 1..=N
//! - [`Allocator`]: nearest free slot by shortest travel distance
//! - [`Facility`]: owns graph, registry and clock; parks, frees, queries
//! - [`FacilityConfig`]: defaults, JSON file and environment overrides
//!
//! Slot ids are 1-based everywhere in this crate. The graph crate's
//! [`SlotIndex`](smartpark_graph::SlotIndex) is 0-based; [`SlotId::index`]
//! converts.
//!
//! # Example
//!
//! ```
//! use smartpark_core::{Facility, FacilityConfig, SlotId};
//! use smartpark_pricing::FixedClock;
//!
//! let mut facility = Facility::from_config(&FacilityConfig::default())
//!     .unwrap()
//!     .with_clock(FixedClock(20));
//!
//! let receipt = facility.park(SlotId::new(1), 2.0).unwrap();
//! assert_eq!(receipt.quote.total, 240.0); // (150 + 50) × 1.2 evening
//!
//! let nearest = facility.find_nearest(SlotId::new(1)).unwrap();
//! assert_eq!(nearest.slot, SlotId::new(4));
//! ```

pub mod allocation;
pub mod config;
pub mod error;
pub mod facility;
pub mod registry;
pub mod slot;

pub use allocation::{Allocation, Allocator};
pub use config::{EdgeSpec, FacilityConfig};
pub use error::{Error, Result};
pub use facility::{Facility, Receipt};
pub use registry::SlotRegistry;
pub use slot::{Slot, SlotId};
