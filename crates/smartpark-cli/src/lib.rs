//! Smartpark console.
//!
//! A numbered menu over a [`Facility`](smartpark_core::Facility): view
//! slots, park, free, and find the nearest free slot. All console I/O goes
//! through generic readers and writers so the loop runs in tests.

pub mod args;
pub mod shell;

pub use args::{Command, Options};
pub use shell::Shell;
