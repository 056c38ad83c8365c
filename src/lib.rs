#![no_std]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`InputTracker`**: Debounces a single mechanical digital input sampled from a polling loop
//! - **`InputPin`**: Trait to implement for your digital input hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Level`**: Electrical level of a pin (`Low` / `High`)
//! - **`PinMode`**: Input configuration requested from the hardware (plain or pull-up)
//! - **`ActiveLevel`**: Which level counts as "pressed", derived from the wiring
//! - **`TickInstant` / `TickDuration`**: Ready-made time types for a wrapping 32-bit millisecond counter
//!
//! The tracker consumes time only as opaque instants passed through the
//! [`TimeSource`] collaborator, so it works with any monotonic counter your
//! platform provides.

pub mod time;
pub mod tracker;
pub mod types;

pub use time::{TickDuration, TickInstant, TimeDuration, TimeInstant, TimeSource};
pub use tracker::{InputPin, InputTracker};
pub use types::{ActiveLevel, Level, PinMode};

/// Debounce window applied when none is configured, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;
