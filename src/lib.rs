#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimeSpec`**: Whole seconds (`i64`) plus fractional seconds (`f64` in `[0, 1)`),
//!   usable as an absolute time, a relative time, or a time difference
//! - **Tick conversion**: `TimeSpec::from_ticks` / `TimeSpec::to_ticks` translate between
//!   time and a device's tick domain at any (possibly non-integer) tick rate without losing ticks
//! - **Arithmetic**: `+`, `-`, `+=`, `-=` with `TimeSpec` or real seconds (`f64`), all renormalizing
//! - **`ASAP`**: The zero time, used by convention to request immediate execution
//! - **`TimeSource`** / **`TickSource`**: Traits to implement for your clocks and tick counters
//! - **`TimeSpecError`**: Invalid tick rates and tick-count overflow
//!
//! The fractional seconds are always kept in `[0, 1)`; every constructor and operator goes
//! through the same normalization step.

pub mod time;
pub mod types;
pub mod time_spec;
pub mod ticks;
pub mod arith;
pub mod format;

pub use format::{TEXT_CAPACITY, TimeText};
pub use time::{TickSource, TimeSource};
pub use time_spec::{ASAP, TimeSpec};
pub use types::{ParseTimeSpecError, TimeSpecError};
