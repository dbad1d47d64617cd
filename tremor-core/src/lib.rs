//! Board-agnostic acquisition core for the gyroscope sampler
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Cooperative, resumable tasks driven by an external loop
//! - Monotonic timeouts built on an injected clock
//! - Constant-time streaming moving-average filters
//! - The device acquisition state machine (probe, configure, sample)
//! - Sensor, clock and report traits plus configuration types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod acquisition;
pub mod config;
pub mod filter;
pub mod task;
pub mod timing;
pub mod traits;
