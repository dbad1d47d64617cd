//! Device acquisition
//!
//! Probes the sensor until it answers, configures it once, then samples,
//! filters and reports forever. Runs as a [`Cooperative`](crate::task::Cooperative)
//! task so a single control loop can interleave it with other work.

pub mod machine;
pub mod state;

pub use machine::{DeviceAcquisition, NoIndicator};
pub use state::{FaultKind, State};
