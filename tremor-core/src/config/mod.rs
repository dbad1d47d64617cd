//! Configuration types
//!
//! Board-agnostic acquisition settings. The firmware generates its values
//! at build time from `sampler.toml`.

pub mod acquisition;

pub use acquisition::*;
