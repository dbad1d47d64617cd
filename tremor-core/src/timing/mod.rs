//! Deadlines on a monotonic clock

pub mod timeout;

pub use timeout::Timeout;
