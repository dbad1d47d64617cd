//! Gyroscope drivers

pub mod l3gd20;

pub use l3gd20::L3gd20;
