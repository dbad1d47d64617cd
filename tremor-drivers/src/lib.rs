//! Sensor driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tremor-core for the supported hardware:
//!
//! - LIS3-style register transports over SPI and I2C
//! - L3GD20 / L3GD20H 3-axis gyroscope

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod gyroscope;
pub mod transport;
