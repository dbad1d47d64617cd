//! RP2040-specific HAL for the gyroscope firmware
//!
//! This crate provides RP2040 implementations of the shared `tremor-hal`
//! traits on top of embassy-rp's blocking peripherals:
//!
//! - Push-pull outputs for chip select and the indicator LED
//! - SPI bus master
//! - I2C bus master

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod spi;

pub use gpio::RpOutput;
pub use i2c::{I2cBusError, RpI2c};
pub use spi::{RpSpi, SpiBusError};

// Re-export shared traits from tremor-hal for convenience
pub use tremor_hal::{I2cBus, OutputPin, SpiBus};
