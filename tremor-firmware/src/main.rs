//! Tremor - Gyroscope Sampling Firmware
//!
//! Firmware binary for RP2040 boards with an L3GD20-family gyroscope.
//! Waits for the sensor to answer, configures it, then reports a moving
//! average of its angular rate over RTT.
//!
//! Default wiring (Raspberry Pi Pico):
//! - SPI0: SCK=GPIO18, MOSI=GPIO19, MISO=GPIO16, CS=GPIO17
//! - I2C0: SDA=GPIO4, SCL=GPIO5 (when `transport = "i2c"`)
//! - Probe indicator LED: GPIO25

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use tremor_drivers::gyroscope::L3gd20;
use tremor_hal_rp2040::RpOutput;
use {defmt_rtt as _, panic_probe as _};

mod clock;
mod config;
mod report;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tremor firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Lit while the gyroscope is being retried, and latched on a fault
    let indicator = RpOutput::new(Output::new(p.PIN_25, Level::Low));

    #[cfg(not(transport_i2c))]
    let transport = {
        use embassy_rp::spi::Spi;
        use tremor_drivers::transport::Lis3TransportSpi;
        use tremor_hal::SpiConfig;
        use tremor_hal_rp2040::spi::embassy_config;
        use tremor_hal_rp2040::RpSpi;

        let spi_config = SpiConfig::default();
        let spi_bus = embassy_config(spi_config);
        let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_bus);
        let cs = RpOutput::new(Output::new(p.PIN_17, Level::High));
        info!("SPI0 initialized at {} Hz", spi_config.frequency);
        Lis3TransportSpi::new(RpSpi::new(spi), cs)
    };

    #[cfg(transport_i2c)]
    let transport = {
        use embassy_rp::i2c::I2c;
        use tremor_drivers::transport::{Lis3TransportI2c, L3GD20_ADDRESS_SA0_HIGH};
        use tremor_hal::I2cConfig;
        use tremor_hal_rp2040::i2c::embassy_config;
        use tremor_hal_rp2040::RpI2c;

        let i2c_config = I2cConfig::default();
        let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, embassy_config(i2c_config));
        info!("I2C0 initialized at {} Hz", i2c_config.frequency);
        Lis3TransportI2c::new(RpI2c::new(i2c), L3GD20_ADDRESS_SA0_HIGH)
    };

    let gyro = L3gd20::new(transport);

    info!(
        "Probing every {} ms{}",
        config::ACQUISITION.probe_retry_ms,
        if config::ACQUISITION.max_probe_attempts.is_some() {
            " (bounded)"
        } else {
            ""
        }
    );

    unwrap!(spawner.spawn(tasks::sampler_task(gyro, indicator)));
    info!("Sampler task spawned");
}
