//! Sampler task
//!
//! Drives the acquisition state machine from an embassy task. Each pass
//! resumes the machine once and then yields, so the executor keeps
//! running other tasks while the sensor is backed off or between samples.

use core::task::Poll;

use defmt::{error, info, warn};
use embassy_futures::yield_now;
use tremor_core::acquisition::{DeviceAcquisition, State};
use tremor_core::task::Cooperative;
use tremor_drivers::gyroscope::L3gd20;
use tremor_hal_rp2040::RpOutput;

use crate::clock::EmbassyClock;
use crate::config;
use crate::report::DefmtReporter;

#[cfg(not(transport_i2c))]
type Transport = tremor_drivers::transport::Lis3TransportSpi<
    tremor_hal_rp2040::RpSpi<
        embassy_rp::spi::Spi<'static, embassy_rp::peripherals::SPI0, embassy_rp::spi::Blocking>,
    >,
    RpOutput,
>;

#[cfg(transport_i2c)]
type Transport = tremor_drivers::transport::Lis3TransportI2c<
    tremor_hal_rp2040::RpI2c<
        embassy_rp::i2c::I2c<'static, embassy_rp::peripherals::I2C0, embassy_rp::i2c::Blocking>,
    >,
>;

/// Gyroscope on the board's sensor bus
pub type Gyro = L3gd20<Transport>;

type Acquisition =
    DeviceAcquisition<Gyro, EmbassyClock, RpOutput, DefmtReporter, { config::WINDOW }>;

/// Sampler task - probes, configures and samples the gyroscope forever
#[embassy_executor::task]
pub async fn sampler_task(gyro: Gyro, indicator: RpOutput) {
    info!("Sampler task started");

    let mut acquisition: Acquisition =
        DeviceAcquisition::new(gyro, EmbassyClock, DefmtReporter::new(), config::ACQUISITION)
            .with_indicator(indicator);

    let mut last_state = acquisition.state();
    let mut last_failures = 0;
    info!("Acquisition: {=str}", last_state.name());

    loop {
        match acquisition.resume() {
            Poll::Ready(never) => match never {},
            Poll::Pending => {}
        }

        let failures = acquisition.probe_failures();
        if failures != last_failures {
            warn!(
                "Gyroscope not responding (attempt {}), retrying in {} ms",
                failures,
                acquisition.config().probe_retry_ms
            );
            last_failures = failures;
        }

        let state = acquisition.state();
        if state != last_state {
            log_transition(last_state, state, &acquisition);
            last_state = state;
        }

        yield_now().await;
    }
}

fn log_transition(from: State, to: State, acquisition: &Acquisition) {
    match to {
        State::Faulted(kind) => {
            error!(
                "Acquisition faulted: {} (last error: {})",
                kind,
                acquisition.last_error()
            );
        }
        State::Sampling => {
            let config = acquisition.config();
            info!(
                "Acquisition: {=str} -> {=str} ({} dps, {} Hz, every {} ms)",
                from.name(),
                to.name(),
                config.range.full_scale_dps(),
                config.rate.hz(),
                config.sample_period_ms
            );
        }
        _ => info!("Acquisition: {=str} -> {=str}", from.name(), to.name()),
    }
}
