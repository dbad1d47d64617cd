//! Acquisition state machine
//!
//! The continuation point lives in [`Step`] and every local that must
//! survive a suspension (timeout, filter windows, counters) is a field, so
//! `resume()` can return at any suspend point and pick up exactly there.
//!
//! Suspend points:
//! - a sensor operation returned `Pending` (re-issued on the next resume)
//! - waiting for the probe backoff or sample period to expire
//!
//! Every timed wait yields to the driver at least once, even if the clock
//! has already passed the deadline.

use core::convert::Infallible;
use core::task::{ready, Poll};

use tremor_hal::OutputPin;

use super::state::{FaultKind, State};
use crate::config::{AcquisitionConfig, DEFAULT_WINDOW};
use crate::filter::VectorAverage;
use crate::task::Cooperative;
use crate::timing::Timeout;
use crate::traits::{Clock, MotionSensor, Report, Reporter, Vector3};

/// Continuation marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Liveness check in flight
    Probe,
    /// Indicator on, waiting out the retry backoff
    ProbeBackoff,
    /// Configuration write in flight
    Configure,
    /// Measurement read in flight
    Read,
    /// Waiting out the sample period
    SampleWait,
    /// Faulted; never leaves
    Halted(FaultKind),
}

impl Step {
    fn state(self) -> State {
        match self {
            Step::Probe | Step::ProbeBackoff => State::Probing,
            Step::Configure => State::Configuring,
            Step::Read | Step::SampleWait => State::Sampling,
            Step::Halted(kind) => State::Faulted(kind),
        }
    }
}

/// Indicator used when the board has none
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicator;

impl OutputPin for NoIndicator {
    fn set_high(&mut self) {}

    fn set_low(&mut self) {}

    fn is_set_high(&self) -> bool {
        false
    }
}

/// Probe, configure, then sample a motion sensor forever
///
/// Owns its sensor, clock, indicator and reporter. `W` is the moving-average
/// window per axis.
pub struct DeviceAcquisition<S, C, L, R, const W: usize = DEFAULT_WINDOW>
where
    S: MotionSensor,
{
    sensor: S,
    indicator: L,
    reporter: R,
    config: AcquisitionConfig,
    timeout: Timeout<C>,
    filter: VectorAverage<W>,
    step: Step,
    probe_failures: u32,
    samples_reported: u32,
    read_errors: u32,
    last_error: Option<S::Error>,
}

impl<S, C, R, const W: usize> DeviceAcquisition<S, C, NoIndicator, R, W>
where
    S: MotionSensor,
    C: Clock,
    R: Reporter,
{
    /// Create the task in the Probing state
    pub fn new(sensor: S, clock: C, reporter: R, config: AcquisitionConfig) -> Self {
        Self {
            sensor,
            indicator: NoIndicator,
            reporter,
            config,
            timeout: Timeout::new(clock),
            filter: VectorAverage::new(),
            step: Step::Probe,
            probe_failures: 0,
            samples_reported: 0,
            read_errors: 0,
            last_error: None,
        }
    }

    /// Drive `pin` high while waiting out failed probes
    pub fn with_indicator<P: OutputPin>(self, pin: P) -> DeviceAcquisition<S, C, P, R, W> {
        DeviceAcquisition {
            sensor: self.sensor,
            indicator: pin,
            reporter: self.reporter,
            config: self.config,
            timeout: self.timeout,
            filter: self.filter,
            step: self.step,
            probe_failures: self.probe_failures,
            samples_reported: self.samples_reported,
            read_errors: self.read_errors,
            last_error: self.last_error,
        }
    }
}

impl<S, C, L, R, const W: usize> DeviceAcquisition<S, C, L, R, W>
where
    S: MotionSensor,
    C: Clock,
    L: OutputPin,
    R: Reporter,
{
    /// Current state
    pub fn state(&self) -> State {
        self.step.state()
    }

    /// Failed liveness checks so far
    pub fn probe_failures(&self) -> u32 {
        self.probe_failures
    }

    /// Reports emitted so far
    pub fn samples_reported(&self) -> u32 {
        self.samples_reported
    }

    /// Failed reads so far
    pub fn read_errors(&self) -> u32 {
        self.read_errors
    }

    /// Most recent sensor error, if any
    pub fn last_error(&self) -> Option<&S::Error> {
        self.last_error.as_ref()
    }

    /// Current filtered values
    pub fn filtered(&self) -> Vector3 {
        self.filter.value()
    }

    pub fn config(&self) -> &AcquisitionConfig {
        &self.config
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    fn probe_limit_reached(&self) -> bool {
        self.config
            .max_probe_attempts
            .is_some_and(|limit| self.probe_failures >= limit)
    }

    fn advance(&mut self, next: Step) {
        debug_assert!(
            self.step.state().can_advance_to(next.state()),
            "acquisition cannot move from {} to {}",
            self.step.state().name(),
            next.state().name()
        );
        self.step = next;
    }

    fn fault(&mut self, kind: FaultKind) {
        self.indicator.set_high();
        self.timeout.stop();
        self.advance(Step::Halted(kind));
    }
}

impl<S, C, L, R, const W: usize> Cooperative for DeviceAcquisition<S, C, L, R, W>
where
    S: MotionSensor,
    C: Clock,
    L: OutputPin,
    R: Reporter,
{
    type Output = Infallible;

    fn resume(&mut self) -> Poll<Infallible> {
        loop {
            match self.step {
                Step::Probe => {
                    match ready!(self.sensor.ping()) {
                        Ok(true) => {
                            self.advance(Step::Configure);
                            continue;
                        }
                        Ok(false) => {}
                        Err(e) => self.last_error = Some(e),
                    }

                    self.probe_failures = self.probe_failures.saturating_add(1);
                    if self.probe_limit_reached() {
                        self.fault(FaultKind::Unresponsive);
                        continue;
                    }

                    self.timeout.restart(self.config.probe_retry_ms);
                    self.indicator.set_high();
                    self.advance(Step::ProbeBackoff);
                    return Poll::Pending;
                }
                Step::ProbeBackoff => {
                    ready!(self.timeout.poll_expired());
                    self.indicator.set_low();
                    self.advance(Step::Probe);
                }
                Step::Configure => {
                    let AcquisitionConfig { range, rate, .. } = self.config;
                    match ready!(self.sensor.configure(range, rate)) {
                        Ok(()) => self.advance(Step::Read),
                        Err(e) => {
                            self.last_error = Some(e);
                            self.fault(FaultKind::ConfigureFailed);
                        }
                    }
                }
                Step::Read => {
                    match ready!(self.sensor.read()) {
                        Ok(sample) => {
                            let filtered = self.filter.update(sample);
                            self.reporter.report(&Report::new(filtered));
                            self.samples_reported = self.samples_reported.saturating_add(1);
                        }
                        Err(e) => {
                            self.read_errors = self.read_errors.saturating_add(1);
                            self.last_error = Some(e);
                        }
                    }

                    self.timeout.restart(self.config.sample_period_ms);
                    self.advance(Step::SampleWait);
                    return Poll::Pending;
                }
                Step::SampleWait => {
                    ready!(self.timeout.poll_expired());
                    self.advance(Step::Read);
                }
                Step::Halted(_) => return Poll::Pending,
            }
        }
    }
}
