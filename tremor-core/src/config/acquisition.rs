//! Acquisition configuration

use crate::traits::{Range, Rate};

/// Backoff between failed liveness checks
pub const DEFAULT_PROBE_RETRY_MS: u32 = 100;

/// Pause between reports while sampling
pub const DEFAULT_SAMPLE_PERIOD_MS: u32 = 50;

/// Samples per moving-average window
pub const DEFAULT_WINDOW: usize = 10;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Probe retry interval must be non-zero
    ZeroProbeRetry,
    /// Sample period must be non-zero
    ZeroSamplePeriod,
    /// A probe limit of zero would fault before the first probe
    ZeroProbeLimit,
}

/// Settings for [`DeviceAcquisition`](crate::acquisition::DeviceAcquisition)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcquisitionConfig {
    /// Wait between failed liveness checks (ms)
    pub probe_retry_ms: u32,
    /// Wait after each report (ms)
    pub sample_period_ms: u32,
    /// Measurement range written during configuration
    pub range: Range,
    /// Output data rate written during configuration
    pub rate: Rate,
    /// Consecutive failed probes before giving up, `None` retries forever
    pub max_probe_attempts: Option<u32>,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AcquisitionConfig {
    /// Reference setup: 100 ms probe backoff, 50 ms sample period,
    /// ±250 dps at 380 Hz, unbounded probing
    pub const fn new() -> Self {
        Self {
            probe_retry_ms: DEFAULT_PROBE_RETRY_MS,
            sample_period_ms: DEFAULT_SAMPLE_PERIOD_MS,
            range: Range::Dps250,
            rate: Rate::Hz380,
            max_probe_attempts: None,
        }
    }

    pub const fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    pub const fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = rate;
        self
    }

    pub const fn with_probe_retry_ms(mut self, ms: u32) -> Self {
        self.probe_retry_ms = ms;
        self
    }

    pub const fn with_sample_period_ms(mut self, ms: u32) -> Self {
        self.sample_period_ms = ms;
        self
    }

    /// Cap the number of consecutive failed probes
    pub const fn with_max_probe_attempts(mut self, attempts: u32) -> Self {
        self.max_probe_attempts = Some(attempts);
        self
    }

    /// Check the configuration for values the state machine cannot run with
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_retry_ms == 0 {
            return Err(ConfigError::ZeroProbeRetry);
        }
        if self.sample_period_ms == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }
        if let Some(0) = self.max_probe_attempts {
            return Err(ConfigError::ZeroProbeLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AcquisitionConfig::default();
        assert_eq!(config.probe_retry_ms, 100);
        assert_eq!(config.sample_period_ms, 50);
        assert_eq!(config.range, Range::Dps250);
        assert_eq!(config.rate, Rate::Hz380);
        assert_eq!(config.max_probe_attempts, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_intervals() {
        assert_eq!(
            AcquisitionConfig::new().with_probe_retry_ms(0).validate(),
            Err(ConfigError::ZeroProbeRetry)
        );
        assert_eq!(
            AcquisitionConfig::new().with_sample_period_ms(0).validate(),
            Err(ConfigError::ZeroSamplePeriod)
        );
    }

    #[test]
    fn test_rejects_zero_probe_limit() {
        assert_eq!(
            AcquisitionConfig::new().with_max_probe_attempts(0).validate(),
            Err(ConfigError::ZeroProbeLimit)
        );
        assert_eq!(
            AcquisitionConfig::new().with_max_probe_attempts(5).validate(),
            Ok(())
        );
    }
}
