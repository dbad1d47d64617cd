//! Acquisition states
//!
//! States only move forward: Probing, Configuring, Sampling. Faulted is
//! reachable from Probing (with a probe limit) and from Configuring.

/// Acquisition states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Issuing liveness checks, backing off between failures
    Probing,
    /// Writing range and rate to the device
    Configuring,
    /// Reading, filtering and reporting
    Sampling,
    /// Gave up; the bus is no longer touched
    Faulted(FaultKind),
}

/// Why acquisition stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Probe limit reached without a successful liveness check
    Unresponsive,
    /// Device rejected or failed the configuration write
    ConfigureFailed,
}

impl State {
    /// Position in the forward-only ordering
    fn rank(&self) -> u8 {
        match self {
            State::Probing => 0,
            State::Configuring => 1,
            State::Sampling => 2,
            State::Faulted(_) => 3,
        }
    }

    /// Check whether moving to `next` keeps the forward-only ordering
    pub fn can_advance_to(&self, next: State) -> bool {
        match (self, next) {
            (State::Sampling, State::Faulted(_)) => false,
            (State::Faulted(_), _) => *self == next,
            _ => next.rank() >= self.rank(),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            State::Probing => "probing",
            State::Configuring => "configuring",
            State::Sampling => "sampling",
            State::Faulted(FaultKind::Unresponsive) => "faulted (unresponsive)",
            State::Faulted(FaultKind::ConfigureFailed) => "faulted (configure failed)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        assert!(State::Probing.can_advance_to(State::Configuring));
        assert!(State::Configuring.can_advance_to(State::Sampling));
        assert!(State::Sampling.can_advance_to(State::Sampling));
        assert!(!State::Sampling.can_advance_to(State::Probing));
        assert!(!State::Configuring.can_advance_to(State::Probing));
    }

    #[test]
    fn test_fault_paths() {
        let unresponsive = State::Faulted(FaultKind::Unresponsive);
        assert!(State::Probing.can_advance_to(unresponsive));
        assert!(State::Configuring.can_advance_to(State::Faulted(FaultKind::ConfigureFailed)));
        assert!(!State::Sampling.can_advance_to(unresponsive));
        assert!(!unresponsive.can_advance_to(State::Probing));
        assert!(!unresponsive.can_advance_to(State::Faulted(FaultKind::ConfigureFailed)));
    }
}
