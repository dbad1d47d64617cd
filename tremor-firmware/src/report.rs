//! Report sink
//!
//! Formats each filtered sample into a fixed buffer and emits it as one
//! defmt log line over RTT.

use defmt::{info, warn};
use heapless::String;
use tremor_core::traits::{Report, Reporter};

/// Longest line is three `-2000.00`-style values plus labels
const LINE_CAPACITY: usize = 64;

pub struct DefmtReporter {
    line: String<LINE_CAPACITY>,
}

impl DefmtReporter {
    pub const fn new() -> Self {
        Self {
            line: String::new(),
        }
    }
}

impl Reporter for DefmtReporter {
    fn report(&mut self, report: &Report) {
        if report.write_line(&mut self.line).is_err() {
            warn!("Report line truncated");
        }
        info!("{=str}", self.line.as_str());
    }
}
