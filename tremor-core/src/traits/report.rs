//! Report output

use core::fmt::{self, Write};

use heapless::String;

use super::sensor::Vector3;

/// One report line built from the filtered axes
///
/// Displays as `x: 1.00, y: -2.50, z: 0.13`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    /// Filtered values at the time of the report
    pub filtered: Vector3,
}

impl Report {
    pub const fn new(filtered: Vector3) -> Self {
        Self { filtered }
    }

    /// Replace the contents of `line` with this report
    ///
    /// Fails if `line` is too short; whatever fit is left in place.
    pub fn write_line<const N: usize>(&self, line: &mut String<N>) -> fmt::Result {
        line.clear();
        write!(line, "{}", self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Vector3 { x, y, z } = self.filtered;
        write!(f, "x: {:.2}, y: {:.2}, z: {:.2}", x, y, z)
    }
}

/// Sink for report lines
pub trait Reporter {
    /// Emit one report
    fn report(&mut self, report: &Report);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, report: &Report) {
        (**self).report(report);
    }
}
