//! Motion sensor trait and measurement types

use core::task::Poll;

/// One 3-axis measurement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// All axes zero
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Full-scale measurement range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Range {
    /// ±250 degrees per second
    #[default]
    Dps250,
    /// ±500 degrees per second
    Dps500,
    /// ±2000 degrees per second
    Dps2000,
}

impl Range {
    /// Full-scale value in degrees per second
    pub const fn full_scale_dps(self) -> u16 {
        match self {
            Range::Dps250 => 250,
            Range::Dps500 => 500,
            Range::Dps2000 => 2000,
        }
    }
}

/// Output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rate {
    Hz95,
    Hz190,
    #[default]
    Hz380,
    Hz760,
}

impl Rate {
    /// Nominal output data rate in Hz
    pub const fn hz(self) -> u16 {
        match self {
            Rate::Hz95 => 95,
            Rate::Hz190 => 190,
            Rate::Hz380 => 380,
            Rate::Hz760 => 760,
        }
    }
}

/// 3-axis motion sensor as seen by the acquisition task
///
/// Every operation may suspend. An implementation returns `Poll::Pending`
/// while the operation is in progress and keeps its own progress between
/// calls; the caller re-issues the same operation with the same arguments
/// on its next resume until it gets `Poll::Ready`.
pub trait MotionSensor {
    /// Transport or device error
    type Error;

    /// Liveness check
    ///
    /// `Ok(true)` when the device answered with the expected identity,
    /// `Ok(false)` when something answered but is not the expected device.
    fn ping(&mut self) -> Poll<Result<bool, Self::Error>>;

    /// Apply measurement range and output data rate, powering the device up
    fn configure(&mut self, range: Range, rate: Rate) -> Poll<Result<(), Self::Error>>;

    /// Read one measurement, pending until new data is available
    fn read(&mut self) -> Poll<Result<Vector3, Self::Error>>;
}

impl<S: MotionSensor + ?Sized> MotionSensor for &mut S {
    type Error = S::Error;

    fn ping(&mut self) -> Poll<Result<bool, Self::Error>> {
        (**self).ping()
    }

    fn configure(&mut self, range: Range, rate: Rate) -> Poll<Result<(), Self::Error>> {
        (**self).configure(range, rate)
    }

    fn read(&mut self) -> Poll<Result<Vector3, Self::Error>> {
        (**self).read()
    }
}
