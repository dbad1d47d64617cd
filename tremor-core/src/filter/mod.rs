//! Signal smoothing filters

pub mod average;

pub use average::{StreamingAverage, VectorAverage};
