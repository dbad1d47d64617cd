//! Collaborator traits
//!
//! These traits define the interface between the acquisition logic and
//! the hardware- or platform-specific code around it.

pub mod clock;
pub mod report;
pub mod sensor;

pub use clock::Clock;
pub use report::{Report, Reporter};
pub use sensor::{MotionSensor, Range, Rate, Vector3};
