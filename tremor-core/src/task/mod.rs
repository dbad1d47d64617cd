//! Cooperative tasks
//!
//! A task is a stackless state machine that runs until its next suspend
//! point and then hands control back to whoever called `resume()`.

pub mod cooperative;

pub use cooperative::{drive_with, Cooperative};
