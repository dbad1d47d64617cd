//! Build-time configuration
//!
//! Values come from sampler.toml via build.rs. Edit that file and rebuild.

use tremor_core::config::AcquisitionConfig;
use tremor_core::traits::{Range, Rate};

include!(concat!(env!("OUT_DIR"), "/config.rs"));

const _: () = assert!(ACQUISITION.validate().is_ok(), "invalid acquisition config");
const _: () = assert!(WINDOW > 0, "filter window must be non-zero");
