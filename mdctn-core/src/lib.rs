//! # mdctn Core
//!
//! Core types shared by the mdctn crates:
//! - Error handling types
//! - Sample element descriptors and promotion to `f64`

pub mod error;
pub mod sample;

pub use error::{Error, Result};
pub use sample::{promote, Sample, SampleFormat, Signal};
