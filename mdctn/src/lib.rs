//! # mdctn
//!
//! Modified Discrete Cosine Transform (MDCT) and its inverse over finite signals.
//!
//! The forward transform cuts a signal into `N`-sample blocks that overlap their
//! neighbors by half, folds each block to `N/2` samples and applies a DCT. The
//! output has exactly as many coefficients as the input has samples. The inverse
//! transform unfolds each coefficient block and overlap-adds neighbors, where
//! the time-domain aliasing of adjacent blocks cancels (TDAC).
//!
//! The signal is treated as periodic: the first and last blocks borrow `N/4`
//! samples from the opposite end, so the whole signal reconstructs exactly
//! without padding.
//!
//! ## Quick Start
//!
//! ```
//! use mdctn::{imdct, mdct, TransformConfig};
//!
//! let config = TransformConfig::new(16, 4, "ortho", None)?;
//! let signal: Vec<i16> = (0..64).map(|i| (i * 7 % 23) as i16).collect();
//!
//! let coefficients = mdct(&signal, &config)?;
//! assert_eq!(coefficients.len(), signal.len());
//!
//! let restored = imdct(&coefficients, &config)?;
//! for (a, b) in restored.iter().zip(&signal) {
//!     assert!((a - *b as f64).abs() < 1e-9);
//! }
//! # Ok::<(), mdctn::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `mdctn-core`: error types and sample promotion
//! - `mdctn-dct`: DCT types I-IV behind the [`DctEngine`] contract
//! - `mdctn`: configuration, boundary wrapping, folding and overlap-add

#![warn(missing_docs)]

mod boundary;
mod config;
mod fold;
mod overlap;
mod transform;

pub use config::{TransformConfig, DEFAULT_WINDOW};
pub use transform::Mdct;

pub use mdctn_core::{Error, Result, Sample, SampleFormat, Signal};
pub use mdctn_dct::{DctEngine, DctError, DctOptions, DctPlan, DctType, Norm};

/// Forward MDCT of `signal`.
///
/// Fails with [`Error::InvalidLength`] unless the signal length is a positive
/// multiple of `N/2`.
pub fn mdct<S: Sample>(signal: &[S], config: &TransformConfig) -> Result<Vec<f64>> {
    config.block_count(signal.len())?;
    Mdct::new(*config)?.forward(signal)
}

/// Inverse MDCT of `coefficients`.
///
/// With the same configuration, `imdct(mdct(x))` reproduces `x` up to
/// floating-point error.
pub fn imdct<S: Sample>(coefficients: &[S], config: &TransformConfig) -> Result<Vec<f64>> {
    config.block_count(coefficients.len())?;
    Mdct::new(*config)?.inverse(coefficients)
}

/// Forward MDCT of a dynamically typed [`Signal`].
pub fn mdct_signal(signal: &Signal, config: &TransformConfig) -> Result<Signal> {
    mdct(signal.as_slice(), config).map(Signal::from)
}

/// Inverse MDCT of a dynamically typed [`Signal`].
pub fn imdct_signal(coefficients: &Signal, config: &TransformConfig) -> Result<Signal> {
    imdct(coefficients.as_slice(), config).map(Signal::from)
}
