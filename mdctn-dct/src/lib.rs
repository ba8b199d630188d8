//! Discrete cosine transforms of types I-IV for the mdctn library.
//!
//! Each transform is selected by a [`DctType`], a [`Norm`] mode and an
//! orthogonalization flag, bundled in [`DctOptions`]. A [`DctPlan`] precomputes
//! both directions for one row length and implements the [`DctEngine`]
//! contract consumed by the lapped transform.
//!
//! ## Example
//!
//! ```
//! use mdctn_dct::{dct, idct, DctOptions, DctType, Norm};
//!
//! let options = DctOptions::new(DctType::IV, Norm::Ortho);
//! let coeffs = dct(&[1.0, 2.0, 3.0, 4.0], options)?;
//! let restored = idct(&coeffs, options)?;
//! assert!((restored[3] - 4.0).abs() < 1e-12);
//! # Ok::<(), mdctn_dct::DctError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod options;
mod plan;

pub use error::{DctError, Result};
pub use options::{DctOptions, DctType, Norm};
pub use plan::{dct, idct, DctEngine, DctPlan};
