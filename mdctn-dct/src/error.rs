//! DCT engine error types.

use thiserror::Error;

/// DCT engine errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DctError {
    /// DCT type outside 1..=4.
    #[error("Invalid DCT type {0}: must be 1, 2, 3 or 4")]
    InvalidType(u8),

    /// Unknown normalization mode.
    #[error("Invalid norm {0:?}: must be \"backward\", \"ortho\" or \"forward\"")]
    InvalidNorm(String),

    /// Transform length not supported by the DCT type.
    #[error("Invalid transform length {len} for DCT type {dct_type}")]
    InvalidLength {
        /// Requested row length.
        len: usize,
        /// DCT type number (1-4).
        dct_type: u8,
    },

    /// Row buffer does not match the plan length.
    #[error("Length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length the plan was built for.
        expected: usize,
        /// Length supplied.
        got: usize,
    },
}

/// DCT result type.
pub type Result<T> = std::result::Result<T, DctError>;

impl From<DctError> for mdctn_core::Error {
    fn from(err: DctError) -> Self {
        match err {
            DctError::InvalidType(t) => mdctn_core::Error::InvalidDctType(t),
            DctError::InvalidNorm(name) => mdctn_core::Error::InvalidNorm(name),
            other => mdctn_core::Error::Dct(other.to_string()),
        }
    }
}
