//! Error types for the mdctn library.
//!
//! Every failure is reported before any transform work starts, so a call either
//! returns a complete result or one of these errors.

use thiserror::Error;

/// Main error type for the mdctn library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Window length is not a positive multiple of 4.
    #[error("Invalid window size {0}: must be a positive multiple of 4")]
    InvalidWindow(usize),

    /// Signal or coefficient length is not a positive multiple of the hop size.
    #[error("Invalid length {length}: must be a positive multiple of the hop size {hop}")]
    InvalidLength {
        /// Length of the rejected input.
        length: usize,
        /// Hop size (half the window length).
        hop: usize,
    },

    /// A single block does not have the length the transform expects.
    #[error("Invalid block length {got}: expected {expected}")]
    BlockLength {
        /// Required block length.
        expected: usize,
        /// Supplied block length.
        got: usize,
    },

    /// Input elements are neither integer nor floating point.
    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(String),

    /// DCT type outside 1..=4.
    #[error("Invalid DCT type {0}: must be 1, 2, 3 or 4")]
    InvalidDctType(u8),

    /// Normalization mode is not one of the accepted names.
    #[error("Invalid norm {0:?}: must be \"backward\", \"ortho\" or \"forward\"")]
    InvalidNorm(String),

    /// Raw sample buffer does not hold a whole number of elements.
    #[error("Misaligned sample buffer: {len} bytes is not a multiple of {width}")]
    MisalignedBuffer {
        /// Buffer length in bytes.
        len: usize,
        /// Element width in bytes.
        width: usize,
    },

    /// DCT engine failure not covered by the variants above.
    #[error("DCT error: {0}")]
    Dct(String),
}

impl Error {
    /// Build an [`Error::InvalidLength`] for the given input length and hop size.
    pub fn invalid_length(length: usize, hop: usize) -> Self {
        Error::InvalidLength { length, hop }
    }
}

/// Result type alias for mdctn operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidWindow(5);
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("multiple of 4"));

        let err = Error::invalid_length(5, 4);
        assert_eq!(
            err.to_string(),
            "Invalid length 5: must be a positive multiple of the hop size 4"
        );
    }

    #[test]
    fn test_norm_error_quotes_name() {
        let err = Error::InvalidNorm("sideways".to_string());
        assert!(err.to_string().contains("\"sideways\""));
    }
}
