//! DCT type, normalization mode and the combined transform options.

use crate::error::{DctError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DCT variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DctType {
    /// Type I (even around both endpoints).
    I,
    /// Type II (the "standard" DCT).
    II,
    /// Type III (inverse of type II up to scale).
    III,
    /// Type IV (self-inverse up to scale).
    #[default]
    IV,
}

impl DctType {
    /// Numeric type (1-4).
    pub fn number(self) -> u8 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
        }
    }

    /// Kernel that undoes this type.
    pub fn inverse(self) -> Self {
        match self {
            Self::I => Self::I,
            Self::II => Self::III,
            Self::III => Self::II,
            Self::IV => Self::IV,
        }
    }

    /// Smallest row length this type is defined for.
    pub fn min_len(self) -> usize {
        match self {
            Self::I => 2,
            _ => 1,
        }
    }

    /// Scale period `P`: the unnormalized kernel applied after its inverse kernel
    /// multiplies a row by `P`.
    pub(crate) fn period(self, len: usize) -> f64 {
        match self {
            Self::I => 2.0 * (len as f64 - 1.0),
            _ => 2.0 * len as f64,
        }
    }
}

impl TryFrom<u8> for DctType {
    type Error = DctError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::I),
            2 => Ok(Self::II),
            3 => Ok(Self::III),
            4 => Ok(Self::IV),
            other => Err(DctError::InvalidType(other)),
        }
    }
}

impl From<DctType> for u8 {
    fn from(t: DctType) -> Self {
        t.number()
    }
}

impl fmt::Display for DctType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DCT-{}", match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        })
    }
}

/// Normalization mode.
///
/// Names where the `1/P` scale of a forward/inverse pair is applied:
/// entirely on the inverse (`Backward`), split as `1/sqrt(P)` on both sides
/// (`Ortho`), or entirely on the forward transform (`Forward`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// No scaling on the forward transform.
    #[default]
    Backward,
    /// `1/sqrt(P)` on both directions.
    Ortho,
    /// `1/P` on the forward transform.
    Forward,
}

impl Norm {
    /// Literal name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backward => "backward",
            Self::Ortho => "ortho",
            Self::Forward => "forward",
        }
    }

    pub(crate) fn forward_scale(self, period: f64) -> f64 {
        match self {
            Self::Backward => 1.0,
            Self::Ortho => 1.0 / period.sqrt(),
            Self::Forward => 1.0 / period,
        }
    }

    pub(crate) fn inverse_scale(self, period: f64) -> f64 {
        match self {
            Self::Backward => 1.0 / period,
            Self::Ortho => 1.0 / period.sqrt(),
            Self::Forward => 1.0,
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Norm {
    type Err = DctError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "backward" => Ok(Self::Backward),
            "ortho" => Ok(Self::Ortho),
            "forward" => Ok(Self::Forward),
            _ => Err(DctError::InvalidNorm(s.to_string())),
        }
    }
}

/// Complete parameter set of one DCT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DctOptions {
    /// DCT variant.
    pub dct_type: DctType,
    /// Normalization mode.
    pub norm: Norm,
    /// Rescale the boundary terms so the kernel becomes orthogonal.
    pub orthogonalize: bool,
}

impl DctOptions {
    /// Create options, orthogonalizing exactly when `norm` is `Ortho`.
    pub fn new(dct_type: DctType, norm: Norm) -> Self {
        Self {
            dct_type,
            norm,
            orthogonalize: norm == Norm::Ortho,
        }
    }

    /// Override the orthogonalization flag.
    pub fn with_orthogonalize(mut self, orthogonalize: bool) -> Self {
        self.orthogonalize = orthogonalize;
        self
    }

    /// Options of the transform that inverts this one.
    pub fn inverse(&self) -> Self {
        Self {
            dct_type: self.dct_type.inverse(),
            ..*self
        }
    }
}

impl Default for DctOptions {
    fn default() -> Self {
        Self::new(DctType::IV, Norm::Ortho)
    }
}
