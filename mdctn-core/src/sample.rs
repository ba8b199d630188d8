//! Sample element types and promotion to double precision.
//!
//! Signals and coefficient streams may arrive as any primitive integer or float
//! type. Everything is promoted to `f64` before a transform touches it.

use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Element type of an input signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    /// Signed 8-bit.
    I8,
    /// Signed 16-bit.
    I16,
    /// Signed 32-bit.
    I32,
    /// Signed 64-bit.
    I64,
    /// Unsigned 8-bit.
    U8,
    /// Unsigned 16-bit.
    U16,
    /// Unsigned 32-bit.
    U32,
    /// Unsigned 64-bit.
    U64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl SampleFormat {
    /// Get the number of bytes per sample.
    pub fn bytes_per_sample(&self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }

    /// Check if this is a floating-point format.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Check if this is an integer format.
    pub fn is_integer(&self) -> bool {
        !self.is_float()
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8 => write!(f, "int8"),
            Self::I16 => write!(f, "int16"),
            Self::I32 => write!(f, "int32"),
            Self::I64 => write!(f, "int64"),
            Self::U8 => write!(f, "uint8"),
            Self::U16 => write!(f, "uint16"),
            Self::U32 => write!(f, "uint32"),
            Self::U64 => write!(f, "uint64"),
            Self::F32 => write!(f, "float32"),
            Self::F64 => write!(f, "float64"),
        }
    }
}

impl FromStr for SampleFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "i8" | "int8" => Ok(Self::I8),
            "i16" | "int16" => Ok(Self::I16),
            "i32" | "int32" => Ok(Self::I32),
            "i64" | "int64" => Ok(Self::I64),
            "u8" | "uint8" => Ok(Self::U8),
            "u16" | "uint16" => Ok(Self::U16),
            "u32" | "uint32" => Ok(Self::U32),
            "u64" | "uint64" => Ok(Self::U64),
            "f32" | "float32" | "float" => Ok(Self::F32),
            "f64" | "float64" | "double" => Ok(Self::F64),
            _ => Err(Error::UnsupportedDataType(s.to_string())),
        }
    }
}

/// A primitive element that can be promoted to `f64`.
pub trait Sample: Copy + Send + Sync + 'static {
    /// Element type descriptor.
    const FORMAT: SampleFormat;

    /// Promote to double precision.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($ty:ty => $format:ident),* $(,)?) => {
        $(
            impl Sample for $ty {
                const FORMAT: SampleFormat = SampleFormat::$format;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

/// Promote a slice of samples to a freshly allocated `f64` buffer.
pub fn promote<S: Sample>(samples: &[S]) -> Vec<f64> {
    samples.iter().map(|&s| s.to_f64()).collect()
}

/// A real-valued signal, promoted to double precision.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signal {
    samples: Vec<f64>,
    /// Element type the signal was promoted from.
    source_format: Option<SampleFormat>,
}

impl Signal {
    /// Create a signal from typed samples.
    pub fn from_samples<S: Sample>(samples: &[S]) -> Self {
        Self {
            samples: promote(samples),
            source_format: Some(S::FORMAT),
        }
    }

    /// Decode raw little-endian samples of the given format.
    pub fn from_le_bytes(bytes: &[u8], format: SampleFormat) -> Result<Self> {
        let width = format.bytes_per_sample();
        if bytes.len() % width != 0 {
            return Err(Error::MisalignedBuffer {
                len: bytes.len(),
                width,
            });
        }

        let chunks = bytes.chunks_exact(width);
        let samples: Vec<f64> = match format {
            SampleFormat::I8 => bytes.iter().map(|&b| b as i8 as f64).collect(),
            SampleFormat::U8 => bytes.iter().map(|&b| b as f64).collect(),
            SampleFormat::I16 => chunks.map(|c| LittleEndian::read_i16(c) as f64).collect(),
            SampleFormat::U16 => chunks.map(|c| LittleEndian::read_u16(c) as f64).collect(),
            SampleFormat::I32 => chunks.map(|c| LittleEndian::read_i32(c) as f64).collect(),
            SampleFormat::U32 => chunks.map(|c| LittleEndian::read_u32(c) as f64).collect(),
            SampleFormat::I64 => chunks.map(|c| LittleEndian::read_i64(c) as f64).collect(),
            SampleFormat::U64 => chunks.map(|c| LittleEndian::read_u64(c) as f64).collect(),
            SampleFormat::F32 => chunks.map(|c| LittleEndian::read_f32(c) as f64).collect(),
            SampleFormat::F64 => chunks.map(LittleEndian::read_f64).collect(),
        };

        Ok(Self {
            samples,
            source_format: Some(format),
        })
    }

    /// Decode raw little-endian samples whose element type is given by name
    /// (e.g. `"int16"`, `"float32"`).
    pub fn from_le_bytes_named(bytes: &[u8], format: &str) -> Result<Self> {
        let format: SampleFormat = format.parse()?;
        Self::from_le_bytes(bytes, format)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Element type the signal was promoted from, if known.
    pub fn source_format(&self) -> Option<SampleFormat> {
        self.source_format
    }

    /// Promoted samples.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the signal, returning the promoted samples.
    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Self {
            samples,
            source_format: Some(SampleFormat::F64),
        }
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}
