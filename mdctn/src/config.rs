//! Transform configuration.

use mdctn_core::{Error, Result};
use mdctn_dct::{DctOptions, DctType, Norm};
use serde::{Deserialize, Serialize};

/// Default window length.
pub const DEFAULT_WINDOW: usize = 16;

/// Validated, immutable parameters shared by the forward and inverse transforms.
///
/// The window length `N` is a positive multiple of 4. Consecutive blocks start
/// `N/2` samples apart (the hop), and each block is folded in quarters of `N/4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTransformConfig", into = "RawTransformConfig")]
pub struct TransformConfig {
    window: usize,
    options: DctOptions,
}

impl TransformConfig {
    /// Validate raw parameters.
    ///
    /// Checks the window first, then the DCT type, then the norm name. When
    /// `orthogonalize` is `None` it resolves to `true` for `"ortho"` and
    /// `false` otherwise.
    pub fn new(
        window: usize,
        dct_type: u8,
        norm: &str,
        orthogonalize: Option<bool>,
    ) -> Result<Self> {
        validate_window(window)?;
        let dct_type = DctType::try_from(dct_type)?;
        let norm: Norm = norm.parse()?;

        let mut options = DctOptions::new(dct_type, norm);
        if let Some(orthogonalize) = orthogonalize {
            options = options.with_orthogonalize(orthogonalize);
        }

        Ok(Self { window, options })
    }

    /// Build from already typed DCT options.
    pub fn from_options(window: usize, options: DctOptions) -> Result<Self> {
        validate_window(window)?;
        Ok(Self { window, options })
    }

    /// Window length `N`.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Hop size `N/2`; also the coefficient block length.
    pub fn hop(&self) -> usize {
        self.window / 2
    }

    /// Quarter window `N/4`.
    pub fn quarter(&self) -> usize {
        self.window / 4
    }

    /// DCT variant applied to each folded block.
    pub fn dct_type(&self) -> DctType {
        self.options.dct_type
    }

    /// Normalization mode.
    pub fn norm(&self) -> Norm {
        self.options.norm
    }

    /// Resolved orthogonalization flag.
    pub fn orthogonalize(&self) -> bool {
        self.options.orthogonalize
    }

    /// Options handed to the DCT engine.
    pub fn dct_options(&self) -> DctOptions {
        self.options
    }

    /// Number of hop-sized blocks in an input of `len` samples.
    ///
    /// Fails unless `len` is a positive multiple of the hop size.
    pub fn block_count(&self, len: usize) -> Result<usize> {
        let hop = self.hop();
        if len == 0 || len % hop != 0 {
            return Err(Error::invalid_length(len, hop));
        }
        Ok(len / hop)
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            options: DctOptions::new(DctType::IV, Norm::Ortho),
        }
    }
}

fn validate_window(window: usize) -> Result<()> {
    if window == 0 || window % 4 != 0 {
        return Err(Error::InvalidWindow(window));
    }
    Ok(())
}

/// Serialized form; deserialization goes through [`TransformConfig::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTransformConfig {
    window: usize,
    dct_type: u8,
    norm: String,
    orthogonalize: Option<bool>,
}

impl TryFrom<RawTransformConfig> for TransformConfig {
    type Error = Error;

    fn try_from(raw: RawTransformConfig) -> Result<Self> {
        TransformConfig::new(raw.window, raw.dct_type, &raw.norm, raw.orthogonalize)
    }
}

impl From<TransformConfig> for RawTransformConfig {
    fn from(config: TransformConfig) -> Self {
        Self {
            window: config.window,
            dct_type: config.dct_type().number(),
            norm: config.norm().to_string(),
            orthogonalize: Some(config.orthogonalize()),
        }
    }
}
