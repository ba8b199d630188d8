//! The MDCT processor.

use crate::boundary;
use crate::config::TransformConfig;
use crate::fold::{fold, unfold};
use crate::overlap::overlap_add;
use mdctn_core::{promote, Error, Result, Sample};
use mdctn_dct::{DctEngine, DctError, DctPlan};
use tracing::{debug, trace};

/// Forward and inverse MDCT for one configuration.
///
/// Holds the DCT engine for rows of `N/2` samples so repeated calls reuse it.
/// No other state is kept between calls.
#[derive(Debug, Clone)]
pub struct Mdct<E = DctPlan> {
    config: TransformConfig,
    engine: E,
}

impl Mdct<DctPlan> {
    /// Create a processor backed by a precomputed [`DctPlan`].
    pub fn new(config: TransformConfig) -> Result<Self> {
        let engine = DctPlan::new(config.hop(), config.dct_options())?;
        Ok(Self { config, engine })
    }
}

impl<E: DctEngine> Mdct<E> {
    /// Create a processor around a caller-supplied DCT engine.
    ///
    /// The engine must transform rows of `config.hop()` samples.
    pub fn with_engine(config: TransformConfig, engine: E) -> Result<Self> {
        if engine.len() != config.hop() {
            return Err(DctError::LengthMismatch {
                expected: config.hop(),
                got: engine.len(),
            }
            .into());
        }
        Ok(Self { config, engine })
    }

    /// Configuration of this processor.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Forward MDCT of a whole signal.
    ///
    /// The signal length must be a positive multiple of `N/2`. The output has
    /// exactly as many coefficients as the input has samples.
    pub fn forward<S: Sample>(&self, signal: &[S]) -> Result<Vec<f64>> {
        let blocks = self.config.block_count(signal.len())?;
        let window = self.config.window();
        let hop = self.config.hop();

        debug!(window, blocks, len = signal.len(), "forward MDCT");

        let samples = promote(signal);
        let extended = boundary::wrap(&samples, self.config.quarter());

        let mut folded = vec![0.0; signal.len()];
        for (i, (block, row)) in boundary::blocks(&extended, window)
            .zip(folded.chunks_exact_mut(hop))
            .enumerate()
        {
            fold(block, row);
            trace!(block = i, "folded");
        }

        let mut coefficients = vec![0.0; signal.len()];
        self.engine.forward_rows(&folded, &mut coefficients)?;
        coefficients.iter_mut().for_each(|c| *c *= 0.5);

        Ok(coefficients)
    }

    /// Inverse MDCT of a coefficient stream produced by [`Mdct::forward`].
    ///
    /// The stream length must be a positive multiple of `N/2`; the
    /// reconstructed signal has the same length.
    pub fn inverse<S: Sample>(&self, coefficients: &[S]) -> Result<Vec<f64>> {
        let blocks = self.config.block_count(coefficients.len())?;
        let window = self.config.window();
        let hop = self.config.hop();

        debug!(window, blocks, len = coefficients.len(), "inverse MDCT");

        let coefficients = promote(coefficients);
        let mut rows = vec![0.0; coefficients.len()];
        self.engine.inverse_rows(&coefficients, &mut rows)?;

        let mut unfolded = vec![0.0; blocks * window];
        for (i, (row, block)) in rows
            .chunks_exact(hop)
            .zip(unfolded.chunks_exact_mut(window))
            .enumerate()
        {
            unfold(row, block);
            trace!(block = i, "unfolded");
        }

        let mut output = vec![0.0; coefficients.len()];
        overlap_add(&unfolded, window, &mut output);
        Ok(output)
    }

    /// Fold and transform a single `N`-sample block into `N/2` coefficients.
    ///
    /// No boundary wrapping is applied; callers framing their own signal use
    /// this together with [`Mdct::inverse_block`] and their own overlap-add.
    pub fn forward_block(&self, block: &[f64]) -> Result<Vec<f64>> {
        let window = self.config.window();
        if block.len() != window {
            return Err(Error::BlockLength {
                expected: window,
                got: block.len(),
            });
        }

        let mut folded = vec![0.0; self.config.hop()];
        fold(block, &mut folded);

        let mut coefficients = vec![0.0; self.config.hop()];
        self.engine.forward(&folded, &mut coefficients)?;
        coefficients.iter_mut().for_each(|c| *c *= 0.5);
        Ok(coefficients)
    }

    /// Inverse-transform and unfold `N/2` coefficients into an `N`-sample block.
    pub fn inverse_block(&self, coefficients: &[f64]) -> Result<Vec<f64>> {
        let hop = self.config.hop();
        if coefficients.len() != hop {
            return Err(Error::BlockLength {
                expected: hop,
                got: coefficients.len(),
            });
        }

        let mut row = vec![0.0; hop];
        self.engine.inverse(coefficients, &mut row)?;

        let mut block = vec![0.0; self.config.window()];
        unfold(&row, &mut block);
        Ok(block)
    }
}
