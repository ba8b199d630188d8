//! Precomputed DCT plans and the engine contract used by the lapped transform.

use crate::error::{DctError, Result};
use crate::options::{DctOptions, DctType};
use std::f64::consts::{PI, SQRT_2};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A fixed-length DCT that can run in both directions.
///
/// `inverse(forward(x))` must reproduce `x`. The lapped transform depends only
/// on this contract, so any engine honoring it (fast or direct) can be plugged in.
pub trait DctEngine: Send + Sync {
    /// Row length the engine transforms.
    fn len(&self) -> usize;

    /// Check if the engine transforms empty rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transform one row.
    fn forward(&self, input: &[f64], output: &mut [f64]) -> Result<()>;

    /// Undo [`DctEngine::forward`] on one row.
    fn inverse(&self, input: &[f64], output: &mut [f64]) -> Result<()>;

    /// Transform every row of a row-major buffer.
    fn forward_rows(&self, input: &[f64], output: &mut [f64]) -> Result<()> {
        check_rows(self.len(), input, output)?;
        for_each_row(self.len(), input, output, |row, out| self.forward(row, out))
    }

    /// Inverse-transform every row of a row-major buffer.
    fn inverse_rows(&self, input: &[f64], output: &mut [f64]) -> Result<()> {
        check_rows(self.len(), input, output)?;
        for_each_row(self.len(), input, output, |row, out| self.inverse(row, out))
    }
}

fn check_rows(len: usize, input: &[f64], output: &[f64]) -> Result<()> {
    if len == 0 || input.len() % len != 0 {
        return Err(DctError::LengthMismatch {
            expected: len,
            got: input.len(),
        });
    }
    if output.len() != input.len() {
        return Err(DctError::LengthMismatch {
            expected: input.len(),
            got: output.len(),
        });
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn for_each_row<F>(len: usize, input: &[f64], output: &mut [f64], f: F) -> Result<()>
where
    F: Fn(&[f64], &mut [f64]) -> Result<()> + Send + Sync,
{
    output
        .par_chunks_mut(len)
        .zip(input.par_chunks(len))
        .try_for_each(|(out, row)| f(row, out))
}

#[cfg(not(feature = "parallel"))]
fn for_each_row<F>(len: usize, input: &[f64], output: &mut [f64], f: F) -> Result<()>
where
    F: Fn(&[f64], &mut [f64]) -> Result<()> + Send + Sync,
{
    output
        .chunks_mut(len)
        .zip(input.chunks(len))
        .try_for_each(|(out, row)| f(row, out))
}

/// Direct DCT for one row length and option set.
///
/// Each direction keeps a cosine table over one period of its kernel plus
/// per-sample input and output weights, so a plan holds `O(len)` values and
/// transforms a row in `O(len^2)` time.
#[derive(Debug, Clone)]
pub struct DctPlan {
    len: usize,
    options: DctOptions,
    forward: Kernel,
    inverse: Kernel,
}

impl DctPlan {
    /// Build a plan for rows of `len` samples.
    pub fn new(len: usize, options: DctOptions) -> Result<Self> {
        let dct_type = options.dct_type;
        if len < dct_type.min_len() {
            return Err(DctError::InvalidLength {
                len,
                dct_type: dct_type.number(),
            });
        }

        let period = dct_type.period(len);
        let forward = Kernel::new(
            len,
            dct_type,
            options.orthogonalize,
            options.norm.forward_scale(period),
        );
        let inverse = Kernel::new(
            len,
            dct_type.inverse(),
            options.orthogonalize,
            options.norm.inverse_scale(period),
        );

        debug!(
            len,
            dct_type = dct_type.number(),
            norm = %options.norm,
            orthogonalize = options.orthogonalize,
            "built DCT plan"
        );

        Ok(Self {
            len,
            options,
            forward,
            inverse,
        })
    }

    /// Options the plan was built with.
    pub fn options(&self) -> &DctOptions {
        &self.options
    }

    fn check(&self, input: &[f64], output: &[f64]) -> Result<()> {
        for got in [input.len(), output.len()] {
            if got != self.len {
                return Err(DctError::LengthMismatch {
                    expected: self.len,
                    got,
                });
            }
        }
        Ok(())
    }
}

impl DctEngine for DctPlan {
    fn len(&self) -> usize {
        self.len
    }

    fn forward(&self, input: &[f64], output: &mut [f64]) -> Result<()> {
        self.check(input, output)?;
        self.forward.apply(input, output);
        Ok(())
    }

    fn inverse(&self, input: &[f64], output: &mut [f64]) -> Result<()> {
        self.check(input, output)?;
        self.inverse.apply(input, output);
        Ok(())
    }
}

/// One direction of a DCT: `y[k] = out_w[k] * sum_j in_w[j] * cos(pi * m(k, j) / d) * x[j]`.
///
/// `m(k, j)` is linear in `j` for fixed `k`, so it is stepped modulo the
/// kernel period `2d` and looked up in `cos_table`.
#[derive(Debug, Clone)]
struct Kernel {
    dct_type: DctType,
    cos_table: Vec<f64>,
    input_weights: Vec<f64>,
    output_weights: Vec<f64>,
}

impl Kernel {
    fn new(n: usize, dct_type: DctType, orthogonalize: bool, scale: f64) -> Self {
        let last = n - 1;

        // Angles are pi * m / d for m in 0..2d.
        let d = match dct_type {
            DctType::I => last,
            DctType::II | DctType::III => 2 * n,
            DctType::IV => 4 * n,
        };
        let cos_table = (0..2 * d)
            .map(|m| (PI * m as f64 / d as f64).cos())
            .collect();

        // Kernel weight times the boundary weight for orthogonalization.
        let input_weights = (0..n)
            .map(|j| match dct_type {
                DctType::I if j == 0 || j == last => {
                    if orthogonalize {
                        SQRT_2
                    } else {
                        1.0
                    }
                }
                DctType::III if j == 0 => {
                    if orthogonalize {
                        SQRT_2
                    } else {
                        1.0
                    }
                }
                _ => 2.0,
            })
            .collect();

        let output_weights = (0..n)
            .map(|k| match dct_type {
                DctType::I if orthogonalize && (k == 0 || k == last) => scale / SQRT_2,
                DctType::II if orthogonalize && k == 0 => scale / SQRT_2,
                _ => scale,
            })
            .collect();

        Self {
            dct_type,
            cos_table,
            input_weights,
            output_weights,
        }
    }

    /// Table index of `j = 0` and its increment per `j` for output `k`.
    fn index_step(&self, k: usize) -> (usize, usize) {
        let period = self.cos_table.len();
        let (start, step) = match self.dct_type {
            DctType::I => (0, k),
            DctType::II => (k, 2 * k),
            DctType::III => (0, 2 * k + 1),
            DctType::IV => (2 * k + 1, 2 * (2 * k + 1)),
        };
        (start % period, step % period)
    }

    fn apply(&self, input: &[f64], output: &mut [f64]) {
        let period = self.cos_table.len();
        for (k, (out, out_weight)) in output.iter_mut().zip(&self.output_weights).enumerate() {
            let (mut m, step) = self.index_step(k);
            let mut acc = 0.0;
            for (x, in_weight) in input.iter().zip(&self.input_weights) {
                acc += in_weight * self.cos_table[m] * x;
                m += step;
                if m >= period {
                    m -= period;
                }
            }
            *out = acc * out_weight;
        }
    }
}

/// One-shot forward DCT of a single row.
pub fn dct(input: &[f64], options: DctOptions) -> Result<Vec<f64>> {
    let plan = DctPlan::new(input.len(), options)?;
    let mut output = vec![0.0; input.len()];
    plan.forward(input, &mut output)?;
    Ok(output)
}

/// One-shot inverse DCT of a single row.
pub fn idct(input: &[f64], options: DctOptions) -> Result<Vec<f64>> {
    let plan = DctPlan::new(input.len(), options)?;
    let mut output = vec![0.0; input.len()];
    plan.inverse(input, &mut output)?;
    Ok(output)
}
