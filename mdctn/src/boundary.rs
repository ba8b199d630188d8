//! Periodic extension of a finite signal.
//!
//! The first and last analysis blocks need `N/4` samples beyond each end of the
//! signal. Taking them from the opposite end makes the signal periodic, so every
//! block folds and inverts the same way without zero padding.

/// Extend `signal` to `len + 2 * quarter` samples: its last `quarter` samples,
/// the signal itself, then its first `quarter` samples.
///
/// Requires `signal.len() >= quarter`.
pub(crate) fn wrap(signal: &[f64], quarter: usize) -> Vec<f64> {
    debug_assert!(signal.len() >= quarter);

    let len = signal.len();
    let mut extended = Vec::with_capacity(len + 2 * quarter);
    extended.extend_from_slice(&signal[len - quarter..]);
    extended.extend_from_slice(signal);
    extended.extend_from_slice(&signal[..quarter]);
    extended
}

/// Iterate over the `window`-sample blocks of an extended signal, `window / 2` apart.
pub(crate) fn blocks(extended: &[f64], window: usize) -> impl Iterator<Item = &[f64]> {
    extended.windows(window).step_by(window / 2)
}
