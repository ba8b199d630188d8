//! Block folding.
//!
//! Forward: an `N`-sample block split into quarters `a b c d` folds into the
//! `N/2`-sample vector `(-rev(c) - d, a - rev(b))`. Inverse: an `N/2`-sample row
//! `r` unfolds into `(r[N/4..], -rev(r), -r[..N/4])`. The unfolded block carries
//! time-domain aliasing that cancels against the neighboring blocks during
//! overlap-add.

/// Fold an `N`-sample block into `folded` (`N/2` samples).
pub(crate) fn fold(block: &[f64], folded: &mut [f64]) {
    let q = block.len() / 4;
    debug_assert_eq!(block.len(), 4 * q);
    debug_assert_eq!(folded.len(), 2 * q);

    let (a, rest) = block.split_at(q);
    let (b, rest) = rest.split_at(q);
    let (c, d) = rest.split_at(q);
    let (lo, hi) = folded.split_at_mut(q);

    for i in 0..q {
        lo[i] = -c[q - 1 - i] - d[i];
        hi[i] = a[i] - b[q - 1 - i];
    }
}

/// Unfold an `N/2`-sample row into `block` (`N` samples).
pub(crate) fn unfold(row: &[f64], block: &mut [f64]) {
    let h = row.len();
    let q = h / 2;
    debug_assert_eq!(h, 2 * q);
    debug_assert_eq!(block.len(), 2 * h);

    let (head, rest) = block.split_at_mut(q);
    let (middle, tail) = rest.split_at_mut(h);

    head.copy_from_slice(&row[q..]);
    for (dst, src) in middle.iter_mut().zip(row.iter().rev()) {
        *dst = -src;
    }
    for (dst, src) in tail.iter_mut().zip(&row[..q]) {
        *dst = -src;
    }
}
