//! Overlap-add reconstruction.

/// Sum consecutive unfolded blocks into `output`.
///
/// `blocks` holds `B` row-major blocks of `window` samples; `output` receives
/// `B * window / 2` samples. Output slot `j` is the second half of block
/// `j - 1` plus the first half of block `j`, with block indices taken modulo
/// `B` so slot 0 pairs with the last block. The forward transform framed the
/// signal `window / 4` samples early, so the assembled slots are finally
/// rotated left by that amount.
pub(crate) fn overlap_add(blocks: &[f64], window: usize, output: &mut [f64]) {
    let hop = window / 2;
    let count = blocks.len() / window;
    debug_assert_eq!(blocks.len(), count * window);
    debug_assert_eq!(output.len(), count * hop);

    for (j, slot) in output.chunks_exact_mut(hop).enumerate() {
        let prev = (j + count - 1) % count;
        let tail = &blocks[prev * window + hop..(prev + 1) * window];
        let head = &blocks[j * window..j * window + hop];

        for ((out, t), h) in slot.iter_mut().zip(tail).zip(head) {
            *out = t + h;
        }
    }

    output.rotate_left(window / 4);
}
