//! Median-filter noise reduction.

use framefx_core::{frame_len, CHANNELS};
use rayon::prelude::*;

/// Median filter over a `2*strength+1` square window, in place.
///
/// Only interior pixels whose full window fits inside the frame are
/// processed; a border of width `strength` is left unmodified. Per RGB
/// channel the window values are sorted and the middle element taken.
/// Alpha is untouched. `strength` 0 is a no-op; 1-3 is the useful range.
pub fn noise_reduction(frame: &mut [u8], width: u32, height: u32, strength: u32) {
    if strength == 0 {
        return;
    }
    debug_assert_eq!(frame.len(), frame_len(width, height));

    let s = strength as usize;
    let w = width as usize;
    let h = height as usize;
    if w < 2 * s + 1 || h < 2 * s + 1 {
        return;
    }

    let original = frame.to_vec();
    let row_bytes = w * CHANNELS;
    let window = 2 * s + 1;

    frame
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            if y < s || y >= h - s {
                return;
            }
            let mut values = Vec::with_capacity(window * window);
            for x in s..w - s {
                for c in 0..3 {
                    values.clear();
                    for wy in 0..window {
                        for wx in 0..window {
                            let idx = (y + wy - s) * row_bytes + (x + wx - s) * CHANNELS + c;
                            values.push(original[idx]);
                        }
                    }
                    values.sort_unstable();
                    row[x * CHANNELS + c] = values[values.len() / 2];
                }
            }
        });
}
