//! Unsharp-mask sharpening via a discrete Laplacian.

use framefx_core::{clamp_u8, frame_len, CHANNELS};
use rayon::prelude::*;

/// Sharpen interior pixels in place.
///
/// Per RGB channel: `5*center - (up+down+left+right)` scaled by `amount`
/// and added back to the original pixel. The 1-pixel border and the alpha
/// channel are left unmodified. `amount <= 0` is a no-op.
pub fn sharpen(frame: &mut [u8], width: u32, height: u32, amount: f32) {
    if amount <= 0.0 {
        return;
    }
    debug_assert_eq!(frame.len(), frame_len(width, height));
    if width < 3 || height < 3 {
        // No interior pixels to sharpen.
        return;
    }

    let original = frame.to_vec();
    let row_bytes = width as usize * CHANNELS;
    let w = width as usize;
    let h = height as usize;

    frame
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            if y == 0 || y == h - 1 {
                return;
            }
            for x in 1..w - 1 {
                let idx = y * row_bytes + x * CHANNELS;
                for c in 0..3 {
                    let center = original[idx + c] as i32;
                    let neighbors = original[idx - row_bytes + c] as i32
                        + original[idx + row_bytes + c] as i32
                        + original[idx - CHANNELS + c] as i32
                        + original[idx + CHANNELS + c] as i32;
                    let laplacian = 5 * center - neighbors;
                    row[x * CHANNELS + c] =
                        clamp_u8(center + (laplacian as f32 * amount) as i32);
                }
            }
        });
}
