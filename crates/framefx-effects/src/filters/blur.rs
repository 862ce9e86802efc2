//! Separable box blur (fast Gaussian approximation).

use framefx_core::{frame_len, CHANNELS};
use rayon::prelude::*;

/// Two-pass box blur over all four channels, in place.
///
/// Each pass averages `2*radius+1` samples per pixel with the sample
/// coordinate clamped to the frame edge (edge replication). The horizontal
/// pass writes into a scratch buffer that the vertical pass reads, so the
/// first pass is fully complete before the second begins.
pub fn blur(frame: &mut [u8], width: u32, height: u32, radius: u32) {
    if radius == 0 {
        return;
    }
    debug_assert_eq!(frame.len(), frame_len(width, height));

    let w = width as i32;
    let h = height as i32;
    let r = radius as i32;
    let count = 2 * radius + 1;
    let row_bytes = width as usize * CHANNELS;

    let mut temp = vec![0u8; frame.len()];
    let src: &[u8] = frame;

    // Horizontal pass: frame -> temp
    temp.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, out_row)| {
            let src_row = &src[y * row_bytes..(y + 1) * row_bytes];
            for x in 0..w {
                let mut sums = [0u32; CHANNELS];
                for dx in -r..=r {
                    let nx = (x + dx).clamp(0, w - 1) as usize * CHANNELS;
                    for c in 0..CHANNELS {
                        sums[c] += src_row[nx + c] as u32;
                    }
                }
                let out = x as usize * CHANNELS;
                for c in 0..CHANNELS {
                    out_row[out + c] = (sums[c] / count) as u8;
                }
            }
        });

    // Vertical pass: temp -> frame
    frame
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, out_row)| {
            for x in 0..width as usize {
                let mut sums = [0u32; CHANNELS];
                for dy in -r..=r {
                    let ny = (y as i32 + dy).clamp(0, h - 1) as usize;
                    let idx = ny * row_bytes + x * CHANNELS;
                    for c in 0..CHANNELS {
                        sums[c] += temp[idx + c] as u32;
                    }
                }
                for c in 0..CHANNELS {
                    out_row[x * CHANNELS + c] = (sums[c] / count) as u8;
                }
            }
        });
}
