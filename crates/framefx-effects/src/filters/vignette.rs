//! Radial vignette darkening.

use framefx_core::{clamp_u8, frame_len, CHANNELS};
use rayon::prelude::*;

/// Darken pixels toward the frame edges, in place.
///
/// Distance from the frame center is normalized by the half-diagonal.
/// Pixels within `radius` of that normalized range are unaffected; beyond
/// it the darkening ramps linearly up to `intensity` at the corners. Only
/// RGB is scaled; alpha is untouched.
pub fn vignette(frame: &mut [u8], width: u32, height: u32, intensity: f32, radius: f32) {
    debug_assert_eq!(frame.len(), frame_len(width, height));

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt();
    let row_bytes = width as usize * CHANNELS;

    frame
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let dy = y as f32 - center_y;
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                let dx = x as f32 - center_x;
                let distance = (dx * dx + dy * dy).sqrt();

                let mut factor = 1.0f32;
                if distance > max_dist * radius {
                    let ratio = (distance - max_dist * radius) / (max_dist * (1.0 - radius));
                    factor = 1.0 - ratio.min(1.0) * intensity;
                }

                for c in 0..3 {
                    px[c] = clamp_u8((px[c] as f32 * factor) as i32);
                }
            }
        });
}
