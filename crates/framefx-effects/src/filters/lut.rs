//! Combined look grading (temperature/warmth/contrast/saturation) with
//! partial application via an intensity mix.

use framefx_core::color::REC601_LUMA;
use framefx_core::{clamp_u8, frame_len, CHANNELS};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Parameters for LUT-style look grading.
///
/// Unlike [`ColorGradeParams`](super::ColorGradeParams), contrast and
/// saturation here are raw multipliers (1.0 = neutral), and the final
/// result is blended with the untouched original by `intensity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LutParams {
    /// Warm/cool shift: adds to red, subtracts from blue (scaled by 50).
    pub temperature: f32,
    /// Warmth boost: adds to red (scaled by 30) and green (scaled by 15).
    pub warmth: f32,
    /// Raw contrast multiplier around the 0.5 midpoint.
    pub contrast: f32,
    /// Raw saturation multiplier around Rec.601 luma.
    pub saturation: f32,
    /// Mix weight between graded (1.0) and original (0.0).
    pub intensity: f32,
}

impl Default for LutParams {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            warmth: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            intensity: 1.0,
        }
    }
}

/// Apply the look grade in place, mixed with the original by intensity.
pub fn apply_lut(frame: &mut [u8], width: u32, height: u32, params: &LutParams) {
    debug_assert_eq!(frame.len(), frame_len(width, height));

    let [luma_r, luma_g, luma_b] = REC601_LUMA;
    let row_bytes = width as usize * CHANNELS;

    frame.par_chunks_mut(row_bytes).for_each(|row| {
        for px in row.chunks_exact_mut(CHANNELS) {
            let orig_r = px[0] as f32;
            let orig_g = px[1] as f32;
            let orig_b = px[2] as f32;

            let mut r = orig_r + params.temperature * 50.0;
            let mut g = orig_g;
            let mut b = orig_b - params.temperature * 50.0;

            r += params.warmth * 30.0;
            g += params.warmth * 15.0;

            r = ((r / 255.0 - 0.5) * params.contrast + 0.5) * 255.0;
            g = ((g / 255.0 - 0.5) * params.contrast + 0.5) * 255.0;
            b = ((b / 255.0 - 0.5) * params.contrast + 0.5) * 255.0;

            let gray = luma_r * r + luma_g * g + luma_b * b;
            r = gray + params.saturation * (r - gray);
            g = gray + params.saturation * (g - gray);
            b = gray + params.saturation * (b - gray);

            px[0] = clamp_u8((r * params.intensity + orig_r * (1.0 - params.intensity)) as i32);
            px[1] = clamp_u8((g * params.intensity + orig_g * (1.0 - params.intensity)) as i32);
            px[2] = clamp_u8((b * params.intensity + orig_b * (1.0 - params.intensity)) as i32);
        }
    });
}
