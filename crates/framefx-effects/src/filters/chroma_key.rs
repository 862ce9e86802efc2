//! Chroma keying (green/blue screen) with spill suppression.

use framefx_core::{clamp_u8, frame_len, CHANNELS};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum Euclidean distance between two RGB8 colors, √(255²·3).
pub const MAX_RGB_DISTANCE: f32 = 441.67;

/// Parameters for chroma key extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromaKeyParams {
    /// Key color to remove.
    pub key_r: u8,
    pub key_g: u8,
    pub key_b: u8,
    /// Color distance tolerance (0.0-1.0, as a fraction of the max distance).
    pub tolerance: f32,
    /// Edge softness (0.0-1.0).
    pub softness: f32,
    /// Spill suppression strength (0.0-1.0).
    pub spill_suppression: f32,
}

impl Default for ChromaKeyParams {
    fn default() -> Self {
        Self::green_screen()
    }
}

impl ChromaKeyParams {
    /// Green screen default.
    pub fn green_screen() -> Self {
        Self {
            key_r: 0,
            key_g: 255,
            key_b: 0,
            tolerance: 0.35,
            softness: 0.1,
            spill_suppression: 0.6,
        }
    }

    /// Blue screen default.
    pub fn blue_screen() -> Self {
        Self {
            key_b: 255,
            key_g: 0,
            ..Self::green_screen()
        }
    }
}

/// Key out pixels near the key color by writing a new alpha channel.
///
/// Alpha is 0 below `tolerance - softness`, ramps linearly up to `tolerance`,
/// and is 255 beyond it. Spill suppression blends the dominant key channel
/// toward the mean of the other two, but only on pixels that survive keying
/// (alpha > 0.1). RGB is otherwise left intact.
pub fn chroma_key(frame: &mut [u8], width: u32, height: u32, params: &ChromaKeyParams) {
    debug_assert_eq!(frame.len(), frame_len(width, height));

    let tolerance = params.tolerance * MAX_RGB_DISTANCE;
    let softness = params.softness * MAX_RGB_DISTANCE;
    let key_is_green = params.key_g > params.key_r && params.key_g > params.key_b;
    let key_is_blue = params.key_b > params.key_r && params.key_b > params.key_g;
    let row_bytes = width as usize * CHANNELS;

    frame.par_chunks_mut(row_bytes).for_each(|row| {
        for px in row.chunks_exact_mut(CHANNELS) {
            let r = px[0] as f32;
            let g = px[1] as f32;
            let b = px[2] as f32;

            let dr = r - params.key_r as f32;
            let dg = g - params.key_g as f32;
            let db = b - params.key_b as f32;
            let distance = (dr * dr + dg * dg + db * db).sqrt();

            let mut alpha = 1.0f32;
            if distance < tolerance {
                alpha = if distance < tolerance - softness {
                    0.0
                } else {
                    (distance - (tolerance - softness)) / softness
                };
            }

            if params.spill_suppression > 0.0 && alpha > 0.1 {
                let spill = (1.0 - distance / MAX_RGB_DISTANCE) * params.spill_suppression;
                if key_is_green {
                    let avg_rb = (r + b) / 2.0;
                    px[1] = clamp_u8((g * (1.0 - spill) + avg_rb * spill) as i32);
                } else if key_is_blue {
                    let avg_rg = (r + g) / 2.0;
                    px[2] = clamp_u8((b * (1.0 - spill) + avg_rg * spill) as i32);
                }
            }

            px[3] = clamp_u8((alpha * 255.0) as i32);
        }
    });
}
