//! Brightness/contrast/saturation/hue color grading.

use framefx_core::{clamp_u8, frame_len, hsv_to_rgb, rgb_to_hsv, CHANNELS};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Parameters for color grading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorGradeParams {
    /// Brightness offset (-100 to 100).
    pub brightness: f32,
    /// Contrast adjustment (-100 to 100).
    pub contrast: f32,
    /// Saturation adjustment (-100 to 100).
    pub saturation: f32,
    /// Hue rotation in degrees (-180 to 180).
    pub hue: f32,
}

impl ColorGradeParams {
    /// True when every adjustment is at its neutral value.
    pub fn is_neutral(&self) -> bool {
        self.brightness == 0.0 && self.contrast == 0.0 && self.saturation == 0.0 && self.hue == 0.0
    }
}

/// Apply brightness, contrast, saturation and hue adjustments in place.
///
/// Brightness and contrast run in RGB; saturation and hue go through an
/// HSV round-trip that is skipped entirely when both are neutral. A fully
/// neutral parameter set leaves the frame byte-for-byte untouched.
pub fn color_grade(frame: &mut [u8], width: u32, height: u32, params: &ColorGradeParams) {
    debug_assert_eq!(frame.len(), frame_len(width, height));
    if params.is_neutral() {
        return;
    }

    let brightness = params.brightness / 100.0;
    let contrast = (params.contrast + 100.0) / 100.0;
    let saturation = (params.saturation + 100.0) / 100.0;
    let adjust_hsv = params.saturation != 0.0 || params.hue != 0.0;
    let row_bytes = width as usize * CHANNELS;

    frame.par_chunks_mut(row_bytes).for_each(|row| {
        for px in row.chunks_exact_mut(CHANNELS) {
            let mut r = px[0] as f32 + brightness * 255.0;
            let mut g = px[1] as f32 + brightness * 255.0;
            let mut b = px[2] as f32 + brightness * 255.0;

            r = ((r / 255.0 - 0.5) * contrast + 0.5) * 255.0;
            g = ((g / 255.0 - 0.5) * contrast + 0.5) * 255.0;
            b = ((b / 255.0 - 0.5) * contrast + 0.5) * 255.0;

            if adjust_hsv {
                let (mut h, mut s, v) =
                    rgb_to_hsv(clamp_u8(r as i32), clamp_u8(g as i32), clamp_u8(b as i32));
                h = (h + params.hue + 360.0) % 360.0;
                s = (s * saturation).clamp(0.0, 1.0);
                let (nr, ng, nb) = hsv_to_rgb(h, s, v);
                px[0] = nr;
                px[1] = ng;
                px[2] = nb;
            } else {
                px[0] = clamp_u8(r as i32);
                px[1] = clamp_u8(g as i32);
                px[2] = clamp_u8(b as i32);
            }
        }
    });
}
