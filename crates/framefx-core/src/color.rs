//! RGB↔HSV conversion and 8-bit clamping.
//!
//! These are the shared numeric helpers for the color-grading filters. The
//! conversions operate on 8-bit RGB with hue in degrees [0, 360) and
//! saturation/value in [0, 1].
#![allow(clippy::excessive_precision)]

/// Rec.601 luma weights (R, G, B), used for saturation grading.
pub const REC601_LUMA: [f32; 3] = [0.2989, 0.5870, 0.1140];

/// Clamp to [0, 255] and narrow to u8.
///
/// The engines convert float pixel math back to bytes by truncating toward
/// zero first and clamping second; callers pass `value as i32`.
#[inline]
pub fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Convert an 8-bit RGB pixel to HSV.
///
/// Hue is in degrees [0, 360), 0 when the pixel is achromatic.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max != 0.0 { delta / max } else { 0.0 };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (((gf - bf) / delta) % 6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    (h, s, v)
}

/// Convert HSV back to an 8-bit RGB pixel.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        clamp_u8(((r1 + m) * 255.0) as i32),
        clamp_u8(((g1 + m) * 255.0) as i32),
        clamp_u8(((b1 + m) * 255.0) as i32),
    )
}
