//! Full-frame opacity blends: fade, crossfade, fade-to-black/white.

use framefx_core::{clamp_u8, frame_len, CHANNELS};

use crate::transition::ease_in_out_cubic;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend with a cubic ease-in-out curve applied to progress.
pub fn fade(frame1: &[u8], frame2: &[u8], width: u32, height: u32, progress: f32) -> Vec<u8> {
    let p = ease_in_out_cubic(progress.clamp(0.0, 1.0));
    let mut out = vec![0u8; frame_len(width, height)];

    for ((out_px, f1), f2) in out
        .chunks_exact_mut(CHANNELS)
        .zip(frame1.chunks_exact(CHANNELS))
        .zip(frame2.chunks_exact(CHANNELS))
    {
        for c in 0..3 {
            out_px[c] = clamp_u8(lerp(f1[c] as f32, f2[c] as f32, p) as i32);
        }
        out_px[3] = 255;
    }
    out
}

/// Blend with raw linear progress as the weight.
pub fn crossfade(frame1: &[u8], frame2: &[u8], width: u32, height: u32, progress: f32) -> Vec<u8> {
    let p = progress.clamp(0.0, 1.0);
    let alpha1 = 1.0 - p;
    let alpha2 = p;
    let mut out = vec![0u8; frame_len(width, height)];

    for ((out_px, f1), f2) in out
        .chunks_exact_mut(CHANNELS)
        .zip(frame1.chunks_exact(CHANNELS))
        .zip(frame2.chunks_exact(CHANNELS))
    {
        for c in 0..3 {
            out_px[c] = clamp_u8((f1[c] as f32 * alpha1 + f2[c] as f32 * alpha2) as i32);
        }
        out_px[3] = 255;
    }
    out
}

/// Fade the outgoing frame down to black over the first half, then the
/// incoming frame up from black over the second half. Both phases meet at
/// black at progress 0.5.
pub fn fade_to_black(
    frame1: &[u8],
    frame2: &[u8],
    width: u32,
    height: u32,
    progress: f32,
) -> Vec<u8> {
    let p = progress.clamp(0.0, 1.0);
    let mut out = vec![0u8; frame_len(width, height)];

    if p < 0.5 {
        let fade_out = 1.0 - p * 2.0;
        for (out_px, f1) in out
            .chunks_exact_mut(CHANNELS)
            .zip(frame1.chunks_exact(CHANNELS))
        {
            for c in 0..3 {
                out_px[c] = clamp_u8((f1[c] as f32 * fade_out) as i32);
            }
            out_px[3] = 255;
        }
    } else {
        let fade_in = (p - 0.5) * 2.0;
        for (out_px, f2) in out
            .chunks_exact_mut(CHANNELS)
            .zip(frame2.chunks_exact(CHANNELS))
        {
            for c in 0..3 {
                out_px[c] = clamp_u8((f2[c] as f32 * fade_in) as i32);
            }
            out_px[3] = 255;
        }
    }
    out
}

/// Like [`fade_to_black`] but dipping through white instead.
pub fn fade_to_white(
    frame1: &[u8],
    frame2: &[u8],
    width: u32,
    height: u32,
    progress: f32,
) -> Vec<u8> {
    let p = progress.clamp(0.0, 1.0);
    let mut out = vec![0u8; frame_len(width, height)];

    if p < 0.5 {
        let fade_out = p * 2.0;
        for (out_px, f1) in out
            .chunks_exact_mut(CHANNELS)
            .zip(frame1.chunks_exact(CHANNELS))
        {
            for c in 0..3 {
                let v = f1[c] as f32;
                out_px[c] = clamp_u8((v + (255.0 - v) * fade_out) as i32);
            }
            out_px[3] = 255;
        }
    } else {
        let fade_in = (p - 0.5) * 2.0;
        for (out_px, f2) in out
            .chunks_exact_mut(CHANNELS)
            .zip(frame2.chunks_exact(CHANNELS))
        {
            for c in 0..3 {
                let v = f2[c] as f32;
                out_px[c] = clamp_u8((255.0 + (v - 255.0) * fade_in) as i32);
            }
            out_px[3] = 255;
        }
    }
    out
}
