//! Pixel-by-pixel dissolve with a deterministic coordinate hash.

use framefx_core::{frame_len, pixel_index};

/// Per-pixel threshold in [0, 1), derived only from the coordinates.
///
/// The multipliers and modulus are fixed: changing them changes the visual
/// dissolve pattern, which must stay reproducible across runs and versions.
#[inline]
fn threshold(x: u32, y: u32) -> f32 {
    let hash = x
        .wrapping_mul(2_654_435_761)
        .wrapping_add(y.wrapping_mul(2_246_822_519));
    (hash % 1000) as f32 / 1000.0
}

/// Reveal the incoming frame pixel-by-pixel in hash order.
///
/// A pixel shows the incoming frame once progress reaches its threshold, so
/// the pattern accumulates monotonically and is identical on every call.
pub fn dissolve(frame1: &[u8], frame2: &[u8], width: u32, height: u32, progress: f32) -> Vec<u8> {
    let p = progress.clamp(0.0, 1.0);
    let mut out = vec![0u8; frame_len(width, height)];

    for y in 0..height {
        for x in 0..width {
            let idx = pixel_index(x, y, width);
            let src = if p >= threshold(x, y) { frame2 } else { frame1 };
            out[idx..idx + 3].copy_from_slice(&src[idx..idx + 3]);
            out[idx + 3] = 255;
        }
    }
    out
}
