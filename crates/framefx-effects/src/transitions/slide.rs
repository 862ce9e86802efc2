//! Directional slide transitions.

use framefx_core::{frame_len, pixel_index};
use serde::{Deserialize, Serialize};

use crate::transition::ease_in_out_cubic;

/// Direction the outgoing frame slides off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

/// Slide the outgoing frame off one edge while the incoming frame enters
/// from the opposite edge.
///
/// The shared offset follows the cubic ease-in-out curve. For each output
/// pixel the outgoing frame is sampled first; if its source coordinate has
/// left the frame, the incoming frame is sampled; any remaining gap is
/// opaque black.
pub fn slide(
    frame1: &[u8],
    frame2: &[u8],
    width: u32,
    height: u32,
    progress: f32,
    direction: SlideDirection,
) -> Vec<u8> {
    let p = ease_in_out_cubic(progress.clamp(0.0, 1.0));
    let w = width as i32;
    let h = height as i32;
    let offset = match direction {
        SlideDirection::Left | SlideDirection::Right => (width as f32 * p) as i32,
        SlideDirection::Up | SlideDirection::Down => (height as f32 * p) as i32,
    };

    let mut out = vec![0u8; frame_len(width, height)];

    for y in 0..h {
        for x in 0..w {
            let (x1, y1, x2, y2) = match direction {
                SlideDirection::Left => (x + offset, y, x + offset - w, y),
                SlideDirection::Right => (x - offset, y, x - offset + w, y),
                SlideDirection::Up => (x, y + offset, x, y + offset - h),
                SlideDirection::Down => (x, y - offset, x, y - offset + h),
            };

            let idx = pixel_index(x as u32, y as u32, width);
            if x1 >= 0 && x1 < w && y1 >= 0 && y1 < h {
                let src = pixel_index(x1 as u32, y1 as u32, width);
                out[idx..idx + 3].copy_from_slice(&frame1[src..src + 3]);
            } else if x2 >= 0 && x2 < w && y2 >= 0 && y2 < h {
                let src = pixel_index(x2 as u32, y2 as u32, width);
                out[idx..idx + 3].copy_from_slice(&frame2[src..src + 3]);
            }
            // Uncovered pixels stay black.
            out[idx + 3] = 255;
        }
    }
    out
}
