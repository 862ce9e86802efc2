//! Hard-edged directional wipes.

use framefx_core::{frame_len, pixel_index};
use serde::{Deserialize, Serialize};

/// Edge the incoming frame is revealed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WipeDirection {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

/// Binary-assign each pixel to one source frame based on a moving boundary.
///
/// The boundary column (or row) advances with progress; there is no
/// anti-aliasing at the edge. Output alpha is forced opaque.
pub fn wipe(
    frame1: &[u8],
    frame2: &[u8],
    width: u32,
    height: u32,
    progress: f32,
    direction: WipeDirection,
) -> Vec<u8> {
    let p = progress.clamp(0.0, 1.0);
    let mut out = vec![0u8; frame_len(width, height)];

    let boundary = match direction {
        WipeDirection::Left => (width as f32 * p) as i32,
        WipeDirection::Right => (width as f32 * (1.0 - p)) as i32,
        WipeDirection::Up => (height as f32 * p) as i32,
        WipeDirection::Down => (height as f32 * (1.0 - p)) as i32,
    };

    for y in 0..height {
        for x in 0..width {
            let show_incoming = match direction {
                WipeDirection::Left => (x as i32) < boundary,
                WipeDirection::Right => (x as i32) >= boundary,
                WipeDirection::Up => (y as i32) < boundary,
                WipeDirection::Down => (y as i32) >= boundary,
            };
            let idx = pixel_index(x, y, width);
            let src = if show_incoming { frame2 } else { frame1 };
            out[idx..idx + 3].copy_from_slice(&src[idx..idx + 3]);
            out[idx + 3] = 255;
        }
    }
    out
}
