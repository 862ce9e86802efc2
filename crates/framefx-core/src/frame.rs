//! RGBA8 frame geometry helpers.
//!
//! Frames are caller-owned flat byte buffers: packed RGBA, 8 bits per
//! channel, row-major, no stride padding. The engines never allocate or
//! retain a caller's buffer; they borrow it for the duration of one call.

use crate::error::{FrameFxError, Result};

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Byte length of a packed RGBA8 frame.
#[inline]
pub fn frame_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

/// Byte offset of the pixel at (x, y) in a frame of the given width.
#[inline]
pub fn pixel_index(x: u32, y: u32, width: u32) -> usize {
    (y as usize * width as usize + x as usize) * CHANNELS
}

/// Validate a buffer length against frame geometry.
///
/// Every engine operation calls this before touching pixel data, so a
/// mismatched buffer fails loudly instead of reading out of bounds.
#[inline]
pub fn check_frame(len: usize, width: u32, height: u32) -> Result<()> {
    let expected = frame_len(width, height);
    if len != expected {
        return Err(FrameFxError::Geometry {
            width,
            height,
            expected,
            actual: len,
        });
    }
    Ok(())
}
