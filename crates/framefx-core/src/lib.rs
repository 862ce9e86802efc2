//! FrameFx Core - Foundation types for the pixel-processing engine
//!
//! This crate provides the pieces shared by the filter and transition
//! engines:
//! - RGBA8 frame geometry helpers and length validation
//! - RGB↔HSV color conversion
//! - The common error type

pub mod color;
pub mod error;
pub mod frame;

pub use color::{clamp_u8, hsv_to_rgb, rgb_to_hsv};
pub use error::{FrameFxError, Result};
pub use frame::{check_frame, frame_len, pixel_index, CHANNELS};
