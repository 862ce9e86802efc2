//! FrameFx Effects - CPU pixel-processing engines
//!
//! Two engines operating on caller-owned packed RGBA8 byte buffers:
//! - [`FilterEngine`]: in-place per-frame filters (chroma key, color grade,
//!   blur, sharpen, vignette, noise reduction, LUT grade)
//! - [`TransitionEngine`]: two-frame transitions producing a freshly
//!   allocated output frame (fades, wipes, slides, dissolve)
//!
//! Both engines carry only their configured frame dimensions as state and
//! validate every buffer against that geometry before touching pixels.

pub mod filter;
pub mod filters;
pub mod transition;
pub mod transitions;

pub use filter::FilterEngine;
pub use filters::{ChromaKeyParams, ColorGradeParams, LutParams, MAX_RGB_DISTANCE};
pub use transition::{ease_in_out_cubic, TransitionEngine};
pub use transitions::{SlideDirection, WipeDirection};
