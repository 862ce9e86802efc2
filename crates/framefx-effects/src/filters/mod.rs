//! Built-in filter implementations.
//!
//! Each filter is a free function over a mutable RGBA8 frame; the
//! [`FilterEngine`](crate::filter::FilterEngine) validates geometry and
//! delegates here.

mod blur;
mod chroma_key;
mod color_grade;
mod lut;
mod noise;
mod sharpen;
mod vignette;

pub use blur::blur;
pub use chroma_key::{chroma_key, ChromaKeyParams, MAX_RGB_DISTANCE};
pub use color_grade::{color_grade, ColorGradeParams};
pub use lut::{apply_lut, LutParams};
pub use noise::noise_reduction;
pub use sharpen::sharpen;
pub use vignette::vignette;
