//! In-place filter engine for RGBA8 video frames.

use framefx_core::{check_frame, Result};
use tracing::debug;

use crate::filters;
use crate::filters::{ChromaKeyParams, ColorGradeParams, LutParams};

/// Per-frame filter processor bound to a frame geometry.
///
/// The engine holds only its configured `width` and `height`; every
/// operation borrows a caller-owned buffer for the duration of one call,
/// mutates it in place, and retains nothing. Buffers whose length does not
/// match the configured geometry are rejected with
/// [`FrameFxError::Geometry`](framefx_core::FrameFxError::Geometry).
#[derive(Debug, Clone)]
pub struct FilterEngine {
    width: u32,
    height: u32,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl FilterEngine {
    /// Create an engine for the given frame dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reconfigure the frame dimensions. Must match the buffers passed to
    /// subsequent operations.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        debug!(width, height, "filter engine reconfigured");
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn check(&self, frame: &[u8]) -> Result<()> {
        check_frame(frame.len(), self.width, self.height)
    }

    /// Key out pixels near a key color, writing a new alpha channel and
    /// optionally suppressing key-color spill.
    pub fn chroma_key(&self, frame: &mut [u8], params: &ChromaKeyParams) -> Result<()> {
        self.check(frame)?;
        filters::chroma_key(frame, self.width, self.height, params);
        Ok(())
    }

    /// Apply brightness/contrast/saturation/hue adjustments.
    pub fn color_grade(&self, frame: &mut [u8], params: &ColorGradeParams) -> Result<()> {
        self.check(frame)?;
        filters::color_grade(frame, self.width, self.height, params);
        Ok(())
    }

    /// Box-blur all four channels with the given radius. Radius 0 is a no-op.
    pub fn blur(&self, frame: &mut [u8], radius: u32) -> Result<()> {
        self.check(frame)?;
        filters::blur(frame, self.width, self.height, radius);
        Ok(())
    }

    /// Unsharp-mask sharpen interior pixels. `amount` is typically 0-2;
    /// zero or negative is a no-op.
    pub fn sharpen(&self, frame: &mut [u8], amount: f32) -> Result<()> {
        self.check(frame)?;
        filters::sharpen(frame, self.width, self.height, amount);
        Ok(())
    }

    /// Darken toward the frame edges. Both parameters are in [0, 1].
    pub fn vignette(&self, frame: &mut [u8], intensity: f32, radius: f32) -> Result<()> {
        self.check(frame)?;
        filters::vignette(frame, self.width, self.height, intensity, radius);
        Ok(())
    }

    /// Median-filter noise reduction; `strength` 1-3 is the useful range,
    /// 0 is a no-op.
    pub fn noise_reduction(&self, frame: &mut [u8], strength: u32) -> Result<()> {
        self.check(frame)?;
        filters::noise_reduction(frame, self.width, self.height, strength);
        Ok(())
    }

    /// Apply a combined look grade blended with the original by intensity.
    pub fn apply_lut(&self, frame: &mut [u8], params: &LutParams) -> Result<()> {
        self.check(frame)?;
        filters::apply_lut(frame, self.width, self.height, params);
        Ok(())
    }
}
