//! Two-frame transition engine for RGBA8 video frames.

use framefx_core::{check_frame, Result};
use tracing::debug;

use crate::transitions;
use crate::transitions::{SlideDirection, WipeDirection};

/// Smooth cubic ease-in-out used by the fade and slide transitions.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Two-frame transition processor bound to a frame geometry.
///
/// Every operation takes two same-sized input frames and a progress value
/// in [0, 1], and returns a freshly allocated output frame. Inputs are never
/// mutated, and the output alpha channel is fully opaque for every
/// transition.
#[derive(Debug, Clone)]
pub struct TransitionEngine {
    width: u32,
    height: u32,
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl TransitionEngine {
    /// Create an engine for the given frame dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reconfigure the frame dimensions. Must match the buffers passed to
    /// subsequent operations.
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        debug!(width, height, "transition engine reconfigured");
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn check(&self, frame1: &[u8], frame2: &[u8]) -> Result<()> {
        check_frame(frame1.len(), self.width, self.height)?;
        check_frame(frame2.len(), self.width, self.height)
    }

    /// Opacity blend with a cubic ease-in-out curve.
    pub fn fade(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.check(frame1, frame2)?;
        Ok(transitions::fade(
            frame1,
            frame2,
            self.width,
            self.height,
            progress,
        ))
    }

    /// Opacity blend with raw linear progress.
    pub fn crossfade(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.check(frame1, frame2)?;
        Ok(transitions::crossfade(
            frame1,
            frame2,
            self.width,
            self.height,
            progress,
        ))
    }

    /// Hard-edged reveal of the incoming frame from the left edge.
    pub fn wipe_left(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.wipe(frame1, frame2, progress, WipeDirection::Left)
    }

    /// Hard-edged reveal of the incoming frame from the right edge.
    pub fn wipe_right(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.wipe(frame1, frame2, progress, WipeDirection::Right)
    }

    /// Hard-edged reveal of the incoming frame from the top edge.
    pub fn wipe_up(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.wipe(frame1, frame2, progress, WipeDirection::Up)
    }

    /// Hard-edged reveal of the incoming frame from the bottom edge.
    pub fn wipe_down(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.wipe(frame1, frame2, progress, WipeDirection::Down)
    }

    fn wipe(
        &self,
        frame1: &[u8],
        frame2: &[u8],
        progress: f32,
        direction: WipeDirection,
    ) -> Result<Vec<u8>> {
        self.check(frame1, frame2)?;
        Ok(transitions::wipe(
            frame1,
            frame2,
            self.width,
            self.height,
            progress,
            direction,
        ))
    }

    /// Outgoing frame slides off to the left, incoming enters from the right.
    pub fn slide_left(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.slide(frame1, frame2, progress, SlideDirection::Left)
    }

    /// Outgoing frame slides off to the right, incoming enters from the left.
    pub fn slide_right(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.slide(frame1, frame2, progress, SlideDirection::Right)
    }

    /// Outgoing frame slides up, incoming enters from the bottom.
    pub fn slide_up(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.slide(frame1, frame2, progress, SlideDirection::Up)
    }

    /// Outgoing frame slides down, incoming enters from the top.
    pub fn slide_down(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.slide(frame1, frame2, progress, SlideDirection::Down)
    }

    fn slide(
        &self,
        frame1: &[u8],
        frame2: &[u8],
        progress: f32,
        direction: SlideDirection,
    ) -> Result<Vec<u8>> {
        self.check(frame1, frame2)?;
        Ok(transitions::slide(
            frame1,
            frame2,
            self.width,
            self.height,
            progress,
            direction,
        ))
    }

    /// Per-pixel dissolve driven by a deterministic coordinate hash.
    pub fn dissolve(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.check(frame1, frame2)?;
        Ok(transitions::dissolve(
            frame1,
            frame2,
            self.width,
            self.height,
            progress,
        ))
    }

    /// Fade the outgoing frame to black, then the incoming frame up from
    /// black.
    pub fn fade_to_black(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.check(frame1, frame2)?;
        Ok(transitions::fade_to_black(
            frame1,
            frame2,
            self.width,
            self.height,
            progress,
        ))
    }

    /// Fade the outgoing frame to white, then the incoming frame down from
    /// white.
    pub fn fade_to_white(&self, frame1: &[u8], frame2: &[u8], progress: f32) -> Result<Vec<u8>> {
        self.check(frame1, frame2)?;
        Ok(transitions::fade_to_white(
            frame1,
            frame2,
            self.width,
            self.height,
            progress,
        ))
    }
}
