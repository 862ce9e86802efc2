//! Built-in transition implementations.
//!
//! Each transition is a free function over two same-sized RGBA8 frames,
//! returning a new output frame with fully opaque alpha. The
//! [`TransitionEngine`](crate::transition::TransitionEngine) validates
//! geometry and delegates here.

mod blend;
mod dissolve;
mod slide;
mod wipe;

pub use blend::{crossfade, fade, fade_to_black, fade_to_white};
pub use dissolve::dissolve;
pub use slide::{slide, SlideDirection};
pub use wipe::{wipe, WipeDirection};
