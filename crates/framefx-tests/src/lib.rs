//! Integration test crate for FrameFx.
//!
//! This crate exists solely to hold cross-crate integration tests that
//! exercise the filter and transition engines together over shared RGBA8
//! buffers.

#[cfg(test)]
mod filters;

#[cfg(test)]
mod transitions;
