//! Error types for FrameFx.

use thiserror::Error;

/// Main error type for FrameFx operations.
///
/// The engines are total over well-formed inputs; the only reportable
/// failure is a buffer whose length does not match the configured frame
/// geometry.
#[derive(Error, Debug)]
pub enum FrameFxError {
    #[error("frame geometry mismatch: buffer is {actual} bytes, {width}x{height} RGBA needs {expected}")]
    Geometry {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for FrameFx operations.
pub type Result<T> = std::result::Result<T, FrameFxError>;
