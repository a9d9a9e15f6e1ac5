//! Error types for bitmatch.

use thiserror::Error;

/// Result alias for bitmatch operations.
pub type BitmatchResult<T> = std::result::Result<T, BitmatchError>;

/// Errors that can occur while constructing pixel buffers.
///
/// The scan path itself never fails: an unmatchable region or an absent
/// needle is reported as `None` or an empty vector, not as an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitmatchError {
    /// Width or height is zero.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// The byte buffer does not match `width * height * channels`.
    #[error("buffer length mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch {
        /// Required byte length.
        expected: usize,
        /// Actual byte length supplied.
        got: usize,
    },
    /// Image decoding failed.
    #[error("image decode failed: {reason}")]
    Decode {
        /// Decoder failure description.
        reason: String,
    },
}
