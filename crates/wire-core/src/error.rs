//! Error types for wire-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of canvas construction.
//! Drawing itself never fails: out-of-bounds writes are dropped at the
//! canvas seam, and degenerate geometry upstream propagates as NaN
//! coordinates rather than as errors.
//!
//! # Usage
//!
//! ```rust
//! use wire_core::{Canvas, Error};
//!
//! let err = Canvas::new(0, 100).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::canvas::Canvas`] - Construction and resize
//! - `wire-io` - Wraps these when decoding into a canvas

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur constructing or reshaping a canvas.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid canvas dimensions.
    ///
    /// Returned when width or height is zero, or when supplied pixel
    /// data does not match the dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Generic error with custom message.
    ///
    /// Catch-all for errors that don't fit other categories.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a dimension error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 768, "width is zero");
        let msg = err.to_string();
        assert!(msg.contains("0x768"));
        assert!(msg.contains("width is zero"));
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_other() {
        let err = Error::other("something went sideways");
        assert_eq!(err.to_string(), "something went sideways");
        assert!(!err.is_dimension_error());
    }
}
