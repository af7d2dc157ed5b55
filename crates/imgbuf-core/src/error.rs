//! Error types for imgbuf-core operations.
//!
//! The pixel-level API (decode, encode, get/set color, conversion between
//! images) reports no runtime errors: its preconditions are documented on each
//! item and checked with `debug_assert!`. Only the checked entry points that
//! ingest caller buffers or allocate on request return [`Result`]:
//!
//! - [`Image::try_new`](crate::Image::try_new)
//! - [`Image::from_raw`](crate::Image::from_raw) / [`Image::from_vec`](crate::Image::from_vec)
//! - [`raw::convert_planes`](crate::raw::convert_planes)
//!
//! # Usage
//!
//! ```rust
//! use imgbuf_core::{Error, ImageRgba};
//!
//! let short = [0u8; 3];
//! let err = ImageRgba::from_raw(1, 1, &short).unwrap_err();
//! assert!(matches!(err, Error::BufferTooSmall { expected: 4, got: 3 }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked image entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Memory for a backing buffer could not be reserved.
    ///
    /// Also returned when `width * height * planes` overflows `usize`.
    #[error("failed to allocate {requested} scalars: {reason}")]
    AllocationFailed {
        /// Scalars requested (saturated at `usize::MAX` on overflow)
        requested: usize,
        /// Failure reason
        reason: String,
    },

    /// A caller-supplied raw buffer holds fewer scalars than the geometry needs.
    #[error("raw buffer too small: expected {expected} scalars, got {got}")]
    BufferTooSmall {
        /// Scalars required by `width * height * planes`
        expected: usize,
        /// Scalars supplied
        got: usize,
    },

    /// Image dimensions do not fit the supplied buffer or the operation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(expected: usize, got: usize) -> Self {
        Self::BufferTooSmall { expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is an allocation error.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }

    /// Returns `true` if this is a buffer size or dimension error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::BufferTooSmall { .. } | Self::InvalidDimensions { .. })
    }
}
