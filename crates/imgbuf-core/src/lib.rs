//! # imgbuf-core
//!
//! In-memory image buffers with pluggable pixel layouts and exact conversion
//! between any pair of layouts and scalar types.
//!
//! - [`Channel`] - Scalar types (u8 ... f64) and their canonical ranges
//! - [`Color`] - Format-independent RGBA interchange value
//! - [`PixelFormat`] - Layout policy, with [`PixelRgb`], [`PixelBgr`],
//!   [`PixelRgba`], [`PixelBgra`] and [`PixelGray`]
//! - [`Image`] - Owned, contiguous, row-major image buffer
//! - [`raw`] - Conversion of raw buffers with runtime [`Layout`]s
//!
//! ## Design
//!
//! Both the plane order and the scalar type are part of the image type, so a
//! BGRA buffer cannot be read as RGB by accident. Building one image from
//! another of a different format decodes, rescales and re-encodes every
//! pixel.
//!
//! ```
//! use imgbuf_core::prelude::*;
//!
//! let mut bytes = ImageRgb::new(2, 2);
//! bytes.set_color(0, 0, Color::opaque(255, 0, 0));
//!
//! let floats: Image<PixelRgba<f32>> = bytes.convert();
//! assert_eq!(floats.color(0, 0), Color::new(1.0, 0.0, 0.0, 1.0));
//! ```
//!
//! ## Threading
//!
//! Images hold no interior mutability: `&Image` can be shared across threads
//! for reading, and writing needs `&mut Image`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod color;
pub mod error;
pub mod format;
pub mod image;
pub mod pixel;
pub mod raw;

// Re-exports for convenience
pub use channel::{convert, Channel};
pub use color::Color;
pub use error::*;
pub use format::{DataFormat, Layout};
pub use image::*;
pub use pixel::{luma, PixelBgr, PixelBgra, PixelFormat, PixelGray, PixelRgb, PixelRgba};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use imgbuf_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{convert, Channel};
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::format::{DataFormat, Layout};
    pub use crate::image::{Image, ImageBgr, ImageBgra, ImageGray, ImageRgb, ImageRgba};
    pub use crate::pixel::{PixelBgr, PixelBgra, PixelFormat, PixelGray, PixelRgb, PixelRgba};
}
