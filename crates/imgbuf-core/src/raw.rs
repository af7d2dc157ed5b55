//! Raw plane buffer conversion with runtime layouts.
//!
//! [`Image`](crate::Image) conversion fixes both pixel formats at compile
//! time. The functions here do the same work when the layouts are only known
//! at runtime (for instance, a loader reporting "BGRA" in a header): the
//! layouts are passed as [`Layout`] tags and dispatched per pixel. Scalar
//! types stay generic.
//!
//! Buffers follow the usual contract: interleaved, row-major, no padding,
//! `width * height * layout.plane_count()` scalars.
//!
//! # Example
//!
//! ```rust
//! use imgbuf_core::format::Layout;
//! use imgbuf_core::raw;
//!
//! let bgr: [u8; 3] = [0, 0, 255];
//! let rgba: Vec<f32> = raw::convert_planes(&bgr, Layout::Bgr, Layout::Rgba, 1, 1).unwrap();
//! assert_eq!(rgba, [1.0, 0.0, 0.0, 1.0]);
//! ```

use crate::channel::{convert, Channel};
use crate::format::Layout;
use crate::{Error, Result};
use tracing::debug;

/// Number of scalars a `width` x `height` buffer in `layout` holds.
///
/// # Errors
///
/// Returns [`Error::AllocationFailed`] if the product overflows `usize`.
pub fn required_len(width: u32, height: u32, layout: Layout) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(layout.plane_count()))
        .ok_or_else(|| {
            Error::allocation_failed(
                usize::MAX,
                format!("{width}x{height}x{} overflows usize", layout.plane_count()),
            )
        })
}

/// Converts `src` into a newly allocated buffer of another layout and type.
///
/// Trailing scalars in `src` past the required length are ignored.
///
/// # Errors
///
/// - [`Error::BufferTooSmall`] if `src` is shorter than required
/// - [`Error::AllocationFailed`] on size overflow or allocation failure
pub fn convert_planes<S: Channel, T: Channel>(
    src: &[S],
    src_layout: Layout,
    dst_layout: Layout,
    width: u32,
    height: u32,
) -> Result<Vec<T>> {
    let len = required_len(width, height, dst_layout)?;
    let mut dst = Vec::new();
    dst.try_reserve_exact(len)
        .map_err(|e| Error::allocation_failed(len, e.to_string()))?;
    dst.resize(len, T::ZERO);

    convert_planes_into(src, src_layout, &mut dst, dst_layout, width, height)?;
    Ok(dst)
}

/// Converts `src` into the caller-provided `dst`.
///
/// Same per-pixel algorithm as image conversion: decode with `src_layout`,
/// rescale each channel, encode with `dst_layout`. Identical layouts are
/// converted plane by plane. Only the first `required_len` scalars of `dst`
/// are written.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if either buffer is shorter than required.
pub fn convert_planes_into<S: Channel, T: Channel>(
    src: &[S],
    src_layout: Layout,
    dst: &mut [T],
    dst_layout: Layout,
    width: u32,
    height: u32,
) -> Result<()> {
    let src_len = required_len(width, height, src_layout)?;
    let dst_len = required_len(width, height, dst_layout)?;
    if src.len() < src_len {
        return Err(Error::buffer_too_small(src_len, src.len()));
    }
    if dst.len() < dst_len {
        return Err(Error::buffer_too_small(dst_len, dst.len()));
    }

    let (from_format, to_format) = (S::FORMAT, T::FORMAT);
    debug!(
        width,
        height,
        from = %src_layout,
        %from_format,
        to = %dst_layout,
        %to_format,
        "convert raw planes"
    );

    let src = &src[..src_len];
    let dst = &mut dst[..dst_len];

    if src_layout == dst_layout {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = convert(s);
        }
        return Ok(());
    }

    let pixels = src.chunks_exact(src_layout.plane_count());
    for (d, s) in dst.chunks_exact_mut(dst_layout.plane_count()).zip(pixels) {
        dst_layout.encode(d, src_layout.decode(s).convert());
    }
    Ok(())
}
