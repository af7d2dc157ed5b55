//! Owned image buffer parameterized by a pixel format.
//!
//! [`Image<P>`] stores `width * height * P::PLANE_COUNT` scalars in one
//! contiguous buffer:
//!
//! ```text
//! Memory: [p0 p0 p0 p1 p1 p1 ...]  <- Row 0, planes in P's order
//!         [p0 p0 p0 p1 p1 p1 ...]  <- Row 1
//!         ...
//! index(col, row) = (col + row * width) * PLANE_COUNT
//! ```
//!
//! There is no padding, stride or header, so [`Image::data`] can be handed to
//! any consumer expecting that exact layout.
//!
//! # Conversion
//!
//! An image converts into any other pixel format and scalar type through
//! [`From<&Image<Q>>`](#impl-From%3C%26Image%3CQ%3E%3E-for-Image%3CP%3E),
//! [`Image::convert`] or [`Image::assign_from`]. Each pixel is decoded with the
//! source format, every channel is rescaled with
//! [`channel::convert`](crate::channel::convert), and the result is encoded
//! with the destination format.
//!
//! ```rust
//! use imgbuf_core::{Color, Image, ImageRgb, PixelGray};
//!
//! let mut rgb = ImageRgb::new(1, 1);
//! rgb.set_color(0, 0, Color::new(100, 150, 200, 255));
//!
//! let gray: Image<PixelGray<u8>> = (&rgb).into();
//! assert_eq!(gray.color(0, 0), Color::new(140, 140, 140, 255));
//! ```
//!
//! # Ownership
//!
//! Every image owns its buffer exclusively. `clone` deep-copies; a Rust move
//! or [`Image::take`] transfers the buffer without copying.

use crate::channel::{convert, Channel};
use crate::color::Color;
use crate::pixel::{PixelBgr, PixelBgra, PixelFormat, PixelGray, PixelRgb, PixelRgba};
use crate::{Error, Result};
use std::marker::PhantomData;
use tracing::{debug, trace};

/// 8-bit RGB image.
pub type ImageRgb = Image<PixelRgb<u8>>;
/// 8-bit BGR image.
pub type ImageBgr = Image<PixelBgr<u8>>;
/// 8-bit RGBA image.
pub type ImageRgba = Image<PixelRgba<u8>>;
/// 8-bit BGRA image.
pub type ImageBgra = Image<PixelBgra<u8>>;
/// 8-bit grayscale image.
pub type ImageGray = Image<PixelGray<u8>>;

/// Owned image buffer with a compile-time pixel format.
///
/// `P` fixes both the plane order and the scalar type (`P::Scalar`).
///
/// # Example
///
/// ```rust
/// use imgbuf_core::{Color, Image, PixelRgba};
///
/// let mut img: Image<PixelRgba<f32>> = Image::new(64, 32);
/// img.set_color(3, 2, Color::new(1.0, 0.5, 0.25, 1.0));
///
/// assert_eq!(img.color(3, 2).green, 0.5);
/// assert_eq!(img.data().len(), 64 * 32 * 4);
/// ```
pub struct Image<P: PixelFormat> {
    /// Interleaved planes, row-major
    data: Vec<P::Scalar>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
    /// Pixel format marker
    _format: PhantomData<P>,
}

impl<P: PixelFormat> Image<P> {
    /// Creates an image filled with opaque blue `{0, 0, max, max}`.
    ///
    /// Zero width or height yields an empty image.
    ///
    /// # Panics
    ///
    /// Panics or aborts if the buffer cannot be allocated. Use
    /// [`try_new`](Self::try_new) to get an error instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgbuf_core::{Color, ImageBgr};
    ///
    /// let img = ImageBgr::new(4, 4);
    /// assert_eq!(img.color(0, 0), Color::new(0, 0, 255, 255));
    /// assert_eq!(&img.data()[..3], &[255, 0, 0]);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::blue())
    }

    /// Creates an image with every pixel set to `color`.
    ///
    /// # Panics
    ///
    /// Same as [`new`](Self::new).
    pub fn filled(width: u32, height: u32, color: Color<P::Scalar>) -> Self {
        let len = buffer_len::<P>(width, height).unwrap_or(usize::MAX);
        trace!(width, height, planes = P::PLANE_COUNT, "allocate image");
        let mut img = Self {
            data: vec![<P::Scalar as Channel>::ZERO; len],
            width,
            height,
            _format: PhantomData,
        };
        img.fill(color);
        img
    }

    /// Creates an opaque blue image, reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if `width * height * PLANE_COUNT`
    /// overflows `usize` or the buffer cannot be reserved.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let len = checked_len::<P>(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| Error::allocation_failed(len, e.to_string()))?;
        data.resize(len, <P::Scalar as Channel>::ZERO);
        trace!(width, height, planes = P::PLANE_COUNT, "allocate image");

        let mut img = Self {
            data,
            width,
            height,
            _format: PhantomData,
        };
        img.fill(Color::blue());
        Ok(img)
    }

    /// Creates an image by copying planes from a caller buffer.
    ///
    /// `raw` must start with `width * height * PLANE_COUNT` scalars in this
    /// format's plane order; trailing scalars are ignored. Planes are copied
    /// as-is, which equals a decode/encode pass for every RGB-family format
    /// and keeps gray values exact.
    ///
    /// # Errors
    ///
    /// - [`Error::BufferTooSmall`] if `raw` is shorter than required
    /// - [`Error::AllocationFailed`] if the required length overflows `usize`
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgbuf_core::{Color, ImageRgba};
    ///
    /// let img = ImageRgba::from_raw(1, 1, &[128, 0, 128, 255]).unwrap();
    /// assert_eq!(img.color(0, 0), Color::new(128, 0, 128, 255));
    /// ```
    pub fn from_raw(width: u32, height: u32, raw: &[P::Scalar]) -> Result<Self> {
        let len = checked_len::<P>(width, height)?;
        if raw.len() < len {
            return Err(Error::buffer_too_small(len, raw.len()));
        }
        trace!(width, height, planes = P::PLANE_COUNT, "copy raw planes");
        Ok(Self {
            data: raw[..len].to_vec(),
            width,
            height,
            _format: PhantomData,
        })
    }

    /// Creates an image taking ownership of an exactly sized buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` differs from
    /// `width * height * PLANE_COUNT`.
    pub fn from_vec(width: u32, height: u32, data: Vec<P::Scalar>) -> Result<Self> {
        let expected = checked_len::<P>(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} scalars, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            _format: PhantomData,
        })
    }

    /// Builds an image of this format from an image of any format.
    ///
    /// The result has the source geometry. Pixels are visited in row-major
    /// order; each is decoded with `Q`, converted channel by channel and
    /// encoded with `P`. When `P` and `Q` share a layout the planes are
    /// converted directly, which gives the same values for RGB-family formats
    /// and avoids the lossy luma pass for gray.
    pub fn from_image<Q: PixelFormat>(src: &Image<Q>) -> Self {
        let (from, to) = (Q::LAYOUT, P::LAYOUT);
        let from_format = <Q::Scalar as Channel>::FORMAT;
        let to_format = <P::Scalar as Channel>::FORMAT;
        debug!(
            width = src.width,
            height = src.height,
            %from,
            %from_format,
            %to,
            %to_format,
            "convert image"
        );

        let len = src.pixel_count() * P::PLANE_COUNT;
        let mut data = vec![<P::Scalar as Channel>::ZERO; len];

        if P::LAYOUT == Q::LAYOUT {
            for (dst, &s) in data.iter_mut().zip(&src.data) {
                *dst = convert(s);
            }
        } else {
            let planes = src.data.chunks_exact(Q::PLANE_COUNT);
            for (dst, s) in data.chunks_exact_mut(P::PLANE_COUNT).zip(planes) {
                P::encode(dst, Q::decode(s).convert());
            }
        }

        Self {
            data,
            width: src.width,
            height: src.height,
            _format: PhantomData,
        }
    }

    /// Converts to another pixel format and/or scalar type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgbuf_core::{Image, ImageRgb, PixelBgra};
    ///
    /// let rgb = ImageRgb::new(2, 2);
    /// let bgra: Image<PixelBgra<f32>> = rgb.convert();
    /// assert_eq!(bgra.dimensions(), (2, 2));
    /// assert_eq!(bgra.color(1, 1).blue, 1.0);
    /// ```
    #[inline]
    pub fn convert<Q: PixelFormat>(&self) -> Image<Q> {
        Image::from_image(self)
    }

    /// Replaces this image with a conversion of `src`.
    ///
    /// The new buffer is fully built before the old one is released. Passing
    /// the image itself is ruled out by the borrow checker; use
    /// `img.clone_from(&other)` for same-format copies.
    pub fn assign_from<Q: PixelFormat>(&mut self, src: &Image<Q>) {
        *self = Self::from_image(src);
    }

    /// Moves the buffer out, leaving an empty 0x0 image behind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgbuf_core::ImageRgb;
    ///
    /// let mut a = ImageRgb::new(8, 8);
    /// let b = a.take();
    /// assert_eq!(b.dimensions(), (8, 8));
    /// assert!(a.is_empty());
    /// assert!(a.data().is_empty());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of scalars per pixel.
    #[inline]
    pub const fn plane_count(&self) -> usize {
        P::PLANE_COUNT
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw planes, `width * height * PLANE_COUNT` long.
    #[inline]
    pub fn data(&self) -> &[P::Scalar] {
        &self.data
    }

    /// Returns the raw planes for in-place bulk writes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [P::Scalar] {
        &mut self.data
    }

    /// Consumes the image and returns its raw planes.
    #[inline]
    pub fn into_vec(self) -> Vec<P::Scalar> {
        self.data
    }

    #[inline]
    fn offset(&self, col: u32, row: u32) -> usize {
        (col as usize + row as usize * self.width as usize) * P::PLANE_COUNT
    }

    /// Returns the raw planes of the pixel at (col, row).
    ///
    /// # Panics
    ///
    /// Panics if (col, row) is outside the buffer.
    #[inline]
    pub fn pixel_planes(&self, col: u32, row: u32) -> &[P::Scalar] {
        debug_assert!(col < self.width && row < self.height, "pixel out of bounds");
        let offset = self.offset(col, row);
        &self.data[offset..offset + P::PLANE_COUNT]
    }

    /// Returns the color of the pixel at (col, row).
    ///
    /// Requires `col < width` and `row < height`. This is checked with
    /// `debug_assert!`; in release builds a column past the end of a row
    /// reads the next row, and an index past the buffer panics.
    #[inline]
    pub fn color(&self, col: u32, row: u32) -> Color<P::Scalar> {
        P::decode(self.pixel_planes(col, row))
    }

    /// Returns the color at (col, row), or `None` if out of bounds.
    #[inline]
    pub fn get_color(&self, col: u32, row: u32) -> Option<Color<P::Scalar>> {
        if col < self.width && row < self.height {
            Some(self.color(col, row))
        } else {
            None
        }
    }

    /// Encodes `color` into the pixel at (col, row).
    ///
    /// Same bounds contract as [`color`](Self::color).
    #[inline]
    pub fn set_color(&mut self, col: u32, row: u32, color: Color<P::Scalar>) {
        debug_assert!(col < self.width && row < self.height, "pixel out of bounds");
        let offset = self.offset(col, row);
        P::encode(&mut self.data[offset..offset + P::PLANE_COUNT], color);
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color<P::Scalar>) {
        for chunk in self.data.chunks_exact_mut(P::PLANE_COUNT) {
            P::encode(chunk, color);
        }
    }

    /// Returns a row of raw planes.
    ///
    /// # Panics
    ///
    /// Panics if row >= height.
    #[inline]
    pub fn row(&self, row: u32) -> &[P::Scalar] {
        debug_assert!(row < self.height, "row out of bounds");
        let start = self.offset(0, row);
        &self.data[start..start + self.width as usize * P::PLANE_COUNT]
    }

    /// Iterates over all pixels as `(col, row, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color<P::Scalar>)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| (col, row, self.color(col, row)))
        })
    }
}

/// `width * height * PLANE_COUNT`, or `None` on overflow.
fn buffer_len<P: PixelFormat>(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(P::PLANE_COUNT)
}

fn checked_len<P: PixelFormat>(width: u32, height: u32) -> Result<usize> {
    buffer_len::<P>(width, height).ok_or_else(|| {
        Error::allocation_failed(
            usize::MAX,
            format!("{width}x{height}x{} overflows usize", P::PLANE_COUNT),
        )
    })
}

impl<P: PixelFormat> Default for Image<P> {
    /// An empty 0x0 image without storage.
    fn default() -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
            _format: PhantomData,
        }
    }
}

impl<P: PixelFormat> Clone for Image<P> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            width: self.width,
            height: self.height,
            _format: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.width = source.width;
        self.height = source.height;
    }
}

impl<P: PixelFormat> PartialEq for Image<P> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl<P: PixelFormat, Q: PixelFormat> From<&Image<Q>> for Image<P> {
    #[inline]
    fn from(src: &Image<Q>) -> Self {
        Self::from_image(src)
    }
}

impl<P: PixelFormat> std::fmt::Debug for Image<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &P::LAYOUT)
            .field("format", &<P::Scalar as Channel>::FORMAT)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Layout;

    #[test]
    fn test_image_new() {
        let img: Image<PixelRgb<f32>> = Image::new(100, 50);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.plane_count(), 3);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.data().len(), 15000);
    }

    #[test]
    fn test_image_new_is_opaque_blue() {
        let rgba = ImageRgba::new(3, 2);
        assert!(rgba.pixels().all(|(_, _, c)| c == Color::new(0, 0, 255, 255)));
        assert_eq!(&rgba.data()[..4], &[0, 0, 255, 255]);

        let bgr: Image<PixelBgr<u16>> = Image::new(2, 2);
        assert_eq!(bgr.pixel_planes(1, 1), &[65535, 0, 0]);
    }

    #[test]
    fn test_image_zero_dimensions() {
        let img = ImageRgba::new(0, 10);
        assert!(img.is_empty());
        assert!(img.data().is_empty());
        assert_eq!(img.pixels().count(), 0);

        let converted: Image<PixelGray<f64>> = img.convert();
        assert_eq!(converted.dimensions(), (0, 10));
        assert!(converted.data().is_empty());
    }

    #[test]
    fn test_try_new() {
        let img = ImageBgra::try_new(4, 4).unwrap();
        assert_eq!(img, ImageBgra::new(4, 4));

        let err = ImageRgba::try_new(u32::MAX, u32::MAX).unwrap_err();
        assert!(err.is_allocation_error());
    }

    #[test]
    fn test_from_raw() {
        let img = ImageRgba::from_raw(1, 1, &[128, 0, 128, 255]).unwrap();
        assert_eq!(
            img.color(0, 0),
            Color {
                red: 128,
                green: 0,
                blue: 128,
                alpha: 255
            }
        );
    }

    #[test]
    fn test_from_raw_ignores_trailing() {
        let raw = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let img = ImageBgr::from_raw(2, 1, &raw).unwrap();
        assert_eq!(img.data(), &raw[..6]);
        assert_eq!(img.color(1, 0), Color::new(6, 5, 4, 255));
    }

    #[test]
    fn test_from_raw_too_small() {
        let err = ImageRgb::from_raw(2, 2, &[0u8; 11]).unwrap_err();
        assert!(matches!(err, Error::BufferTooSmall { expected: 12, got: 11 }));
    }

    #[test]
    fn test_from_raw_gray_is_exact() {
        let raw: Vec<u8> = (0..=255).collect();
        let img = ImageGray::from_raw(16, 16, &raw).unwrap();
        assert_eq!(img.data(), raw.as_slice());
    }

    #[test]
    fn test_from_vec() {
        let img: Image<PixelRgba<f32>> = Image::from_vec(2, 2, vec![0.5; 16]).unwrap();
        assert_eq!(img.color(1, 1), Color::new(0.5, 0.5, 0.5, 0.5));

        let result: Result<Image<PixelRgba<f32>>> = Image::from_vec(2, 2, vec![0.5; 15]);
        assert!(result.unwrap_err().is_shape_error());
    }

    #[test]
    fn test_set_get_color() {
        let mut img: Image<PixelBgra<u8>> = Image::new(10, 10);
        img.set_color(5, 7, Color::new(1, 2, 3, 4));
        assert_eq!(img.color(5, 7), Color::new(1, 2, 3, 4));
        assert_eq!(img.color(0, 0), Color::blue());
        assert_eq!(img.pixel_planes(5, 7), &[3, 2, 1, 4]);
    }

    #[test]
    fn test_indexing_is_row_major() {
        let mut img = ImageRgb::new(3, 2);
        img.set_color(2, 1, Color::opaque(9, 8, 7));
        let (col, row, width, planes) = (2, 1, 3, 3);
        let index = (col + row * width) * planes;
        assert_eq!(&img.data()[index..index + 3], &[9, 8, 7]);
        assert_eq!(&img.row(1)[6..9], &[9, 8, 7]);
    }

    #[test]
    fn test_get_color_out_of_bounds() {
        let img = ImageGray::new(4, 3);
        assert!(img.get_color(3, 2).is_some());
        assert!(img.get_color(4, 0).is_none());
        assert!(img.get_color(0, 3).is_none());
    }

    #[test]
    fn test_fill() {
        let mut img = ImageRgb::new(5, 5);
        img.fill(Color::opaque(1, 2, 3));
        for (_, _, c) in img.pixels() {
            assert_eq!(c, Color::new(1, 2, 3, 255));
        }
    }

    #[test]
    fn test_pixels_order() {
        let img = ImageGray::from_raw(2, 2, &[10, 20, 30, 40]).unwrap();
        let coords: Vec<_> = img.pixels().map(|(c, r, col)| (c, r, col.red)).collect();
        assert_eq!(coords, [(0, 0, 10), (1, 0, 20), (0, 1, 30), (1, 1, 40)]);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut src = ImageRgba::new(4, 4);
        let copy = src.clone();
        src.set_color(0, 0, Color::new(9, 9, 9, 9));
        assert_eq!(copy.color(0, 0), Color::blue());
        assert_ne!(copy.data().as_ptr(), src.data().as_ptr());
    }

    #[test]
    fn test_self_assignment() {
        let mut img = ImageBgr::new(3, 3);
        img.set_color(1, 1, Color::opaque(4, 5, 6));
        let before = img.clone();

        img = img.clone();
        assert_eq!(img, before);

        let same = img.clone();
        img.clone_from(&same);
        assert_eq!(img, before);
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut src = ImageRgb::new(6, 2);
        src.set_color(5, 1, Color::opaque(1, 2, 3));
        let expected = src.data().to_vec();

        let dst = src.take();
        assert_eq!(dst.dimensions(), (6, 2));
        assert_eq!(dst.data(), expected.as_slice());
        assert_eq!(src.dimensions(), (0, 0));
        assert!(src.data().is_empty());
    }

    #[test]
    fn test_move_assign() {
        let mut src = ImageRgba::new(2, 2);
        let mut dst = ImageRgba::new(9, 9);
        assert_eq!(dst.dimensions(), (9, 9));
        dst = src.take();
        assert_eq!(dst.dimensions(), (2, 2));
        assert_eq!(src, ImageRgba::default());
    }

    #[test]
    fn test_convert_rgb_to_gray() {
        let mut rgb = ImageRgb::new(1, 1);
        rgb.set_color(0, 0, Color::new(100, 150, 200, 255));
        let gray = ImageGray::from_image(&rgb);
        assert_eq!(gray.color(0, 0), Color::new(140, 140, 140, 255));
        assert_eq!(gray.data(), &[140]);
    }

    #[test]
    fn test_convert_same_layout_gray() {
        let gray = ImageGray::from_raw(2, 1, &[128, 255]).unwrap();
        let wide: Image<PixelGray<u16>> = gray.convert();
        assert_eq!(wide.data(), &[32896, 65535]);
        let back: ImageGray = wide.convert();
        assert_eq!(back, gray);
    }

    #[test]
    fn test_assign_from() {
        let mut dst: Image<PixelBgra<f32>> = Image::new(1, 1);
        let src = ImageRgb::filled(3, 2, Color::opaque(255, 0, 0));
        dst.assign_from(&src);
        assert_eq!(dst.dimensions(), (3, 2));
        assert_eq!(dst.color(2, 1), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(dst.pixel_planes(2, 1), &[0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_debug() {
        let img = ImageBgra::new(2, 3);
        let dbg = format!("{:?}", img);
        assert!(dbg.contains("Bgra"));
        assert!(dbg.contains("U8"));
        assert_eq!(PixelBgra::<u8>::LAYOUT, Layout::Bgra);
    }
}
