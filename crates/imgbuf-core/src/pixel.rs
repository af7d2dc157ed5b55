//! Pixel formats: how one pixel's planes map to a [`Color`].
//!
//! A pixel format is a stateless policy, realized as a zero-sized marker type
//! implementing [`PixelFormat`]. It is parameterized by the scalar type of its
//! planes:
//!
//! - [`PixelRgb`] - 3 planes `[R, G, B]`
//! - [`PixelBgr`] - 3 planes `[B, G, R]`
//! - [`PixelRgba`] - 4 planes `[R, G, B, A]`
//! - [`PixelBgra`] - 4 planes `[B, G, R, A]`
//! - [`PixelGray`] - 1 luminance plane
//!
//! Formats without an alpha plane decode alpha as `T::MAX` and drop it on
//! encode. Gray decodes by replicating its plane into R, G and B, and encodes
//! with the luma weights `0.299*R + 0.587*G + 0.114*B`, truncated to `T`.
//!
//! # Round trips
//!
//! `encode(decode(planes)) == planes` holds for the four RGB-family formats.
//! Gray is lossy: even a neutral gray `(v, v, v)` may encode to `v - 1`
//! because the weights do not sum to exactly `1.0` in binary floating point.
//!
//! # Example
//!
//! ```
//! use imgbuf_core::{Color, PixelBgra, PixelFormat};
//!
//! let color = PixelBgra::<u8>::decode(&[10, 20, 30, 40]);
//! assert_eq!(color, Color::new(30, 20, 10, 40));
//!
//! let mut planes = [0u8; 4];
//! PixelBgra::<u8>::encode(&mut planes, color);
//! assert_eq!(planes, [10, 20, 30, 40]);
//! ```

use crate::channel::Channel;
use crate::color::Color;
use crate::format::Layout;
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// Luma Weights
// ============================================================================

/// Luma weight of the red channel.
pub const LUMA_R: f64 = 0.299;

/// Luma weight of the green channel.
pub const LUMA_G: f64 = 0.587;

/// Luma weight of the blue channel.
pub const LUMA_B: f64 = 0.114;

/// Luma weights as an array [R, G, B].
pub const LUMA: [f64; 3] = [LUMA_R, LUMA_G, LUMA_B];

/// Grayscale value of a color: `0.299*R + 0.587*G + 0.114*B`.
///
/// Computed in `f64` and narrowed with [`Channel::from_f64`], so integer
/// results are truncated. Alpha is ignored.
///
/// # Example
/// ```
/// use imgbuf_core::{pixel::luma, Color};
/// // 29.9 + 88.05 + 22.8 = 140.75
/// assert_eq!(luma(Color::new(100u8, 150, 200, 255)), 140);
/// ```
#[inline]
pub fn luma<T: Channel>(color: Color<T>) -> T {
    T::from_f64(
        LUMA_R * color.red.to_f64() + LUMA_G * color.green.to_f64() + LUMA_B * color.blue.to_f64(),
    )
}

/// Layout policy for the planes of one pixel.
///
/// # Constants
///
/// - [`PLANE_COUNT`](PixelFormat::PLANE_COUNT) - scalars stored per pixel
/// - [`LAYOUT`](PixelFormat::LAYOUT) - runtime tag of the format
///
/// # Contract
///
/// `decode` and `encode` receive exactly `PLANE_COUNT` scalars. Callers
/// (normally [`Image`](crate::Image)) are responsible for slicing; the length
/// is only checked with `debug_assert!`.
pub trait PixelFormat: 'static {
    /// Scalar type of every plane.
    type Scalar: Channel;

    /// Number of scalars stored per pixel.
    const PLANE_COUNT: usize;

    /// Runtime tag of this format.
    const LAYOUT: Layout;

    /// Canonical "fully on" value of the scalar type.
    #[inline]
    fn max_value() -> Self::Scalar {
        <Self::Scalar as Channel>::MAX
    }

    /// Interpret `PLANE_COUNT` contiguous scalars as a color.
    fn decode(planes: &[Self::Scalar]) -> Color<Self::Scalar>;

    /// Write a color into `PLANE_COUNT` contiguous scalars.
    fn encode(planes: &mut [Self::Scalar], color: Color<Self::Scalar>);
}

macro_rules! pixel_marker {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T>(PhantomData<T>);

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), std::any::type_name::<T>())
            }
        }
    };
}

pixel_marker! {
    /// Three planes in `[R, G, B]` order.
    PixelRgb
}

pixel_marker! {
    /// Three planes in `[B, G, R]` order.
    PixelBgr
}

pixel_marker! {
    /// Four planes in `[R, G, B, A]` order.
    PixelRgba
}

pixel_marker! {
    /// Four planes in `[B, G, R, A]` order.
    PixelBgra
}

pixel_marker! {
    /// One luminance plane.
    PixelGray
}

impl<T: Channel> PixelFormat for PixelRgb<T> {
    type Scalar = T;
    const PLANE_COUNT: usize = 3;
    const LAYOUT: Layout = Layout::Rgb;

    #[inline]
    fn decode(planes: &[T]) -> Color<T> {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        Color::opaque(planes[0], planes[1], planes[2])
    }

    #[inline]
    fn encode(planes: &mut [T], color: Color<T>) {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        planes[0] = color.red;
        planes[1] = color.green;
        planes[2] = color.blue;
    }
}

impl<T: Channel> PixelFormat for PixelBgr<T> {
    type Scalar = T;
    const PLANE_COUNT: usize = 3;
    const LAYOUT: Layout = Layout::Bgr;

    #[inline]
    fn decode(planes: &[T]) -> Color<T> {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        Color::opaque(planes[2], planes[1], planes[0])
    }

    #[inline]
    fn encode(planes: &mut [T], color: Color<T>) {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        planes[0] = color.blue;
        planes[1] = color.green;
        planes[2] = color.red;
    }
}

impl<T: Channel> PixelFormat for PixelRgba<T> {
    type Scalar = T;
    const PLANE_COUNT: usize = 4;
    const LAYOUT: Layout = Layout::Rgba;

    #[inline]
    fn decode(planes: &[T]) -> Color<T> {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        Color::new(planes[0], planes[1], planes[2], planes[3])
    }

    #[inline]
    fn encode(planes: &mut [T], color: Color<T>) {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        planes[0] = color.red;
        planes[1] = color.green;
        planes[2] = color.blue;
        planes[3] = color.alpha;
    }
}

impl<T: Channel> PixelFormat for PixelBgra<T> {
    type Scalar = T;
    const PLANE_COUNT: usize = 4;
    const LAYOUT: Layout = Layout::Bgra;

    #[inline]
    fn decode(planes: &[T]) -> Color<T> {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        Color::new(planes[2], planes[1], planes[0], planes[3])
    }

    #[inline]
    fn encode(planes: &mut [T], color: Color<T>) {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        planes[0] = color.blue;
        planes[1] = color.green;
        planes[2] = color.red;
        planes[3] = color.alpha;
    }
}

impl<T: Channel> PixelFormat for PixelGray<T> {
    type Scalar = T;
    const PLANE_COUNT: usize = 1;
    const LAYOUT: Layout = Layout::Gray;

    #[inline]
    fn decode(planes: &[T]) -> Color<T> {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        Color::gray(planes[0])
    }

    #[inline]
    fn encode(planes: &mut [T], color: Color<T>) {
        debug_assert_eq!(planes.len(), Self::PLANE_COUNT);
        planes[0] = luma(color);
    }
}

// ============================================================================
// Runtime Dispatch
// ============================================================================

impl Layout {
    /// Decode one pixel with the format this tag stands for.
    ///
    /// Same contract as [`PixelFormat::decode`]: `planes` holds exactly
    /// [`plane_count`](Layout::plane_count) scalars.
    #[inline]
    pub fn decode<T: Channel>(self, planes: &[T]) -> Color<T> {
        match self {
            Self::Rgb => PixelRgb::<T>::decode(planes),
            Self::Bgr => PixelBgr::<T>::decode(planes),
            Self::Rgba => PixelRgba::<T>::decode(planes),
            Self::Bgra => PixelBgra::<T>::decode(planes),
            Self::Gray => PixelGray::<T>::decode(planes),
        }
    }

    /// Encode one pixel with the format this tag stands for.
    #[inline]
    pub fn encode<T: Channel>(self, planes: &mut [T], color: Color<T>) {
        match self {
            Self::Rgb => PixelRgb::<T>::encode(planes, color),
            Self::Bgr => PixelBgr::<T>::encode(planes, color),
            Self::Rgba => PixelRgba::<T>::encode(planes, color),
            Self::Bgra => PixelBgra::<T>::encode(planes, color),
            Self::Gray => PixelGray::<T>::encode(planes, color),
        }
    }
}
