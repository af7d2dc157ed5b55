//! Format-independent four-channel color.
//!
//! [`Color`] is the interchange value between pixel layouts: every
//! [`PixelFormat`](crate::PixelFormat) decodes its planes into a `Color` and
//! encodes a `Color` back into planes. Alpha is straight (not premultiplied).

use crate::channel::{convert, Channel};
use std::fmt;

/// A color with red, green, blue and alpha channels of the same scalar type.
///
/// # Example
///
/// ```
/// use imgbuf_core::Color;
///
/// let purple = Color::new(128u8, 0, 128, 255);
/// let as_float: Color<f32> = purple.convert();
/// assert_eq!(as_float.alpha, 1.0);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Color<T> {
    /// Red channel value.
    pub red: T,
    /// Green channel value.
    pub green: T,
    /// Blue channel value.
    pub blue: T,
    /// Alpha channel value.
    pub alpha: T,
}

impl<T> Color<T> {
    /// Create a new color.
    #[inline]
    pub const fn new(red: T, green: T, blue: T, alpha: T) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl<T: Channel> Color<T> {
    /// Create an opaque color (alpha = `T::MAX`).
    #[inline]
    pub fn opaque(red: T, green: T, blue: T) -> Self {
        Self::new(red, green, blue, T::MAX)
    }

    /// Create an opaque gray with equal RGB values.
    #[inline]
    pub fn gray(v: T) -> Self {
        Self::opaque(v, v, v)
    }

    /// Opaque black.
    #[inline]
    pub fn black() -> Self {
        Self::gray(T::ZERO)
    }

    /// Opaque white.
    #[inline]
    pub fn white() -> Self {
        Self::gray(T::MAX)
    }

    /// Opaque blue, the fill color of [`Image::new`](crate::Image::new).
    #[inline]
    pub fn blue() -> Self {
        Self::opaque(T::ZERO, T::ZERO, T::MAX)
    }

    /// Get channel values as `[R, G, B, A]`.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Create from `[R, G, B, A]`.
    #[inline]
    pub fn from_array(arr: [T; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Apply a function to each channel, alpha included.
    #[inline]
    pub fn map<U, F: Fn(T) -> U>(self, f: F) -> Color<U> {
        Color::new(f(self.red), f(self.green), f(self.blue), f(self.alpha))
    }

    /// Convert every channel to another scalar type with [`convert`].
    #[inline]
    pub fn convert<U: Channel>(self) -> Color<U> {
        self.map(convert::<U, T>)
    }
}

impl<T: fmt::Debug> fmt::Debug for Color<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("red", &self.red)
            .field("green", &self.green)
            .field("blue", &self.blue)
            .field("alpha", &self.alpha)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Color<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;

    #[test]
    fn test_color_creation() {
        let c = Color::new(1u8, 2, 3, 4);
        assert_eq!(c.to_array(), [1, 2, 3, 4]);
        assert_eq!(Color::from_array([1u8, 2, 3, 4]), c);
    }

    #[test]
    fn test_opaque_uses_type_max() {
        assert_eq!(Color::<u8>::opaque(1, 2, 3).alpha, 255);
        assert_eq!(Color::<u16>::opaque(1, 2, 3).alpha, 65535);
        assert_eq!(Color::<f32>::opaque(0.1, 0.2, 0.3).alpha, 1.0);
        assert_eq!(Color::<f16>::gray(f16::ZERO).alpha, f16::ONE);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::<u8>::blue(), Color::new(0, 0, 255, 255));
        assert_eq!(Color::<u8>::white(), Color::new(255, 255, 255, 255));
        assert_eq!(Color::<f64>::black(), Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_convert() {
        let c: Color<f32> = Color::new(255u8, 0, 51, 255).convert();
        assert_eq!(c.red, 1.0);
        assert_eq!(c.green, 0.0);
        assert!((c.blue - 0.2).abs() < 1e-6);
        assert_eq!(c.alpha, 1.0);

        let back: Color<u8> = Color::new(1.0f32, 0.5, 0.0, 1.0).convert();
        assert_eq!(back, Color::new(255, 127, 0, 255));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::new(1u8, 2, 3, 4).to_string(), "RGBA(1, 2, 3, 4)");
    }
}
