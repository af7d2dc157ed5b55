//! Runtime descriptors for scalar types and pixel layouts.
//!
//! The typed API (`Image<PixelRgb<u8>>`, ...) fixes both the layout and the
//! scalar type at compile time. These descriptors carry the same information
//! as plain values, for logging, for `Debug` output, and for
//! [`raw::convert_planes`](crate::raw::convert_planes) where the layouts are
//! only known at runtime.
//!
//! # Types
//!
//! - [`DataFormat`] - Scalar type of one plane (U8 ... F64)
//! - [`Layout`] - Plane order of one pixel (RGB, BGR, RGBA, BGRA, Gray)
//!
//! # Usage
//!
//! ```rust
//! use imgbuf_core::format::{DataFormat, Layout};
//!
//! assert_eq!(Layout::Bgra.plane_count(), 4);
//! assert!(!Layout::Gray.has_alpha());
//! assert_eq!(DataFormat::F16.bytes_per_channel(), 2);
//! ```

/// Runtime scalar data type of a channel plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataFormat {
    /// 8-bit unsigned integer.
    #[default]
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 16-bit half-precision float.
    F16,
    /// 32-bit single-precision float.
    F32,
    /// 64-bit double-precision float.
    F64,
}

impl DataFormat {
    /// Number of bytes per channel.
    #[inline]
    pub const fn bytes_per_channel(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 | Self::F16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }

    /// Number of bits per channel.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bytes_per_channel() as u32 * 8
    }

    /// Whether this is a floating-point format.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::F64)
    }

    /// Whether this is an integer format.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Whether values of this format can be negative.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        !matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Runtime tag of a pixel layout.
///
/// Each tag corresponds to one [`PixelFormat`](crate::PixelFormat) marker
/// type; the plane orders are:
///
/// | Layout | Planes | Order |
/// |--------|--------|-------|
/// | `Rgb`  | 3 | R, G, B |
/// | `Bgr`  | 3 | B, G, R |
/// | `Rgba` | 4 | R, G, B, A |
/// | `Bgra` | 4 | B, G, R, A |
/// | `Gray` | 1 | luma |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Blue, green, red.
    Bgr,
    /// Red, green, blue, alpha.
    Rgba,
    /// Blue, green, red, alpha.
    Bgra,
    /// Single luminance plane.
    Gray,
}

impl Layout {
    /// All layouts, in declaration order.
    pub const ALL: [Layout; 5] = [Self::Rgb, Self::Bgr, Self::Rgba, Self::Bgra, Self::Gray];

    /// Number of scalars stored per pixel.
    #[inline]
    pub const fn plane_count(&self) -> usize {
        match self {
            Self::Rgb | Self::Bgr => 3,
            Self::Rgba | Self::Bgra => 4,
            Self::Gray => 1,
        }
    }

    /// Whether the layout stores an alpha plane.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba | Self::Bgra)
    }

    /// Whether encoding into this layout loses information.
    #[inline]
    pub const fn is_lossy(&self) -> bool {
        matches!(self, Self::Gray)
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Bgr => "bgr",
            Self::Rgba => "rgba",
            Self::Bgra => "bgra",
            Self::Gray => "gray",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
