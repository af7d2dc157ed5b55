//! Channel scalar types and range-preserving scalar conversion.
//!
//! Every plane of an image stores one value of a [`Channel`] type. Each type
//! has a *canonical range*: `[0, T::MAX]` for integers and `[0.0, 1.0]` for
//! floats. [`convert`] maps a value linearly from one canonical range onto
//! another:
//!
//! ```text
//! target = value * MAX(Target) / MAX(Source)
//! ```
//!
//! Integer pairs are computed in `i128`, any pair involving a float in `f64`.
//! The result is narrowed with an `as` cast, which truncates toward zero.
//!
//! # Out-of-range values
//!
//! No clamping is applied. A float above `1.0` stays above `1.0` when
//! converted to another float, and saturates at the type bound (Rust `as`
//! semantics) when converted to an integer. Garbage in, garbage out: callers
//! who need clamped values should clamp before converting.
//!
//! # Example
//!
//! ```rust
//! use imgbuf_core::channel::convert;
//!
//! assert_eq!(convert::<f32, u8>(255), 1.0);
//! assert_eq!(convert::<u8, f32>(1.0), 255);
//! assert_eq!(convert::<u8, f32>(0.5), 127);
//! assert_eq!(convert::<u16, u8>(255), 65535);
//! ```

use crate::format::DataFormat;
use half::f16;
use std::fmt;

/// Scalar type usable as one plane of a pixel.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i32`, `i64`, [`f16`], `f32`
/// and `f64`.
///
/// # Constants
///
/// - [`FORMAT`](Channel::FORMAT) - runtime descriptor of the type
/// - [`MAX`](Channel::MAX) - canonical "fully on" value (`1.0` for floats)
/// - [`ZERO`](Channel::ZERO) - canonical "off" value
pub trait Channel:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    /// Runtime descriptor of this scalar type.
    const FORMAT: DataFormat;

    /// Canonical maximum: the type maximum for integers, `1.0` for floats.
    const MAX: Self;

    /// Zero.
    const ZERO: Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows from `f64` with an `as` cast (truncation toward zero).
    fn from_f64(v: f64) -> Self;

    /// Widens to `i128`. Floats are truncated toward zero.
    fn to_i128(self) -> i128;

    /// Narrows from `i128` with an `as` cast (wrapping for integers).
    fn from_i128(v: i128) -> Self;
}

macro_rules! impl_int_channel {
    ($($t:ty => $format:ident),* $(,)?) => {
        $(
            impl Channel for $t {
                const FORMAT: DataFormat = DataFormat::$format;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(v: i128) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_int_channel! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i32 => I32,
    i64 => I64,
}

impl Channel for f16 {
    const FORMAT: DataFormat = DataFormat::F16;
    const MAX: Self = f16::ONE;
    const ZERO: Self = f16::ZERO;

    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        f16::from_f64(v)
    }

    #[inline]
    fn to_i128(self) -> i128 {
        f16::to_f64(self) as i128
    }

    #[inline]
    fn from_i128(v: i128) -> Self {
        f16::from_f64(v as f64)
    }
}

impl Channel for f32 {
    const FORMAT: DataFormat = DataFormat::F32;
    const MAX: Self = 1.0;
    const ZERO: Self = 0.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_i128(self) -> i128 {
        self as i128
    }

    #[inline]
    fn from_i128(v: i128) -> Self {
        v as f32
    }
}

impl Channel for f64 {
    const FORMAT: DataFormat = DataFormat::F64;
    const MAX: Self = 1.0;
    const ZERO: Self = 0.0;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_i128(self) -> i128 {
        self as i128
    }

    #[inline]
    fn from_i128(v: i128) -> Self {
        v as f64
    }
}

/// Rescales `value` from the canonical range of `S` onto that of `T`.
///
/// Returns the value unchanged when `S` and `T` are the same type. See the
/// [module docs](self) for the arithmetic and the out-of-range policy.
///
/// Every supported pair of distinct integer types fits its intermediate
/// product `value * MAX(T)` in `i128`.
#[inline]
pub fn convert<T: Channel, S: Channel>(value: S) -> T {
    if S::FORMAT == T::FORMAT {
        return if S::FORMAT.is_float() {
            T::from_f64(value.to_f64())
        } else {
            T::from_i128(value.to_i128())
        };
    }

    if S::FORMAT.is_integer() && T::FORMAT.is_integer() {
        T::from_i128(value.to_i128() * T::MAX.to_i128() / S::MAX.to_i128())
    } else {
        T::from_f64(value.to_f64() * T::MAX.to_f64() / S::MAX.to_f64())
    }
}
