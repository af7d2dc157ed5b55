//! Cross-layout and cross-type conversion checks over every scalar type.

use half::f16;
use imgbuf_core::prelude::*;

/// Deterministic pattern covering a spread of channel values.
fn pattern<P: PixelFormat>(width: u32, height: u32) -> Image<P> {
    let mut img = Image::<P>::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let v = |k: u32| ((col * 37 + row * 11 + k * 71) % 256) as u8;
            let color = Color::new(v(0), v(1), v(2), v(3)).convert::<P::Scalar>();
            img.set_color(col, row, color);
        }
    }
    img
}

/// A -> B -> A keeps every pixel; alpha is max whenever either side lacks it.
fn assert_round_trip<A, B>()
where
    A: PixelFormat,
    B: PixelFormat<Scalar = A::Scalar>,
{
    let src = pattern::<A>(7, 5);
    let mid: Image<B> = src.convert();
    let back: Image<A> = mid.convert();
    assert_eq!(back.dimensions(), src.dimensions());

    let alpha_kept = A::LAYOUT.has_alpha() && B::LAYOUT.has_alpha();
    for (col, row, color) in src.pixels() {
        let mut expected = color;
        if !alpha_kept {
            expected.alpha = A::max_value();
        }
        assert_eq!(
            back.color(col, row),
            expected,
            "{:?} -> {:?} at ({col}, {row})",
            A::LAYOUT,
            B::LAYOUT
        );

        let through = mid.color(col, row);
        assert_eq!(
            (through.red, through.green, through.blue),
            (color.red, color.green, color.blue)
        );
        if !B::LAYOUT.has_alpha() {
            assert_eq!(through.alpha, B::max_value());
        }
    }
}

fn round_trip_all<T: Channel>() {
    macro_rules! pairs {
        ($($a:ident => [$($b:ident),*]),* $(,)?) => {
            $($(assert_round_trip::<$a<T>, $b<T>>();)*)*
        };
    }

    pairs! {
        PixelRgb => [PixelRgb, PixelBgr, PixelRgba, PixelBgra],
        PixelBgr => [PixelRgb, PixelBgr, PixelRgba, PixelBgra],
        PixelRgba => [PixelRgb, PixelBgr, PixelRgba, PixelBgra],
        PixelBgra => [PixelRgb, PixelBgr, PixelRgba, PixelBgra],
    }
}

/// Converts a default (opaque blue) image and checks that the blue plane
/// sits at `src_index` in the source and `dst_index` in the destination.
fn assert_blue_plane<S, D>(src_index: usize, dst_index: usize)
where
    S: PixelFormat,
    D: PixelFormat,
{
    let src = Image::<S>::new(1, 500);
    let dst = Image::<D>::from(&src);
    assert_eq!(src.dimensions(), dst.dimensions());

    for row in 0..src.height() {
        for col in 0..src.width() {
            assert_eq!(src.pixel_planes(col, row)[src_index], S::max_value());
            assert_eq!(dst.pixel_planes(col, row)[dst_index], D::max_value());
        }
    }
}

fn blue_plane_all<T: Channel>() {
    assert_blue_plane::<PixelRgb<T>, PixelRgba<T>>(2, 2);
    assert_blue_plane::<PixelRgb<T>, PixelBgr<T>>(2, 0);
    assert_blue_plane::<PixelRgb<T>, PixelBgra<T>>(2, 0);
    assert_blue_plane::<PixelRgba<T>, PixelBgr<T>>(2, 0);
    assert_blue_plane::<PixelRgba<T>, PixelBgra<T>>(2, 0);
    assert_blue_plane::<PixelBgr<T>, PixelBgra<T>>(0, 0);
}

macro_rules! per_type_tests {
    ($($name:ident => $t:ty),* $(,)?) => {
        mod per_type {
            use super::*;
            $(
                #[test]
                fn $name() {
                    round_trip_all::<$t>();
                    blue_plane_all::<$t>();
                }
            )*
        }
    };
}

per_type_tests! {
    test_u8 => u8,
    test_u16 => u16,
    test_u32 => u32,
    test_u64 => u64,
    test_i32 => i32,
    test_i64 => i64,
    test_f16 => f16,
    test_f32 => f32,
    test_f64 => f64,
}

#[test]
fn test_integer_widening_round_trip() {
    let src = pattern::<PixelRgba<u8>>(9, 4);

    let wide: Image<PixelBgra<u16>> = src.convert();
    assert_eq!(ImageRgba::from(&wide), src);

    let wider: Image<PixelRgba<u64>> = src.convert();
    assert_eq!(ImageRgba::from(&wider), src);
}

#[test]
fn test_float_alpha_synthesized() {
    let rgb: Image<PixelBgr<f16>> = pattern(3, 3);
    let rgba: Image<PixelRgba<f64>> = rgb.convert();
    assert!(rgba.pixels().all(|(_, _, c)| c.alpha == 1.0));
}
