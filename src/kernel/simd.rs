//! SIMD-accelerated activation kernel using the `wide` crate.
//!
//! The overlapping columns of each row are processed 8 pixels at a time:
//! channel differences are taken in `i32x8` lanes and summed as integers, so
//! the result is bit-identical to the scalar kernel.

use crate::image::Pixel;
use crate::kernel::{normalize_activation, Kernel, ShiftWindow};
use wide::i32x8;

const LANES: usize = 8;

/// Loads one color channel of 8 pixels into i32 lanes.
#[inline]
fn load_channel(pixels: &[Pixel], channel: impl Fn(&Pixel) -> u8) -> i32x8 {
    i32x8::from([
        channel(&pixels[0]) as i32,
        channel(&pixels[1]) as i32,
        channel(&pixels[2]) as i32,
        channel(&pixels[3]) as i32,
        channel(&pixels[4]) as i32,
        channel(&pixels[5]) as i32,
        channel(&pixels[6]) as i32,
        channel(&pixels[7]) as i32,
    ])
}

/// Horizontal sum of i32x8.
#[inline]
fn hsum(v: i32x8) -> u64 {
    v.to_array().iter().map(|&x| x as u64).sum()
}

/// SIMD sum-of-absolute-differences kernel.
pub struct SadSimd;

impl SadSimd {
    fn row_sum(row_a: &[Pixel], row_b: &[Pixel]) -> u64 {
        let len = row_a.len();
        let simd_end = len / LANES * LANES;
        let mut acc = i32x8::ZERO;

        let mut x = 0;
        while x < simd_end {
            let a = &row_a[x..x + LANES];
            let b = &row_b[x..x + LANES];
            acc += (load_channel(a, |p| p.r) - load_channel(b, |p| p.r)).abs();
            acc += (load_channel(a, |p| p.g) - load_channel(b, |p| p.g)).abs();
            acc += (load_channel(a, |p| p.b) - load_channel(b, |p| p.b)).abs();
            x += LANES;
        }

        // Scalar remainder
        let mut total = hsum(acc);
        for (pa, pb) in row_a[simd_end..].iter().zip(&row_b[simd_end..]) {
            total += pa.abs_diff_sum(pb) as u64;
        }
        total
    }
}

impl Kernel for SadSimd {
    fn activation_at(window: &ShiftWindow<'_>, shift: isize) -> f32 {
        let Some((off_a, off_b, len)) = window.overlap(shift) else {
            return 0.0;
        };
        let mut total = 0u64;
        for r in 0..window.height() {
            let (row_a, row_b) = window.rows(r, off_a, off_b, len);
            total += Self::row_sum(row_a, row_b);
        }
        normalize_activation(total)
    }
}

#[cfg(test)]
mod tests {
    use super::SadSimd;
    use crate::image::{Image, Pixel, Region};
    use crate::kernel::scalar::SadScalar;
    use crate::kernel::{Kernel, ShiftWindow};

    #[test]
    fn simd_matches_scalar_with_remainder() {
        let a = Image::from_fn(37, 3, |x, y| Pixel::rgb((x * 29 + y) as u8, (x * x) as u8, 200))
            .unwrap();
        let b = Image::from_fn(30, 3, |x, y| Pixel::rgb((x * 17) as u8, (y * 90) as u8, 3))
            .unwrap();
        let window = ShiftWindow::new(&a, Region::full(&a), &b, Region::full(&b)).unwrap();
        for shift in -4..12 {
            assert_eq!(
                SadSimd::activation_at(&window, shift),
                SadScalar::activation_at(&window, shift),
                "shift {shift}"
            );
        }
    }
}
