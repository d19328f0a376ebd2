//! Scalar reference kernel for sum-of-differences activation.

use crate::kernel::{normalize_activation, Kernel, ShiftWindow};
use crate::util::math::partition_bounds;

/// Scalar sum-of-absolute-differences kernel.
pub struct SadScalar;

impl Kernel for SadScalar {
    fn activation_at(window: &ShiftWindow<'_>, shift: isize) -> f32 {
        let Some((off_a, off_b, len)) = window.overlap(shift) else {
            return 0.0;
        };
        let mut total = 0u64;
        for r in 0..window.height() {
            let (row_a, row_b) = window.rows(r, off_a, off_b, len);
            for (pa, pb) in row_a.iter().zip(row_b) {
                total += pa.abs_diff_sum(pb) as u64;
            }
        }
        normalize_activation(total)
    }
}

/// Evaluates `out` as `parts` contiguous partitions, one after another.
///
/// Produces the same values as the parallel variant; useful when the rayon
/// feature is disabled or parallelism is turned off in the config.
pub fn scan_partitioned<K: Kernel>(
    window: &ShiftWindow<'_>,
    start: isize,
    out: &mut [f32],
    parts: usize,
) {
    for range in partition_bounds(out.len(), parts) {
        let offset = start + range.start as isize;
        K::scan_range(window, offset, &mut out[range]);
    }
}

#[cfg(test)]
mod tests {
    use super::{scan_partitioned, SadScalar};
    use crate::image::{Image, Pixel, Region};
    use crate::kernel::{Kernel, ShiftWindow};

    #[test]
    fn identical_rows_have_zero_activation_at_zero_shift() {
        let img = Image::from_fn(12, 3, |x, y| Pixel::rgb((x * 20) as u8, (y * 50) as u8, 0))
            .unwrap();
        let window = ShiftWindow::new(&img, Region::full(&img), &img, Region::full(&img)).unwrap();
        assert_eq!(SadScalar::activation_at(&window, 0), 0.0);
        assert!(SadScalar::activation_at(&window, 1) > 0.0);
    }

    #[test]
    fn negative_shift_compares_trailing_columns_of_b() {
        // a = [0, 255, 0, ...]; b shifted so b[i + 1] == a[i].
        let a = Image::from_fn(8, 1, |x, _| if x == 1 { Pixel::WHITE } else { Pixel::BLACK })
            .unwrap();
        let b = Image::from_fn(8, 1, |x, _| if x == 2 { Pixel::WHITE } else { Pixel::BLACK })
            .unwrap();
        let window = ShiftWindow::new(&a, Region::full(&a), &b, Region::full(&b)).unwrap();
        assert_eq!(SadScalar::activation_at(&window, -1), 0.0);
        assert_eq!(SadScalar::activation_at(&window, 0), 2.0);
    }

    #[test]
    fn partitioned_scan_matches_direct_scan() {
        let img = Image::from_fn(40, 2, |x, y| Pixel::rgb((x * 7 + y) as u8, 3, (x * x) as u8))
            .unwrap();
        let window = ShiftWindow::new(&img, Region::full(&img), &img, Region::full(&img)).unwrap();
        let mut direct = vec![0.0f32; 10];
        SadScalar::scan_range(&window, 0, &mut direct);
        let mut parts = vec![0.0f32; 10];
        scan_partitioned::<SadScalar>(&window, 0, &mut parts, 4);
        assert_eq!(direct, parts);
    }
}
