//! Rayon-parallel shift scan (feature-gated).
//!
//! The shift domain is cut into contiguous partitions; each partition gets a
//! disjoint slice of the shared activation buffer, so workers never contend.

use crate::kernel::{Kernel, ShiftWindow};
use crate::util::math::partition_bounds;
use rayon::prelude::*;

/// Parallel counterpart of [`scan_partitioned`](crate::kernel::scalar::scan_partitioned).
///
/// Blocks until every partition has been evaluated.
pub fn scan_partitioned_par<K: Kernel>(
    window: &ShiftWindow<'_>,
    start: isize,
    out: &mut [f32],
    parts: usize,
) {
    let mut slices = Vec::with_capacity(parts.max(1));
    let mut rest = out;
    let mut consumed = 0usize;
    for range in partition_bounds(rest.len(), parts) {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.end - consumed);
        slices.push((range.start, head));
        rest = tail;
        consumed = range.end;
    }

    slices.into_par_iter().for_each(|(first, slice)| {
        K::scan_range(window, start + first as isize, slice);
    });
}

#[cfg(test)]
mod tests {
    use super::scan_partitioned_par;
    use crate::image::{Image, Pixel, Region};
    use crate::kernel::scalar::{scan_partitioned, SadScalar};
    use crate::kernel::ShiftWindow;

    #[test]
    fn parallel_scan_matches_sequential() {
        let a = Image::from_fn(64, 3, |x, y| Pixel::rgb((x * 11 ^ y) as u8, (x * 3) as u8, 40))
            .unwrap();
        let b = Image::from_fn(60, 3, |x, y| Pixel::rgb((x * 5 + y) as u8, 9, (x * 13) as u8))
            .unwrap();
        let window = ShiftWindow::new(&a, Region::full(&a), &b, Region::full(&b)).unwrap();
        for parts in [1, 3, 4, 7, 32] {
            let mut seq = vec![0.0f32; 16];
            let mut par = vec![0.0f32; 16];
            scan_partitioned::<SadScalar>(&window, 0, &mut seq, parts);
            scan_partitioned_par::<SadScalar>(&window, 0, &mut par, parts);
            assert_eq!(seq, par);
        }
    }
}
