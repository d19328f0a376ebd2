//! Horizontal shift activation kernels.
//!
//! A [`ShiftWindow`] pairs a reference region `a` with a sliding region `b` of
//! equal height. The activation of a shift `s` is the summed pixel difference
//! between `a` at column `i + s` and `b` at column `i` over every overlapping
//! column and every row. Lower activation means better alignment.

use crate::image::{Image, Pixel, Region, MAX_ABS_DIFF_SUM};
use crate::util::{StitchError, StitchResult};

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Validated pair of regions for shift evaluation.
#[derive(Clone, Copy, Debug)]
pub struct ShiftWindow<'a> {
    a: &'a Image,
    region_a: Region,
    b: &'a Image,
    region_b: Region,
}

impl<'a> ShiftWindow<'a> {
    /// Pairs two regions; `b` slides over `a`.
    ///
    /// Fails when a region leaves its image, the heights differ, or `b` is
    /// wider than `a`.
    pub fn new(
        a: &'a Image,
        region_a: Region,
        b: &'a Image,
        region_b: Region,
    ) -> StitchResult<Self> {
        region_a.check_within(a)?;
        region_b.check_within(b)?;
        if region_a.height() != region_b.height() {
            return Err(StitchError::RegionHeightMismatch {
                a: region_a.height(),
                b: region_b.height(),
            });
        }
        if region_a.width() < region_b.width() {
            return Err(StitchError::RegionTooWide {
                width_a: region_a.width(),
                width_b: region_b.width(),
            });
        }
        Ok(Self {
            a,
            region_a,
            b,
            region_b,
        })
    }

    pub fn width_a(&self) -> usize {
        self.region_a.width()
    }

    pub fn width_b(&self) -> usize {
        self.region_b.width()
    }

    pub fn height(&self) -> usize {
        self.region_a.height()
    }

    /// Column offsets into `a` and `b` and the overlap length for `shift`.
    ///
    /// Returns `None` when the regions do not overlap at all.
    pub(crate) fn overlap(&self, shift: isize) -> Option<(usize, usize, usize)> {
        let width_a = self.width_a() as isize;
        let width_b = self.width_b() as isize;
        let (off_a, off_b, len) = if shift <= 0 {
            // b entering a: only its trailing columns overlap.
            (0, -shift, width_b + shift)
        } else if width_a - shift >= width_b {
            (shift, 0, width_b)
        } else {
            // b leaving a on the right.
            (shift, 0, width_a - shift)
        };
        if len <= 0 {
            return None;
        }
        Some((off_a as usize, off_b as usize, len as usize))
    }

    /// Overlapping row slices of `a` and `b` for region row `r`.
    ///
    /// `r < height()` and the overlap from [`overlap`](Self::overlap) keep both
    /// slices inside the regions validated by [`new`](Self::new).
    #[inline]
    pub(crate) fn rows(
        &self,
        r: usize,
        off_a: usize,
        off_b: usize,
        len: usize,
    ) -> (&'a [Pixel], &'a [Pixel]) {
        let start_a = (self.region_a.y0() + r) * self.a.width() + self.region_a.x0() + off_a;
        let start_b = (self.region_b.y0() + r) * self.b.width() + self.region_b.x0() + off_b;
        (
            &self.a.pixels()[start_a..start_a + len],
            &self.b.pixels()[start_b..start_b + len],
        )
    }
}

/// Converts a summed integer channel difference into an activation.
#[inline]
pub(crate) fn normalize_activation(total: u64) -> f32 {
    (total as f64 / MAX_ABS_DIFF_SUM as f64) as f32
}

/// Kernel trait for activation evaluation.
pub trait Kernel {
    /// Activation of a single shift.
    fn activation_at(window: &ShiftWindow<'_>, shift: isize) -> f32;

    /// Fills `out[i]` with the activation of shift `start + i`.
    fn scan_range(window: &ShiftWindow<'_>, start: isize, out: &mut [f32]) {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = Self::activation_at(window, start + i as isize);
        }
    }
}
