//! Per-strip scale profiles.
//!
//! An image is cut into horizontal strips of `strip_thickness` rows (the last
//! strip clipped to the image). Each strip of the target is correlated against
//! the same rows of the reference; the resulting shifts are normalized by the
//! largest one, so `factor[i] = max_shift / shift[i]`. Strips whose factor is
//! not finite take the previous strip's factor, or 0 for the first strip.

use crate::correlate::{correlate, CorrelationConfig, ShiftResult};
use crate::image::{Image, Region};
use crate::trace::{trace_event, trace_span};
use crate::util::math::{strip_count, strip_rows};
use crate::util::{StitchError, StitchResult};

mod io;

/// Strip thickness in rows used when none is configured.
pub const DEFAULT_STRIP_THICKNESS: usize = 10;

/// Per-strip horizontal scale factors, top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleProfile {
    factors: Vec<f32>,
    strip_thickness: usize,
    max_shift: usize,
}

/// Shift found for one strip during estimation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripShift {
    /// First row of the strip.
    pub row: usize,
    /// Number of rows in the strip.
    pub rows: usize,
    pub result: ShiftResult,
}

/// Profile together with the per-strip correlation results it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileEstimate {
    pub profile: ScaleProfile,
    pub strips: Vec<StripShift>,
}

impl ScaleProfile {
    /// Builds a profile from stored factors.
    pub fn new(factors: Vec<f32>, strip_thickness: usize, max_shift: usize) -> StitchResult<Self> {
        if strip_thickness == 0 {
            return Err(StitchError::InvalidStripThickness);
        }
        Ok(Self {
            factors,
            strip_thickness,
            max_shift,
        })
    }

    /// Converts per-strip shifts into normalized factors.
    ///
    /// Degenerate factors (zero shift, NaN) are forward-filled.
    pub fn from_shifts(shifts: &[usize], strip_thickness: usize) -> StitchResult<Self> {
        let max_shift = shifts.iter().copied().max().unwrap_or(0);
        let mut factors: Vec<f32> = Vec::with_capacity(shifts.len());
        for &shift in shifts {
            let factor = max_shift as f32 / shift as f32;
            let factor = if factor.is_finite() {
                factor
            } else {
                factors.last().copied().unwrap_or(0.0)
            };
            factors.push(factor);
        }
        Self::new(factors, strip_thickness, max_shift)
    }

    pub fn factors(&self) -> &[f32] {
        &self.factors
    }

    pub fn strip_thickness(&self) -> usize {
        self.strip_thickness
    }

    pub fn max_shift(&self) -> usize {
        self.max_shift
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Largest factor, or 0 for an empty profile.
    pub fn max_factor(&self) -> f32 {
        self.factors.iter().copied().fold(0.0f32, f32::max)
    }
}

/// Estimates the scale profile of `target` relative to `reference`.
pub fn estimate(
    reference: &Image,
    target: &Image,
    strip_thickness: usize,
    cfg: &CorrelationConfig,
) -> StitchResult<ScaleProfile> {
    estimate_detailed(reference, target, strip_thickness, cfg).map(|est| est.profile)
}

/// Like [`estimate`], also returning every strip's shift and score.
pub fn estimate_detailed(
    reference: &Image,
    target: &Image,
    strip_thickness: usize,
    cfg: &CorrelationConfig,
) -> StitchResult<ProfileEstimate> {
    if strip_thickness == 0 {
        return Err(StitchError::InvalidStripThickness);
    }
    if reference.height() != target.height() {
        return Err(StitchError::ImageHeightMismatch {
            reference: reference.height(),
            target: target.height(),
        });
    }

    let height = reference.height();
    let n_strips = strip_count(height, strip_thickness);
    let _span = trace_span!("estimate_profile", strips = n_strips, thickness = strip_thickness)
        .entered();

    let mut strips = Vec::with_capacity(n_strips);
    for idx in 0..n_strips {
        let rows = strip_rows(idx, strip_thickness, height);
        let region_a = Region::rows(reference, rows.clone())?;
        let region_b = Region::rows(target, rows.clone())?;
        let result = correlate(reference, region_a, target, region_b, cfg)?;
        trace_event!("strip_shift", row = rows.start, shift = result.shift, score = result.score);
        strips.push(StripShift {
            row: rows.start,
            rows: rows.len(),
            result,
        });
    }

    // The search domain is non-negative.
    let shifts: Vec<usize> = strips
        .iter()
        .map(|s| s.result.shift.max(0) as usize)
        .collect();
    let profile = ScaleProfile::from_shifts(&shifts, strip_thickness)?;
    Ok(ProfileEstimate { profile, strips })
}
