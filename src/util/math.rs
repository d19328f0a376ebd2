//! Integer partitioning helpers shared by the scan and strip loops.

use std::ops::Range;

/// Number of `thickness`-row strips needed to cover `height` rows.
pub(crate) fn strip_count(height: usize, thickness: usize) -> usize {
    height.div_ceil(thickness)
}

/// Row range of strip `index`, clipped to `height`.
pub(crate) fn strip_rows(index: usize, thickness: usize, height: usize) -> Range<usize> {
    let start = index * thickness;
    let end = (start + thickness).min(height);
    start..end
}

/// Splits `0..len` into `parts` contiguous ranges with bounds `len * k / parts`.
///
/// Ranges may be empty when `len < parts`; their union is always `0..len`.
pub(crate) fn partition_bounds(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    (0..parts)
        .map(|k| (len * k / parts)..(len * (k + 1) / parts))
        .collect()
}

/// `floor(width * scale)` clamped at zero.
pub(crate) fn scaled_width(width: usize, scale: f32) -> usize {
    let scaled = (width as f32 * scale).floor();
    if scaled.is_finite() && scaled > 0.0 {
        scaled as usize
    } else {
        0
    }
}
