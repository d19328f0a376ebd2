use crate::image::{Image, Pixel};
use crate::mosaic::SeamConfig;
use crate::trace::{trace_event, trace_span};
use crate::util::{StitchError, StitchResult};

/// Places `images` left to right and blends every internal seam.
///
/// All images must share the first image's height. A single image is
/// returned unchanged.
pub fn merge(images: &[&Image], cfg: &SeamConfig) -> StitchResult<Image> {
    let first = images.first().ok_or(StitchError::EmptyMosaic)?;
    let height = first.height();
    for (index, img) in images.iter().enumerate() {
        if img.height() != height {
            return Err(StitchError::MosaicHeightMismatch {
                index,
                expected: height,
                got: img.height(),
            });
        }
    }

    let total_width: usize = images.iter().map(|img| img.width()).sum();
    let _span = trace_span!("merge", images = images.len(), width = total_width).entered();

    let has_alpha = images.iter().any(|img| img.has_alpha());
    let mut canvas =
        Image::new(total_width, height, Pixel::WHITE)?.with_alpha_channel(has_alpha);
    let mut offset = 0usize;
    for img in images {
        for y in 0..height {
            let src = img.row(y).ok_or(StitchError::InvalidDimensions {
                width: img.width(),
                height,
            })?;
            let dst = canvas.row_mut(y).ok_or(StitchError::InvalidDimensions {
                width: total_width,
                height,
            })?;
            dst[offset..offset + src.len()].copy_from_slice(src);
        }
        offset += img.width();
    }

    // Seams are blended left to right on the assembled canvas.
    let mut seam = 0usize;
    for img in &images[..images.len() - 1] {
        seam += img.width();
        trace_event!("seam", column = seam);
        blend_seam(&mut canvas, seam, cfg)?;
    }

    Ok(canvas)
}

/// Blends the columns around the seam at column `seam` in place.
///
/// Column `seam + d`, for `|d| < half_width`, becomes
/// `left * (h - d) / 2h + right * (h + d) / 2h` where `left` and `right` are
/// the pixels `h` columns to either side.
pub fn blend_seam(canvas: &mut Image, seam: usize, cfg: &SeamConfig) -> StitchResult<()> {
    let half = cfg.half_width;
    let width = canvas.width();
    if half == 0 {
        return Ok(());
    }
    if seam < half || seam + half >= width {
        return Err(StitchError::SeamOutOfBounds { seam, width });
    }

    let steps = (2 * half) as f32;
    for y in 0..canvas.height() {
        let row = canvas.row_mut(y).ok_or(StitchError::InvalidDimensions {
            width,
            height: y + 1,
        })?;
        let left = row[seam - half];
        let right = row[seam + half];
        for x in (seam - half + 1)..(seam + half) {
            // x = seam + d, so x + half - seam = half + d
            let right_steps = (x + half - seam) as f32;
            let left_steps = steps - right_steps;
            row[x] = left * (left_steps / steps) + right * (right_steps / steps);
        }
    }
    Ok(())
}
