//! Scale-correcting horizontal resampling.
//!
//! Every strip of the profile partition is enlarged horizontally by its
//! factor with linear interpolation and written centered into a white canvas
//! whose width is `floor(width * max_factor)`.

use crate::image::{Image, Pixel};
use crate::profile::ScaleProfile;
use crate::trace::{trace_event, trace_span};
use crate::util::math::{scaled_width, strip_count, strip_rows};
use crate::util::{StitchError, StitchResult};

/// Background of the resampled canvas outside the centered strips.
pub const CANVAS_FILL: Pixel = Pixel::WHITE;

/// Resamples `image` strip by strip according to `profile`.
///
/// The profile must have exactly one factor per strip of `image`.
pub fn resize(image: &Image, profile: &ScaleProfile) -> StitchResult<Image> {
    let width = image.width();
    let height = image.height();
    let thickness = profile.strip_thickness();
    let expected = strip_count(height, thickness);
    if profile.len() != expected {
        return Err(StitchError::ProfileMismatch {
            expected,
            got: profile.len(),
        });
    }

    let new_width = scaled_width(width, profile.max_factor());
    if new_width == 0 {
        return Err(StitchError::EmptyProfile);
    }

    let _span = trace_span!("resize", width = width, new_width = new_width, strips = expected)
        .entered();

    let mut canvas =
        Image::new(new_width, height, CANVAS_FILL)?.with_alpha_channel(image.has_alpha());
    for (idx, &scale) in profile.factors().iter().enumerate() {
        let strip_width = scaled_width(width, scale);
        let offset = (new_width - strip_width.min(new_width)) / 2;
        trace_event!("strip_resize", strip = idx, scale = scale, offset = offset);
        for y in strip_rows(idx, thickness, height) {
            let src = image.row(y).ok_or(StitchError::RegionOutOfBounds {
                x0: 0,
                y0: y,
                x1: width - 1,
                y1: y,
                img_width: width,
                img_height: height,
            })?;
            let dst = canvas.row_mut(y).ok_or(StitchError::InvalidDimensions {
                width: new_width,
                height,
            })?;
            enlarge_row(src, scale, &mut dst[offset..]);
        }
    }

    Ok(canvas)
}

/// Writes `src` enlarged by `scale` into the front of `dst`.
///
/// Writes `min(floor(src.len() * scale), dst.len())` pixels. Destination
/// column `k` samples source position `x = k / scale` between its floor and
/// ceil neighbors. An integral `x` pairs with the next column; past the last
/// column the upper neighbor is clamped and the lower one moves down. A
/// single-column source is replicated.
pub fn enlarge_row(src: &[Pixel], scale: f32, dst: &mut [Pixel]) {
    let width = src.len();
    let new_width = scaled_width(width, scale).min(dst.len());
    if width == 0 {
        return;
    }
    if width == 1 {
        dst[..new_width].fill(src[0]);
        return;
    }

    let last = (width - 1) as f32;
    for (k, out) in dst[..new_width].iter_mut().enumerate() {
        let x = k as f32 / scale;
        let mut x0 = x.floor();
        let mut x1 = x.ceil();
        if x0 == x1 {
            x1 += 1.0;
        }
        if x1 >= width as f32 {
            x1 = last;
        }
        if x0 == x1 {
            x0 -= 1.0;
        }
        *out = src[x0 as usize] * (x1 - x) + src[x1 as usize] * (x - x0);
    }
}
