use crate::image::Image;
use crate::util::{StitchError, StitchResult};

/// Copies the full-height band of `target_width` columns centered in `image`.
///
/// The band starts at `floor((width - target_width) / 2)`.
pub fn extract_center(image: &Image, target_width: usize) -> StitchResult<Image> {
    let width = image.width();
    if target_width > width {
        return Err(StitchError::CropTooWide {
            target: target_width,
            width,
        });
    }
    let start = (width - target_width) / 2;
    let mut pixels = Vec::with_capacity(target_width * image.height());
    for y in 0..image.height() {
        let row = image.row(y).ok_or(StitchError::InvalidDimensions {
            width,
            height: image.height(),
        })?;
        pixels.extend_from_slice(&row[start..start + target_width]);
    }
    Ok(Image::from_pixels(pixels, target_width, image.height())?
        .with_alpha_channel(image.has_alpha()))
}
