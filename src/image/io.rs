//! Convenience helpers for loading and saving images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{Image, Pixel};
use crate::util::{StitchError, StitchResult};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Converts an RGBA buffer into an owned image.
pub fn image_from_rgba(img: &image::RgbaImage) -> StitchResult<Image> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels = img
        .pixels()
        .map(|p| Pixel::rgba(p[0], p[1], p[2], p[3]))
        .collect();
    Image::from_pixels(pixels, width, height)
}

/// Converts an owned image into an RGBA buffer.
pub fn rgba_from_image(img: &Image) -> StitchResult<image::RgbaImage> {
    let width = u32::try_from(img.width()).map_err(|_| StitchError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let height = u32::try_from(img.height()).map_err(|_| StitchError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let raw: Vec<u8> = img
        .pixels()
        .iter()
        .flat_map(|p| [p.r, p.g, p.b, p.a])
        .collect();
    let got = raw.len();
    image::RgbaImage::from_raw(width, height, raw).ok_or(StitchError::BufferTooSmall {
        needed: img.width() * img.height() * 4,
        got,
    })
}

/// Loads an image from disk; the path becomes the image label.
pub fn load_image<P: AsRef<Path>>(path: P) -> StitchResult<Image> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|err| StitchError::ImageIo {
        reason: format!("{}: {err}", path.display()),
    })?;
    let has_alpha = decoded.color().has_alpha();
    Ok(image_from_rgba(&decoded.to_rgba8())?
        .with_label(path.display().to_string())
        .with_alpha_channel(has_alpha))
}

/// Saves an image; the format follows the file extension.
///
/// The alpha channel is dropped when the image came from a 3-channel source
/// or the target format cannot store it (JPEG).
pub fn save_image<P: AsRef<Path>>(img: &Image, path: P) -> StitchResult<()> {
    let path = path.as_ref();
    let rgba = DynamicImage::ImageRgba8(rgba_from_image(img)?);
    let keep_alpha = img.has_alpha() && format_supports_alpha(path);
    let encoded = if keep_alpha {
        rgba
    } else {
        DynamicImage::ImageRgb8(rgba.to_rgb8())
    };
    encoded.save(path).map_err(|err| StitchError::ImageIo {
        reason: format!("{}: {err}", path.display()),
    })
}

fn format_supports_alpha(path: &Path) -> bool {
    !matches!(ImageFormat::from_path(path), Ok(ImageFormat::Jpeg))
}
