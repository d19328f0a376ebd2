//! Owned RGBA pixel buffers and regions.
//!
//! `Image` stores pixels row-major without padding and owns its storage:
//! cloning duplicates the buffer and moving transfers it. Coordinates are
//! `(column, row)`, 0-indexed. Checked accessors return errors or `None` for
//! out-of-range coordinates rather than panicking.

use crate::util::{StitchError, StitchResult};

#[cfg(feature = "image-io")]
pub mod io;
mod pixel;
mod region;

pub use pixel::{Pixel, MAX_ABS_DIFF_SUM};
pub use region::Region;

/// Owned image with an optional label used in diagnostics.
///
/// Pixels always carry alpha; `has_alpha` records whether the source did, so
/// a 3-channel input is written back with 3 channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    data: Vec<Pixel>,
    width: usize,
    height: usize,
    label: Option<String>,
    has_alpha: bool,
}

impl Image {
    /// Creates a blank image filled with `fill`.
    pub fn new(width: usize, height: usize, fill: Pixel) -> StitchResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            data: vec![fill; len],
            width,
            height,
            label: None,
            has_alpha: true,
        })
    }

    /// Creates an image from a row-major pixel buffer of exactly `width * height` pixels.
    pub fn from_pixels(data: Vec<Pixel>, width: usize, height: usize) -> StitchResult<Self> {
        let needed = checked_len(width, height)?;
        if data.len() < needed {
            return Err(StitchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(StitchError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
            label: None,
            has_alpha: true,
        })
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> StitchResult<Self>
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let len = checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::from_pixels(data, width, height)
    }

    /// Attaches a label (usually the source path).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Marks whether the alpha channel is meaningful when saving.
    pub fn with_alpha_channel(mut self, has_alpha: bool) -> Self {
        self.has_alpha = has_alpha;
        self
    }

    /// False for images decoded from 3-channel sources.
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Label for log messages; unlabeled images read as `<memory>`.
    pub(crate) fn display_name(&self) -> &str {
        self.label().unwrap_or("<memory>")
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel storage.
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Consumes the image and returns its pixel storage.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.data
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// Returns a mutable pixel at `(x, y)` if it is within bounds.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    /// Bounds-checked read.
    pub fn pixel(&self, x: usize, y: usize) -> StitchResult<Pixel> {
        self.get(x, y).copied().ok_or(self.out_of_bounds(x, y))
    }

    /// Bounds-checked write.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: Pixel) -> StitchResult<()> {
        let err = self.out_of_bounds(x, y);
        let slot = self.get_mut(x, y).ok_or(err)?;
        *slot = value;
        Ok(())
    }

    /// Returns row `y` as a slice of length `width`.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Returns row `y` as a mutable slice of length `width`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get_mut(start..start + self.width)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> StitchError {
        StitchError::RegionOutOfBounds {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
            img_width: self.width,
            img_height: self.height,
        }
    }
}

fn checked_len(width: usize, height: usize) -> StitchResult<usize> {
    if width == 0 || height == 0 {
        return Err(StitchError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(StitchError::InvalidDimensions { width, height })
}
