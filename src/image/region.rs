//! Inclusive rectangular regions.

use crate::image::Image;
use crate::util::{StitchError, StitchResult};

/// Rectangle given by inclusive top-left `(x0, y0)` and bottom-right `(x1, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl Region {
    /// Creates a region from inclusive corners.
    pub fn new(top_left: (usize, usize), bottom_right: (usize, usize)) -> StitchResult<Self> {
        let (x0, y0) = top_left;
        let (x1, y1) = bottom_right;
        if x1 < x0 || y1 < y0 {
            return Err(StitchError::InvalidRegion { x0, y0, x1, y1 });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Region covering the whole image.
    pub fn full(image: &Image) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: image.width() - 1,
            y1: image.height() - 1,
        }
    }

    /// Full-width region spanning `rows` (half-open, must be non-empty).
    pub fn rows(image: &Image, rows: std::ops::Range<usize>) -> StitchResult<Self> {
        if rows.is_empty() {
            return Err(StitchError::InvalidDimensions {
                width: image.width(),
                height: 0,
            });
        }
        let region = Self {
            x0: 0,
            y0: rows.start,
            x1: image.width() - 1,
            y1: rows.end - 1,
        };
        region.check_within(image)?;
        Ok(region)
    }

    pub fn x0(&self) -> usize {
        self.x0
    }

    pub fn y0(&self) -> usize {
        self.y0
    }

    pub fn x1(&self) -> usize {
        self.x1
    }

    pub fn y1(&self) -> usize {
        self.y1
    }

    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }

    /// Fails unless every corner lies inside `image`.
    pub fn check_within(&self, image: &Image) -> StitchResult<()> {
        if self.x1 >= image.width() || self.y1 >= image.height() {
            return Err(StitchError::RegionOutOfBounds {
                x0: self.x0,
                y0: self.y0,
                x1: self.x1,
                y1: self.y1,
                img_width: image.width(),
                img_height: image.height(),
            });
        }
        Ok(())
    }
}
