//! Error types for stripstitch.

use thiserror::Error;

/// Result alias for stripstitch operations.
pub type StitchResult<T> = std::result::Result<T, StitchError>;

/// Errors that can occur while correlating, resampling or stitching images.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StitchError {
    /// Image dimensions are zero or overflow.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The pixel buffer does not match the declared dimensions.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A pixel coordinate or region lies outside the image.
    #[error(
        "region ({x0}, {y0})-({x1}, {y1}) out of bounds for {img_width}x{img_height} image"
    )]
    RegionOutOfBounds {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The bottom-right corner of a region precedes its top-left corner.
    #[error("invalid region ({x0}, {y0})-({x1}, {y1})")]
    InvalidRegion {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    },
    /// Correlated regions must have equal heights.
    #[error("the heights of correlated regions must match (got {a} and {b})")]
    RegionHeightMismatch { a: usize, b: usize },
    /// The sliding region is wider than the reference region.
    #[error("width of region b ({width_b}) exceeds width of region a ({width_a})")]
    RegionTooWide { width_a: usize, width_b: usize },
    /// The reference region is too narrow to search any shift.
    #[error("region of width {width} leaves an empty shift domain")]
    EmptyShiftDomain { width: usize },
    /// Two images that are compared strip by strip have different heights.
    #[error("image heights differ: reference {reference}, target {target}")]
    ImageHeightMismatch { reference: usize, target: usize },
    /// Strip thickness must be positive.
    #[error("strip thickness must be positive")]
    InvalidStripThickness,
    /// The profile does not cover the image strip partition.
    #[error("profile has {got} strips, image needs {expected}")]
    ProfileMismatch { expected: usize, got: usize },
    /// The profile has no strips or no positive scale factor.
    #[error("profile has no usable scale factor")]
    EmptyProfile,
    /// A centered crop is wider than its source.
    #[error("crop width {target} exceeds image width {width}")]
    CropTooWide { target: usize, width: usize },
    /// A mosaic needs at least one image.
    #[error("cannot merge an empty image list")]
    EmptyMosaic,
    /// Every mosaic input must share the first image's height.
    #[error("image {index} has height {got}, expected {expected}")]
    MosaicHeightMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },
    /// The seam blending band reaches outside the canvas.
    #[error("seam at column {seam} needs columns beyond canvas width {width}")]
    SeamOutOfBounds { seam: usize, width: usize },
    /// The profile text is malformed.
    #[error("profile parse error: {reason}")]
    ProfileParse { reason: String },
    /// Reading or writing a profile file failed.
    #[error("profile i/o error: {reason}")]
    ProfileIo { reason: String },
    /// Image decode/encode failed.
    #[error("image i/o error: {reason}")]
    ImageIo { reason: String },
}

impl From<std::io::Error> for StitchError {
    fn from(err: std::io::Error) -> Self {
        StitchError::ProfileIo {
            reason: err.to_string(),
        }
    }
}
