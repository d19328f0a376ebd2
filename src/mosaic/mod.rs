//! Centered strip extraction and seam-blended concatenation.

mod crop;
mod seam;

pub use crop::extract_center;
pub use seam::{blend_seam, merge};

/// Distance from a seam to the reference columns that seed its blend.
pub const DEFAULT_SEAM_HALF_WIDTH: usize = 4;

/// Seam blending configuration.
///
/// A seam at column `c` reads `c - half_width` and `c + half_width` and
/// rewrites the `2 * half_width - 1` columns strictly between them with
/// weights in steps of `1 / (2 * half_width)`.
#[derive(Clone, Debug)]
pub struct SeamConfig {
    pub half_width: usize,
}

impl Default for SeamConfig {
    fn default() -> Self {
        Self {
            half_width: DEFAULT_SEAM_HALF_WIDTH,
        }
    }
}
