//! Stripstitch estimates horizontal scale differences between images of the
//! same scene, rescales images to a common scale, and stitches centered bands
//! into a mosaic with blended seams.
//!
//! The pipeline is: correlate strips of two images to get per-strip shifts,
//! turn the shifts into a [`ScaleProfile`], [`resize`](resample::resize) an
//! image with the profile, crop its center with
//! [`extract_center`](mosaic::extract_center), and [`merge`](mosaic::merge)
//! the crops. [`StitchEngine`] bundles these stages behind one configuration.
//! Shift search runs in parallel via the `rayon` feature.

pub mod correlate;
pub mod engine;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod mosaic;
pub mod profile;
pub mod resample;
mod trace;
pub mod util;

pub use correlate::{correlate, CorrelationConfig, ShiftResult};
pub use engine::{EngineConfig, StitchEngine};
pub use image::{Image, Pixel, Region};
pub use mosaic::{extract_center, merge, SeamConfig};
pub use profile::{estimate, estimate_detailed, ProfileEstimate, ScaleProfile, StripShift};
pub use resample::resize;
pub use util::{StitchError, StitchResult};

#[cfg(feature = "image-io")]
pub use image::io;
