//! Low-level building blocks for custom pipelines.
//!
//! These expose the activation kernels, the row interpolator and the seam
//! blender for callers that need more control than [`StitchEngine`](crate::StitchEngine).

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::scan_partitioned_par;
pub use crate::kernel::scalar::{scan_partitioned, SadScalar};
#[cfg(feature = "simd")]
pub use crate::kernel::simd::SadSimd;
pub use crate::kernel::{Kernel, ShiftWindow};
pub use crate::mosaic::blend_seam;
pub use crate::resample::enlarge_row;
