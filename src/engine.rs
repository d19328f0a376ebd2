//! Stateless facade over the correlation, profile, resampling and mosaic stages.
//!
//! `StitchEngine` holds only configuration; every call allocates a fresh
//! output and leaves its inputs untouched.

use crate::correlate::{self, CorrelationConfig, ShiftResult};
use crate::image::{Image, Region};
use crate::mosaic::{self, SeamConfig};
use crate::profile::{self, ProfileEstimate, ScaleProfile, DEFAULT_STRIP_THICKNESS};
use crate::resample;
use crate::util::StitchResult;

/// Configuration shared by all engine stages.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Shift search settings.
    pub correlation: CorrelationConfig,
    /// Seam blending settings.
    pub seam: SeamConfig,
    /// Rows per strip for profile estimation.
    pub strip_thickness: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            correlation: CorrelationConfig::default(),
            seam: SeamConfig::default(),
            strip_thickness: DEFAULT_STRIP_THICKNESS,
        }
    }
}

/// Entry point for profile estimation, rescaling and mosaicking.
#[derive(Clone, Debug, Default)]
pub struct StitchEngine {
    cfg: EngineConfig,
}

impl StitchEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: EngineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Finds the best horizontal shift of `region_b` over `region_a`.
    pub fn correlate(
        &self,
        a: &Image,
        region_a: Region,
        b: &Image,
        region_b: Region,
    ) -> StitchResult<ShiftResult> {
        correlate::correlate(a, region_a, b, region_b, &self.cfg.correlation)
    }

    /// Estimates the scale profile of `target` against `reference`.
    pub fn estimate(&self, reference: &Image, target: &Image) -> StitchResult<ScaleProfile> {
        profile::estimate(
            reference,
            target,
            self.cfg.strip_thickness,
            &self.cfg.correlation,
        )
    }

    /// Estimates the profile and keeps the per-strip shifts.
    pub fn estimate_detailed(
        &self,
        reference: &Image,
        target: &Image,
    ) -> StitchResult<ProfileEstimate> {
        profile::estimate_detailed(
            reference,
            target,
            self.cfg.strip_thickness,
            &self.cfg.correlation,
        )
    }

    /// Resamples `image` so every strip matches the profile's scale.
    pub fn resize(&self, image: &Image, profile: &ScaleProfile) -> StitchResult<Image> {
        resample::resize(image, profile)
    }

    /// Crops the centered band of `target_width` columns.
    pub fn extract_center(&self, image: &Image, target_width: usize) -> StitchResult<Image> {
        mosaic::extract_center(image, target_width)
    }

    /// Resamples `image` and crops a centered band as wide as the profile's
    /// maximum shift.
    pub fn rescale(&self, image: &Image, profile: &ScaleProfile) -> StitchResult<Image> {
        let resized = self.resize(image, profile)?;
        self.extract_center(&resized, profile.max_shift())
    }

    /// Concatenates `images` left to right with blended seams.
    pub fn merge(&self, images: &[&Image]) -> StitchResult<Image> {
        mosaic::merge(images, &self.cfg.seam)
    }
}
