use crate::error::{PackerError, Result};
use serde::{Deserialize, Serialize};

/// Tunables for an [`crate::packer::Packer`] instance.
///
/// Defaults match the reference implementation's compiled-in constants
/// (`K15_IA_DEFAULT_MIN_ATLAS_DIMENSION`, `K15_IA_DIMENSION_THRESHOLD`,
/// `K15_IA_MAX_SKYLINES`, `K15_IA_MAX_WASTED_SPACE_RECTS`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    /// Starting (and minimum) canvas width/height, must be >= 8.
    pub min_dimension: u16,
    /// Canvas dimension ceiling; growth never doubles past this.
    pub max_dimension: u16,
    /// Bound on the number of skyline shelves kept simultaneously.
    pub max_shelves: usize,
    /// Bound on the number of tracked wasted-space rectangles.
    pub max_wasted_rects: usize,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            min_dimension: 16,
            max_dimension: 8192,
            max_shelves: 128,
            max_wasted_rects: 512,
        }
    }
}

impl PackerConfig {
    /// Create a fluent builder seeded with the defaults above.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }

    /// Reject configurations that could never produce a usable atlas.
    pub fn validate(&self) -> Result<()> {
        if self.min_dimension < 8 {
            return Err(PackerError::InvalidArguments(format!(
                "min_dimension ({}) must be at least 8",
                self.min_dimension
            )));
        }
        if self.max_dimension <= self.min_dimension {
            return Err(PackerError::InvalidArguments(format!(
                "max_dimension ({}) must be greater than min_dimension ({})",
                self.max_dimension, self.min_dimension
            )));
        }
        if !self.min_dimension.is_power_of_two() {
            return Err(PackerError::InvalidArguments(format!(
                "min_dimension ({}) must be a power of two",
                self.min_dimension
            )));
        }
        if !self.max_dimension.is_power_of_two() {
            return Err(PackerError::InvalidArguments(format!(
                "max_dimension ({}) must be a power of two",
                self.max_dimension
            )));
        }
        if self.max_shelves == 0 {
            return Err(PackerError::InvalidArguments(
                "max_shelves must be greater than 0".into(),
            ));
        }
        if self.max_wasted_rects == 0 {
            return Err(PackerError::InvalidArguments(
                "max_wasted_rects must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`PackerConfig`], mirroring the fluent style used elsewhere
/// in this codebase's configuration surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn min_dimension(mut self, v: u16) -> Self {
        self.cfg.min_dimension = v;
        self
    }
    pub fn max_dimension(mut self, v: u16) -> Self {
        self.cfg.max_dimension = v;
        self
    }
    pub fn max_shelves(mut self, v: usize) -> Self {
        self.cfg.max_shelves = v;
        self
    }
    pub fn max_wasted_rects(mut self, v: usize) -> Self {
        self.cfg.max_wasted_rects = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
