//! Engine configuration

use crate::error::LanmsError;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// IOU threshold used by the reference EAST post-processing
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.3;

/// Main suppression configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanmsConfig {
    /// Shared by the merge and suppression passes; overlaps must strictly exceed it
    pub iou_threshold: f32,
    /// Run the row-ordered local merge before greedy suppression
    pub local_merge: bool,
}

impl Default for LanmsConfig {
    fn default() -> Self {
        Self {
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            local_merge: true,
        }
    }
}

impl LanmsConfig {
    /// Locality-aware NMS with the given threshold
    pub fn with_threshold(iou_threshold: f32) -> Self {
        Self {
            iou_threshold,
            ..Self::default()
        }
    }

    /// Plain greedy NMS, local merge bypassed
    pub fn standard_nms(iou_threshold: f32) -> Self {
        Self {
            iou_threshold,
            local_merge: false,
        }
    }

    /// Reject thresholds outside `[0, 1]`, including NaN
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.iou_threshold) {
            return Err(LanmsError::InvalidThreshold(self.iou_threshold));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        Self::from_json_str(&contents).with_context(|| format!("Invalid config in {:?}", path))
    }
}
