//! Error taxonomy for the suppression passes
//!
//! Shape, threshold and score problems are caller errors and fail before any processing.
//! Degenerate geometry is never an error: such quads get an IOU of 0.

use lanms_core::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanmsError {
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("invalid IOU threshold {0}: expected a value in [0, 1]")]
    InvalidThreshold(f32),

    #[error("invalid score at index {index}: {score} is not finite")]
    InvalidScore { index: usize, score: f32 },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<GeometryError> for LanmsError {
    fn from(err: GeometryError) -> Self {
        LanmsError::InvalidShape(err.to_string())
    }
}
