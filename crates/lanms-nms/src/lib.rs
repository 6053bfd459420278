//! Locality-Aware Non-Maximum Suppression
//!
//! Reduces dense, scored quadrilateral proposals (for example from a scene-text detector) to a
//! compact set of detections: row-adjacent overlapping candidates are fused by score-weighted
//! vertex averaging, then the remaining overlaps are resolved by greedy suppression.

pub mod candidate;
pub mod engine;
pub mod error;
pub mod nms;

// Re-export commonly used types
pub use candidate::{Candidate, CandidateCollection, CandidateStats, Detection};
pub use engine::{LanmsConfig, LanmsEngine, LanmsResult, LanmsStats};
pub use error::LanmsError;
pub use lanms_core::{Point, Quad};

// Error handling
pub type Result<T> = std::result::Result<T, LanmsError>;

/// Core traits for the suppression passes
pub mod traits {
    use super::*;

    /// Trait for non-maximum suppression implementations
    pub trait NonMaxSuppression {
        fn apply_nms(&self, candidates: Vec<Candidate>) -> Vec<Detection>;
    }

    impl NonMaxSuppression for nms::GreedySuppressor {
        fn apply_nms(&self, candidates: Vec<Candidate>) -> Vec<Detection> {
            self.suppress(candidates)
        }
    }
}

/// Locality-aware NMS over parallel quad and score slices
///
/// Returns the kept quads and aggregated scores, highest score first.
pub fn locality_aware_nms(
    quads: &[Quad],
    scores: &[f32],
    iou_threshold: f32,
) -> Result<(Vec<Quad>, Vec<f32>)> {
    LanmsEngine::with_threshold(iou_threshold)?.run(quads, scores)
}

/// Greedy NMS only, without the local merge pass
pub fn standard_nms(
    quads: &[Quad],
    scores: &[f32],
    iou_threshold: f32,
) -> Result<(Vec<Quad>, Vec<f32>)> {
    LanmsEngine::new(LanmsConfig::standard_nms(iou_threshold))?.run(quads, scores)
}
