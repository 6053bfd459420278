//! Greedy rotated-quad non-maximum suppression

use super::descending_score;
use crate::candidate::{Candidate, Detection};
use tracing::debug;

/// Classic greedy NMS using polygon IOU
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedySuppressor {
    iou_threshold: f32,
}

impl GreedySuppressor {
    pub fn new(iou_threshold: f32) -> Self {
        Self { iou_threshold }
    }

    pub fn iou_threshold(&self) -> f32 {
        self.iou_threshold
    }

    /// Indices of the kept candidates, highest score first
    ///
    /// Equal scores keep their input order.
    pub fn keep_indices(&self, candidates: &[Candidate]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| descending_score(candidates[a].score, candidates[b].score));

        let mut keep = Vec::new();
        let mut suppressed = vec![false; candidates.len()];

        for (rank, &i) in order.iter().enumerate() {
            if suppressed[i] {
                continue;
            }
            keep.push(i);

            for &j in &order[rank + 1..] {
                if !suppressed[j] && candidates[i].overlaps(&candidates[j], self.iou_threshold) {
                    suppressed[j] = true;
                }
            }
        }

        debug!(
            input = candidates.len(),
            kept = keep.len(),
            iou_threshold = self.iou_threshold,
            "greedy suppression finished"
        );
        keep
    }

    /// Keep the best candidates and drop everything overlapping them
    pub fn suppress(&self, candidates: Vec<Candidate>) -> Vec<Detection> {
        self.keep_indices(&candidates)
            .into_iter()
            .map(|i| candidates[i])
            .collect()
    }
}
