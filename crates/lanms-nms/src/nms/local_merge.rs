//! Adjacent weighted merging over row-ordered candidates
//!
//! A single left-to-right fold carries one accumulator. Each candidate either merges into it
//! (IOU strictly above the threshold) or closes it and starts the next one. Only neighbours in
//! row order are ever compared; overlaps between non-adjacent candidates are left for the
//! greedy pass.

use crate::candidate::Candidate;
use tracing::debug;

/// Locality-aware merge pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMerger {
    iou_threshold: f32,
}

impl LocalMerger {
    pub fn new(iou_threshold: f32) -> Self {
        Self { iou_threshold }
    }

    pub fn iou_threshold(&self) -> f32 {
        self.iou_threshold
    }

    /// Merge adjacent overlapping candidates, preserving row order among the composites
    pub fn merge<I>(&self, row_ordered: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut candidates = row_ordered.into_iter();
        let Some(first) = candidates.next() else {
            return Vec::new();
        };

        let mut input_count = 1usize;
        let (mut composites, last) =
            candidates.fold((Vec::new(), first), |(mut composites, accumulator), candidate| {
                input_count += 1;
                if accumulator.overlaps(&candidate, self.iou_threshold) {
                    (composites, accumulator.weighted_merge(&candidate))
                } else {
                    composites.push(accumulator);
                    (composites, candidate)
                }
            });
        composites.push(last);

        debug!(
            input = input_count,
            composites = composites.len(),
            iou_threshold = self.iou_threshold,
            "local merge finished"
        );
        composites
    }
}
