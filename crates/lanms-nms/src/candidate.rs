//! Scored quadrilateral candidates
//!
//! Core abstraction for detection proposals flowing through the merge and suppression passes.

use crate::nms::{descending_score, greedy::GreedySuppressor};
use lanms_core::{iou, Quad};
use serde::{Deserialize, Serialize};

/// A quadrilateral with a score used both as merge weight and ranking key
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub quad: Quad,
    pub score: f32,
}

/// Final output of the suppression pass
pub type Detection = Candidate;

impl Candidate {
    /// Create a new candidate
    pub fn new(quad: Quad, score: f32) -> Self {
        Self { quad, score }
    }

    /// Area of the quad, 0 when degenerate
    pub fn area(&self) -> f32 {
        self.quad.area()
    }

    /// Row-order key
    pub fn min_y(&self) -> f32 {
        self.quad.min_y()
    }

    /// Intersection over union with another candidate
    pub fn iou(&self, other: &Candidate) -> f32 {
        iou(&self.quad, &other.quad)
    }

    /// Check if the overlap with another candidate strictly exceeds `threshold`
    pub fn overlaps(&self, other: &Candidate, threshold: f32) -> bool {
        self.iou(other) > threshold
    }

    /// Score-weighted vertex average; the merged score is the sum of both scores
    pub fn weighted_merge(&self, other: &Candidate) -> Candidate {
        Candidate {
            quad: self.quad.weighted_average(self.score, &other.quad, other.score),
            score: self.score + other.score,
        }
    }
}

/// Ordered collection of candidates with batch operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateCollection {
    candidates: Vec<Candidate>,
}

impl CandidateCollection {
    /// Create new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from vector of candidates
    pub fn from_vec(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Pair quads with scores; both slices must have the same length
    pub fn from_parts(quads: &[Quad], scores: &[f32]) -> Self {
        quads
            .iter()
            .zip(scores)
            .map(|(&quad, &score)| Candidate::new(quad, score))
            .collect()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Stable sort by score, highest first
    pub fn sort_by_score(&mut self) {
        self.candidates.sort_by(|a, b| descending_score(a.score, b.score));
    }

    /// Apply greedy non-maximum suppression without local merging
    pub fn apply_nms(self, iou_threshold: f32) -> Self {
        Self::from_vec(GreedySuppressor::new(iou_threshold).suppress(self.candidates))
    }

    /// Split into parallel quad and score vectors
    pub fn into_parts(self) -> (Vec<Quad>, Vec<f32>) {
        self.candidates.into_iter().map(|c| (c.quad, c.score)).unzip()
    }

    /// Get statistics
    pub fn stats(&self) -> CandidateStats {
        let total_score: f32 = self.candidates.iter().map(|c| c.score).sum();
        let max_score = self.candidates.iter().map(|c| c.score).reduce(f32::max);
        let min_score = self.candidates.iter().map(|c| c.score).reduce(f32::min);
        let degenerate = self
            .candidates
            .iter()
            .filter(|c| c.quad.is_degenerate())
            .count();

        CandidateStats {
            total_candidates: self.candidates.len(),
            degenerate_candidates: degenerate,
            total_score,
            avg_score: if self.candidates.is_empty() {
                0.0
            } else {
                total_score / self.candidates.len() as f32
            },
            max_score: max_score.unwrap_or(0.0),
            min_score: min_score.unwrap_or(0.0),
        }
    }
}

impl IntoIterator for CandidateCollection {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl FromIterator<Candidate> for CandidateCollection {
    fn from_iter<T: IntoIterator<Item = Candidate>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl From<CandidateCollection> for Vec<Candidate> {
    fn from(collection: CandidateCollection) -> Self {
        collection.candidates
    }
}

/// Statistics about a collection of candidates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateStats {
    pub total_candidates: usize,
    pub degenerate_candidates: usize,
    pub total_score: f32,
    pub avg_score: f32,
    pub max_score: f32,
    pub min_score: f32,
}
