//! Row ordering by topmost vertex
//!
//! Candidates are keyed by their minimum vertex y. Ties keep input order, so the ordering is
//! deterministic. The x coordinate never participates.

use super::ascending;
use crate::candidate::Candidate;

/// Indices of `candidates` in row order
pub fn row_order(candidates: &[Candidate]) -> Vec<usize> {
    let keys: Vec<f32> = candidates.iter().map(Candidate::min_y).collect();
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    // sort_by is stable: equal keys stay in index order
    order.sort_by(|&a, &b| ascending(keys[a], keys[b]));
    order
}

/// Reorder candidates into row order
pub fn sort_rows(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let order = row_order(&candidates);
    order.into_iter().map(|i| candidates[i]).collect()
}
