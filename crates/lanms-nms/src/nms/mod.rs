//! The three locality-aware NMS passes
//!
//! Candidates flow strictly forward: [`row_order`] puts row neighbours next to each other,
//! [`local_merge`] fuses adjacent overlapping candidates, and [`greedy`] suppresses the
//! overlaps that survive.

pub mod greedy;
pub mod local_merge;
pub mod row_order;

pub use greedy::GreedySuppressor;
pub use local_merge::LocalMerger;
pub use row_order::{row_order, sort_rows};

use std::cmp::Ordering;

/// Total order on floats where `-0.0` and `+0.0` compare equal
///
/// Adding `0.0` maps `-0.0` to `+0.0`.
#[inline]
pub(crate) fn ascending(a: f32, b: f32) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Highest score first
#[inline]
pub(crate) fn descending_score(a: f32, b: f32) -> Ordering {
    ascending(b, a)
}
