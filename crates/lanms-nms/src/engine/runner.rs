//! Locality-aware NMS engine
//!
//! Validates caller input, then runs row ordering, local merging and greedy suppression.

use super::config::LanmsConfig;
use crate::candidate::{Candidate, CandidateCollection, Detection};
use crate::error::LanmsError;
use crate::nms::{row_order, GreedySuppressor, LocalMerger};
use crate::traits::NonMaxSuppression;
use crate::Result;
use lanms_core::{Point, Quad};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Floats per quad in a flat `(N, 4, 2)` vertex array
pub const VERTEX_STRIDE: usize = 8;

/// Detections plus run statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanmsResult {
    pub detections: Vec<Detection>,
    pub stats: LanmsStats,
}

/// Counts and score totals for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanmsStats {
    pub input_count: usize,
    pub composite_count: usize,
    pub output_count: usize,
    pub degenerate_count: usize,
    pub input_score: f32,
    pub output_score: f32,
    pub elapsed_us: u64,
}

impl LanmsResult {
    /// Split into parallel quad and score vectors
    pub fn into_parts(self) -> (Vec<Quad>, Vec<f32>) {
        CandidateCollection::from_vec(self.detections).into_parts()
    }

    /// Export in JSON format
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Locality-aware non-maximum suppression over scored quadrilaterals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanmsEngine {
    config: LanmsConfig,
}

impl LanmsEngine {
    /// Create new engine; fails on an out-of-range threshold
    pub fn new(config: LanmsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine with default settings and the given threshold
    pub fn with_threshold(iou_threshold: f32) -> Result<Self> {
        Self::new(LanmsConfig::with_threshold(iou_threshold))
    }

    pub fn config(&self) -> &LanmsConfig {
        &self.config
    }

    /// Run over parallel quad and score slices
    ///
    /// Returns the kept quads and their aggregated scores, highest score first.
    pub fn run(&self, quads: &[Quad], scores: &[f32]) -> Result<(Vec<Quad>, Vec<f32>)> {
        Ok(self.run_detailed(quads, scores)?.into_parts())
    }

    /// Run over a flat `(N, 4, 2)` vertex array and `N` scores
    pub fn run_flat(&self, vertices: &[f32], scores: &[f32]) -> Result<(Vec<f32>, Vec<f32>)> {
        let quads = quads_from_flat(vertices)?;
        let (quads, scores) = self.run(&quads, scores)?;
        let vertices = quads
            .iter()
            .flat_map(|q| q.points().iter().flat_map(|p| [p.x, p.y]))
            .collect();
        Ok((vertices, scores))
    }

    /// Run and collect statistics
    pub fn run_detailed(&self, quads: &[Quad], scores: &[f32]) -> Result<LanmsResult> {
        validate_input(quads, scores)?;
        let start = Instant::now();

        let candidates = CandidateCollection::from_parts(quads, scores);
        let input_stats = candidates.stats();
        if input_stats.degenerate_candidates > 0 {
            warn!(
                degenerate = input_stats.degenerate_candidates,
                "degenerate quads get zero overlap and are ranked on score alone"
            );
        }

        let composites = self.merge_stage(candidates.into());
        let composite_count = composites.len();
        let detections = GreedySuppressor::new(self.config.iou_threshold).suppress(composites);

        let stats = LanmsStats {
            input_count: input_stats.total_candidates,
            composite_count,
            output_count: detections.len(),
            degenerate_count: input_stats.degenerate_candidates,
            input_score: input_stats.total_score,
            output_score: detections.iter().map(|d| d.score).sum(),
            elapsed_us: start.elapsed().as_micros() as u64,
        };

        info!(
            input = stats.input_count,
            composites = stats.composite_count,
            output = stats.output_count,
            elapsed_us = stats.elapsed_us,
            "locality-aware NMS finished"
        );

        Ok(LanmsResult { detections, stats })
    }

    /// Row-order and locally merge, or pass through when merging is disabled
    fn merge_stage(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        if !self.config.local_merge {
            debug!("local merge disabled, running plain greedy NMS");
            return candidates;
        }
        let sorted = row_order::sort_rows(candidates);
        LocalMerger::new(self.config.iou_threshold).merge(sorted)
    }
}

impl NonMaxSuppression for LanmsEngine {
    fn apply_nms(&self, candidates: Vec<Candidate>) -> Vec<Detection> {
        let composites = self.merge_stage(candidates);
        GreedySuppressor::new(self.config.iou_threshold).suppress(composites)
    }
}

/// Check lengths and scores before anything is computed
fn validate_input(quads: &[Quad], scores: &[f32]) -> Result<()> {
    if quads.len() != scores.len() {
        return Err(LanmsError::InvalidShape(format!(
            "{} quads but {} scores",
            quads.len(),
            scores.len()
        )));
    }
    if let Some((index, &score)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(LanmsError::InvalidScore { index, score });
    }
    Ok(())
}

/// Interpret a flat `(N, 4, 2)` array as quads
pub fn quads_from_flat(vertices: &[f32]) -> Result<Vec<Quad>> {
    if vertices.len() % VERTEX_STRIDE != 0 {
        return Err(LanmsError::InvalidShape(format!(
            "vertex array of length {} is not a multiple of {} (N x 4 x 2)",
            vertices.len(),
            VERTEX_STRIDE
        )));
    }

    Ok(vertices
        .chunks_exact(VERTEX_STRIDE)
        .map(|c| {
            Quad::new([
                Point::new(c[0], c[1]),
                Point::new(c[2], c[3]),
                Point::new(c[4], c[5]),
                Point::new(c[6], c[7]),
            ])
        })
        .collect())
}
