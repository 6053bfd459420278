//! Detection file parser
//!
//! Reads `{ "vertices": [[[x, y], ...4], ...], "scores": [...] }` documents. Scores may be a
//! flat list or an `(N, 1)` column.

use anyhow::{bail, Context, Result};
use lanms_core::{Point, Quad};
use lanms_nms::{LanmsResult, LanmsStats};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DetectionInput {
    vertices: Vec<Vec<[f32; 2]>>,
    scores: ScoreColumn,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoreColumn {
    Flat(Vec<f32>),
    Column(Vec<[f32; 1]>),
}

impl ScoreColumn {
    fn into_vec(self) -> Vec<f32> {
        match self {
            ScoreColumn::Flat(scores) => scores,
            ScoreColumn::Column(rows) => rows.into_iter().map(|[s]| s).collect(),
        }
    }
}

/// Serialized run output
#[derive(Debug, Serialize)]
pub struct DetectionOutput {
    pub vertices: Vec<[[f32; 2]; 4]>,
    pub scores: Vec<f32>,
    pub stats: LanmsStats,
}

impl From<LanmsResult> for DetectionOutput {
    fn from(result: LanmsResult) -> Self {
        let stats = result.stats.clone();
        let (quads, scores) = result.into_parts();
        Self {
            vertices: quads.into_iter().map(<[[f32; 2]; 4]>::from).collect(),
            scores,
            stats,
        }
    }
}

/// Load quads and scores from a JSON file
pub fn load_detections<P: AsRef<Path>>(path: P) -> Result<(Vec<Quad>, Vec<f32>)> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read detections: {:?}", path))?;
    parse_detections(&contents).with_context(|| format!("Invalid detections in {:?}", path))
}

/// Parse quads and scores, checking the `(N, 4, 2)` / `N` shapes
pub fn parse_detections(json: &str) -> Result<(Vec<Quad>, Vec<f32>)> {
    let input: DetectionInput =
        serde_json::from_str(json).context("Failed to parse detection JSON")?;

    let quads = input
        .vertices
        .iter()
        .enumerate()
        .map(|(i, points)| {
            let points: Vec<Point> = points.iter().copied().map(Point::from).collect();
            Quad::try_from(points).with_context(|| format!("vertices[{}] must be shape (4, 2)", i))
        })
        .collect::<Result<Vec<_>>>()?;

    let scores = input.scores.into_vec();
    if scores.len() != quads.len() {
        bail!(
            "got {} quads but {} scores; vertices must be (N, 4, 2) and scores (N,) or (N, 1)",
            quads.len(),
            scores.len()
        );
    }

    Ok((quads, scores))
}
