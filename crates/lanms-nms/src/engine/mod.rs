//! High-level suppression engine

pub mod config;
pub mod runner;

pub use config::{LanmsConfig, DEFAULT_IOU_THRESHOLD};
pub use runner::{quads_from_flat, LanmsEngine, LanmsResult, LanmsStats};
