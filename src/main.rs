use anyhow::{Context, Result};
use clap::Parser;
use lanms_nms::{LanmsConfig, LanmsEngine};
use std::path::PathBuf;

mod parser;

use parser::DetectionOutput;

#[derive(Parser)]
#[command(
    name = "lanms",
    about = "Locality-aware non-maximum suppression over scored quadrilaterals"
)]
struct Cli {
    /// JSON file with "vertices" (N x 4 x 2) and "scores" (N)
    input: PathBuf,

    /// JSON engine configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides the configured IOU threshold
    #[arg(long)]
    iou_threshold: Option<f32>,

    /// Run plain greedy NMS without the local merge pass
    #[arg(long)]
    no_merge: bool,

    /// Write results here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LanmsConfig::from_json_file(path)?,
        None => LanmsConfig::default(),
    };
    if let Some(threshold) = cli.iou_threshold {
        config.iou_threshold = threshold;
    }
    if cli.no_merge {
        config.local_merge = false;
    }

    let engine = LanmsEngine::new(config).context("Invalid engine configuration")?;
    let (quads, scores) = parser::load_detections(&cli.input)?;
    let result = engine.run_detailed(&quads, &scores)?;

    let json = serde_json::to_string_pretty(&DetectionOutput::from(result))
        .context("Failed to serialize results")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write results to: {:?}", path))?;
            tracing::info!(path = ?path, "results written");
        }
        None => println!("{}", json),
    }

    Ok(())
}
