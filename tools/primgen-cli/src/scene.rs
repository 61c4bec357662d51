//! Scene command - generate from a scene TOML file

use anyhow::{Context, Result};
use clap::Args;
use primgen::SceneParameters;
use std::path::PathBuf;

use crate::output::{OutputArgs, emit};

/// Arguments for the scene command
#[derive(Args, Debug)]
pub struct SceneArgs {
    /// Path to the scene file
    pub scene: PathBuf,

    /// Override the seed from the scene file
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute the scene command
pub fn execute(args: SceneArgs) -> Result<()> {
    let params = SceneParameters::load(&args.scene)
        .with_context(|| format!("Failed to load scene: {}", args.scene.display()))?;

    let mut request = params.request();
    if let Some(seed) = args.seed {
        request.seed = seed;
    }

    tracing::info!(
        "Scene {}: {} x {} ({}), {}x{} image",
        args.scene.display(),
        request.primitive_count,
        request.shape,
        request.mode,
        params.image_width,
        params.image_height
    );

    let batch = request.generate();
    emit(&args.output, &request, &batch)
}
