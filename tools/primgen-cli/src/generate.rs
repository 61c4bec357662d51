//! Generate command - one batch from command-line flags

use anyhow::Result;
use clap::Args;
use primgen::{GeometryRequest, Mode, Shape};

use crate::output::{OutputArgs, emit};

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Primitive shape: triangle, quad or cube
    #[arg(short, long, default_value = "triangle")]
    pub shape: Shape,

    /// Vertex arrangement: soup or indexed
    #[arg(short, long, default_value = "soup")]
    pub mode: Mode,

    /// Number of primitives
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Random stream seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl GenerateArgs {
    pub fn request(&self) -> GeometryRequest {
        GeometryRequest::new(self.shape, self.mode, self.count, self.seed)
    }
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let request = args.request();
    let batch = request.generate();

    tracing::info!(
        "Generated {} {} {}(s): {} vertices, {} triangles (seed {})",
        request.primitive_count,
        request.mode,
        request.shape,
        batch.vertex_count(),
        batch.triangle_count(),
        request.seed
    );

    emit(&args.output, &request, &batch)
}
