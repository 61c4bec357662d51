//! primgen - deterministic conformance geometry from the command line
//!
//! # Commands
//!
//! - `primgen generate` - Generate one batch from shape/mode/count/seed flags
//! - `primgen scene` - Generate the batch described by a scene TOML file
//! - `primgen params` - List the parameters a scene file accepts
//!
//! # Usage
//!
//! ```bash
//! # 16 indexed cubes as OBJ
//! primgen generate --shape cube --mode indexed --count 16 --output cubes.obj
//!
//! # Same batch as JSON on stdout
//! primgen generate --shape cube --mode indexed --count 16 --format json
//!
//! # From a scene file
//! primgen scene scene.toml --output scene.json
//! ```
//!
//! Set `RUST_LOG=debug` to see per-batch generation details.

mod generate;
mod output;
mod params;
mod scene;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// primgen - deterministic conformance geometry
#[derive(Parser)]
#[command(name = "primgen")]
#[command(about = "Generate deterministic triangle, quad and cube test geometry")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one batch from command-line flags
    Generate(generate::GenerateArgs),

    /// Generate the batch described by a scene file
    Scene(scene::SceneArgs),

    /// List scene parameters and their defaults
    Params,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout can carry generated data
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Scene(args) => scene::execute(args),
        Commands::Params => params::execute(),
    }
}
