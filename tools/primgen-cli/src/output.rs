//! Shared output handling for commands that emit a batch

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use primgen::{GeometryRequest, PrimitiveBatch};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Obj,
    Json,
}

impl Format {
    /// Guess the format from a file extension
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            ext if ext.eq_ignore_ascii_case("obj") => Some(Format::Obj),
            ext if ext.eq_ignore_ascii_case("json") => Some(Format::Json),
            _ => None,
        }
    }
}

/// Output flags shared by `generate` and `scene`
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format (defaults to the output file extension, else json)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    pub fn resolved_format(&self) -> Format {
        self.format
            .or_else(|| self.output.as_deref().and_then(Format::from_path))
            .unwrap_or(Format::Json)
    }
}

/// Name given to the exported object
fn object_name(request: &GeometryRequest) -> String {
    format!("{}_{}_{}", request.shape, request.mode, request.primitive_count)
}

/// Write `batch` where `args` asks for it
pub fn emit(args: &OutputArgs, request: &GeometryRequest, batch: &PrimitiveBatch) -> Result<()> {
    let format = args.resolved_format();

    match &args.output {
        Some(path) => {
            match format {
                Format::Obj => primgen::write_obj(batch, path, &object_name(request))?,
                Format::Json => primgen::write_json(request, batch, path)?,
            }
            tracing::info!("Wrote {:?} to {}", format, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match format {
                Format::Obj => primgen::export::write_obj_to(batch, &mut out, &object_name(request))
                    .context("Failed to write OBJ to stdout")?,
                Format::Json => {
                    let json = primgen::to_json(request, batch)?;
                    writeln!(out, "{json}").context("Failed to write JSON to stdout")?;
                }
            }
        }
    }

    Ok(())
}
