//! Batch export for inspection outside the conformance harness
//!
//! OBJ for viewing in any mesh tool, JSON for diffing batches between
//! implementations.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::batch::PrimitiveBatch;
use crate::error::{Error, Result};
use crate::request::{GeometryRequest, Mode, Shape};

/// Write a batch as a Wavefront OBJ object
///
/// Soup batches get one face per consecutive vertex triple.
pub fn write_obj(batch: &PrimitiveBatch, path: &Path, name: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut w = BufWriter::new(file);
    write_obj_to(batch, &mut w, name)
        .and_then(|()| w.flush())
        .map_err(|e| Error::io(path, e))
}

/// Write OBJ text to any writer
pub fn write_obj_to<W: Write>(
    batch: &PrimitiveBatch,
    w: &mut W,
    name: &str,
) -> std::io::Result<()> {
    writeln!(
        w,
        "# primgen: {} vertices, {} triangles",
        batch.vertex_count(),
        batch.triangle_count()
    )?;
    writeln!(w, "o {name}")?;

    for v in batch.vertices() {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }

    // OBJ indices are 1-based
    match batch.indices() {
        Some(indices) => {
            for tri in indices {
                writeln!(w, "f {} {} {}", tri.x + 1, tri.y + 1, tri.z + 1)?;
            }
        }
        None => {
            for t in 0..batch.triangle_count() {
                let base = t * 3 + 1;
                writeln!(w, "f {} {} {}", base, base + 1, base + 2)?;
            }
        }
    }

    Ok(())
}

/// Serializable form of a batch together with the request that produced it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchDocument {
    pub shape: Shape,
    pub mode: Mode,
    pub primitive_count: usize,
    pub seed: u64,
    pub vertices: Vec<[f32; 3]>,
    #[serde(default)]
    pub indices: Vec<[u32; 3]>,
}

impl BatchDocument {
    pub fn new(request: &GeometryRequest, batch: &PrimitiveBatch) -> Self {
        Self {
            shape: request.shape,
            mode: request.mode,
            primitive_count: request.primitive_count,
            seed: request.seed,
            vertices: batch.vertices().iter().map(|v| v.to_array()).collect(),
            indices: batch
                .indices()
                .map(|indices| indices.iter().map(|t| t.to_array()).collect())
                .unwrap_or_default(),
        }
    }
}

/// Render a batch as pretty-printed JSON
pub fn to_json(request: &GeometryRequest, batch: &PrimitiveBatch) -> Result<String> {
    Ok(serde_json::to_string_pretty(&BatchDocument::new(request, batch))?)
}

/// Write a batch as pretty-printed JSON
pub fn write_json(request: &GeometryRequest, batch: &PrimitiveBatch, path: &Path) -> Result<()> {
    let json = to_json(request, batch)?;
    std::fs::write(path, json).map_err(|e| Error::io(path, e))
}
