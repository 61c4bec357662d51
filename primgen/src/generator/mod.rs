//! Primitive generators
//!
//! Each generator is a function of the primitive count and the position of
//! the [`RandomSource`] it is handed. [`PrimitiveGenerator`] owns a source
//! and dispatches by [`Shape`] and [`Mode`].

mod cubes;
mod quads;
mod triangles;

#[cfg(test)]
mod tests;

use glam::Vec3;
use tracing::debug;

use crate::batch::{IndexedBatch, PrimitiveBatch};
use crate::random::RandomSource;
use crate::request::{Mode, Shape};

pub use cubes::{generate_cube_soup, generate_cubes_indexed};
pub use quads::{complete_parallelogram, generate_quad_soup, generate_quads_indexed};
pub use triangles::{generate_triangles, generate_triangles_indexed};

/// Generator holding the random stream across calls
///
/// Successive calls continue the same stream, so the sequence of calls is
/// part of what a seed reproduces.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveGenerator {
    rng: RandomSource,
}

impl PrimitiveGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_source(RandomSource::new(seed))
    }

    pub fn with_source(rng: RandomSource) -> Self {
        Self { rng }
    }

    /// Restart the stream from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    pub fn random(&self) -> &RandomSource {
        &self.rng
    }

    pub fn random_mut(&mut self) -> &mut RandomSource {
        &mut self.rng
    }

    pub fn generate_triangles(&mut self, count: usize) -> Vec<Vec3> {
        generate_triangles(&mut self.rng, count)
    }

    pub fn generate_triangles_indexed(&mut self, count: usize) -> IndexedBatch {
        generate_triangles_indexed(&mut self.rng, count)
    }

    pub fn generate_triangulated_quad_soups(&mut self, count: usize) -> Vec<Vec3> {
        generate_quad_soup(&mut self.rng, count)
    }

    pub fn generate_triangulated_quads_indexed(&mut self, count: usize) -> IndexedBatch {
        generate_quads_indexed(&mut self.rng, count)
    }

    pub fn generate_triangulated_cube_soups(&mut self, count: usize) -> Vec<Vec3> {
        generate_cube_soup(&mut self.rng, count)
    }

    pub fn generate_triangulated_cubes_indexed(&mut self, count: usize) -> IndexedBatch {
        generate_cubes_indexed(&mut self.rng, count)
    }

    /// Generate `count` primitives of `shape` arranged as `mode`
    pub fn generate(&mut self, shape: Shape, mode: Mode, count: usize) -> PrimitiveBatch {
        let batch: PrimitiveBatch = match (shape, mode) {
            (Shape::Triangle, Mode::Soup) => self.generate_triangles(count).into(),
            (Shape::Triangle, Mode::Indexed) => self.generate_triangles_indexed(count).into(),
            (Shape::Quad, Mode::Soup) => self.generate_triangulated_quad_soups(count).into(),
            (Shape::Quad, Mode::Indexed) => self.generate_triangulated_quads_indexed(count).into(),
            (Shape::Cube, Mode::Soup) => self.generate_triangulated_cube_soups(count).into(),
            (Shape::Cube, Mode::Indexed) => self.generate_triangulated_cubes_indexed(count).into(),
        };

        debug!(
            %shape,
            %mode,
            count,
            vertices = batch.vertex_count(),
            triangles = batch.triangle_count(),
            draws = self.rng.draws(),
            "generated primitive batch"
        );

        batch
    }
}
