//! Randomly placed unit cubes

use glam::Vec3;

use crate::batch::IndexedBatch;
use crate::placement::CubePlacement;
use crate::random::RandomSource;
use crate::templates::{CUBE_CORNERS, CUBE_SOUP, CUBE_TRIANGLES, shifted_cube_triangles};

/// Generate `count` cubes as 36 unindexed vertices each
///
/// Each copy of [`CUBE_SOUP`] is moved by its own [`CubePlacement`].
pub fn generate_cube_soup(rng: &mut RandomSource, count: usize) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(count * CUBE_SOUP.len());

    for _ in 0..count {
        let mut cube = CUBE_SOUP;
        CubePlacement::sample(rng).apply(&mut cube);
        vertices.extend_from_slice(&cube);
    }

    vertices
}

/// Generate `count` cubes as 8 corners and 12 index triples each
///
/// The triangle table of cube `i` is shifted by `8 * i`. Corners receive the
/// same kind of placement as [`generate_cube_soup`], drawn in the same order.
pub fn generate_cubes_indexed(rng: &mut RandomSource, count: usize) -> IndexedBatch {
    let corners = CUBE_CORNERS.len();
    let mut batch = IndexedBatch::with_capacity(count * corners, count * CUBE_TRIANGLES.len());

    for i in 0..count {
        let mut cube = CUBE_CORNERS;
        CubePlacement::sample(rng).apply(&mut cube);
        batch.vertices.extend_from_slice(&cube);
        batch
            .indices
            .extend(shifted_cube_triangles((i * corners) as u32));
    }

    batch
}
