//! Quads built from three sampled corners
//!
//! The fourth corner completes a parallelogram: `v3 = v2 + (v1 - v0)`.

use glam::{UVec3, Vec3};

use crate::batch::IndexedBatch;
use crate::placement::SoupOffset;
use crate::random::RandomSource;

/// Draw the three sampled corners of one quad
fn sample_corners(rng: &mut RandomSource) -> [Vec3; 3] {
    let v0 = rng.uniform_vec3(0.0, 1.0);
    let v1 = rng.uniform_vec3(0.0, 1.0);
    let v2 = rng.uniform_vec3(0.0, 1.0);
    [v0, v1, v2]
}

/// Corner opposite `v0` in the parallelogram spanned at `v0`
#[inline]
pub fn complete_parallelogram(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    v2 + (v1 - v0)
}

/// Generate `count` quads as two unindexed triangles each (6 vertices)
///
/// Slot layout per quad: `v0, v1, v2, v2, v1, v2 + (v1 - v0)`. Only the first
/// three slots consume draws; the offset is drawn afterwards and applied to
/// all six.
pub fn generate_quad_soup(rng: &mut RandomSource, count: usize) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(count * 6);

    for _ in 0..count {
        let [v0, v1, v2] = sample_corners(rng);
        let mut quad = [v0, v1, v2, v2, v1, complete_parallelogram(v0, v1, v2)];
        SoupOffset::sample(rng).apply(&mut quad);
        vertices.extend_from_slice(&quad);
    }

    vertices
}

/// Generate `count` quads sharing 4 vertices through 2 index triples each
///
/// For quad `k` with `base = 4k`: `(base, base+1, base+2)` and
/// `(base+2, base+1, base+3)`.
pub fn generate_quads_indexed(rng: &mut RandomSource, count: usize) -> IndexedBatch {
    let mut batch = IndexedBatch::with_capacity(count * 4, count * 2);

    for k in 0..count as u32 {
        let [v0, v1, v2] = sample_corners(rng);
        let mut quad = [v0, v1, v2, complete_parallelogram(v0, v1, v2)];
        SoupOffset::sample(rng).apply(&mut quad);
        batch.vertices.extend_from_slice(&quad);

        let base = k * 4;
        batch.indices.push(UVec3::new(base, base + 1, base + 2));
        batch.indices.push(UVec3::new(base + 2, base + 1, base + 3));
    }

    batch
}
