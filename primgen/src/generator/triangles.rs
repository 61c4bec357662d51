//! Triangle soup

use glam::{UVec3, Vec3};

use crate::batch::IndexedBatch;
use crate::placement::SoupOffset;
use crate::random::RandomSource;

/// Generate `count` independent triangles (3 vertices each)
///
/// Per triangle: nine position draws (vertex-major, component-minor) in
/// [0, 1], then three offset draws, then `v * 0.4 + offset` for each vertex.
pub fn generate_triangles(rng: &mut RandomSource, count: usize) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(count * 3);

    for _ in 0..count {
        let mut tri = [Vec3::ZERO; 3];
        for v in &mut tri {
            *v = rng.uniform_vec3(0.0, 1.0);
        }
        SoupOffset::sample(rng).apply(&mut tri);
        vertices.extend_from_slice(&tri);
    }

    vertices
}

/// Triangle soup with one sequential index triple per triangle
///
/// Consumes the stream exactly like [`generate_triangles`].
pub fn generate_triangles_indexed(rng: &mut RandomSource, count: usize) -> IndexedBatch {
    let vertices = generate_triangles(rng, count);
    let indices = (0..count as u32)
        .map(|k| {
            let base = k * 3;
            UVec3::new(base, base + 1, base + 2)
        })
        .collect();
    IndexedBatch { vertices, indices }
}
