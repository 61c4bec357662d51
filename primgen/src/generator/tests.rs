//! Property tests for the primitive generators

use glam::{Vec3, vec3};

use super::*;
use crate::batch::Aabb;
use crate::request::GeometryRequest;
use crate::placement::CubePlacement;
use crate::templates::{CUBE_CORNERS, CUBE_SOUP};

const EPSILON: f32 = 1e-6;

fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() <= EPSILON
}

/// Every (shape, mode) pair
fn all_kinds() -> impl Iterator<Item = (Shape, Mode)> {
    Shape::ALL
        .into_iter()
        .flat_map(|shape| Mode::ALL.into_iter().map(move |mode| (shape, mode)))
}

#[test]
fn test_golden_triangle_seed_0() {
    let vertices = PrimitiveGenerator::new(0).generate_triangles(1);
    let expected = [
        vec3(0.410_009_83, 0.750_291_4, 0.382_551_8),
        vec3(0.319_780_23, 0.879_577_16, 0.320_096_2),
        vec3(0.087_212_503, 0.674_498_56, 0.494_928_1),
    ];
    assert_eq!(vertices.len(), 3);
    for (got, want) in vertices.iter().zip(expected) {
        assert!(approx_eq(*got, want), "{got} != {want}");
    }
}

#[test]
fn test_triangle_draws_position_then_offset() {
    let mut rng = RandomSource::new(42);
    let positions: Vec<f32> = (0..9).map(|_| rng.uniform(0.0, 1.0)).collect();
    let offset = rng.uniform_vec3(0.0, 0.6);

    let vertices = PrimitiveGenerator::new(42).generate_triangles(1);
    for (i, v) in vertices.iter().enumerate() {
        let raw = vec3(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]);
        assert_eq!(*v, raw * 0.4 + offset);
    }
}

#[test]
fn test_cardinalities() {
    let mut generator = PrimitiveGenerator::new(1);
    for n in [0, 1, 2, 7] {
        assert_eq!(generator.generate_triangles(n).len(), 3 * n);
        assert_eq!(generator.generate_triangulated_quad_soups(n).len(), 6 * n);
        assert_eq!(generator.generate_triangulated_cube_soups(n).len(), 36 * n);

        let tris = generator.generate_triangles_indexed(n);
        assert_eq!((tris.vertices.len(), tris.indices.len()), (3 * n, n));
        let quads = generator.generate_triangulated_quads_indexed(n);
        assert_eq!((quads.vertices.len(), quads.indices.len()), (4 * n, 2 * n));
        let cubes = generator.generate_triangulated_cubes_indexed(n);
        assert_eq!((cubes.vertices.len(), cubes.indices.len()), (8 * n, 12 * n));
    }
}

#[test]
fn test_dispatch_matches_expected_counts() {
    for (shape, mode) in all_kinds() {
        let request = GeometryRequest::new(shape, mode, 3, 9);
        let batch = request.generate();
        assert_eq!(batch.vertex_count(), request.expected_vertex_count(), "{shape}/{mode}");
        assert_eq!(batch.triangle_count(), request.expected_triangle_count(), "{shape}/{mode}");
        assert_eq!(batch.is_indexed(), mode == Mode::Indexed);
    }
}

#[test]
fn test_zero_count_is_empty_everywhere() {
    let mut generator = PrimitiveGenerator::new(0);
    for (shape, mode) in all_kinds() {
        let batch = generator.generate(shape, mode, 0);
        assert!(batch.is_empty(), "{shape}/{mode}");
        assert_eq!(batch.triangle_count(), 0);
        if let Some(indices) = batch.indices() {
            assert!(indices.is_empty());
        }
    }
    assert_eq!(generator.random().draws(), 0);
}

#[test]
fn test_determinism_across_call_sequences() {
    let run = || {
        let mut generator = PrimitiveGenerator::new(2024);
        all_kinds()
            .map(|(shape, mode)| generator.generate(shape, mode, 4))
            .collect::<Vec<_>>()
    };
    let a = run();
    let b = run();
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.position_bytes(), y.position_bytes());
        assert_eq!(x.index_bytes(), y.index_bytes());
    }
}

#[test]
fn test_calls_continue_the_stream() {
    let mut generator = PrimitiveGenerator::new(5);
    let first = generator.generate_triangles(1);
    let second = generator.generate_triangles(1);
    assert_ne!(first, second);

    generator.reseed(5);
    assert_eq!(generator.generate_triangles(1), first);
}

#[test]
fn test_soup_draw_counts() {
    let mut generator = PrimitiveGenerator::new(0);
    generator.generate_triangles(4);
    assert_eq!(generator.random().draws(), 4 * 12);

    generator.reseed(0);
    generator.generate_triangulated_quad_soups(4);
    assert_eq!(generator.random().draws(), 4 * 12);

    generator.reseed(0);
    generator.generate_triangulated_quads_indexed(4);
    assert_eq!(generator.random().draws(), 4 * 12);

    generator.reseed(0);
    generator.generate_triangulated_cube_soups(4);
    assert_eq!(generator.random().draws(), 4 * 8);

    generator.reseed(0);
    generator.generate_triangulated_cubes_indexed(4);
    assert_eq!(generator.random().draws(), 4 * 8);
}

#[test]
fn test_quad_soup_slot_pattern() {
    let vertices = PrimitiveGenerator::new(31).generate_triangulated_quad_soups(16);
    for quad in vertices.chunks_exact(6) {
        assert_eq!(quad[3], quad[2]);
        assert_eq!(quad[4], quad[1]);
        let derived = complete_parallelogram(quad[0], quad[1], quad[2]);
        assert!(approx_eq(quad[5], derived), "{} != {derived}", quad[5]);
    }
}

#[test]
fn test_quad_indexed_fourth_vertex() {
    let batch = PrimitiveGenerator::new(31).generate_triangulated_quads_indexed(16);
    for quad in batch.vertices.chunks_exact(4) {
        let derived = complete_parallelogram(quad[0], quad[1], quad[2]);
        assert!(approx_eq(quad[3], derived), "{} != {derived}", quad[3]);
    }
}

#[test]
fn test_quad_soup_and_indexed_share_stream_layout() {
    let soup = PrimitiveGenerator::new(8).generate_triangulated_quad_soups(5);
    let indexed = PrimitiveGenerator::new(8).generate_triangulated_quads_indexed(5);
    for (s, i) in soup.chunks_exact(6).zip(indexed.vertices.chunks_exact(4)) {
        assert_eq!(&s[..3], &i[..3]);
        assert_eq!(s[5], i[3]);
    }
}

#[test]
fn test_quad_indexed_triples() {
    let batch = PrimitiveGenerator::new(0).generate_triangulated_quads_indexed(3);
    assert_eq!(batch.indices[2], glam::uvec3(4, 5, 6));
    assert_eq!(batch.indices[3], glam::uvec3(6, 5, 7));
}

#[test]
fn test_sampled_soup_vertices_stay_in_unit_box() {
    let unit = Aabb {
        min: Vec3::ZERO,
        max: Vec3::ONE,
    };
    let mut generator = PrimitiveGenerator::new(12345);
    for mode in Mode::ALL {
        let batch = generator.generate(Shape::Triangle, mode, 500);
        assert!(unit.contains(&batch.bounds().unwrap()));
    }

    // Slots 0..5 of a quad are sampled corners or copies of them
    let quads = generator.generate_triangulated_quad_soups(500);
    for quad in quads.chunks_exact(6) {
        assert!(unit.contains(&Aabb::from_points(&quad[..5]).unwrap()));
    }
}

#[test]
fn test_derived_quad_corner_bounds() {
    // v2 + (v1 - v0) spans [-1, 2] before placement
    let window = Aabb {
        min: Vec3::splat(-0.4 - EPSILON),
        max: Vec3::splat(1.4 + EPSILON),
    };
    let batch = PrimitiveGenerator::new(6).generate_triangulated_quads_indexed(500);
    for quad in batch.vertices.chunks_exact(4) {
        let sampled = Aabb::from_points(&quad[..3]).unwrap();
        assert!(sampled.min.min_element() >= 0.0 && sampled.max.max_element() <= 1.0);
        assert!(window.contains(&Aabb::from_points(&quad[3..]).unwrap()));
    }
}

#[test]
fn test_soup_primitives_fit_placement_window() {
    // Each primitive is scaled by 0.4, so its own extent never exceeds 0.4
    let vertices = PrimitiveGenerator::new(3).generate_triangles(200);
    for tri in vertices.chunks_exact(3) {
        let bounds = Aabb::from_points(tri).unwrap();
        assert!(bounds.size().max_element() <= 0.4 + EPSILON);
    }
}

#[test]
fn test_indices_stay_within_primitive_block() {
    let mut generator = PrimitiveGenerator::new(77);
    for (shape, mode) in all_kinds().filter(|(_, mode)| *mode == Mode::Indexed) {
        let batch = generator.generate(shape, mode, 9);
        let indices = batch.indices().unwrap();
        let block = shape.vertices_per_primitive(mode) as u32;
        let per_primitive = shape.triangles_per_primitive();

        for (t, tri) in indices.iter().enumerate() {
            let primitive = (t / per_primitive) as u32;
            for i in tri.to_array() {
                assert!((i as usize) < batch.vertex_count());
                assert_eq!(i / block, primitive, "{shape}: triangle {t} leaves its block");
            }
        }
    }
}

#[test]
fn test_cube_soup_is_placed_template() {
    let vertices = PrimitiveGenerator::new(64).generate_triangulated_cube_soups(4);

    let mut rng = RandomSource::new(64);
    for cube in vertices.chunks_exact(36) {
        let matrix = CubePlacement::sample(&mut rng).matrix();
        for (got, local) in cube.iter().zip(CUBE_SOUP) {
            assert!(approx_eq(*got, matrix.transform_point3(local)));
        }
    }
}

#[test]
fn test_cube_indexed_applies_placement() {
    let batch = PrimitiveGenerator::new(64).generate_triangulated_cubes_indexed(4);

    let mut rng = RandomSource::new(64);
    for cube in batch.vertices.chunks_exact(8) {
        let matrix = CubePlacement::sample(&mut rng).matrix();
        for (got, local) in cube.iter().zip(CUBE_CORNERS) {
            assert!(approx_eq(*got, matrix.transform_point3(local)));
        }
    }
}

#[test]
fn test_cube_indexed_matches_cube_soup_geometry() {
    // Same seed, same draw order: resolved triangles coincide
    let soup = PrimitiveBatch::from(PrimitiveGenerator::new(10).generate_triangulated_cube_soups(3));
    let indexed =
        PrimitiveBatch::from(PrimitiveGenerator::new(10).generate_triangulated_cubes_indexed(3));

    let soup_tris = soup.triangles();
    let indexed_tris = indexed.triangles();
    assert_eq!(soup_tris.len(), indexed_tris.len());
    for (a, b) in soup_tris.iter().zip(&indexed_tris) {
        for (p, q) in a.iter().zip(b) {
            assert!(approx_eq(*p, *q));
        }
    }
}

#[test]
fn test_cube_vertices_bounded() {
    // scale <= 0.4 keeps corners within 0.4 * sqrt(3) of the translation
    let reach = 0.4 * 3f32.sqrt() + EPSILON;
    let vertices = PrimitiveGenerator::new(99).generate_triangulated_cube_soups(100);
    for v in &vertices {
        assert!(v.min_element() >= -reach && v.max_element() <= 0.6 + reach, "{v}");
    }
}

#[test]
fn test_cube_edges_share_scale() {
    let batch = PrimitiveGenerator::new(4).generate_triangulated_cubes_indexed(6);
    for cube in batch.vertices.chunks_exact(8) {
        // corners 1, 2, 3 are the unit axes from corner 0
        let edges = [1, 2, 3].map(|i| (cube[i] - cube[0]).length());
        assert!((edges[0] - edges[1]).abs() < 1e-5);
        assert!((edges[0] - edges[2]).abs() < 1e-5);
        assert!(edges[0] > 0.0 && edges[0] <= 0.4 + 1e-5);
    }
}
