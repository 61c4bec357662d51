//! Unit-cube topology tables
//!
//! Local-frame geometry shared by the cube generators. Triangles are wound so
//! their geometric normal points out of the cube.

use glam::{UVec3, Vec3, uvec3, vec3};

/// Corners of the unit cube, referenced by [`CUBE_TRIANGLES`]
pub const CUBE_CORNERS: [Vec3; 8] = [
    vec3(0.0, 0.0, 0.0),
    vec3(1.0, 0.0, 0.0),
    vec3(0.0, 1.0, 0.0),
    vec3(0.0, 0.0, 1.0),
    vec3(1.0, 1.0, 0.0),
    vec3(1.0, 0.0, 1.0),
    vec3(0.0, 1.0, 1.0),
    vec3(1.0, 1.0, 1.0),
];

/// Twelve triangles over [`CUBE_CORNERS`], two per face
pub const CUBE_TRIANGLES: [UVec3; 12] = [
    uvec3(0, 2, 1), // front
    uvec3(1, 2, 4),
    uvec3(1, 4, 5), // right
    uvec3(5, 4, 7),
    uvec3(5, 7, 3), // back
    uvec3(6, 3, 7),
    uvec3(0, 3, 6), // left
    uvec3(0, 6, 2),
    uvec3(2, 7, 4), // top
    uvec3(2, 6, 7),
    uvec3(0, 1, 5), // bottom
    uvec3(0, 5, 3),
];

/// Unindexed cube: [`CUBE_TRIANGLES`] expanded over [`CUBE_CORNERS`]
pub const CUBE_SOUP: [Vec3; 36] = [
    // front
    vec3(0.0, 0.0, 0.0),
    vec3(0.0, 1.0, 0.0),
    vec3(1.0, 0.0, 0.0),
    vec3(1.0, 0.0, 0.0),
    vec3(0.0, 1.0, 0.0),
    vec3(1.0, 1.0, 0.0),
    // right
    vec3(1.0, 0.0, 0.0),
    vec3(1.0, 1.0, 0.0),
    vec3(1.0, 0.0, 1.0),
    vec3(1.0, 0.0, 1.0),
    vec3(1.0, 1.0, 0.0),
    vec3(1.0, 1.0, 1.0),
    // back
    vec3(1.0, 0.0, 1.0),
    vec3(1.0, 1.0, 1.0),
    vec3(0.0, 0.0, 1.0),
    vec3(0.0, 1.0, 1.0),
    vec3(0.0, 0.0, 1.0),
    vec3(1.0, 1.0, 1.0),
    // left
    vec3(0.0, 0.0, 0.0),
    vec3(0.0, 0.0, 1.0),
    vec3(0.0, 1.0, 1.0),
    vec3(0.0, 0.0, 0.0),
    vec3(0.0, 1.0, 1.0),
    vec3(0.0, 1.0, 0.0),
    // top
    vec3(0.0, 1.0, 0.0),
    vec3(1.0, 1.0, 1.0),
    vec3(1.0, 1.0, 0.0),
    vec3(0.0, 1.0, 0.0),
    vec3(0.0, 1.0, 1.0),
    vec3(1.0, 1.0, 1.0),
    // bottom
    vec3(0.0, 0.0, 0.0),
    vec3(1.0, 0.0, 0.0),
    vec3(1.0, 0.0, 1.0),
    vec3(0.0, 0.0, 0.0),
    vec3(1.0, 0.0, 1.0),
    vec3(0.0, 0.0, 1.0),
];

/// Triangle table for the cube whose corners start at `base`
pub fn shifted_cube_triangles(base: u32) -> impl Iterator<Item = UVec3> {
    CUBE_TRIANGLES.iter().map(move |&tri| tri + UVec3::splat(base))
}
