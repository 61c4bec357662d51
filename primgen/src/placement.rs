//! Per-primitive affine placement
//!
//! Soup primitives are shrunk and shifted into the unit box with
//! [`SoupOffset`]. Cubes get a full scale → rotate → translate transform
//! sampled into a [`CubePlacement`].

use glam::{Mat4, Quat, Vec3};
use tracing::warn;

use crate::random::RandomSource;

/// Factor applied to every soup vertex before its offset is added
pub const SOUP_SCALE: f32 = 0.4;

/// Upper bound of each offset / translation component
pub const OFFSET_MAX: f32 = 0.6;

/// Upper bound of the uniform cube scale
pub const CUBE_SCALE_MAX: f32 = 0.4;

/// Upper bound of the cube rotation angle, in degrees
pub const ANGLE_MAX_DEGREES: f32 = 360.0;

/// Translation shared by all vertices of one soup primitive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoupOffset(pub Vec3);

impl SoupOffset {
    /// Draw the three offset components (x, y, z)
    pub fn sample(rng: &mut RandomSource) -> Self {
        Self(rng.uniform_vec3(0.0, OFFSET_MAX))
    }

    /// Remap `v` as `v * 0.4 + offset`
    #[inline]
    pub fn place(self, v: Vec3) -> Vec3 {
        v * SOUP_SCALE + self.0
    }

    /// Remap every vertex of a primitive in place
    pub fn apply(self, vertices: &mut [Vec3]) {
        for v in vertices {
            *v = self.place(*v);
        }
    }
}

/// Random instance transform for one cube
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubePlacement {
    /// Uniform scale in (0, 0.4]
    pub scale: f32,
    /// Rotation angle in degrees, sampled in `(0, 360]`; 360 is the same
    /// rotation as 0
    pub angle_degrees: f32,
    /// Rotation axis; components in [0, 1], not normalized
    pub axis: Vec3,
    /// Translation; components in [0, 0.6]
    pub translation: Vec3,
}

impl CubePlacement {
    /// Draw a placement: scale, angle, axis x/y/z, translation x/y/z
    pub fn sample(rng: &mut RandomSource) -> Self {
        let scale = rng.uniform(0.0, CUBE_SCALE_MAX);
        let angle_degrees = rng.uniform(0.0, ANGLE_MAX_DEGREES);
        let axis = rng.uniform_vec3(0.0, 1.0);
        let translation = rng.uniform_vec3(0.0, OFFSET_MAX);
        Self {
            scale,
            angle_degrees,
            axis,
            translation,
        }
    }

    /// Rotation about the normalized axis
    ///
    /// An axis that cannot be normalized (zero length or non-finite) yields
    /// the identity rotation.
    pub fn rotation(&self) -> Quat {
        match self.axis.try_normalize() {
            Some(axis) => Quat::from_axis_angle(axis, self.angle_degrees.to_radians()),
            None => {
                warn!(
                    "CubePlacement: degenerate rotation axis {}, using identity",
                    self.axis
                );
                Quat::IDENTITY
            }
        }
    }

    /// Homogeneous transform `translate · rotate · scale`
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_quat(self.rotation())
            * Mat4::from_scale(Vec3::splat(self.scale))
    }

    /// Transform every vertex of one cube in place
    pub fn apply(&self, vertices: &mut [Vec3]) {
        let matrix = self.matrix();
        for v in vertices {
            *v = matrix.transform_point3(*v);
        }
    }
}
