//! Generated primitive batches
//!
//! A batch is produced fresh per generator call and is never mutated by the
//! generator afterwards.

use glam::{UVec3, Vec3};

/// Vertex positions plus triangles referencing them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedBatch {
    /// Compact vertex array
    pub vertices: Vec<Vec3>,
    /// One entry per triangle, indexing into `vertices`
    pub indices: Vec<UVec3>,
}

impl IndexedBatch {
    /// Create an empty batch with room for the given totals
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles),
        }
    }
}

/// Output of one generator call
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveBatch {
    /// Unindexed triangle list: every three vertices form a triangle
    Soup(Vec<Vec3>),
    /// Shared vertices plus index triples
    Indexed(IndexedBatch),
}

impl PrimitiveBatch {
    /// Vertex positions in emission order
    pub fn vertices(&self) -> &[Vec3] {
        match self {
            Self::Soup(vertices) => vertices,
            Self::Indexed(batch) => &batch.vertices,
        }
    }

    /// Index triples, or `None` for soup batches
    pub fn indices(&self) -> Option<&[UVec3]> {
        match self {
            Self::Soup(_) => None,
            Self::Indexed(batch) => Some(&batch.indices),
        }
    }

    /// True for [`PrimitiveBatch::Indexed`]
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed(_))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    pub fn triangle_count(&self) -> usize {
        match self {
            Self::Soup(vertices) => vertices.len() / 3,
            Self::Indexed(batch) => batch.indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    /// Axis-aligned bounds of all vertices, `None` when empty
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices())
    }

    /// Vertex positions as a tightly packed `f32x3` attribute array
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices())
    }

    /// Index triples as a tightly packed `u32x3` array (empty for soup)
    pub fn index_bytes(&self) -> &[u8] {
        self.indices().map(bytemuck::cast_slice).unwrap_or(&[])
    }

    /// Triangles as vertex positions, resolving indices when present
    pub fn triangles(&self) -> Vec<[Vec3; 3]> {
        match self {
            Self::Soup(vertices) => vertices
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect(),
            Self::Indexed(batch) => batch
                .indices
                .iter()
                .map(|tri| tri.to_array().map(|i| batch.vertices[i as usize]))
                .collect(),
        }
    }
}

impl From<Vec<Vec3>> for PrimitiveBatch {
    fn from(vertices: Vec<Vec3>) -> Self {
        Self::Soup(vertices)
    }
}

impl From<IndexedBatch> for PrimitiveBatch {
    fn from(batch: IndexedBatch) -> Self {
        Self::Indexed(batch)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Smallest box containing every point
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = Self {
            min: *first,
            max: *first,
        };
        Some(rest.iter().fold(init, |acc, &p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True if `other` lies inside this box (inclusive)
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }
}
