//! Shape / mode selection and one-shot generation requests

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::batch::PrimitiveBatch;
use crate::error::Error;
use crate::generator::PrimitiveGenerator;

/// Primitive kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Triangle,
    Quad,
    Cube,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Triangle, Shape::Quad, Shape::Cube];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Quad => "quad",
            Shape::Cube => "cube",
        }
    }

    /// Vertices emitted per primitive in the given mode
    pub fn vertices_per_primitive(self, mode: Mode) -> usize {
        match (self, mode) {
            (Shape::Triangle, _) => 3,
            (Shape::Quad, Mode::Soup) => 6,
            (Shape::Quad, Mode::Indexed) => 4,
            (Shape::Cube, Mode::Soup) => 36,
            (Shape::Cube, Mode::Indexed) => 8,
        }
    }

    /// Triangles per primitive (mode independent)
    pub fn triangles_per_primitive(self) -> usize {
        match self {
            Shape::Triangle => 1,
            Shape::Quad => 2,
            Shape::Cube => 12,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

/// Vertex data arrangement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No shared vertices
    #[default]
    Soup,
    /// Compact vertex array plus index triples
    Indexed,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Soup, Mode::Indexed];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Soup => "soup",
            Mode::Indexed => "indexed",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

/// Everything needed to reproduce one batch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryRequest {
    pub shape: Shape,
    pub mode: Mode,
    pub primitive_count: usize,
    pub seed: u64,
}

impl GeometryRequest {
    pub fn new(shape: Shape, mode: Mode, primitive_count: usize, seed: u64) -> Self {
        Self {
            shape,
            mode,
            primitive_count,
            seed,
        }
    }

    /// Generate from a freshly seeded generator
    pub fn generate(&self) -> PrimitiveBatch {
        PrimitiveGenerator::new(self.seed).generate(self.shape, self.mode, self.primitive_count)
    }

    pub fn expected_vertex_count(&self) -> usize {
        self.shape.vertices_per_primitive(self.mode) * self.primitive_count
    }

    pub fn expected_triangle_count(&self) -> usize {
        self.shape.triangles_per_primitive() * self.primitive_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_str() {
        assert_eq!("triangle".parse::<Shape>().unwrap(), Shape::Triangle);
        assert_eq!("Quad".parse::<Shape>().unwrap(), Shape::Quad);
        assert_eq!(" CUBE ".parse::<Shape>().unwrap(), Shape::Cube);
        assert!(matches!(
            "sphere".parse::<Shape>(),
            Err(Error::UnknownShape(name)) if name == "sphere"
        ));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("soup".parse::<Mode>().unwrap(), Mode::Soup);
        assert_eq!("Indexed".parse::<Mode>().unwrap(), Mode::Indexed);
        assert!(matches!("strip".parse::<Mode>(), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn test_display_round_trips_names() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
        }
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_expected_counts() {
        let request = GeometryRequest::new(Shape::Cube, Mode::Indexed, 5, 0);
        assert_eq!(request.expected_vertex_count(), 40);
        assert_eq!(request.expected_triangle_count(), 60);

        let request = GeometryRequest::new(Shape::Quad, Mode::Soup, 5, 0);
        assert_eq!(request.expected_vertex_count(), 30);
        assert_eq!(request.expected_triangle_count(), 10);
    }

    #[test]
    fn test_request_generate_is_reproducible() {
        let request = GeometryRequest::new(Shape::Quad, Mode::Indexed, 8, 77);
        assert_eq!(request.generate(), request.generate());
    }

    #[test]
    fn test_default_request() {
        let request = GeometryRequest::default();
        assert_eq!(request.shape, Shape::Triangle);
        assert_eq!(request.mode, Mode::Soup);
        assert!(request.generate().is_empty());
    }
}
