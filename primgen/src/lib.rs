//! Synthetic primitive geometry for renderer conformance scenes
//!
//! Generates deterministic vertex buffers (optionally indexed) of randomly
//! placed triangles, quads and cubes. Output depends only on the seed, the
//! primitive counts and the order of generator calls, so a scene rendered by
//! two implementations can be compared image for image.
//!
//! # Example
//! ```
//! use primgen::{Mode, PrimitiveGenerator, Shape};
//!
//! let mut generator = PrimitiveGenerator::new(0);
//!
//! let triangles = generator.generate_triangles(4);
//! assert_eq!(triangles.len(), 12);
//!
//! let cubes = generator.generate(Shape::Cube, Mode::Indexed, 2);
//! assert_eq!(cubes.vertex_count(), 16);
//! assert_eq!(cubes.triangle_count(), 24);
//! ```

pub mod batch;
pub mod error;
pub mod export;
pub mod generator;
pub mod placement;
pub mod random;
pub mod request;
pub mod scene;
pub mod templates;

pub use batch::{Aabb, IndexedBatch, PrimitiveBatch};
pub use error::{Error, Result};
pub use export::{BatchDocument, to_json, write_json, write_obj};
pub use generator::PrimitiveGenerator;
pub use random::RandomSource;
pub use request::{GeometryRequest, Mode, Shape};
pub use scene::{ParameterInfo, ParameterKind, SceneParameters, parameter_descriptors};
