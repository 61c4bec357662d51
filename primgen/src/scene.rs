//! Scene parameters
//!
//! The parameter set a conformance scene exposes to its driver, loadable from
//! a TOML file:
//!
//! ```toml
//! geometry_subtype = "cube"
//! primitive_mode = "indexed"
//! primitive_count = 16
//! seed = 7
//! ```
//!
//! Missing keys take the defaults listed by [`parameter_descriptors`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::request::{GeometryRequest, Mode, Shape};

/// Image edge length handed to the rendering collaborator by default
pub const DEFAULT_IMAGE_SIZE: u32 = 1024;

/// Parameters of one generated scene
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParameters {
    /// Which type of geometry to generate
    pub geometry_subtype: Shape,
    /// How the data is arranged
    pub primitive_mode: Mode,
    /// How many primitives to generate
    pub primitive_count: u32,
    /// Random stream seed
    pub seed: u64,
    /// Output image width in pixels
    pub image_width: u32,
    /// Output image height in pixels
    pub image_height: u32,
}

impl Default for SceneParameters {
    fn default() -> Self {
        Self {
            geometry_subtype: Shape::Triangle,
            primitive_mode: Mode::Soup,
            primitive_count: 1,
            seed: 0,
            image_width: DEFAULT_IMAGE_SIZE,
            image_height: DEFAULT_IMAGE_SIZE,
        }
    }
}

impl SceneParameters {
    /// Load parameters from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content)
    }

    /// Parse parameters from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Geometry part of the parameters
    pub fn request(&self) -> GeometryRequest {
        GeometryRequest::new(
            self.geometry_subtype,
            self.primitive_mode,
            self.primitive_count as usize,
            self.seed,
        )
    }
}

/// Value type of a scene parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ParameterKind {
    String,
    UInt32,
    UInt64,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterKind::String => "string",
            ParameterKind::UInt32 => "uint32",
            ParameterKind::UInt64 => "uint64",
        };
        f.write_str(name)
    }
}

/// Description of one scene parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterInfo {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub default: &'static str,
    pub description: &'static str,
}

const PARAMETERS: [ParameterInfo; 6] = [
    ParameterInfo {
        name: "geometry_subtype",
        kind: ParameterKind::String,
        default: "triangle",
        description: "Which type of geometry to generate (triangle, quad or cube)",
    },
    ParameterInfo {
        name: "primitive_mode",
        kind: ParameterKind::String,
        default: "soup",
        description: "How the data is arranged (soup or indexed)",
    },
    ParameterInfo {
        name: "primitive_count",
        kind: ParameterKind::UInt32,
        default: "1",
        description: "How many primitives should be generated",
    },
    ParameterInfo {
        name: "seed",
        kind: ParameterKind::UInt64,
        default: "0",
        description: "Seed of the random stream",
    },
    ParameterInfo {
        name: "image_width",
        kind: ParameterKind::UInt32,
        default: "1024",
        description: "Width of the image",
    },
    ParameterInfo {
        name: "image_height",
        kind: ParameterKind::UInt32,
        default: "1024",
        description: "Height of the image",
    },
];

/// Every parameter a scene accepts, in declaration order
pub fn parameter_descriptors() -> &'static [ParameterInfo] {
    &PARAMETERS
}
