//! Serializable shape and animation templates
//!
//! Templates are the RON/TOML-facing descriptions of what to render; they
//! carry plain construction parameters and resolve into validated geometry
//! on demand. Validation stays with the geometry kernel, so a template for
//! a malformed shape fails at `create_shape`, not at parse time.

use glyphwire_math::{AxisPair, Edge, GeometryError, ShapeDef, VecN};
use serde::{Deserialize, Serialize};

use crate::Animator;

/// Serializable shape description
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// A k-dimensional hypercube centered at the origin
    Hypercube {
        /// Number of axes (2 = square, 3 = cube, 4 = tesseract)
        dimension: usize,
        /// Full side length in shape-space units
        size: f32,
    },
    /// An explicit vertex/edge list for shapes outside the hypercube family
    Custom {
        /// Vertex coordinates, all the same length
        vertices: Vec<Vec<f32>>,
        /// Undirected vertex index pairs
        edges: Vec<(usize, usize)>,
    },
}

impl ShapeTemplate {
    /// Resolve the template into a validated shape
    pub fn create_shape(&self) -> Result<ShapeDef, GeometryError> {
        let shape = match self {
            ShapeTemplate::Hypercube { dimension, size } => {
                ShapeDef::hypercube(*dimension, *size)
            }
            ShapeTemplate::Custom { vertices, edges } => ShapeDef::new(
                vertices.iter().cloned().map(VecN::new).collect(),
                edges.iter().map(|&(a, b)| Edge(a, b)).collect(),
            ),
        }?;
        log::debug!(
            "Resolved {}D shape template: {} vertices, {} edges",
            shape.dimension(),
            shape.vertex_count(),
            shape.edge_count(),
        );
        Ok(shape)
    }

    /// Shorthand for the hypercube variant
    pub fn hypercube(dimension: usize, size: f32) -> Self {
        ShapeTemplate::Hypercube { dimension, size }
    }
}

/// One rotation plane and its angular rate in radians per second
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpinTemplate {
    /// The two axes of the rotation plane
    pub axes: (usize, usize),
    /// Radians per second
    pub rate: f32,
}

/// Serializable animation description: which planes spin, and how fast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationTemplate {
    pub spins: Vec<SpinTemplate>,
}

impl AnimationTemplate {
    /// The canonical planes of a k-dimensional shape, all at one rate
    pub fn uniform(dimension: usize, rate: f32) -> Self {
        let spec = glyphwire_math::RotationSpec::canonical(dimension);
        Self {
            spins: spec
                .planes()
                .iter()
                .map(|(pair, _)| SpinTemplate { axes: pair.axes(), rate })
                .collect(),
        }
    }

    /// Resolve into an animator; fails on a plane naming one axis twice
    pub fn create_animator(&self) -> Result<Animator, GeometryError> {
        let mut planes = Vec::with_capacity(self.spins.len());
        for spin in &self.spins {
            planes.push((AxisPair::new(spin.axes.0, spin.axes.1)?, spin.rate));
        }
        Ok(Animator::new(planes))
    }
}
