//! Geometry kernel for Glyphwire
//!
//! This crate provides the dimension-generic building blocks for wireframe
//! rendering:
//!
//! - [`VecN`] - point in k-dimensional space (k >= 2)
//! - [`AxisPair`] - a rotation plane named by two distinct axes
//! - [`RotationSpec`] - ordered composition of planar rotations
//! - [`ShapeDef`] - validated vertex/edge wireframe definition
//! - [`GeometryError`] - construction-time validation errors

mod error;
mod rotation;
mod shape;
mod vecn;

pub use error::GeometryError;
pub use rotation::{wrapped, AxisPair, RotationSpec};
pub use shape::{Edge, ShapeDef};
pub use vecn::VecN;
