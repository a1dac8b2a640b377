//! Scene layer for Glyphwire
//!
//! Sits between the geometry kernel and the driver:
//!
//! - [`ShapeTemplate`] - serializable shape description (RON-friendly)
//! - [`AnimationTemplate`] / [`SpinTemplate`] - serializable per-plane spin
//!   rates
//! - [`Animator`] - owns the current rotation angles and advances them by
//!   the configured rates once per driver tick
//! - [`Scene`] - a named shape/animation pair loadable from a RON file
//!
//! The rendering engine itself never owns timers or angle state; the driver
//! holds an [`Animator`] and passes its [`RotationSpec`] into each render
//! call.

mod animator;
mod scene;
mod templates;

pub use animator::Animator;
pub use scene::{Scene, SceneLoadError, SceneSaveError};
pub use templates::{AnimationTemplate, ShapeTemplate, SpinTemplate};

// Re-export the math types templates resolve into
pub use glyphwire_math::{AxisPair, Edge, GeometryError, RotationSpec, ShapeDef, VecN};
