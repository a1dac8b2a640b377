//! Glyphwire - animated N-dimensional wireframes as character grids
//!
//! The library surface re-exports the three layers; the binary in this
//! package is the animation driver that ties them to a terminal.

pub mod config;

pub use glyphwire_core::{AnimationTemplate, Animator, RotationSpec, Scene, ShapeDef, ShapeTemplate};
pub use glyphwire_render::{FrameBuffer, GlyphTexture, Palette, RendererConfig, WireframeRenderer};
