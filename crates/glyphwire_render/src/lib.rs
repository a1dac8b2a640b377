//! Wireframe-to-glyph rendering pipeline
//!
//! Turns a rotated k-dimensional wireframe into a fixed-size character
//! grid. One frame flows through four stages:
//!
//! 1. [`ProjectionPipeline`] - fold k coordinates down to 2 with repeated
//!    perspective divides, then scale and round to integer screen units
//! 2. [`Rasterizer`] - anti-aliased edge samples plus full-brightness
//!    vertex samples, clipped to the canvas
//! 3. [`GlyphMapper`] - brightness to character via an ordered density
//!    [`Palette`], optionally textured by a seeded RNG
//! 4. [`FrameBuffer`] - the per-frame character grid
//!
//! [`WireframeRenderer`] wires the stages together; one `render` call is a
//! pure function of the shape and the current rotation angles.

mod framebuffer;
mod glyph;
mod projection;
mod raster;
mod renderer;

pub use framebuffer::{FrameBuffer, BLANK};
pub use glyph::{GlyphMapper, Palette, PaletteError, DEFAULT_BANDS};
pub use projection::{ProjectionPipeline, ScreenPoint};
pub use raster::{Rasterizer, Sample};
pub use renderer::{GlyphTexture, RendererConfig, WireframeRenderer};
