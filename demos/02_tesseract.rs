//! 02 - Tesseract
//!
//! Render a short animation of a 4D hypercube, driving the angles through
//! an Animator exactly like the main binary does, but without the terminal
//! repaint: frames are printed one after another.
//!
//! Run with: `cargo run --example 02_tesseract`

use glyphwire_core::{AnimationTemplate, ShapeTemplate};
use glyphwire_render::{GlyphTexture, RendererConfig, WireframeRenderer};

fn main() {
    let shape = ShapeTemplate::hypercube(4, 21.0)
        .create_shape()
        .expect("tesseract generator is valid");
    let mut animator = AnimationTemplate::uniform(4, 0.9)
        .create_animator()
        .expect("canonical planes are valid");

    // Textured glyphs with a fixed seed so reruns look the same
    let mut renderer = WireframeRenderer::new(
        shape,
        RendererConfig { texture: GlyphTexture::Seeded(7), ..RendererConfig::default() },
    );

    for frame in 0..6 {
        animator.advance(1.0 / 12.0);
        println!("frame {}", frame);
        print!("{}", renderer.render(animator.rotation()));
        println!();
    }
}
