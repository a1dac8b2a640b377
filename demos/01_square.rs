//! 01 - Square
//!
//! The simplest Glyphwire demo: render a flat square at a few rotation
//! angles and print each grid.
//!
//! Run with: `cargo run --example 01_square`

use glyphwire_core::{RotationSpec, ShapeTemplate};
use glyphwire_render::{RendererConfig, WireframeRenderer};

fn main() {
    let shape = ShapeTemplate::hypercube(2, 21.0)
        .create_shape()
        .expect("square generator is valid");
    let mut renderer = WireframeRenderer::new(shape, RendererConfig::default());

    for step in 0..4 {
        let mut spec = RotationSpec::canonical(2);
        for angle in spec.angles_mut() {
            *angle = step as f32 * 0.2;
        }
        println!("angle = {:.1} rad", step as f32 * 0.2);
        print!("{}", renderer.render(&spec));
        println!();
    }
}
