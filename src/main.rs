//! Glyphwire - animated N-dimensional wireframes as character grids
//!
//! The binary is the external animation driver: it owns the frame cadence
//! and the terminal, advancing the rotation angles once per tick and asking
//! the engine for a fresh grid. The engine itself is a pure function of
//! (shape, angles).

use std::io::Write;
use std::time::{Duration, Instant};

use glyphwire::config::AppConfig;
use glyphwire_core::{AnimationTemplate, Scene, ShapeTemplate};
use glyphwire_render::{GlyphTexture, RendererConfig, WireframeRenderer};

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();

    // A scene file replaces the flat [shape]/[animation] template config
    let (shape_template, animation_template) = match &config.scene.path {
        Some(path) => {
            let scene = Scene::load(path)
                .unwrap_or_else(|e| panic!("Failed to load scene {}: {}", path, e));
            log::info!("Loaded scene '{}' from {}", scene.name, path);
            (scene.shape, scene.animation)
        }
        None => (
            ShapeTemplate::hypercube(config.shape.dimension, config.shape.size),
            None,
        ),
    };

    let shape = shape_template
        .create_shape()
        .unwrap_or_else(|e| panic!("Invalid shape configuration: {}", e));
    let mut animator = animation_template
        .unwrap_or_else(|| {
            AnimationTemplate::uniform(shape.dimension(), config.animation.spin_rate)
        })
        .create_animator()
        .unwrap_or_else(|e| panic!("Invalid animation configuration: {}", e));

    log::info!(
        "Rendering {}D wireframe: {} vertices, {} edges on a {}x{} canvas",
        shape.dimension(),
        shape.vertex_count(),
        shape.edge_count(),
        config.canvas.size,
        config.canvas.size,
    );

    let texture = match (config.animation.texture_seed, config.animation.textured) {
        (Some(seed), _) => GlyphTexture::Seeded(seed),
        (None, true) => GlyphTexture::Entropy,
        (None, false) => GlyphTexture::Plain,
    };
    let mut renderer = WireframeRenderer::new(
        shape,
        RendererConfig {
            canvas_size: config.canvas.size,
            margin: config.canvas.margin,
            texture,
            ..RendererConfig::default()
        },
    );

    let frame_budget = Duration::from_secs_f32(1.0 / config.animation.frame_rate.max(0.1));
    let mut stdout = std::io::stdout();
    let mut frame_index: u64 = 0;
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        let dt = (now - last_tick).as_secs_f32();
        last_tick = now;

        animator.advance(dt);
        let frame = renderer.render(animator.rotation());

        // Home the cursor and repaint in place
        let _ = write!(stdout, "\x1b[H\x1b[2J{}", frame);
        let _ = stdout.flush();

        frame_index += 1;
        if config.animation.frames != 0 && frame_index >= config.animation.frames {
            break;
        }
        std::thread::sleep(frame_budget);
    }

    log::info!("Rendered {} frames", frame_index);
}
