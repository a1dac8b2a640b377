//! Frame orchestration
//!
//! [`WireframeRenderer`] owns an immutable shape plus the fitted projection,
//! rasterizer, and glyph mapper for it. `render` is one complete pass:
//! rotate, project, rasterize every edge, then paint the projected vertices
//! on top so corners are never dimmed by edge anti-aliasing. Apart from the
//! injected texture RNG the pass is a pure function of the rotation angles.

use crate::framebuffer::FrameBuffer;
use crate::glyph::{GlyphMapper, Palette};
use crate::projection::ProjectionPipeline;
use crate::raster::Rasterizer;
use glyphwire_math::{RotationSpec, ShapeDef};

/// How glyphs are picked within a brightness band
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphTexture {
    /// First glyph of each band; output is bit-for-bit reproducible
    #[default]
    Plain,
    /// Random pick per cell from a fixed seed; reproducible across runs
    Seeded(u64),
    /// Random pick per cell seeded from system entropy
    Entropy,
}

/// Construction-time knobs for a renderer
#[derive(Clone, Debug)]
pub struct RendererConfig {
    /// Output grid width and height
    pub canvas_size: usize,
    /// Cells kept free between the shape's worst-case extent and the edge
    pub margin: usize,
    /// Density palette, least dense band first
    pub palette: Palette,
    /// Glyph pick behavior within a band
    pub texture: GlyphTexture,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            canvas_size: 41,
            margin: 4,
            palette: Palette::default(),
            texture: GlyphTexture::Plain,
        }
    }
}

/// The wireframe-to-glyph rendering engine for one shape
pub struct WireframeRenderer {
    shape: ShapeDef,
    projection: ProjectionPipeline,
    raster: Rasterizer,
    mapper: GlyphMapper,
    canvas_size: usize,
}

impl WireframeRenderer {
    /// Build a renderer for an already-validated shape.
    ///
    /// The projection is fitted analytically to the shape's circumradius so
    /// every rotation stays inside the canvas minus the margin.
    pub fn new(shape: ShapeDef, config: RendererConfig) -> Self {
        let target_radius = (config.canvas_size / 2).saturating_sub(config.margin) as f32;
        let projection =
            ProjectionPipeline::fitted(shape.dimension(), shape.circumradius(), target_radius);
        let mapper = match config.texture {
            GlyphTexture::Plain => GlyphMapper::new(config.palette),
            GlyphTexture::Seeded(seed) => GlyphMapper::with_seed(config.palette, seed),
            GlyphTexture::Entropy => GlyphMapper::with_entropy(config.palette),
        };

        log::debug!(
            "Renderer: {}D shape, {} vertices, {} edges, canvas {}, {} folds, fov {:.4}",
            shape.dimension(),
            shape.vertex_count(),
            shape.edge_count(),
            config.canvas_size,
            projection.fold_count(),
            projection.fov_scale(),
        );

        Self {
            raster: Rasterizer::new(config.canvas_size),
            canvas_size: config.canvas_size,
            shape,
            projection,
            mapper,
        }
    }

    #[inline]
    pub fn shape(&self) -> &ShapeDef {
        &self.shape
    }

    #[inline]
    pub fn canvas_size(&self) -> usize {
        self.canvas_size
    }

    /// Render one frame at the given rotation angles.
    ///
    /// Edges are rasterized in definition order, vertices painted after
    /// them; within a cell the last write wins.
    pub fn render(&mut self, rotation: &RotationSpec) -> FrameBuffer {
        let rotated = rotation.apply(self.shape.vertices());
        let points = self.projection.project(&rotated);

        let mut frame = FrameBuffer::new(self.canvas_size);
        for edge in self.shape.edges() {
            for sample in self.raster.rasterize_edge(points[edge.0], points[edge.1]) {
                let glyph = self.mapper.glyph_for(sample.brightness);
                frame.plot(sample.x, sample.y, glyph);
            }
        }
        for &point in &points {
            if let Some(sample) = self.raster.vertex_sample(point) {
                let glyph = self.mapper.glyph_for(sample.brightness);
                frame.plot(sample.x, sample.y, glyph);
            }
        }
        frame
    }
}
