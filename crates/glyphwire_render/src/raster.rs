//! Anti-aliased line rasterization
//!
//! Wu-style coverage sampling: each edge is stepped along its dominant axis,
//! and every step emits the cell under the exact line position weighted by
//! (1 - fraction) plus its neighbor weighted by the fraction. Vertices emit
//! one full-brightness sample each so corners stay crisp. Samples outside
//! the canvas are dropped at emission, never wrapped or clamped.

use crate::projection::ScreenPoint;

/// One brightness contribution to the frame buffer, in centered screen
/// coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: i32,
    pub y: i32,
    /// Coverage weight in [0, 1]
    pub brightness: f32,
}

/// Edge and vertex rasterizer clipped to a square canvas
#[derive(Clone, Copy, Debug)]
pub struct Rasterizer {
    size: i32,
    half: i32,
}

impl Rasterizer {
    pub fn new(canvas_size: usize) -> Self {
        let size = canvas_size as i32;
        Self { size, half: size / 2 }
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        let col = x + self.half;
        let row = y + self.half;
        col >= 0 && col < self.size && row >= 0 && row < self.size
    }

    #[inline]
    fn push(&self, samples: &mut Vec<Sample>, steep: bool, major: i32, minor: i32, brightness: f32) {
        // Un-transpose: in steep mode the major axis is y
        let (x, y) = if steep { (minor, major) } else { (major, minor) };
        if self.in_bounds(x, y) {
            samples.push(Sample { x, y, brightness });
        }
    }

    /// Rasterize one edge into weighted samples.
    ///
    /// The line is iterated along whichever axis spans more cells,
    /// transposing when steep and swapping endpoints so iteration always
    /// ascends. Per step the two cells straddling the true line position
    /// split a total weight of 1; the neighbor cell is omitted when the
    /// line passes exactly through a cell center, so axis-aligned edges
    /// produce no zero-brightness band.
    ///
    /// Works in i64 and clamps the walk to the canvas span on the major
    /// axis, so an edge thrown arbitrarily far out by a near-singular
    /// perspective divisor costs at most one canvas width of steps.
    pub fn rasterize_edge(&self, p0: ScreenPoint, p1: ScreenPoint) -> Vec<Sample> {
        let steep = (p1.y as i64 - p0.y as i64).abs() > (p1.x as i64 - p0.x as i64).abs();
        let (mut x0, mut y0, mut x1, mut y1) = if steep {
            (p0.y as i64, p0.x as i64, p1.y as i64, p1.x as i64)
        } else {
            (p0.x as i64, p0.y as i64, p1.x as i64, p1.y as i64)
        };
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let gradient = if dx == 0 {
            0.0
        } else {
            (y1 - y0) as f32 / dx as f32
        };

        // Only major-axis positions inside [-half, size-1-half] can produce
        // in-bounds samples; the minor-axis filter in push handles the rest
        let first = x0.max(-(self.half as i64));
        let last = x1.min((self.size - 1 - self.half) as i64);
        if first > last {
            return Vec::new();
        }

        let mut samples = Vec::with_capacity(2 * (last - first + 1) as usize);
        for major in first..=last {
            let minor = y0 as f32 + gradient * (major - x0) as f32;
            let floor = minor.floor();
            let fraction = minor - floor;
            let cell = floor as i32;
            self.push(&mut samples, steep, major as i32, cell, 1.0 - fraction);
            if fraction > 0.0 {
                self.push(&mut samples, steep, major as i32, cell + 1, fraction);
            }
        }
        samples
    }

    /// The full-brightness sample for a projected vertex, unless it falls
    /// off the canvas
    pub fn vertex_sample(&self, p: ScreenPoint) -> Option<Sample> {
        self.in_bounds(p.x, p.y)
            .then_some(Sample { x: p.x, y: p.y, brightness: 1.0 })
    }
}
