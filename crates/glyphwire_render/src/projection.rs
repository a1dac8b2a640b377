//! Perspective projection from k dimensions down to the screen plane
//!
//! A k-dimensional point is folded one dimension at a time: the fold from n
//! to n-1 coordinates divides the remaining coordinates by a function of the
//! dropped (highest) one, simulating a vanishing point along that axis. After
//! k-2 folds only x and y remain; a uniform field-of-view scale and a round
//! to the nearest integer produce the screen position.

use glyphwire_math::VecN;

/// An integer screen position in centered coordinates (origin at canvas
/// center, y growing downward along grid rows).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The fold-offset chain and final scale for one shape family.
///
/// `fold_offsets[0]` serves the innermost fold (highest axis first); the
/// list is empty for 2D shapes. Offsets are plain configuration so tests can
/// build pipelines with exactly predictable output.
#[derive(Clone, Debug)]
pub struct ProjectionPipeline {
    fold_offsets: Vec<f32>,
    fov_scale: f32,
}

impl ProjectionPipeline {
    /// Build a pipeline from explicit constants
    pub fn new(fold_offsets: Vec<f32>, fov_scale: f32) -> Self {
        Self { fold_offsets, fov_scale }
    }

    /// Derive fold offsets and scale so the shape fits a target on-screen
    /// radius for every rotation.
    ///
    /// No rotated coordinate can exceed the circumradius r. With each fold
    /// offset set to 3x the current coordinate bound, the divisor stays in
    /// [2b, 4b] and a fold magnifies the remaining coordinates by at most
    /// C/(C-b) = 1.5, so the bound after fold j is r * 1.5^j. The final
    /// scale maps that worst case onto `target_radius`. This keeps the
    /// divisor well away from the perspective singularity at -C.
    pub fn fitted(dimension: usize, circumradius: f32, target_radius: f32) -> Self {
        let folds = dimension.saturating_sub(2);
        let mut fold_offsets = Vec::with_capacity(folds);
        let mut bound = circumradius;
        for _ in 0..folds {
            fold_offsets.push(3.0 * bound);
            bound *= 1.5;
        }
        let fov_scale = if bound > 0.0 { target_radius / bound } else { 1.0 };
        Self { fold_offsets, fov_scale }
    }

    /// Number of perspective folds this pipeline applies
    #[inline]
    pub fn fold_count(&self) -> usize {
        self.fold_offsets.len()
    }

    #[inline]
    pub fn fov_scale(&self) -> f32 {
        self.fov_scale
    }

    /// Project one vertex; its dimension must be `fold_count() + 2`
    pub fn project_one(&self, vertex: &VecN) -> ScreenPoint {
        debug_assert_eq!(vertex.dim(), self.fold_offsets.len() + 2);
        let mut coords: Vec<f32> = vertex.coords().to_vec();
        for &offset in &self.fold_offsets {
            // Drop the highest coordinate, scaling the rest toward the
            // vanishing point. A divisor near zero blows the coordinates
            // up; the rasterizer clips the result, so no special case.
            let dropped = coords.pop().unwrap_or(0.0);
            let scale = offset / (offset + dropped);
            for coord in coords.iter_mut() {
                *coord *= scale;
            }
        }
        ScreenPoint::new(
            (coords[0] * self.fov_scale).round() as i32,
            (coords[1] * self.fov_scale).round() as i32,
        )
    }

    /// Project a rotated vertex array to screen positions
    pub fn project(&self, vertices: &[VecN]) -> Vec<ScreenPoint> {
        vertices.iter().map(|v| self.project_one(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphwire_math::{RotationSpec, ShapeDef};

    #[test]
    fn test_2d_is_scale_and_round_only() {
        let pipeline = ProjectionPipeline::new(vec![], 1.0);
        let p = pipeline.project_one(&VecN::new(vec![3.4, -2.6]));
        assert_eq!(p, ScreenPoint::new(3, -3));
    }

    #[test]
    fn test_fitted_fold_count() {
        assert_eq!(ProjectionPipeline::fitted(2, 10.0, 16.0).fold_count(), 0);
        assert_eq!(ProjectionPipeline::fitted(3, 10.0, 16.0).fold_count(), 1);
        assert_eq!(ProjectionPipeline::fitted(4, 10.0, 16.0).fold_count(), 2);
    }

    #[test]
    fn test_single_fold_divides_by_offset_plus_dropped() {
        // Offset 10, dropped coordinate 5: scale = 10/15
        let pipeline = ProjectionPipeline::new(vec![10.0], 1.0);
        let p = pipeline.project_one(&VecN::new(vec![9.0, 3.0, 5.0]));
        assert_eq!(p, ScreenPoint::new(6, 2));
    }

    #[test]
    fn test_fold_order_innermost_first() {
        // First offset applies to the 4th coordinate, second to the 3rd
        let pipeline = ProjectionPipeline::new(vec![10.0, 20.0], 1.0);
        let p = pipeline.project_one(&VecN::new(vec![8.0, 4.0, 10.0, 10.0]));
        // Fold w=10: scale 10/20 = 0.5 -> [4, 2, 5]
        // Fold z=5:  scale 20/25 = 0.8 -> [3.2, 1.6]
        assert_eq!(p, ScreenPoint::new(3, 2));
    }

    #[test]
    fn test_negative_dropped_coordinate_magnifies() {
        let pipeline = ProjectionPipeline::new(vec![10.0], 1.0);
        let p = pipeline.project_one(&VecN::new(vec![4.0, 4.0, -5.0]));
        // scale = 10/5 = 2
        assert_eq!(p, ScreenPoint::new(8, 8));
    }

    #[test]
    fn test_fitted_bounds_all_rotations() {
        // Spin a tesseract through a sweep of angles; every projected
        // coordinate must stay inside the target radius.
        let shape = ShapeDef::hypercube(4, 21.0).unwrap();
        let pipeline = ProjectionPipeline::fitted(4, shape.circumradius(), 16.0);
        for step in 0..32 {
            let angle = step as f32 * 0.37;
            let mut spec = RotationSpec::canonical(4);
            for a in spec.angles_mut() {
                *a = angle;
            }
            for point in pipeline.project(&spec.apply(shape.vertices())) {
                assert!(point.x.abs() <= 16, "x out of budget: {:?}", point);
                assert!(point.y.abs() <= 16, "y out of budget: {:?}", point);
            }
        }
    }

    #[test]
    fn test_square_corners_at_zero_rotation() {
        let shape = ShapeDef::hypercube(2, 21.0).unwrap();
        let pipeline = ProjectionPipeline::fitted(2, shape.circumradius(), 16.0);
        let points = pipeline.project(shape.vertices());

        let expected = (10.5 * pipeline.fov_scale()).round() as i32;
        assert!(expected > 0);
        assert_eq!(points[0], ScreenPoint::new(-expected, -expected));
        assert_eq!(points[1], ScreenPoint::new(expected, -expected));
        assert_eq!(points[2], ScreenPoint::new(-expected, expected));
        assert_eq!(points[3], ScreenPoint::new(expected, expected));
    }
}
