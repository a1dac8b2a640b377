//! Planar rotation composition
//!
//! In k dimensions rotations happen in planes, not around axes. A full
//! rotation step is an ordered sequence of planar (Givens) rotations, one
//! angle per axis pair, each applied to the already-rotated result of the
//! previous pair. The order is significant and fixed per spec: reordering
//! the planes changes the composed rotation.

use crate::{GeometryError, VecN};

/// A rotation plane named by two distinct axes.
///
/// The pair is directed for the purposes of the rotation formula: rotating
/// in plane (a, b) by an angle is the same as rotating in (b, a) by the
/// negated angle. Plane identity (for angle lookup) ignores the order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisPair {
    a: usize,
    b: usize,
}

impl AxisPair {
    /// Create an axis pair; the two axes must differ
    pub fn new(a: usize, b: usize) -> Result<Self, GeometryError> {
        if a == b {
            return Err(GeometryError::DegenerateAxisPair(a));
        }
        Ok(Self { a, b })
    }

    /// The two axes, in rotation-formula order
    #[inline]
    pub fn axes(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Whether two pairs name the same plane, regardless of order
    #[inline]
    pub fn same_plane(&self, other: &Self) -> bool {
        (self.a, self.b) == (other.a, other.b) || (self.a, self.b) == (other.b, other.a)
    }
}

/// An ordered list of rotation planes with their current angles.
///
/// Angles are unbounded reals in radians; nothing here wraps them, since the
/// trigonometric step is exact for any angle. Use [`wrapped`] when an angle
/// is needed for display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotationSpec {
    planes: Vec<(AxisPair, f32)>,
}

impl RotationSpec {
    /// An empty rotation (identity)
    pub fn new() -> Self {
        Self { planes: Vec::new() }
    }

    /// The canonical plane ordering for a k-dimensional shape, all angles
    /// zero: the ring (0,1), (1,2), ..., (k-1,0), which for k=4 reads
    /// XY, YZ, ZW, WX. For k=2 the ring collapses to the single XY plane.
    pub fn canonical(dimension: usize) -> Self {
        let mut spec = Self::new();
        for axis in 0..dimension {
            let pair = AxisPair {
                a: axis,
                b: (axis + 1) % dimension,
            };
            if !spec.planes.iter().any(|(p, _)| p.same_plane(&pair)) {
                spec.planes.push((pair, 0.0));
            }
        }
        spec
    }

    /// Append a plane, or update its angle if the plane is already present
    pub fn with_plane(mut self, pair: AxisPair, angle: f32) -> Self {
        self.set_angle(pair, angle);
        self
    }

    /// Set the angle for a plane, appending it if absent
    pub fn set_angle(&mut self, pair: AxisPair, angle: f32) {
        match self.planes.iter_mut().find(|(p, _)| p.same_plane(&pair)) {
            Some(entry) => entry.1 = angle,
            None => self.planes.push((pair, angle)),
        }
    }

    /// The current angle for a plane, if configured
    pub fn angle(&self, pair: AxisPair) -> Option<f32> {
        self.planes
            .iter()
            .find(|(p, _)| p.same_plane(&pair))
            .map(|(_, angle)| *angle)
    }

    /// The configured planes and angles, in application order
    #[inline]
    pub fn planes(&self) -> &[(AxisPair, f32)] {
        &self.planes
    }

    /// Mutable access to the angles, in application order
    pub fn angles_mut(&mut self) -> impl Iterator<Item = &mut f32> + '_ {
        self.planes.iter_mut().map(|(_, angle)| angle)
    }

    /// Rotate a single vertex through every configured plane in order.
    ///
    /// Every axis named by a plane must be below the vertex dimension.
    pub fn apply_to(&self, vertex: &VecN) -> VecN {
        let mut out = vertex.clone();
        for &(pair, angle) in &self.planes {
            let (a, b) = pair.axes();
            debug_assert!(a < out.dim() && b < out.dim());
            let (sin, cos) = angle.sin_cos();
            let va = out[a];
            let vb = out[b];
            out[a] = va * cos - vb * sin;
            out[b] = va * sin + vb * cos;
        }
        out
    }

    /// Rotate every vertex, producing a fresh vertex array
    pub fn apply(&self, vertices: &[VecN]) -> Vec<VecN> {
        vertices.iter().map(|v| self.apply_to(v)).collect()
    }
}

/// Wrap an angle into [0, 2π) for display or state reporting.
///
/// Never used in the rotation step itself.
#[inline]
pub fn wrapped(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}
