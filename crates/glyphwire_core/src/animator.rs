//! Frame-to-frame angle state
//!
//! The driver owns cadence; the animator owns the angles. Each tick the
//! driver calls [`Animator::advance`] with the elapsed time and hands the
//! resulting [`RotationSpec`] to the renderer. Angles grow without bound by
//! design (wrapping is display-only), so long runs never drift.

use glyphwire_math::{wrapped, AxisPair, RotationSpec};

/// Current rotation angles plus per-plane angular rates (radians/second)
#[derive(Clone, Debug)]
pub struct Animator {
    spec: RotationSpec,
    rates: Vec<f32>,
}

impl Animator {
    /// Build from (plane, rate) pairs; angles start at zero.
    ///
    /// Entries naming an already-listed plane (in either axis order)
    /// replace its rate rather than adding a second slot, keeping rates
    /// aligned one-to-one with the rotation planes.
    pub fn new(planes: Vec<(AxisPair, f32)>) -> Self {
        let mut spec = RotationSpec::new();
        let mut rates: Vec<f32> = Vec::with_capacity(planes.len());
        for (pair, rate) in planes {
            match spec.planes().iter().position(|(p, _)| p.same_plane(&pair)) {
                Some(index) => rates[index] = rate,
                None => {
                    spec.set_angle(pair, 0.0);
                    rates.push(rate);
                }
            }
        }
        Self { spec, rates }
    }

    /// Every canonical plane of a k-dimensional shape at one shared rate
    pub fn uniform(dimension: usize, rate: f32) -> Self {
        let spec = RotationSpec::canonical(dimension);
        let rates = vec![rate; spec.planes().len()];
        Self { spec, rates }
    }

    /// Advance every angle by rate * dt
    pub fn advance(&mut self, dt: f32) {
        for (angle, rate) in self.spec.angles_mut().zip(&self.rates) {
            *angle += rate * dt;
        }
    }

    /// The current angles, ready to pass to a render call
    #[inline]
    pub fn rotation(&self) -> &RotationSpec {
        &self.spec
    }

    /// Current angles wrapped into [0, 2π), for logging and display
    pub fn wrapped_angles(&self) -> Vec<f32> {
        self.spec
            .planes()
            .iter()
            .map(|(_, angle)| wrapped(*angle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_starts_at_zero() {
        let animator = Animator::uniform(4, 0.9);
        assert!(animator.rotation().planes().iter().all(|(_, a)| *a == 0.0));
    }

    #[test]
    fn test_advance_scales_by_rate_and_dt() {
        let xy = AxisPair::new(0, 1).unwrap();
        let yz = AxisPair::new(1, 2).unwrap();
        let mut animator = Animator::new(vec![(xy, 2.0), (yz, -0.5)]);
        animator.advance(0.25);
        assert_eq!(animator.rotation().angle(xy), Some(0.5));
        assert_eq!(animator.rotation().angle(yz), Some(-0.125));
    }

    #[test]
    fn test_duplicate_plane_keeps_rates_aligned() {
        // Listing a plane twice (here in both axis orders) must not leave a
        // stray rate slot that desynchronizes later planes.
        let xy = AxisPair::new(0, 1).unwrap();
        let yx = AxisPair::new(1, 0).unwrap();
        let yz = AxisPair::new(1, 2).unwrap();
        let mut animator = Animator::new(vec![(xy, 1.0), (yz, 2.0), (yx, 3.0)]);
        assert_eq!(animator.rotation().planes().len(), 2);

        animator.advance(1.0);
        assert_eq!(animator.rotation().angle(xy), Some(3.0));
        assert_eq!(animator.rotation().angle(yz), Some(2.0));
    }

    #[test]
    fn test_advance_accumulates() {
        let mut animator = Animator::uniform(2, 1.0);
        for _ in 0..10 {
            animator.advance(0.1);
        }
        let angle = animator.rotation().planes()[0].1;
        assert!((angle - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_angles_unbounded_but_wrapped_for_display() {
        let mut animator = Animator::uniform(2, TAU);
        animator.advance(1.5);
        let raw = animator.rotation().planes()[0].1;
        assert!(raw > TAU);
        let shown = animator.wrapped_angles()[0];
        assert!(shown >= 0.0 && shown < TAU);
    }

    #[test]
    fn test_uniform_uses_canonical_planes() {
        let animator = Animator::uniform(4, 0.3);
        let planes: Vec<(usize, usize)> = animator
            .rotation()
            .planes()
            .iter()
            .map(|(p, _)| p.axes())
            .collect();
        assert_eq!(planes, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }
}
