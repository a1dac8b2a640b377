//! N-dimensional vector type

use serde::{Deserialize, Serialize};

/// A point in k-dimensional space.
///
/// The dimension is carried by the coordinate vector itself; a square lives
/// in 2 coordinates, a cube in 3, a tesseract in 4. All vertices of one
/// shape share the same dimension (enforced by `ShapeDef`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VecN {
    coords: Vec<f32>,
}

impl VecN {
    /// Create a vector from its coordinates
    #[inline]
    pub fn new(coords: Vec<f32>) -> Self {
        Self { coords }
    }

    /// The zero vector of a given dimension
    pub fn zero(dim: usize) -> Self {
        Self { coords: vec![0.0; dim] }
    }

    /// Number of coordinates
    #[inline]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// The raw coordinate slice
    #[inline]
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// Dot product; both vectors must share a dimension
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        debug_assert_eq!(self.dim(), other.dim());
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }
}

impl std::ops::Index<usize> for VecN {
    type Output = f32;
    #[inline]
    fn index(&self, axis: usize) -> &f32 {
        &self.coords[axis]
    }
}

impl std::ops::IndexMut<usize> for VecN {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        &mut self.coords[axis]
    }
}

impl std::ops::Add for VecN {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        debug_assert_eq!(self.dim(), other.dim());
        Self {
            coords: self
                .coords
                .iter()
                .zip(&other.coords)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl std::ops::Sub for VecN {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        debug_assert_eq!(self.dim(), other.dim());
        Self {
            coords: self
                .coords
                .iter()
                .zip(&other.coords)
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl std::ops::Mul<f32> for VecN {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            coords: self.coords.iter().map(|a| a * scalar).collect(),
        }
    }
}

impl std::ops::Neg for VecN {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            coords: self.coords.iter().map(|a| -a).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = VecN::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.dim(), 4);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
    }

    #[test]
    fn test_zero() {
        let v = VecN::zero(3);
        assert_eq!(v.coords(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_dot() {
        let a = VecN::new(vec![1.0, 2.0, 3.0]);
        let b = VecN::new(vec![4.0, 5.0, 6.0]);
        // 4 + 10 + 18 = 32
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn test_length() {
        let v = VecN::new(vec![1.0, 1.0, 1.0, 1.0]);
        assert!((v.length() - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_add_sub() {
        let a = VecN::new(vec![1.0, 2.0]);
        let b = VecN::new(vec![3.0, 5.0]);
        assert_eq!(a.clone() + b.clone(), VecN::new(vec![4.0, 7.0]));
        assert_eq!(b - a, VecN::new(vec![2.0, 3.0]));
    }

    #[test]
    fn test_mul_scalar() {
        let v = VecN::new(vec![1.0, -2.0]) * 3.0;
        assert_eq!(v, VecN::new(vec![3.0, -6.0]));
    }

    #[test]
    fn test_neg() {
        let v = -VecN::new(vec![1.0, -2.0]);
        assert_eq!(v, VecN::new(vec![-1.0, 2.0]));
    }

    #[test]
    fn test_index_mut() {
        let mut v = VecN::zero(2);
        v[1] = 7.0;
        assert_eq!(v.coords(), &[0.0, 7.0]);
    }
}
