//! 3x3 Matrix operations for colorimeter correction
//!
//! A CCMX correction matrix maps a colorimeter's XYZ reading onto the XYZ a
//! reference spectrometer would report for the same patch.

use std::ops::{Index, IndexMut, Mul};

use crate::color::Xyz;

/// A 3x3 matrix
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create a zero matrix
    #[inline]
    pub const fn zero() -> Self {
        Self {
            m: [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Apply this matrix to an XYZ reading
    #[inline]
    pub fn apply(&self, xyz: Xyz) -> Xyz {
        Xyz::from_array(self.multiply_vec(xyz.to_array()))
    }

    /// Check if every element is exactly zero
    pub fn is_zero(&self) -> bool {
        self.m.iter().flatten().all(|&v| v == 0.0)
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if (self.m[i][j] - other.m[i][j]).abs() > epsilon {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl IndexMut<usize> for Matrix3x3 {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.m[row]
    }
}

impl Mul<Xyz> for Matrix3x3 {
    type Output = Xyz;

    fn mul(self, rhs: Xyz) -> Self::Output {
        self.apply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_default_is_zero() {
        assert!(Matrix3x3::default().is_zero());
        assert!(!Matrix3x3::identity().is_zero());
    }

    #[test]
    fn test_identity_apply() {
        let xyz = Xyz::new(95.0, 100.0, 108.9);
        assert!(Matrix3x3::identity().apply(xyz).approx_eq(&xyz, EPSILON));
    }

    #[test]
    fn test_apply_correction() {
        let m = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let out = m * Xyz::new(1.0, 1.0, 1.0);
        assert!(out.approx_eq(&Xyz::new(6.0, 5.0, 11.0), EPSILON));
    }

    #[test]
    fn test_index() {
        let mut m = Matrix3x3::zero();
        m[1][2] = 0.5;
        assert_eq!(m.m[1][2], 0.5);
        assert_eq!(m[1], [0.0, 0.0, 0.5]);
    }
}
