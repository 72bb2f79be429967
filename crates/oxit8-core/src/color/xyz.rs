//! CIE XYZ Readings
//!
//! Measured tristimulus values. Inside a [`Document`](crate::Document) these
//! are always absolute photometric units, Y in cd/m².

use std::ops::{Add, Mul, Sub};

/// CIE 1931 XYZ tristimulus reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Black, all components zero
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new XYZ reading
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Check if approximately equal to another reading
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    /// Check if equal to another reading within a relative tolerance
    ///
    /// Components near zero are compared absolutely against `tolerance`.
    pub fn relative_eq(&self, other: &Self, tolerance: f64) -> bool {
        fn close(a: f64, b: f64, tolerance: f64) -> bool {
            let diff = (a - b).abs();
            diff <= tolerance || diff <= tolerance * a.abs().max(b.abs())
        }
        close(self.x, other.x, tolerance)
            && close(self.y, other.y, tolerance)
            && close(self.z, other.z, tolerance)
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl Add for Xyz {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Xyz {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Xyz {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversion() {
        let arr = [95.0, 100.0, 108.9];
        let xyz = Xyz::from_array(arr);
        assert_eq!(xyz.to_array(), arr);

        let xyz2: Xyz = arr.into();
        assert_eq!(xyz, xyz2);
    }

    #[test]
    fn test_arithmetic() {
        let a = Xyz::new(1.0, 2.0, 3.0);
        let b = Xyz::new(0.1, 0.2, 0.3);

        let sum = a + b;
        assert!(sum.approx_eq(&Xyz::new(1.1, 2.2, 3.3), 1e-10));

        let diff = a - b;
        assert!(diff.approx_eq(&Xyz::new(0.9, 1.8, 2.7), 1e-10));

        let scaled = a * 2.0;
        assert!(scaled.approx_eq(&Xyz::new(2.0, 4.0, 6.0), 1e-10));
    }

    #[test]
    fn test_relative_eq() {
        let a = Xyz::new(1000.0, 2000.0, 0.0);
        let b = Xyz::new(1000.001, 2000.0, 0.0);
        assert!(a.relative_eq(&b, 1e-5));
        assert!(!a.relative_eq(&Xyz::new(1001.0, 2000.0, 0.0), 1e-5));
    }
}
