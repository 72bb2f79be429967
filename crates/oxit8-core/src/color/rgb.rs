//! Device RGB Values
//!
//! The RGB drive values of a calibration patch.

use std::ops::{Add, Mul, Sub};

/// RGB color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Full-drive white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Scale all components by a factor
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }

    /// True when every channel is within `tolerance` of `other`
    ///
    /// The bound is inclusive: a difference of exactly `tolerance` matches.
    #[inline]
    pub fn matches(&self, other: &Self, tolerance: f64) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
    }

    /// Check if all components are in the 0.0-1.0 range
    #[inline]
    pub fn in_unit_range(&self) -> bool {
        (0.0..=1.0).contains(&self.r)
            && (0.0..=1.0).contains(&self.g)
            && (0.0..=1.0).contains(&self.b)
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Sub for Rgb {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Mul<f64> for Rgb {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_tolerance() {
        let near_white = Rgb::new(0.995, 1.0, 1.005);
        assert!(near_white.matches(&Rgb::WHITE, 0.01));

        let grey = Rgb::new(0.98, 1.0, 1.0);
        assert!(!grey.matches(&Rgb::WHITE, 0.01));
    }

    #[test]
    fn test_unit_range() {
        assert!(Rgb::new(0.0, 0.5, 1.0).in_unit_range());
        assert!(!Rgb::new(0.0, 0.5, 100.0).in_unit_range());
    }

    #[test]
    fn test_scale() {
        let rgb = Rgb::new(0.25, 0.5, 1.0) * 100.0;
        assert_eq!(rgb, Rgb::new(25.0, 50.0, 100.0));
        assert_eq!(rgb - Rgb::new(25.0, 0.0, 0.0) + Rgb::BLACK, Rgb::new(0.0, 50.0, 100.0));
    }
}
