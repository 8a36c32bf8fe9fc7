//! 3D coordinate triplet.
//!
//! Storage and raw component algebra shared by [`Vector3D`](super::Vector3D)
//! and [`Point3D`](super::Point3D). The two entity types give these
//! coordinates a meaning (displacement or location); `XYZ` does not.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Cartesian coordinate entity {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XYZ {
    x: f64,
    y: f64,
    z: f64,
}

impl XYZ {
    /// Creates an XYZ with zero coordinates (0, 0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Creates an XYZ with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Sets all three coordinates.
    #[inline]
    pub fn set_coord(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all coordinates as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Euclidean norm: sqrt(x² + y² + z²).
    ///
    /// Computed on coordinates scaled by the largest magnitude, so huge or
    /// tiny components neither overflow nor underflow.
    pub fn modulus(&self) -> f64 {
        let m = self.max_abs();
        if m == 0.0 || !m.is_finite() {
            return self.square_modulus().sqrt();
        }
        m * self.divided(m).square_modulus().sqrt()
    }

    /// Largest absolute coordinate.
    #[inline]
    fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Square of the norm.
    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns true if all three coordinates are exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    #[inline]
    pub const fn added(&self, other: &XYZ) -> XYZ {
        XYZ {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    #[inline]
    pub const fn subtracted(&self, other: &XYZ) -> XYZ {
        XYZ {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    #[inline]
    pub const fn multiplied(&self, scalar: f64) -> XYZ {
        XYZ {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }

    /// Component-wise division. A zero scalar is not guarded.
    #[inline]
    pub fn divided(&self, scalar: f64) -> XYZ {
        XYZ {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }

    /// Reverses direction in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    #[inline]
    pub const fn reversed(&self) -> XYZ {
        XYZ {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    #[inline]
    pub const fn dot(&self, other: &XYZ) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub const fn crossed(&self, other: &XYZ) -> XYZ {
        XYZ {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the unit triplet, or None when every coordinate is exactly
    /// zero.
    pub fn normalized(&self) -> Option<XYZ> {
        if self.is_zero() {
            return None;
        }
        let m = self.max_abs();
        if !m.is_finite() {
            // inf/NaN components propagate unguarded
            return Some(self.divided(self.modulus()));
        }
        let scaled = self.divided(m);
        Some(scaled.divided(scaled.modulus()))
    }
}

impl Add for XYZ {
    type Output = XYZ;
    #[inline]
    fn add(self, other: XYZ) -> XYZ {
        self.added(&other)
    }
}

impl Sub for XYZ {
    type Output = XYZ;
    #[inline]
    fn sub(self, other: XYZ) -> XYZ {
        self.subtracted(&other)
    }
}

impl Mul<f64> for XYZ {
    type Output = XYZ;
    #[inline]
    fn mul(self, scalar: f64) -> XYZ {
        self.multiplied(scalar)
    }
}

impl Div<f64> for XYZ {
    type Output = XYZ;
    #[inline]
    fn div(self, scalar: f64) -> XYZ {
        self.divided(scalar)
    }
}

impl Neg for XYZ {
    type Output = XYZ;
    #[inline]
    fn neg(self) -> XYZ {
        self.reversed()
    }
}

impl From<[f64; 3]> for XYZ {
    #[inline]
    fn from(arr: [f64; 3]) -> Self {
        XYZ { x: arr[0], y: arr[1], z: arr[2] }
    }
}

impl From<(f64, f64, f64)> for XYZ {
    #[inline]
    fn from(tuple: (f64, f64, f64)) -> Self {
        XYZ { x: tuple.0, y: tuple.1, z: tuple.2 }
    }
}

impl From<XYZ> for [f64; 3] {
    #[inline]
    fn from(xyz: XYZ) -> Self {
        [xyz.x, xyz.y, xyz.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_default() {
        let xyz = XYZ::default();
        assert_eq!(xyz.coords(), (0.0, 0.0, 0.0));
        assert!(xyz.is_zero());
    }

    #[test]
    fn test_xyz_modulus() {
        let xyz = XYZ::from_coords(3.0, 4.0, 0.0);
        assert_eq!(xyz.square_modulus(), 25.0);
        assert!((xyz.modulus() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_xyz_crossed() {
        let i = XYZ::from_coords(1.0, 0.0, 0.0);
        let j = XYZ::from_coords(0.0, 1.0, 0.0);
        assert_eq!(i.crossed(&j), XYZ::from_coords(0.0, 0.0, 1.0));
        assert_eq!(j.crossed(&i), XYZ::from_coords(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_xyz_normalized_rejects_exact_zero_only() {
        assert!(XYZ::new().normalized().is_none());

        // Tiny but nonzero still normalizes: no tolerance.
        let tiny = XYZ::from_coords(1e-100, 0.0, 0.0);
        let n = tiny.normalized().unwrap();
        assert_eq!(n.x(), 1.0);
    }

    #[test]
    fn test_xyz_modulus_extreme_magnitudes() {
        let huge = XYZ::from_coords(3e200, 4e200, 0.0);
        assert!((huge.modulus() / 5e200 - 1.0).abs() < 1e-12);

        let tiny = XYZ::from_coords(0.0, 3e-170, 4e-170);
        assert!((tiny.modulus() / 5e-170 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_xyz_normalized_extreme_magnitudes() {
        let n = XYZ::from_coords(1e200, 0.0, 0.0).normalized().unwrap();
        assert_eq!(n, XYZ::from_coords(1.0, 0.0, 0.0));

        let n = XYZ::from_coords(1e-170, 0.0, 0.0).normalized().unwrap();
        assert_eq!(n, XYZ::from_coords(1.0, 0.0, 0.0));

        let n = XYZ::from_coords(-1e300, 1e300, 1e300).normalized().unwrap();
        assert!((n.modulus() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_xyz_divided_by_zero_is_unguarded() {
        let xyz = XYZ::from_coords(1.0, -1.0, 0.0).divided(0.0);
        assert!(xyz.x().is_infinite());
        assert!(xyz.y().is_infinite());
        assert!(xyz.z().is_nan());
    }

    #[test]
    fn test_xyz_conversions() {
        let xyz: XYZ = [1.0, 2.0, 3.0].into();
        let arr: [f64; 3] = xyz.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
        assert_eq!(XYZ::from((1.0, 2.0, 3.0)), xyz);
    }
}
