//! 3D displacement vector.
//!
//! A `Vector3D` is a free displacement: it has no anchor. Anchored
//! locations are [`Point3D`]s; moving between the two roles always goes
//! through [`Vector3D::as_point3d`] / [`Point3D::as_vector3d`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Point3D, XYZ};
use crate::{GeomError, Result};

/// A displacement in 3D space.
///
/// `Vector3D` deliberately does not implement `PartialEq`: value
/// comparison is the explicit, exact [`Vector3D::equals`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector3D {
    coord: XYZ,
}

impl Vector3D {
    /// Creates a vector from components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    /// Creates the null vector (0, 0, 0).
    #[inline]
    pub const fn null() -> Self {
        Self { coord: XYZ::new() }
    }

    /// Creates a vector from XYZ coordinates.
    #[inline]
    pub const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.coord.x()
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.coord.y()
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.coord.z()
    }

    #[inline]
    pub(crate) const fn xyz(&self) -> &XYZ {
        &self.coord
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.coord.set_x(x);
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.coord.set_y(y);
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.coord.set_z(z);
    }

    /// Sets all three components.
    #[inline]
    pub fn set_coord(&mut self, x: f64, y: f64, z: f64) {
        self.coord.set_coord(x, y, z);
    }

    /// Reinterprets the components as a location.
    #[inline]
    pub const fn as_point3d(&self) -> Point3D {
        Point3D::from_xyz(self.coord)
    }

    /// Returns true if every component is exactly zero.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.coord.is_zero()
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(&self) -> f64 {
        self.coord.modulus()
    }

    /// Square of the Euclidean norm.
    #[inline]
    pub const fn length_squared(&self) -> f64 {
        self.coord.square_modulus()
    }

    #[inline]
    pub const fn added(&self, other: &Vector3D) -> Vector3D {
        Vector3D {
            coord: self.coord.added(&other.coord),
        }
    }

    #[inline]
    pub const fn subtracted(&self, other: &Vector3D) -> Vector3D {
        Vector3D {
            coord: self.coord.subtracted(&other.coord),
        }
    }

    /// Returns `point + self`.
    #[inline]
    pub const fn added_to_point(&self, point: &Point3D) -> Point3D {
        Point3D::from_xyz(point.xyz().added(&self.coord))
    }

    /// Returns `self - point`, component-wise, as a location.
    #[inline]
    pub const fn subtracted_point(&self, point: &Point3D) -> Point3D {
        Point3D::from_xyz(self.coord.subtracted(point.xyz()))
    }

    /// Returns the vector scaled by `scalar`.
    #[inline]
    pub const fn multiplied(&self, scalar: f64) -> Vector3D {
        Vector3D {
            coord: self.coord.multiplied(scalar),
        }
    }

    /// Returns the vector divided by `scalar`.
    ///
    /// Dividing by zero yields infinite or NaN components; it does not fail.
    #[inline]
    pub fn divided(&self, scalar: f64) -> Vector3D {
        Vector3D {
            coord: self.coord.divided(scalar),
        }
    }

    /// Negates in place.
    #[inline]
    pub fn negate(&mut self) {
        self.coord.reverse();
    }

    #[inline]
    pub const fn negated(&self) -> Vector3D {
        Vector3D {
            coord: self.coord.reversed(),
        }
    }

    /// Scalar product.
    #[inline]
    pub const fn dot(v1: &Vector3D, v2: &Vector3D) -> f64 {
        v1.coord.dot(&v2.coord)
    }

    /// Cross product `v1 × v2`. Null when the inputs are parallel or
    /// either of them is null.
    #[inline]
    pub const fn cross(v1: &Vector3D, v2: &Vector3D) -> Vector3D {
        Vector3D {
            coord: v1.coord.crossed(&v2.coord),
        }
    }

    /// Normalizes in place.
    ///
    /// Fails with [`GeomError::NullVector`] when the length is exactly zero;
    /// the vector is left untouched in that case.
    pub fn normalize(&mut self) -> Result<()> {
        self.coord = self.coord.normalized().ok_or(GeomError::NullVector)?;
        Ok(())
    }

    /// Returns a unit vector with the same orientation.
    ///
    /// Fails with [`GeomError::NullVector`] when the length is exactly zero.
    pub fn normalized(&self) -> Result<Vector3D> {
        self.coord
            .normalized()
            .map(Vector3D::from_xyz)
            .ok_or(GeomError::NullVector)
    }

    /// Angle between two vectors in degrees, within [0, 180].
    ///
    /// Both inputs are normalized first, so a null input fails with
    /// [`GeomError::NullVector`].
    pub fn angle_between(v1: &Vector3D, v2: &Vector3D) -> Result<f64> {
        let v1n = v1.normalized()?;
        let v2n = v2.normalized()?;
        let cos_angle = Vector3D::dot(&v1n, &v2n).clamp(-1.0, 1.0);
        Ok(cos_angle.acos().to_degrees())
    }

    /// Exact component-wise equality. No tolerance is applied.
    ///
    /// This is the only value comparison; neither `==` nor the raw
    /// coordinate storage is exposed for it:
    ///
    /// ```compile_fail
    /// use geom3d::Vector3D;
    /// let a = Vector3D::new(1.0, 2.0, 3.0);
    /// let b = Vector3D::new(1.0, 2.0, 3.0);
    /// let _ = a.xyz() == b.xyz();
    /// ```
    #[inline]
    pub fn equals(&self, other: &Vector3D) -> bool {
        self.coord == other.coord
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.x(), self.y(), self.z())
    }
}

impl Add for Vector3D {
    type Output = Vector3D;
    fn add(self, other: Vector3D) -> Vector3D {
        self.added(&other)
    }
}

impl Add<Point3D> for Vector3D {
    type Output = Point3D;
    fn add(self, point: Point3D) -> Point3D {
        self.added_to_point(&point)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;
    fn sub(self, other: Vector3D) -> Vector3D {
        self.subtracted(&other)
    }
}

impl Sub<Point3D> for Vector3D {
    type Output = Point3D;
    fn sub(self, point: Point3D) -> Point3D {
        self.subtracted_point(&point)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;
    fn mul(self, scalar: f64) -> Vector3D {
        self.multiplied(scalar)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;
    fn mul(self, vector: Vector3D) -> Vector3D {
        vector.multiplied(self)
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;
    fn div(self, scalar: f64) -> Vector3D {
        self.divided(scalar)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;
    fn neg(self) -> Vector3D {
        self.negated()
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(arr: [f64; 3]) -> Self {
        Vector3D::from_xyz(XYZ::from(arr))
    }
}

impl From<(f64, f64, f64)> for Vector3D {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Vector3D::from_xyz(XYZ::from(tuple))
    }
}
