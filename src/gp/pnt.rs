//! 3D point.

use std::fmt;
use std::ops::{Add, Sub};

use super::{Line3D, Plane3D, Vector3D, XYZ};
use crate::{GeomError, Result};

/// An anchored location in 3D space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point3D {
    coord: XYZ,
}

impl Point3D {
    /// Creates a point from coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    /// Creates a point at origin (0, 0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { coord: XYZ::new() }
    }

    /// Creates a point from XYZ coordinates.
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

    #[inline]
    pub fn set_coord(&mut self, x: f64, y: f64, z: f64) {
        self.coord.set_coord(x, y, z);
    }

    /// Reinterprets the coordinates as a displacement from the origin.
    #[inline]
    pub const fn as_vector3d(&self) -> Vector3D {
        Vector3D::from_xyz(self.coord)
    }

    /// Displacement `self - other`, i.e. the vector leading from `other`
    /// to `self`.
    #[inline]
    pub const fn subtracted(&self, other: &Point3D) -> Vector3D {
        Vector3D::from_xyz(self.coord.subtracted(&other.coord))
    }

    /// Returns the point translated by `v`.
    #[inline]
    pub const fn translated(&self, v: &Vector3D) -> Point3D {
        Point3D {
            coord: self.coord.added(v.xyz()),
        }
    }

    /// Returns the point translated by `-v`.
    #[inline]
    pub const fn translated_back(&self, v: &Vector3D) -> Point3D {
        Point3D {
            coord: self.coord.subtracted(v.xyz()),
        }
    }

    /// Computes distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point3D) -> f64 {
        self.square_distance(other).sqrt()
    }

    /// Computes square distance to another point.
    #[inline]
    pub const fn square_distance(&self, other: &Point3D) -> f64 {
        self.coord.subtracted(&other.coord).square_modulus()
    }

    /// Exact coordinate equality. No tolerance is applied.
    #[inline]
    pub fn equals(&self, other: &Point3D) -> bool {
        self.coord == other.coord
    }

    /// Arithmetic mean of the given points.
    ///
    /// Fails with [`GeomError::InvalidArgument`] when `points` is empty.
    pub fn center_of_cluster(points: &[Point3D]) -> Result<Point3D> {
        if points.is_empty() {
            return Err(GeomError::InvalidArgument(
                "center of cluster needs at least one point".to_string(),
            ));
        }
        let sum = points
            .iter()
            .fold(XYZ::new(), |acc, p| acc.added(&p.coord));
        Ok(Point3D {
            coord: sum.divided(points.len() as f64),
        })
    }

    /// Perpendicular foot of this point on `line`.
    ///
    /// Intersects the line with the plane through this point whose normal is
    /// the line's direction. With `forward_only`, a foot lying behind the
    /// line's base fails with [`GeomError::ParameterViolation`].
    pub fn project_on_line(&self, line: &Line3D, forward_only: bool) -> Result<Point3D> {
        let plane = Plane3D::new(*self, line.direction())?;
        line.intersect_with_plane(&plane, forward_only)
    }

    /// Perpendicular foot of this point on `plane`.
    pub fn project_on_plane(&self, plane: &Plane3D) -> Result<Point3D> {
        let line = Line3D::new(*self, plane.normal())?;
        line.intersect_with_plane(plane, false)
    }

    /// Signed distance to `plane`, positive on the side the normal points
    /// to and zero for points lying in the plane.
    pub fn distance_to_plane(&self, plane: &Plane3D) -> f64 {
        Vector3D::dot(&plane.normal(), &self.subtracted(&plane.base()))
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.x(), self.y(), self.z())
    }
}

impl Sub for Point3D {
    type Output = Vector3D;
    fn sub(self, other: Point3D) -> Vector3D {
        self.subtracted(&other)
    }
}

impl Add<Vector3D> for Point3D {
    type Output = Point3D;
    fn add(self, v: Vector3D) -> Point3D {
        self.translated(&v)
    }
}

impl Sub<Vector3D> for Point3D {
    type Output = Point3D;
    fn sub(self, v: Vector3D) -> Point3D {
        self.translated_back(&v)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(arr: [f64; 3]) -> Self {
        Point3D::from_xyz(XYZ::from(arr))
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Point3D::from_xyz(XYZ::from(tuple))
    }
}

impl From<Point3D> for [f64; 3] {
    fn from(p: Point3D) -> Self {
        [p.x(), p.y(), p.z()]
    }
}
