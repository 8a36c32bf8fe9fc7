//! Infinite plane in 3D space.

use std::fmt;

use super::{Line3D, Point3D, Vector3D};
use crate::{GeomError, Result};

/// A plane in 3D space.
/// Defined by a base point and a normal that is always stored with unit
/// length.
#[derive(Clone, Copy, Debug)]
pub struct Plane3D {
    base: Point3D,
    normal: Vector3D,
}

impl Plane3D {
    /// Creates a plane through `base` perpendicular to `normal`.
    ///
    /// The normal is normalized; a null normal fails with
    /// [`GeomError::NullVector`].
    pub fn new(base: Point3D, normal: Vector3D) -> Result<Self> {
        Ok(Self {
            base,
            normal: normal.normalized()?,
        })
    }

    /// Creates the plane through three points, based at `p1` with normal
    /// `(p2 - p1) × (p3 - p1)`.
    ///
    /// Collinear or coincident points fail with [`GeomError::NullVector`].
    pub fn from_points(p1: Point3D, p2: Point3D, p3: Point3D) -> Result<Self> {
        Self::new(p1, Vector3D::cross(&(p2 - p1), &(p3 - p1)))
    }

    /// Creates the plane containing `line` and `point`, based at the line's
    /// base.
    ///
    /// A point lying on the line fails with [`GeomError::NullVector`].
    pub fn from_line_point(line: &Line3D, point: Point3D) -> Result<Self> {
        let base = line.base();
        Self::new(base, Vector3D::cross(&line.direction(), &(point - base)))
    }

    #[inline]
    pub const fn base(&self) -> Point3D {
        self.base
    }

    /// Returns the unit normal.
    #[inline]
    pub const fn normal(&self) -> Vector3D {
        self.normal
    }

    #[inline]
    pub fn set_base(&mut self, base: Point3D) {
        self.base = base;
    }

    /// Sets the normal, normalizing it. A null vector fails and leaves the
    /// plane unchanged.
    pub fn set_normal(&mut self, normal: Vector3D) -> Result<()> {
        self.normal = normal.normalized()?;
        Ok(())
    }

    /// Line of intersection of two planes.
    ///
    /// The direction is `p1.normal × p2.normal`. The base is the point of the
    /// line where the coordinate matching the largest component of that
    /// direction is zero, which keeps the 2×2 solve away from small
    /// determinants.
    ///
    /// # Errors
    /// - [`GeomError::Identical`] if the planes coincide.
    /// - [`GeomError::Parallel`] if the planes are parallel and distinct.
    pub fn intersect_planes(p1: &Plane3D, p2: &Plane3D) -> Result<Line3D> {
        let n1 = p1.normal;
        let n2 = p2.normal;
        let u = Vector3D::cross(&n1, &n2);
        if u.length_squared() == 0.0 {
            return if Vector3D::dot(&(p1.base - p2.base), &n1) == 0.0 {
                Err(GeomError::Identical("planes are identical".to_string()))
            } else {
                Err(GeomError::Parallel("planes are parallel".to_string()))
            };
        }

        // Plane equations: n1 · X = h1, n2 · X = h2.
        let h1 = Vector3D::dot(&n1, &p1.base.as_vector3d());
        let h2 = Vector3D::dot(&n2, &p2.base.as_vector3d());

        let (ax, ay, az) = (u.x().abs(), u.y().abs(), u.z().abs());
        let base = if ax >= ay && ax >= az {
            // x = 0; determinant of the (y, z) system is u.x
            let det = u.x();
            Point3D::new(
                0.0,
                (h1 * n2.z() - n1.z() * h2) / det,
                (n1.y() * h2 - h1 * n2.y()) / det,
            )
        } else if ay >= az {
            // y = 0; determinant of the (x, z) system is -u.y
            let det = -u.y();
            Point3D::new(
                (h1 * n2.z() - n1.z() * h2) / det,
                0.0,
                (n1.x() * h2 - h1 * n2.x()) / det,
            )
        } else {
            // z = 0; determinant of the (x, y) system is u.z
            let det = u.z();
            Point3D::new(
                (h1 * n2.y() - n1.y() * h2) / det,
                (n1.x() * h2 - h1 * n2.x()) / det,
                0.0,
            )
        };

        Line3D::new(base, u)
    }
}

impl fmt::Display for Plane3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b: {}, n: {}", self.base, self.normal)
    }
}
