//! Infinite line in 3D space.

use std::fmt;

use super::{Plane3D, Point3D, Vector3D};
use crate::{GeomError, Result};

/// A line in 3D space.
/// Defined by a base point and a direction that is always stored with
/// unit length.
#[derive(Clone, Copy, Debug)]
pub struct Line3D {
    base: Point3D,
    direction: Vector3D,
}

impl Line3D {
    /// Creates a line through `base` along `direction`.
    ///
    /// The direction is normalized; a null direction fails with
    /// [`GeomError::NullVector`].
    pub fn new(base: Point3D, direction: Vector3D) -> Result<Self> {
        Ok(Self {
            base,
            direction: direction.normalized()?,
        })
    }

    /// Creates a line through `base` and `through`, directed from the first
    /// to the second. Identical points fail with [`GeomError::NullVector`].
    pub fn from_points(base: Point3D, through: Point3D) -> Result<Self> {
        Self::new(base, through - base)
    }

    #[inline]
    pub const fn base(&self) -> Point3D {
        self.base
    }

    /// Returns the unit direction.
    #[inline]
    pub const fn direction(&self) -> Vector3D {
        self.direction
    }

    #[inline]
    pub fn set_base(&mut self, base: Point3D) {
        self.base = base;
    }

    /// Sets the direction, normalizing it. A null vector fails and leaves
    /// the line unchanged.
    pub fn set_direction(&mut self, direction: Vector3D) -> Result<()> {
        self.direction = direction.normalized()?;
        Ok(())
    }

    /// Returns `base + s * direction`.
    #[inline]
    pub fn point_at(&self, s: f64) -> Point3D {
        self.base + s * self.direction
    }

    /// Intersection point of this line with `plane`.
    ///
    /// # Errors
    /// - [`GeomError::Identical`] if the line lies in the plane.
    /// - [`GeomError::Parallel`] if the line is parallel to the plane but
    ///   not contained in it.
    /// - [`GeomError::ParameterViolation`] if `forward_only` is set and the
    ///   intersection lies behind the base point.
    pub fn intersect_with_plane(&self, plane: &Plane3D, forward_only: bool) -> Result<Point3D> {
        let normal = plane.normal();
        let dp = Vector3D::dot(&self.direction, &normal);
        if dp == 0.0 {
            return if self.base.distance_to_plane(plane) == 0.0 {
                Err(GeomError::Identical("line lies in the plane".to_string()))
            } else {
                Err(GeomError::Parallel("line is parallel to the plane".to_string()))
            };
        }

        let s = Vector3D::dot(&normal, &(plane.base() - self.base))
            / Vector3D::dot(&normal, &self.direction);
        if forward_only && s < 0.0 {
            return Err(GeomError::ParameterViolation(
                "line points away from the plane".to_string(),
            ));
        }
        Ok(self.point_at(s))
    }

    /// Points of closest approach between `l1` and `l2`, one on each line.
    ///
    /// For intersecting lines both points coincide with the intersection.
    /// Parallel lines fail with [`GeomError::Parallel`] unless
    /// `fail_if_parallel` is false, in which case the segment starts at
    /// `l1`'s base and ends at its foot on `l2`.
    pub fn approach_lines(
        l1: &Line3D,
        l2: &Line3D,
        fail_if_parallel: bool,
    ) -> Result<(Point3D, Point3D)> {
        let d1 = l1.direction;
        let d2 = l2.direction;
        let w0 = l1.base - l2.base;

        let a = Vector3D::dot(&d1, &d1);
        let b = Vector3D::dot(&d1, &d2);
        let c = Vector3D::dot(&d2, &d2);
        let d = Vector3D::dot(&d1, &w0);
        let e = Vector3D::dot(&d2, &w0);

        let denom = a * c - b * b;
        if denom == 0.0 {
            // b == 0 cannot be divided through; unit directions make it
            // unreachable in practice but it is rejected all the same.
            if fail_if_parallel || b == 0.0 {
                return Err(GeomError::Parallel(
                    "lines are parallel and have no single approach segment".to_string(),
                ));
            }
            return Ok((l1.base, l2.point_at(d / b)));
        }

        let s1 = l1.point_at((b * e - c * d) / denom);
        let s2 = l2.point_at((a * e - b * d) / denom);
        Ok((s1, s2))
    }
}

impl fmt::Display for Line3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b: {}, d: {}", self.base, self.direction)
    }
}
