//! geom3d: closed-form analytic geometry in 3D space.
//!
//! Points, displacement vectors, infinite lines and infinite planes, with
//! construction from varied inputs and exact intersection routines:
//! line–plane, plane–plane and line–line closest approach.
//!
//! Degenerate configurations (null vectors, parallel or identical
//! objects) are detected with exact comparisons against zero. No
//! tolerance is applied anywhere.
//!
//! # Concurrency
//!
//! All types are plain `Copy` values with no interior mutability, so they
//! are `Send + Sync` and independent instances can be used from any number
//! of threads. The in-place mutators (`normalize`, `negate`, the setters)
//! take `&mut self`; sharing one instance between threads while mutating it
//! needs external synchronization, since nothing here locks.

pub mod gp;

pub use gp::{Line3D, Plane3D, Point3D, Vector3D, XYZ};

/// Result type for geometric operations
pub type Result<T> = std::result::Result<T, GeomError>;

#[derive(Debug, thiserror::Error)]
pub enum GeomError {
    /// A direction or normal was required but the vector has zero length.
    #[error("Null vector: a nonzero direction or normal is required")]
    NullVector,

    /// The objects coincide and intersect in infinitely many points.
    #[error("Identical: {0}")]
    Identical(String),

    /// The objects are parallel and distinct, so they do not intersect.
    #[error("Parallel: {0}")]
    Parallel(String),

    /// The solution violates a caller-specified constraint such as
    /// forward-only intersection.
    #[error("Parameter violation: {0}")]
    ParameterViolation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
