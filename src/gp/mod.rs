//! Geometric primitives package.
//!
//! Points, displacement vectors, infinite lines and infinite planes, all
//! stored over the shared [`XYZ`] coordinate triplet.

mod xyz;
mod vec;
mod pnt;
mod lin;
mod pln;

// Flat namespace: every primitive is reachable as `gp::Name`.
pub use xyz::XYZ;
pub use vec::Vector3D;
pub use pnt::Point3D;
pub use lin::Line3D;
pub use pln::Plane3D;
