//! Ready-made geometries implementing [`Point`](crate::Point) and
//! [`Hyperplane`](crate::Hyperplane).
//!
//! - [`euclidean`]: flat spaces of any dimension via `nalgebra` points
//! - [`spherical`]: the unit circle, cut by oriented angles

pub mod euclidean;
pub mod spherical;

pub use euclidean::{Plane, Plane1D, Plane2D, Plane3D, PLANE_EPSILON};
pub use spherical::{CutAngle, S1Point};
