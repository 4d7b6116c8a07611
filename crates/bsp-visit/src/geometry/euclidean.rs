//! Flat Euclidean spaces of any dimension, on top of `nalgebra`.

use nalgebra::{Point as NPoint, Point3, SVector};

use crate::error::GeometryError;
use crate::space::{Hyperplane, Point, Side};

/// Default epsilon for plane classification.
/// Points within this distance of the plane are considered "on" the plane.
pub const PLANE_EPSILON: f64 = 1e-10;

impl<const D: usize> Point for NPoint<f64, D> {
    #[inline]
    fn dimension(&self) -> usize {
        D
    }

    fn is_nan(&self) -> bool {
        self.coords.iter().any(|c| c.is_nan())
    }

    fn is_infinite(&self) -> bool {
        !self.is_nan() && self.coords.iter().any(|c| c.is_infinite())
    }

    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        nalgebra::distance(self, other)
    }
}

/// A hyperplane in `D`-dimensional space, represented as `normal · point = offset`.
///
/// The plus side is the side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<const D: usize> {
    normal: SVector<f64, D>,
    offset: f64,
}

/// A point on the real line with an orientation.
pub type Plane1D = Plane<1>;
/// A line in the plane.
pub type Plane2D = Plane<2>;
/// A plane in 3D space.
pub type Plane3D = Plane<3>;

impl<const D: usize> Plane<D> {
    /// Creates a new plane from a normal vector and offset.
    /// The normal will be normalized automatically.
    pub fn new(normal: SVector<f64, D>, offset: f64) -> Result<Self, GeometryError> {
        let norm = checked_norm(&normal)?;
        Ok(Self {
            normal: normal / norm,
            offset: offset / norm,
        })
    }

    /// Creates a plane from a point on the plane and a normal vector.
    /// The normal will be normalized automatically.
    pub fn from_point_and_normal(
        point: NPoint<f64, D>,
        normal: SVector<f64, D>,
    ) -> Result<Self, GeometryError> {
        let norm = checked_norm(&normal)?;
        let unit_normal = normal / norm;
        let offset = unit_normal.dot(&point.coords);
        Ok(Self {
            normal: unit_normal,
            offset,
        })
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> SVector<f64, D> {
        self.normal
    }

    /// Returns the signed distance from the origin to the plane along the normal.
    #[inline]
    pub fn origin_offset(&self) -> f64 {
        self.offset
    }

    /// Computes the signed distance from a point to the plane.
    #[inline]
    pub fn signed_distance(&self, point: &NPoint<f64, D>) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Classifies which side of the plane a point lies on.
    /// Uses the default `PLANE_EPSILON` tolerance.
    #[inline]
    pub fn classify_point(&self, point: &NPoint<f64, D>) -> Side {
        self.classify_point_with_epsilon(point, PLANE_EPSILON)
    }

    /// Classifies which side of the plane a point lies on, with a custom epsilon.
    pub fn classify_point_with_epsilon(&self, point: &NPoint<f64, D>, epsilon: f64) -> Side {
        let dist = self.signed_distance(point);
        if dist > epsilon {
            Side::Plus
        } else if dist < -epsilon {
            Side::Minus
        } else {
            Side::On
        }
    }

    /// Returns a new plane with the normal flipped, swapping its plus and minus sides.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Projects a point onto the plane (finds the closest point on the plane).
    #[inline]
    pub fn project_point(&self, point: &NPoint<f64, D>) -> NPoint<f64, D> {
        point - self.normal * self.signed_distance(point)
    }
}

impl Plane<3> {
    /// Creates a plane from three points.
    /// The normal direction follows the right-hand rule: (b - a) × (c - a).
    pub fn from_three_points(
        a: Point3<f64>,
        b: Point3<f64>,
        c: Point3<f64>,
    ) -> Result<Self, GeometryError> {
        let normal = (b - a).cross(&(c - a));
        Self::from_point_and_normal(a, normal).map_err(|_| GeometryError::CollinearPoints)
    }
}

impl<const D: usize> Hyperplane for Plane<D> {
    type Point = NPoint<f64, D>;

    #[inline]
    fn offset(&self, point: &Self::Point) -> f64 {
        self.signed_distance(point)
    }
}

fn checked_norm<const D: usize>(normal: &SVector<f64, D>) -> Result<f64, GeometryError> {
    let norm = normal.norm();
    if norm.is_finite() && norm > f64::EPSILON {
        Ok(norm)
    } else {
        Err(GeometryError::DegenerateNormal)
    }
}
