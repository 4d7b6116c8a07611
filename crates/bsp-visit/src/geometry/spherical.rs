//! The 1-sphere: points on a circle, split by oriented cut angles.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use crate::space::{Hyperplane, Point};

/// A point on the unit circle, identified by its azimuth.
///
/// The azimuth is normalized into `[0, 2π)`.
#[derive(Debug, Clone, Copy)]
pub struct S1Point {
    azimuth: f64,
    vector: Vector2<f64>,
}

impl S1Point {
    /// A point with NaN azimuth.
    pub fn nan() -> Self {
        Self {
            azimuth: f64::NAN,
            vector: Vector2::repeat(f64::NAN),
        }
    }

    /// Creates a point from an azimuth in radians.
    ///
    /// Non-finite azimuths produce a NaN point.
    pub fn from_azimuth(azimuth: f64) -> Self {
        let normalized = normalize_between(azimuth, PI);
        if normalized.is_nan() {
            return Self::nan();
        }
        Self {
            azimuth: normalized,
            vector: Vector2::new(azimuth.cos(), azimuth.sin()),
        }
    }

    /// Azimuth in `[0, 2π)`, or NaN.
    #[inline]
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Unit vector pointing at this point.
    #[inline]
    pub fn vector(&self) -> Vector2<f64> {
        self.vector
    }
}

impl PartialEq for S1Point {
    fn eq(&self, other: &Self) -> bool {
        if other.is_nan() {
            return self.is_nan();
        }
        self.azimuth == other.azimuth
    }
}

impl Point for S1Point {
    #[inline]
    fn dimension(&self) -> usize {
        1
    }

    #[inline]
    fn is_nan(&self) -> bool {
        self.azimuth.is_nan()
    }

    #[inline]
    fn is_infinite(&self) -> bool {
        !self.is_nan() && self.azimuth.is_infinite()
    }

    /// Angle between the two points, in `[0, π]`.
    fn distance(&self, other: &Self) -> f64 {
        self.vector.angle(&other.vector)
    }
}

/// A hyperplane of the circle: a single point with a facing.
///
/// A positive-facing cut has its plus side in the direction of increasing
/// azimuth, up to half a turn away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutAngle {
    point: S1Point,
    positive_facing: bool,
}

impl CutAngle {
    /// Creates a cut at the given point.
    pub fn from_point(point: S1Point, positive_facing: bool) -> Self {
        Self {
            point,
            positive_facing,
        }
    }

    /// Creates a cut at the given azimuth.
    pub fn from_azimuth(azimuth: f64, positive_facing: bool) -> Self {
        Self::from_point(S1Point::from_azimuth(azimuth), positive_facing)
    }

    /// The location of the cut.
    #[inline]
    pub fn point(&self) -> &S1Point {
        &self.point
    }

    /// Returns `true` if the plus side lies in the direction of increasing azimuth.
    #[inline]
    pub fn is_positive_facing(&self) -> bool {
        self.positive_facing
    }

    /// The same cut, facing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            point: self.point,
            positive_facing: !self.positive_facing,
        }
    }
}

impl Hyperplane for CutAngle {
    type Point = S1Point;

    /// Signed angle from the cut to `point`, in `[-π, π)`.
    fn offset(&self, point: &S1Point) -> f64 {
        let az = self.point.azimuth();
        let dist = normalize_between(point.azimuth(), az) - az;
        if self.positive_facing { dist } else { -dist }
    }
}

/// Shifts `angle` by whole turns into `[center - π, center + π)`.
fn normalize_between(angle: f64, center: f64) -> f64 {
    angle - TAU * ((angle + PI - center) / TAU).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn azimuth_is_normalized() {
        let eps = 1e-12;
        assert_relative_eq!(
            S1Point::from_azimuth(-FRAC_PI_2).azimuth(),
            3.0 * FRAC_PI_2,
            epsilon = eps
        );
        assert_relative_eq!(S1Point::from_azimuth(5.0 * PI).azimuth(), PI, epsilon = eps);
        assert_abs_diff_eq!(S1Point::from_azimuth(TAU).azimuth(), 0.0);
    }

    #[test]
    fn non_finite_azimuth_is_nan() {
        let p = S1Point::from_azimuth(f64::INFINITY);
        assert!(p.is_nan());
        assert!(!p.is_infinite());
        assert_eq!(p, S1Point::nan());
        assert_eq!(p.dimension(), 1);
    }

    #[test]
    fn distance_takes_the_short_way_round() {
        let a = S1Point::from_azimuth(0.1);
        let b = S1Point::from_azimuth(TAU - 0.1);
        assert_relative_eq!(a.distance(&b), 0.2, epsilon = 1e-12);
        assert_relative_eq!(
            S1Point::from_azimuth(0.0).distance(&S1Point::from_azimuth(PI)),
            PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn cut_offset_is_signed_angle() {
        let cut = CutAngle::from_azimuth(FRAC_PI_2, true);
        assert_relative_eq!(cut.offset(&S1Point::from_azimuth(PI)), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(cut.offset(&S1Point::from_azimuth(0.0)), -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(cut.offset(&S1Point::from_azimuth(FRAC_PI_2)), 0.0);
    }

    #[test]
    fn cut_offset_wraps_around_zero() {
        let cut = CutAngle::from_azimuth(0.1, true);
        let p = S1Point::from_azimuth(TAU - 0.1);
        assert_relative_eq!(cut.offset(&p), -0.2, epsilon = 1e-12);
    }

    #[test]
    fn reversed_cut_negates_offset() {
        let cut = CutAngle::from_azimuth(1.0, true);
        let p = S1Point::from_azimuth(2.0);
        assert!(cut.is_positive_facing());
        assert!(!cut.reversed().is_positive_facing());
        assert_relative_eq!(cut.reversed().offset(&p), -cut.offset(&p));
    }
}
