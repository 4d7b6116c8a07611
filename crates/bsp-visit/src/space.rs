//! Point and hyperplane contracts shared by every partitioned space.
//!
//! The traversal engine only ever asks a hyperplane for the signed offset of a
//! point. How that offset is computed (flat coordinates, angles on a circle,
//! anything else) is up to the implementing geometry.

/// A location in some space.
///
/// Implementations are plain immutable values. Distances are measured with the
/// metric of the space the point belongs to.
pub trait Point: Clone {
    /// Number of dimensions of the space this point lives in.
    fn dimension(&self) -> usize;

    /// Returns `true` if any coordinate of the point is NaN.
    fn is_nan(&self) -> bool;

    /// Returns `true` if any coordinate is infinite and none is NaN.
    fn is_infinite(&self) -> bool;

    /// Distance between `self` and `other`.
    fn distance(&self, other: &Self) -> f64;
}

/// Which side of a hyperplane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Negative offset.
    Minus,
    /// Positive offset.
    Plus,
    /// Zero offset (or within a tolerance, for geometries that use one).
    On,
}

/// A hyperplane splitting its space into a minus and a plus half-space.
pub trait Hyperplane {
    /// Point type of the space being split.
    type Point: Point;

    /// Signed offset of `point` from this hyperplane.
    ///
    /// - Positive: the point is on the plus side
    /// - Negative: the point is on the minus side
    /// - Zero: the point lies on the hyperplane
    fn offset(&self, point: &Self::Point) -> f64;

    /// Classifies `point` by the sign of its offset.
    ///
    /// NaN offsets are reported as [`Side::On`].
    fn side(&self, point: &Self::Point) -> Side {
        let offset = self.offset(point);
        if offset > 0.0 {
            Side::Plus
        } else if offset < 0.0 {
            Side::Minus
        } else {
            Side::On
        }
    }
}
