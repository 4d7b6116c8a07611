//! Visit orders derived from a target point.
//!
//! The sign of a target point's offset from a node's cut tells which half-space
//! the point lies in. Walking that half-space first reaches the regions near
//! the point early; walking it last reaches the far regions early. This is the
//! basis for nearest-region and farthest-region searches that can stop before
//! examining the whole tree.

use crate::space::Hyperplane;

use super::node::{Internal, Node};
use super::visitor::{VisitOrder, VisitResult, Visitor};

/// Maps a target point's offset from a cut to a [`VisitOrder`].
pub trait OrderRule {
    /// Order for an internal node whose cut has the target at `offset`.
    fn order_for_offset(&self, offset: f64) -> VisitOrder;

    /// Order for an internal node with the given cut.
    fn order_for<H: Hyperplane>(&self, target: &H::Point, cut: &H) -> VisitOrder {
        self.order_for_offset(cut.offset(target))
    }
}

/// Walks the side of each cut containing the target first.
///
/// A target exactly on the cut walks the minus side first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClosestFirst;

/// Walks the side of each cut not containing the target first.
///
/// A target exactly on the cut walks the minus side first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FarthestFirst;

impl OrderRule for ClosestFirst {
    #[inline]
    fn order_for_offset(&self, offset: f64) -> VisitOrder {
        if offset > 0.0 {
            VisitOrder::PlusNodeMinus
        } else {
            VisitOrder::MinusNodePlus
        }
    }
}

impl OrderRule for FarthestFirst {
    #[inline]
    fn order_for_offset(&self, offset: f64) -> VisitOrder {
        if offset < 0.0 {
            VisitOrder::PlusNodeMinus
        } else {
            VisitOrder::MinusNodePlus
        }
    }
}

/// Closest-first or farthest-first, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    Closest,
    Farthest,
}

impl Proximity {
    /// The opposite preference.
    pub fn reversed(self) -> Self {
        match self {
            Proximity::Closest => Proximity::Farthest,
            Proximity::Farthest => Proximity::Closest,
        }
    }
}

impl OrderRule for Proximity {
    fn order_for_offset(&self, offset: f64) -> VisitOrder {
        match self {
            Proximity::Closest => ClosestFirst.order_for_offset(offset),
            Proximity::Farthest => FarthestFirst.order_for_offset(offset),
        }
    }
}

/// A visitor bound to a fixed target point.
///
/// The visit order of every internal node comes from `rule` applied to the
/// target; visiting a node is delegated to the `visit` closure.
///
/// # Example
///
/// ```
/// use bsp_visit::bsp::{ClosestFirstVisitor, Node, VisitResult, traverse};
/// use bsp_visit::geometry::Plane1D;
/// use nalgebra::{Point1, Vector1};
///
/// let cut = Plane1D::new(Vector1::new(1.0), 0.0).unwrap();
/// let root = Node::internal(cut, Node::leaf("left"), Node::leaf("right"));
///
/// // Find the first leaf reached from x = 3.
/// let mut nearest = None;
/// let mut visitor = ClosestFirstVisitor::new(
///     Point1::new(3.0),
///     |node: &Node<Plane1D, &'static str>| match node.classification() {
///         Some(c) => {
///             nearest = Some(*c);
///             VisitResult::Terminate
///         }
///         None => VisitResult::Continue,
///     },
/// );
/// traverse(&root, &mut visitor);
/// assert_eq!(nearest, Some("right"));
/// ```
#[derive(Debug, Clone)]
pub struct TargetPointVisitor<P, R, F> {
    target: P,
    rule: R,
    visit: F,
}

/// Target-point visitor walking the target's side of each cut first.
pub type ClosestFirstVisitor<P, F> = TargetPointVisitor<P, ClosestFirst, F>;

/// Target-point visitor walking the far side of each cut first.
pub type FarthestFirstVisitor<P, F> = TargetPointVisitor<P, FarthestFirst, F>;

impl<P, R, F> TargetPointVisitor<P, R, F> {
    /// Creates a visitor ordering nodes by `rule` relative to `target`.
    pub fn with_rule(target: P, rule: R, visit: F) -> Self {
        Self {
            target,
            rule,
            visit,
        }
    }

    /// The point serving as the target of the traversal.
    #[inline]
    pub fn target(&self) -> &P {
        &self.target
    }

    /// The rule choosing visit orders.
    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Consumes the visitor, returning the visit closure.
    pub fn into_visit(self) -> F {
        self.visit
    }
}

impl<P, F> TargetPointVisitor<P, ClosestFirst, F> {
    /// Creates a closest-first visitor.
    pub fn new(target: P, visit: F) -> Self {
        Self::with_rule(target, ClosestFirst, visit)
    }
}

impl<P, F> TargetPointVisitor<P, FarthestFirst, F> {
    /// Creates a farthest-first visitor.
    pub fn new(target: P, visit: F) -> Self {
        Self::with_rule(target, FarthestFirst, visit)
    }
}

impl<P, R, F, H, C> Visitor<H, C> for TargetPointVisitor<P, R, F>
where
    H: Hyperplane<Point = P>,
    R: OrderRule,
    F: FnMut(&Node<H, C>) -> VisitResult,
{
    fn visit(&mut self, node: &Node<H, C>) -> VisitResult {
        (self.visit)(node)
    }

    fn visit_order(&mut self, node: &Internal<H, C>) -> VisitOrder {
        self.rule.order_for(&self.target, node.cut())
    }
}
