//! Small labelled trees on the real line for traversal tests.

use nalgebra::Point1;

use super::node::{Internal, Node};
use super::visitor::{VisitOrder, VisitResult, Visitor};
use crate::space::Hyperplane;

/// A named cut at `x = at`; the plus side is `x > at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub name: &'static str,
    pub at: f64,
}

impl Hyperplane for Mark {
    type Point = Point1<f64>;

    fn offset(&self, point: &Point1<f64>) -> f64 {
        point.x - self.at
    }
}

pub type TestNode = Node<Mark, &'static str>;

pub fn leaf(name: &'static str) -> TestNode {
    Node::leaf(name)
}

pub fn cut(name: &'static str, at: f64, minus: TestNode, plus: TestNode) -> TestNode {
    Node::internal(Mark { name, at }, minus, plus)
}

/// Leaf classification or cut name.
pub fn label(node: &TestNode) -> &'static str {
    match node {
        Node::Leaf(leaf) => *leaf.classification(),
        Node::Internal(internal) => internal.cut().name,
    }
}

/// `root` at 0 with minus leaf `A` and plus leaf `B`.
pub fn three_node() -> TestNode {
    cut("root", 0.0, leaf("A"), leaf("B"))
}

/// ```text
///            root (0)
///          /          \
///      m (-2)         p (2)
///      /   \          /   \
///     a     b        c     d
/// ```
pub fn seven_node() -> TestNode {
    cut(
        "root",
        0.0,
        cut("m", -2.0, leaf("a"), leaf("b")),
        cut("p", 2.0, leaf("c"), leaf("d")),
    )
}

/// A chain of `depth` cuts, each with its plus child a leaf.
pub fn minus_chain(depth: usize) -> TestNode {
    (0..depth).fold(leaf("bottom"), |minus, i| {
        cut("link", -(i as f64), minus, leaf("side"))
    })
}

/// Records labels, uses one order everywhere and can stop at a given label.
#[derive(Debug, Default)]
pub struct Recorder {
    pub seen: Vec<&'static str>,
    pub order: VisitOrder,
    pub stop_at: Option<&'static str>,
    pub skip: Option<&'static str>,
}

impl Recorder {
    pub fn with_order(order: VisitOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }
}

impl Visitor<Mark, &'static str> for Recorder {
    fn visit(&mut self, node: &TestNode) -> VisitResult {
        let name = label(node);
        self.seen.push(name);
        if self.stop_at == Some(name) {
            VisitResult::Terminate
        } else {
            VisitResult::Continue
        }
    }

    fn visit_order(&mut self, node: &Internal<Mark, &'static str>) -> VisitOrder {
        if self.skip == Some(node.cut().name) {
            VisitOrder::None
        } else {
            self.order
        }
    }
}
