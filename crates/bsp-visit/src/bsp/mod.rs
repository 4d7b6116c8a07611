//! Read-only traversal of Binary Space Partitioning trees.
//!
//! A BSP tree recursively splits a region of space with hyperplanes. Each
//! internal node owns a cut and two subtrees, one for each side of the cut;
//! each leaf carries a classification of the region it covers. This module
//! walks such trees in a caller-selected order:
//!
//! - Fixed orders (pre-order, post-order, in-order, either side first)
//! - Orders computed per node from a target point, so the regions nearest to
//!   (or farthest from) the target are reached first
//! - Early termination from any visit, anywhere in the tree
//!
//! The same code walks trees over any geometry implementing
//! [`Hyperplane`](crate::Hyperplane).
//!
//! # Example
//!
//! ```
//! use bsp_visit::bsp::{CollectingVisitor, Node, Tree, VisitOrder};
//! use bsp_visit::geometry::Plane1D;
//! use nalgebra::Vector1;
//!
//! let cut = |x: f64| Plane1D::new(Vector1::new(1.0), x).unwrap();
//! let tree = Tree::new(Node::internal(
//!     cut(0.0),
//!     Node::leaf("negative"),
//!     Node::internal(cut(1.0), Node::leaf("unit"), Node::leaf("large")),
//! ));
//!
//! // Plus side first, everywhere.
//! let mut visitor = CollectingVisitor::new().with_order(VisitOrder::PlusNodeMinus);
//! tree.traverse(&mut visitor);
//! assert_eq!(visitor.classifications(), ["large", "unit", "negative"]);
//! ```
//!
//! # Architecture
//!
//! - [`Tree`]: The container holding the root node
//! - [`Node`]: A leaf, or an internal node with a cut and two children
//! - [`Visitor`]: Per-node callback plus per-internal-node order choice
//! - [`traverse`] / [`try_traverse`]: The traversal engine
//! - [`ClosestFirstVisitor`] / [`FarthestFirstVisitor`]: Target-point orders

mod engine;
mod node;
mod order;
mod tree;
mod visitor;

#[cfg(test)]
mod fixtures;

// Re-export main types
pub use engine::{traverse, try_traverse, Strategy, TraversalOptions};
pub use node::{Internal, Leaf, Node};
pub use order::{
    ClosestFirst, ClosestFirstVisitor, FarthestFirst, FarthestFirstVisitor, OrderRule, Proximity,
    TargetPointVisitor,
};
pub use tree::Tree;
pub use visitor::{
    CollectingVisitor, FnVisitor, Step, TryFnVisitor, TryVisitor, Unfailing, VisitOrder,
    VisitResult, Visitor,
};
