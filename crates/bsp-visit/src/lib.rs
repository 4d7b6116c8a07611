//! Generic traversal of Binary Space Partitioning (BSP) trees.
//!
//! The traversal engine works over any space that provides a [`Point`] type
//! and a [`Hyperplane`] type with a signed offset. Ready-made Euclidean and
//! spherical geometries live in [`geometry`].

pub mod bsp;
pub mod error;
pub mod geometry;
mod space;

pub use bsp::{
    traverse, try_traverse, ClosestFirstVisitor, FarthestFirstVisitor, Node, Tree, VisitOrder,
    VisitResult, Visitor,
};
pub use error::{GeometryError, TraversalError};
pub use space::{Hyperplane, Point, Side};
