//! BSP tree container.

use static_assertions::assert_impl_all;

use crate::error::TraversalError;

use super::engine::{self, TraversalOptions};
use super::node::Node;
use super::visitor::{TryVisitor, VisitResult, Visitor};

/// A Binary Space Partitioning tree.
///
/// The tree owns its root [`Node`], which in turn owns every other node. It
/// is built elsewhere (by splitting regions with hyperplanes) and handed over
/// complete; from then on it is only read.
///
/// # Traversal
///
/// Trees are walked with a [`Visitor`], which picks the visit order at each
/// internal node and may stop the walk at any point:
///
/// ```ignore
/// let mut visitor = ClosestFirstVisitor::new(target, |node| { /* ... */ });
/// tree.traverse(&mut visitor);
/// ```
///
/// Traversals take `&self`, so several can run over the same tree at once,
/// from as many threads as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<H, C> {
    root: Node<H, C>,
}

assert_impl_all!(Tree<crate::geometry::Plane3D, bool>: Send, Sync);
assert_impl_all!(Node<crate::geometry::CutAngle, String>: Send, Sync);

impl<H, C> Tree<H, C> {
    /// Wraps a fully built root node.
    pub fn new(root: Node<H, C>) -> Self {
        Self { root }
    }

    /// A tree with no cuts: one leaf covering the whole space.
    pub fn empty(classification: C) -> Self {
        Self::new(Node::leaf(classification))
    }

    /// Returns `true` if the root is a leaf.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Returns a reference to the root node.
    #[inline]
    pub fn root(&self) -> &Node<H, C> {
        &self.root
    }

    /// Consumes the tree, returning the root node.
    pub fn into_root(self) -> Node<H, C> {
        self.root
    }

    /// Returns the total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Returns the number of leaf regions in the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Returns the height of the tree (1 for a single leaf).
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Walks the whole tree with `visitor`, starting at the root.
    ///
    /// See [`traverse`](engine::traverse).
    pub fn traverse<V>(&self, visitor: &mut V) -> VisitResult
    where
        V: Visitor<H, C> + ?Sized,
    {
        engine::traverse(&self.root, visitor)
    }

    /// Walks the whole tree with a fallible visitor.
    ///
    /// See [`try_traverse`](engine::try_traverse).
    pub fn try_traverse<V>(
        &self,
        visitor: &mut V,
        options: &TraversalOptions,
    ) -> Result<VisitResult, TraversalError<V::Error>>
    where
        V: TryVisitor<H, C> + ?Sized,
    {
        engine::try_traverse(&self.root, visitor, options)
    }
}

impl<H, C> From<Node<H, C>> for Tree<H, C> {
    fn from(root: Node<H, C>) -> Self {
        Self::new(root)
    }
}
