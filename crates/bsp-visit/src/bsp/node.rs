//! BSP tree node implementation.

/// A node in a BSP tree.
///
/// A node is either a [`Leaf`], which carries the caller's classification of
/// the region it covers, or an [`Internal`] node, which splits its region with
/// a cut hyperplane and owns one subtree for each side of the cut.
///
/// # Ownership
///
/// Every internal node exclusively owns its cut and both children. A node can
/// therefore never be missing a child, be shared between two parents, or be
/// part of a cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<H, C> {
    /// A terminal region.
    Leaf(Leaf<C>),
    /// A region split in two by a hyperplane.
    Internal(Internal<H, C>),
}

/// A terminal node carrying a region classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<C> {
    classification: C,
}

/// An internal node: a cut hyperplane and its minus and plus subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Internal<H, C> {
    /// The splitting hyperplane for this node.
    cut: H,

    /// The minus subtree, then the plus subtree. Empty only while the node is
    /// being dropped.
    children: Vec<Node<H, C>>,
}

const MINUS: usize = 0;
const PLUS: usize = 1;

impl<C> Leaf<C> {
    /// Returns the region classification.
    #[inline]
    pub fn classification(&self) -> &C {
        &self.classification
    }

    /// Consumes the leaf, returning its classification.
    #[inline]
    pub fn into_classification(self) -> C {
        self.classification
    }
}

impl<H, C> Internal<H, C> {
    /// Returns the cut hyperplane.
    #[inline]
    pub fn cut(&self) -> &H {
        &self.cut
    }

    /// Returns the subtree on the minus side of the cut.
    #[inline]
    pub fn minus(&self) -> &Node<H, C> {
        &self.children[MINUS]
    }

    /// Returns the subtree on the plus side of the cut.
    #[inline]
    pub fn plus(&self) -> &Node<H, C> {
        &self.children[PLUS]
    }
}

/// Frees the subtrees with a work-list instead of one stack frame per level,
/// so trees of any depth can be dropped.
impl<H, C> Drop for Internal<H, C> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Node::Internal(internal) = &mut node {
                pending.append(&mut internal.children);
            }
        }
    }
}

impl<H, C> Node<H, C> {
    /// Creates a leaf node.
    #[inline]
    pub fn leaf(classification: C) -> Self {
        Node::Leaf(Leaf { classification })
    }

    /// Creates an internal node owning `cut` and both subtrees.
    #[inline]
    pub fn internal(cut: H, minus: Node<H, C>, plus: Node<H, C>) -> Self {
        Node::Internal(Internal {
            cut,
            children: vec![minus, plus],
        })
    }

    /// Returns `true` if this node has no cut and no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns `true` if this node has a cut hyperplane.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal(_))
    }

    /// Returns the internal view of this node, if it has a cut.
    #[inline]
    pub fn as_internal(&self) -> Option<&Internal<H, C>> {
        match self {
            Node::Internal(internal) => Some(internal),
            Node::Leaf(_) => None,
        }
    }

    /// Returns the cut hyperplane of an internal node.
    #[inline]
    pub fn cut(&self) -> Option<&H> {
        self.as_internal().map(Internal::cut)
    }

    /// Returns the minus child of an internal node.
    #[inline]
    pub fn minus(&self) -> Option<&Node<H, C>> {
        self.as_internal().map(Internal::minus)
    }

    /// Returns the plus child of an internal node.
    #[inline]
    pub fn plus(&self) -> Option<&Node<H, C>> {
        self.as_internal().map(Internal::plus)
    }

    /// Returns the classification of a leaf node.
    #[inline]
    pub fn classification(&self) -> Option<&C> {
        match self {
            Node::Leaf(leaf) => Some(leaf.classification()),
            Node::Internal(_) => None,
        }
    }

    /// Returns the total number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }

    /// Returns the number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.descendants().filter(|node| node.is_leaf()).count()
    }

    /// Returns the height of this subtree (1 for a leaf node).
    pub fn height(&self) -> usize {
        let mut stack = vec![(self, 1)];
        let mut height = 0;
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            if let Node::Internal(internal) = node {
                stack.push((internal.plus(), level + 1));
                stack.push((internal.minus(), level + 1));
            }
        }
        height
    }

    /// Every node of this subtree, in no particular order.
    fn descendants(&self) -> impl Iterator<Item = &Node<H, C>> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Node::Internal(internal) = node {
                stack.push(internal.plus());
                stack.push(internal.minus());
            }
            Some(node)
        })
    }
}
