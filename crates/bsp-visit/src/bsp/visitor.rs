//! Visitor pattern for BSP tree traversal.
//!
//! Visitors allow custom processing of nodes during tree traversal without
//! coupling traversal logic to specific use cases. A visitor decides two
//! things: what happens when a node is visited, and, for each internal node,
//! in which order the node and its two subtrees are walked.

use std::convert::Infallible;

use super::node::{Internal, Node};

/// How to interleave visiting an internal node with walking its two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitOrder {
    /// Plus subtree, then minus subtree, then the node.
    PlusMinusNode,
    /// Plus subtree, then the node, then minus subtree.
    PlusNodeMinus,
    /// Minus subtree, then plus subtree, then the node.
    MinusPlusNode,
    /// Minus subtree, then the node, then plus subtree.
    MinusNodePlus,
    /// The node, then plus subtree, then minus subtree.
    NodePlusMinus,
    /// The node, then minus subtree, then plus subtree.
    #[default]
    NodeMinusPlus,
    /// Skip the node and its entire subtree.
    None,
}

/// One step of a [`VisitOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Walk the minus subtree.
    Minus,
    /// Visit the node itself.
    Node,
    /// Walk the plus subtree.
    Plus,
}

impl VisitOrder {
    /// Every order, with `None` last.
    pub const ALL: [VisitOrder; 7] = [
        VisitOrder::PlusMinusNode,
        VisitOrder::PlusNodeMinus,
        VisitOrder::MinusPlusNode,
        VisitOrder::MinusNodePlus,
        VisitOrder::NodePlusMinus,
        VisitOrder::NodeMinusPlus,
        VisitOrder::None,
    ];

    /// The three steps in execution order, or `None` if the subtree is skipped.
    pub fn steps(self) -> Option<[Step; 3]> {
        use Step::{Minus, Node, Plus};

        match self {
            VisitOrder::PlusMinusNode => Some([Plus, Minus, Node]),
            VisitOrder::PlusNodeMinus => Some([Plus, Node, Minus]),
            VisitOrder::MinusPlusNode => Some([Minus, Plus, Node]),
            VisitOrder::MinusNodePlus => Some([Minus, Node, Plus]),
            VisitOrder::NodePlusMinus => Some([Node, Plus, Minus]),
            VisitOrder::NodeMinusPlus => Some([Node, Minus, Plus]),
            VisitOrder::None => None,
        }
    }

    /// The same order with the minus and plus subtrees swapped.
    pub fn mirrored(self) -> Self {
        match self {
            VisitOrder::PlusMinusNode => VisitOrder::MinusPlusNode,
            VisitOrder::PlusNodeMinus => VisitOrder::MinusNodePlus,
            VisitOrder::MinusPlusNode => VisitOrder::PlusMinusNode,
            VisitOrder::MinusNodePlus => VisitOrder::PlusNodeMinus,
            VisitOrder::NodePlusMinus => VisitOrder::NodeMinusPlus,
            VisitOrder::NodeMinusPlus => VisitOrder::NodePlusMinus,
            VisitOrder::None => VisitOrder::None,
        }
    }

    /// Returns `true` for [`VisitOrder::None`].
    #[inline]
    pub fn skips_subtree(self) -> bool {
        self == VisitOrder::None
    }
}

/// Outcome of visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Keep going with the remaining nodes.
    #[default]
    Continue,
    /// Stop the whole traversal; no further node is visited.
    Terminate,
}

impl VisitResult {
    /// Returns `true` if the traversal should go on.
    #[inline]
    pub fn is_continue(self) -> bool {
        self == VisitResult::Continue
    }

    /// Returns `true` if the traversal should stop.
    #[inline]
    pub fn is_terminate(self) -> bool {
        self == VisitResult::Terminate
    }
}

/// Visitor for processing nodes during BSP tree traversal.
///
/// Implement this trait to define custom behavior when traversing the tree.
/// Common uses include:
/// - Collecting leaf regions in a particular order
/// - Searching for the region nearest to (or farthest from) a point
/// - Early-exit queries that stop once an answer is found
pub trait Visitor<H, C> {
    /// Called for every node, leaf or internal, that is not skipped.
    fn visit(&mut self, node: &Node<H, C>) -> VisitResult;

    /// Chooses the visit order for an internal node.
    ///
    /// Called before anything in the subtree rooted at `node` is visited.
    /// Never called for leaves. Returning [`VisitOrder::None`] skips the node
    /// and all of its descendants.
    fn visit_order(&mut self, node: &Internal<H, C>) -> VisitOrder {
        let _ = node;
        VisitOrder::NodeMinusPlus
    }
}

impl<H, C, V> Visitor<H, C> for &mut V
where
    V: Visitor<H, C> + ?Sized,
{
    #[inline]
    fn visit(&mut self, node: &Node<H, C>) -> VisitResult {
        (**self).visit(node)
    }

    #[inline]
    fn visit_order(&mut self, node: &Internal<H, C>) -> VisitOrder {
        (**self).visit_order(node)
    }
}

/// A visitor whose callbacks can fail.
///
/// The first error aborts the traversal and is handed back to the caller
/// unchanged.
pub trait TryVisitor<H, C> {
    /// Error raised by the callbacks.
    type Error;

    /// Fallible counterpart of [`Visitor::visit`].
    fn try_visit(&mut self, node: &Node<H, C>) -> Result<VisitResult, Self::Error>;

    /// Fallible counterpart of [`Visitor::visit_order`].
    fn try_visit_order(&mut self, node: &Internal<H, C>) -> Result<VisitOrder, Self::Error> {
        let _ = node;
        Ok(VisitOrder::NodeMinusPlus)
    }
}

impl<H, C, V> TryVisitor<H, C> for &mut V
where
    V: TryVisitor<H, C> + ?Sized,
{
    type Error = V::Error;

    #[inline]
    fn try_visit(&mut self, node: &Node<H, C>) -> Result<VisitResult, Self::Error> {
        (**self).try_visit(node)
    }

    #[inline]
    fn try_visit_order(&mut self, node: &Internal<H, C>) -> Result<VisitOrder, Self::Error> {
        (**self).try_visit_order(node)
    }
}

/// Runs an infallible [`Visitor`] wherever a [`TryVisitor`] is expected.
#[derive(Debug, Clone, Default)]
pub struct Unfailing<V>(pub V);

impl<H, C, V> TryVisitor<H, C> for Unfailing<V>
where
    V: Visitor<H, C>,
{
    type Error = Infallible;

    #[inline]
    fn try_visit(&mut self, node: &Node<H, C>) -> Result<VisitResult, Infallible> {
        Ok(self.0.visit(node))
    }

    #[inline]
    fn try_visit_order(&mut self, node: &Internal<H, C>) -> Result<VisitOrder, Infallible> {
        Ok(self.0.visit_order(node))
    }
}

/// A visitor that calls a closure for each node.
///
/// Every internal node is walked in the same fixed order,
/// [`VisitOrder::NodeMinusPlus`] unless changed with [`FnVisitor::with_order`].
#[derive(Debug, Clone)]
pub struct FnVisitor<F> {
    func: F,
    order: VisitOrder,
}

impl<F> FnVisitor<F> {
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self {
            func,
            order: VisitOrder::default(),
        }
    }

    /// Uses `order` for every internal node.
    pub fn with_order(mut self, order: VisitOrder) -> Self {
        self.order = order;
        self
    }
}

impl<H, C, F> Visitor<H, C> for FnVisitor<F>
where
    F: FnMut(&Node<H, C>) -> VisitResult,
{
    fn visit(&mut self, node: &Node<H, C>) -> VisitResult {
        (self.func)(node)
    }

    fn visit_order(&mut self, _node: &Internal<H, C>) -> VisitOrder {
        self.order
    }
}

/// A fallible visitor that calls a closure for each node.
#[derive(Debug, Clone)]
pub struct TryFnVisitor<F> {
    func: F,
    order: VisitOrder,
}

impl<F> TryFnVisitor<F> {
    /// Creates a new visitor from a fallible closure.
    pub fn new(func: F) -> Self {
        Self {
            func,
            order: VisitOrder::default(),
        }
    }

    /// Uses `order` for every internal node.
    pub fn with_order(mut self, order: VisitOrder) -> Self {
        self.order = order;
        self
    }
}

impl<H, C, E, F> TryVisitor<H, C> for TryFnVisitor<F>
where
    F: FnMut(&Node<H, C>) -> Result<VisitResult, E>,
{
    type Error = E;

    fn try_visit(&mut self, node: &Node<H, C>) -> Result<VisitResult, E> {
        (self.func)(node)
    }

    fn try_visit_order(&mut self, _node: &Internal<H, C>) -> Result<VisitOrder, E> {
        Ok(self.order)
    }
}

/// A visitor that collects the classification of every leaf it reaches.
#[derive(Debug, Clone)]
pub struct CollectingVisitor<C> {
    collected: Vec<C>,
    order: VisitOrder,
}

impl<C> Default for CollectingVisitor<C> {
    fn default() -> Self {
        Self {
            collected: Vec::new(),
            order: VisitOrder::default(),
        }
    }
}

impl<C> CollectingVisitor<C> {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `order` for every internal node.
    pub fn with_order(mut self, order: VisitOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the collected classifications.
    pub fn into_classifications(self) -> Vec<C> {
        self.collected
    }

    /// Returns a reference to the collected classifications.
    pub fn classifications(&self) -> &[C] {
        &self.collected
    }
}

impl<H, C: Clone> Visitor<H, C> for CollectingVisitor<C> {
    fn visit(&mut self, node: &Node<H, C>) -> VisitResult {
        if let Some(classification) = node.classification() {
            self.collected.push(classification.clone());
        }
        VisitResult::Continue
    }

    fn visit_order(&mut self, _node: &Internal<H, C>) -> VisitOrder {
        self.order
    }
}
