//! The traversal engine.
//!
//! A traversal is a single depth-first walk starting at any node. For each
//! internal node the visitor picks a [`VisitOrder`]; the engine then executes
//! the three steps of that order, stopping everything as soon as one visit
//! returns [`VisitResult::Terminate`].
//!
//! Two walks are available and produce identical visit sequences:
//!
//! - [`Strategy::Recursive`]: uses the call stack, one frame per tree level
//! - [`Strategy::Iterative`]: uses an explicit work-list, for trees too deep
//!   for the call stack
//!
//! A traversal never mutates the tree, so any number of traversals can run
//! over the same tree from different threads.

use tracing::{debug, trace};

use crate::error::TraversalError;

use super::node::Node;
use super::visitor::{Step, TryVisitor, VisitResult, Visitor};

/// How the engine keeps track of pending work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Recurse once per tree level.
    #[default]
    Recursive,
    /// Keep pending steps on a heap-allocated stack.
    Iterative,
}

/// Configuration for [`try_traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalOptions {
    strategy: Strategy,
    max_depth: Option<usize>,
}

impl TraversalOptions {
    /// Recursive walk without a depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the walk strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fails the traversal with [`TraversalError::DepthExceeded`] when a node
    /// deeper than `max_depth` is reached. The starting node is at depth 0.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// The walk strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The depth limit, if any.
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

/// Walks the subtree rooted at `root`, driven by `visitor`.
///
/// Returns [`VisitResult::Terminate`] if any visit asked to stop, in which
/// case no further node was visited, and [`VisitResult::Continue`] otherwise.
pub fn traverse<H, C, V>(root: &Node<H, C>, visitor: &mut V) -> VisitResult
where
    V: Visitor<H, C> + ?Sized,
{
    let result = walk(root, visitor);
    if result.is_terminate() {
        debug!("traversal terminated early");
    }
    result
}

fn walk<H, C, V>(node: &Node<H, C>, visitor: &mut V) -> VisitResult
where
    V: Visitor<H, C> + ?Sized,
{
    let internal = match node {
        Node::Leaf(_) => return visitor.visit(node),
        Node::Internal(internal) => internal,
    };

    let Some(steps) = visitor.visit_order(internal).steps() else {
        trace!("skipping subtree");
        return VisitResult::Continue;
    };

    for step in steps {
        let result = match step {
            Step::Minus => walk(internal.minus(), visitor),
            Step::Plus => walk(internal.plus(), visitor),
            Step::Node => visitor.visit(node),
        };
        if result.is_terminate() {
            return VisitResult::Terminate;
        }
    }

    VisitResult::Continue
}

/// Walks the subtree rooted at `root` with a fallible visitor.
///
/// The first visitor error aborts the walk and is returned unchanged inside
/// [`TraversalError::Visitor`]. With a depth limit set, reaching a node below
/// it fails with [`TraversalError::DepthExceeded`] before that node's visitor
/// callbacks run.
pub fn try_traverse<H, C, V>(
    root: &Node<H, C>,
    visitor: &mut V,
    options: &TraversalOptions,
) -> Result<VisitResult, TraversalError<V::Error>>
where
    V: TryVisitor<H, C> + ?Sized,
{
    let outcome = match options.strategy {
        Strategy::Recursive => try_walk(root, visitor, 0, options.max_depth),
        Strategy::Iterative => try_walk_iterative(root, visitor, options.max_depth),
    };

    match &outcome {
        Ok(VisitResult::Terminate) => debug!("traversal terminated early"),
        Err(TraversalError::DepthExceeded { limit }) => {
            debug!(limit, "traversal exceeded depth limit")
        }
        Err(TraversalError::Visitor(_)) => debug!("traversal aborted by visitor error"),
        Ok(VisitResult::Continue) => {}
    }

    outcome
}

fn check_depth<E>(depth: usize, max_depth: Option<usize>) -> Result<(), TraversalError<E>> {
    match max_depth {
        Some(limit) if depth > limit => Err(TraversalError::DepthExceeded { limit }),
        _ => Ok(()),
    }
}

fn try_walk<H, C, V>(
    node: &Node<H, C>,
    visitor: &mut V,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<VisitResult, TraversalError<V::Error>>
where
    V: TryVisitor<H, C> + ?Sized,
{
    check_depth::<V::Error>(depth, max_depth)?;

    let internal = match node {
        Node::Leaf(_) => return visitor.try_visit(node).map_err(TraversalError::Visitor),
        Node::Internal(internal) => internal,
    };

    let order = visitor
        .try_visit_order(internal)
        .map_err(TraversalError::Visitor)?;
    let Some(steps) = order.steps() else {
        trace!(depth, "skipping subtree");
        return Ok(VisitResult::Continue);
    };

    for step in steps {
        let result = match step {
            Step::Minus => try_walk(internal.minus(), visitor, depth + 1, max_depth)?,
            Step::Plus => try_walk(internal.plus(), visitor, depth + 1, max_depth)?,
            Step::Node => visitor.try_visit(node).map_err(TraversalError::Visitor)?,
        };
        if result.is_terminate() {
            return Ok(VisitResult::Terminate);
        }
    }

    Ok(VisitResult::Continue)
}

/// A step waiting on the work-list.
enum Pending<'a, H, C> {
    /// Choose an order for this subtree (or visit it, if it is a leaf).
    Enter(&'a Node<H, C>, usize),
    /// Visit an internal node whose order has already been chosen.
    Visit(&'a Node<H, C>),
}

fn try_walk_iterative<H, C, V>(
    root: &Node<H, C>,
    visitor: &mut V,
    max_depth: Option<usize>,
) -> Result<VisitResult, TraversalError<V::Error>>
where
    V: TryVisitor<H, C> + ?Sized,
{
    let mut stack = vec![Pending::Enter(root, 0)];

    while let Some(pending) = stack.pop() {
        let result = match pending {
            Pending::Visit(node) => visitor.try_visit(node).map_err(TraversalError::Visitor)?,
            Pending::Enter(node, depth) => {
                check_depth::<V::Error>(depth, max_depth)?;

                match node {
                    Node::Leaf(_) => visitor.try_visit(node).map_err(TraversalError::Visitor)?,
                    Node::Internal(internal) => {
                        let order = visitor
                            .try_visit_order(internal)
                            .map_err(TraversalError::Visitor)?;
                        match order.steps() {
                            Some(steps) => {
                                // Pushed in reverse so the first step is popped first.
                                for step in steps.into_iter().rev() {
                                    stack.push(match step {
                                        Step::Minus => Pending::Enter(internal.minus(), depth + 1),
                                        Step::Plus => Pending::Enter(internal.plus(), depth + 1),
                                        Step::Node => Pending::Visit(node),
                                    });
                                }
                            }
                            None => trace!(depth, "skipping subtree"),
                        }
                        VisitResult::Continue
                    }
                }
            }
        };

        if result.is_terminate() {
            return Ok(VisitResult::Terminate);
        }
    }

    Ok(VisitResult::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp::fixtures::{
        cut, label, leaf, minus_chain, seven_node, three_node, Recorder, TestNode,
    };
    use crate::bsp::visitor::{TryFnVisitor, Unfailing, VisitOrder};

    const STRATEGIES: [Strategy; 2] = [Strategy::Recursive, Strategy::Iterative];

    /// Runs `recorder` over `root` with every walk and checks they agree.
    fn record(root: &TestNode, make: impl Fn() -> Recorder) -> (VisitResult, Vec<&'static str>) {
        let mut plain = make();
        let expected = traverse(root, &mut plain);

        for strategy in STRATEGIES {
            let mut recorder = make();
            let options = TraversalOptions::new().with_strategy(strategy);
            let result = try_traverse(root, &mut Unfailing(&mut recorder), &options);
            assert_eq!(result, Ok(expected), "{strategy:?}");
            assert_eq!(recorder.seen, plain.seen, "{strategy:?}");
        }

        (expected, plain.seen)
    }

    #[test]
    fn each_order_on_three_nodes() {
        let cases = [
            (VisitOrder::PlusMinusNode, ["B", "A", "root"]),
            (VisitOrder::PlusNodeMinus, ["B", "root", "A"]),
            (VisitOrder::MinusPlusNode, ["A", "B", "root"]),
            (VisitOrder::MinusNodePlus, ["A", "root", "B"]),
            (VisitOrder::NodePlusMinus, ["root", "B", "A"]),
            (VisitOrder::NodeMinusPlus, ["root", "A", "B"]),
        ];

        for (order, expected) in cases {
            let (result, seen) = record(&three_node(), || Recorder::with_order(order));
            assert_eq!(result, VisitResult::Continue);
            assert_eq!(seen, expected, "{order:?}");
        }
    }

    #[test]
    fn single_leaf_is_visited_once() {
        let (result, seen) = record(&leaf("only"), || Recorder::with_order(VisitOrder::None));
        assert_eq!(result, VisitResult::Continue);
        assert_eq!(seen, ["only"]);
    }

    #[test]
    fn every_node_visited_once_under_continue() {
        let root = seven_node();
        for order in VisitOrder::ALL.into_iter().filter(|o| !o.skips_subtree()) {
            let (_, mut seen) = record(&root, || Recorder::with_order(order));
            assert_eq!(seen.len(), root.node_count());
            seen.sort_unstable();
            assert_eq!(seen, ["a", "b", "c", "d", "m", "p", "root"]);
        }
    }

    #[test]
    fn default_order_is_preorder_minus_first() {
        let (_, seen) = record(&seven_node(), Recorder::default);
        assert_eq!(seen, ["root", "m", "a", "b", "p", "c", "d"]);
    }

    #[test]
    fn none_everywhere_visits_nothing() {
        let (result, seen) = record(&seven_node(), || Recorder::with_order(VisitOrder::None));
        assert_eq!(result, VisitResult::Continue);
        assert!(seen.is_empty());
    }

    #[test]
    fn none_skips_node_and_descendants_only() {
        let (result, seen) = record(&seven_node(), || Recorder {
            skip: Some("m"),
            ..Recorder::default()
        });
        assert_eq!(result, VisitResult::Continue);
        assert_eq!(seen, ["root", "p", "c", "d"]);
    }

    #[test]
    fn terminate_stops_whole_tree() {
        // Stopping inside the minus subtree must keep the plus subtree unvisited.
        let (result, seen) = record(&seven_node(), || Recorder {
            stop_at: Some("a"),
            ..Recorder::default()
        });
        assert_eq!(result, VisitResult::Terminate);
        assert_eq!(seen, ["root", "m", "a"]);
    }

    #[test]
    fn terminate_at_internal_node_skips_its_remaining_steps() {
        let (result, seen) = record(&seven_node(), || Recorder {
            order: VisitOrder::MinusNodePlus,
            stop_at: Some("m"),
            ..Recorder::default()
        });
        assert_eq!(result, VisitResult::Terminate);
        assert_eq!(seen, ["a", "m"]);
    }

    #[test]
    fn terminate_on_last_node_still_reports_terminate() {
        let (result, seen) = record(&three_node(), || Recorder {
            stop_at: Some("B"),
            ..Recorder::default()
        });
        assert_eq!(result, VisitResult::Terminate);
        assert_eq!(seen, ["root", "A", "B"]);
    }

    #[test]
    fn visit_order_is_asked_only_for_reached_internal_nodes() {
        let mut asked = Vec::new();
        let mut seen = Vec::new();

        struct Probe<'a> {
            asked: &'a mut Vec<&'static str>,
            seen: &'a mut Vec<&'static str>,
        }

        impl crate::bsp::visitor::Visitor<crate::bsp::fixtures::Mark, &'static str> for Probe<'_> {
            fn visit(&mut self, node: &TestNode) -> VisitResult {
                self.seen.push(label(node));
                if label(node) == "b" {
                    VisitResult::Terminate
                } else {
                    VisitResult::Continue
                }
            }

            fn visit_order(
                &mut self,
                node: &crate::bsp::node::Internal<crate::bsp::fixtures::Mark, &'static str>,
            ) -> VisitOrder {
                self.asked.push(node.cut().name);
                VisitOrder::MinusPlusNode
            }
        }

        let result = traverse(
            &seven_node(),
            &mut Probe {
                asked: &mut asked,
                seen: &mut seen,
            },
        );
        assert_eq!(result, VisitResult::Terminate);
        assert_eq!(asked, ["root", "m"]);
        assert_eq!(seen, ["a", "b"]);
    }

    #[test]
    fn traversal_can_start_at_a_subtree() {
        let root = seven_node();
        let plus = root.plus().unwrap();
        let (_, seen) = record(plus, Recorder::default);
        assert_eq!(seen, ["p", "c", "d"]);
    }

    #[test]
    fn visitor_error_aborts_immediately() {
        for strategy in STRATEGIES {
            let mut seen = Vec::new();
            let mut visitor = TryFnVisitor::new(|node: &TestNode| {
                seen.push(label(node));
                if label(node) == "b" {
                    Err("corrupt region")
                } else {
                    Ok(VisitResult::Continue)
                }
            });
            let options = TraversalOptions::new().with_strategy(strategy);
            let result = try_traverse(&seven_node(), &mut visitor, &options);

            assert_eq!(result, Err(TraversalError::Visitor("corrupt region")));
            assert_eq!(seen, ["root", "m", "a", "b"]);
        }
    }

    #[test]
    fn visit_order_error_aborts_before_visiting() {
        struct FailingOrder(Vec<&'static str>);

        impl TryVisitor<crate::bsp::fixtures::Mark, &'static str> for FailingOrder {
            type Error = String;

            fn try_visit(&mut self, node: &TestNode) -> Result<VisitResult, String> {
                self.0.push(label(node));
                Ok(VisitResult::Continue)
            }

            fn try_visit_order(
                &mut self,
                node: &crate::bsp::node::Internal<crate::bsp::fixtures::Mark, &'static str>,
            ) -> Result<VisitOrder, String> {
                if node.cut().name == "p" {
                    Err(format!("no order for {}", node.cut().name))
                } else {
                    Ok(VisitOrder::NodeMinusPlus)
                }
            }
        }

        for strategy in STRATEGIES {
            let mut visitor = FailingOrder(Vec::new());
            let options = TraversalOptions::new().with_strategy(strategy);
            let result = try_traverse(&seven_node(), &mut visitor, &options);

            assert_eq!(result, Err(TraversalError::Visitor("no order for p".to_owned())));
            assert_eq!(visitor.0, ["root", "m", "a", "b"]);
        }
    }

    #[test]
    fn depth_limit_rejects_deep_trees() {
        let root = minus_chain(4);
        assert_eq!(root.height(), 5);

        for strategy in STRATEGIES {
            let within = TraversalOptions::new()
                .with_strategy(strategy)
                .with_max_depth(4);
            let mut recorder = Recorder::default();
            let result = try_traverse(&root, &mut Unfailing(&mut recorder), &within);
            assert_eq!(result, Ok(VisitResult::Continue));
            assert_eq!(recorder.seen.len(), 9);

            let too_shallow = within.with_max_depth(3);
            let mut recorder = Recorder::default();
            let result = try_traverse(&root, &mut Unfailing(&mut recorder), &too_shallow);
            assert_eq!(result, Err(TraversalError::DepthExceeded { limit: 3 }));
            assert!(!recorder.seen.contains(&"bottom"));
        }
    }

    #[test]
    fn depth_limit_ignores_skipped_subtrees() {
        let root = cut("root", 0.0, minus_chain(10), leaf("shallow"));
        let options = TraversalOptions::new().with_max_depth(1);
        let mut recorder = Recorder {
            skip: Some("link"),
            ..Recorder::default()
        };
        let result = try_traverse(&root, &mut Unfailing(&mut recorder), &options);
        assert_eq!(result, Ok(VisitResult::Continue));
        assert_eq!(recorder.seen, ["root", "shallow"]);
    }

    #[test]
    fn iterative_walk_handles_very_deep_trees() {
        let depth = 200_000;
        let root = minus_chain(depth);
        let options = TraversalOptions::new().with_strategy(Strategy::Iterative);
        let mut visits = 0usize;
        let mut visitor = TryFnVisitor::new(|_: &TestNode| {
            visits += 1;
            Ok::<_, ()>(VisitResult::Continue)
        });
        let result = try_traverse(&root, &mut visitor, &options);
        assert_eq!(result, Ok(VisitResult::Continue));
        assert_eq!(visits, 2 * depth + 1);
    }

    #[test]
    fn options_builder() {
        let options = TraversalOptions::new();
        assert_eq!(options.strategy(), Strategy::Recursive);
        assert_eq!(options.max_depth(), None);

        let options = options
            .with_strategy(Strategy::Iterative)
            .with_max_depth(12);
        assert_eq!(options.strategy(), Strategy::Iterative);
        assert_eq!(options.max_depth(), Some(12));
    }
}
