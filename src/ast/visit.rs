//! Immutable AST walker.
//!
//! [`walk`] performs a pre-order, depth-first traversal in source order and
//! asks a [`Visitor`] at every node whether to descend into its children.
//! The traversal keeps its pending nodes on an explicit stack, so deeply
//! nested expressions do not grow the call stack.
//!
//! Two modes fall out of the visitor's answers:
//! - collect-all: always answer [`Descend::Into`] and accumulate state;
//! - fail-fast: answer `ControlFlow::Break` on the first violation, which
//!   ends the walk immediately.

use std::ops::ControlFlow;

use crate::ast::node::Node;
use crate::ast::statement::Statement;

/// Whether the walker should visit the children of the node just observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    Into,
    Skip,
}

/// Shared type alias for visitor answers.
pub type VisitResult<B> = ControlFlow<B, Descend>;

/// Immutable AST visitor.
pub trait Visitor<'a> {
    /// Early-exit payload produced when traversal stops.
    type Break;

    /// Observes one node and decides how the walk proceeds.
    fn visit(&mut self, node: Node<'a>) -> VisitResult<Self::Break>;
}

impl<'a, V: Visitor<'a> + ?Sized> Visitor<'a> for &mut V {
    type Break = V::Break;

    fn visit(&mut self, node: Node<'a>) -> VisitResult<Self::Break> {
        (**self).visit(node)
    }
}

/// Adapts a closure into a [`Visitor`].
pub struct VisitorFn<F>(pub F);

impl<'a, B, F> Visitor<'a> for VisitorFn<F>
where
    F: FnMut(Node<'a>) -> VisitResult<B>,
{
    type Break = B;

    fn visit(&mut self, node: Node<'a>) -> VisitResult<B> {
        (self.0)(node)
    }
}

/// Walks `root` and every node reachable from it.
///
/// Returns `ControlFlow::Break` with the visitor's payload if the visitor
/// stopped the walk, `ControlFlow::Continue(())` otherwise.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, root: Node<'a>) -> ControlFlow<V::Break> {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        match visitor.visit(node) {
            ControlFlow::Break(payload) => return ControlFlow::Break(payload),
            ControlFlow::Continue(Descend::Skip) => {}
            ControlFlow::Continue(Descend::Into) => {
                let first_child = pending.len();
                node.push_children(&mut pending);
                // Children are popped last-first; reverse so they come out in source order.
                pending[first_child..].reverse();
            }
        }
    }
    ControlFlow::Continue(())
}

/// Walks a whole statement.
pub fn walk_statement<'a, V: Visitor<'a> + ?Sized>(
    visitor: &mut V,
    statement: &'a Statement,
) -> ControlFlow<V::Break> {
    walk(visitor, Node::Statement(statement))
}
