//! Generic node collection visitor.

use std::ops::ControlFlow;

use crate::ast::Node;
use crate::ast::statement::Statement;
use crate::ast::visit::{Descend, VisitResult, Visitor, walk_statement};

/// Visitor that collects values produced by a node-matching closure.
///
/// This is the collect-all traversal mode: every node is visited and the
/// walk never stops early.
#[derive(Debug)]
pub struct CollectingVisitor<T, F> {
    matcher: F,
    items: Vec<T>,
}

impl<T, F> CollectingVisitor<T, F> {
    /// Creates a collecting visitor.
    pub fn new<'a>(matcher: F) -> Self
    where
        F: FnMut(Node<'a>) -> Option<T>,
    {
        Self {
            matcher,
            items: Vec::new(),
        }
    }

    /// Returns collected values.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns collected values, consuming the visitor.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Walks `statement` and returns everything the matcher produced, in
    /// traversal order.
    pub fn collect<'a>(mut self, statement: &'a Statement) -> Vec<T>
    where
        F: FnMut(Node<'a>) -> Option<T>,
    {
        let ControlFlow::Continue(()) = walk_statement(&mut self, statement);
        self.items
    }
}

impl<'a, T, F> Visitor<'a> for CollectingVisitor<T, F>
where
    F: FnMut(Node<'a>) -> Option<T>,
{
    type Break = std::convert::Infallible;

    fn visit(&mut self, node: Node<'a>) -> VisitResult<Self::Break> {
        if let Some(item) = (self.matcher)(node) {
            self.items.push(item);
        }
        ControlFlow::Continue(Descend::Into)
    }
}
