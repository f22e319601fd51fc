//! Function call validation.
//!
//! Every call in the statement is resolved through the [`Catalog`] and
//! checked for an overload with a matching argument count. Names the catalog
//! does not know are skipped, so queries may call user functions the catalog
//! was never told about. The walk stops at the first failing call.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::ast::expression::FunctionCall;
use crate::ast::statement::Statement;
use crate::ast::visit::{Descend, VisitResult, Visitor, walk_statement};
use crate::ast::Node;
use crate::diag::Diag;
use crate::semantic::catalog::{Catalog, QualifiedName};
use crate::semantic::diag::undefined_function;

/// Checks every function call in `statement` against `catalog`.
///
/// Returns the diagnostic of the first call, in source order, that fails.
/// Errors raised while parsing a call's name or querying the catalog are
/// returned unchanged.
pub fn validate_function_calls<C: Catalog + ?Sized>(
    catalog: &C,
    statement: &Statement,
) -> Result<(), Diag> {
    let mut visitor = FunctionCallVisitor { catalog };
    match walk_statement(&mut visitor, statement) {
        ControlFlow::Break(diag) => Err(diag),
        ControlFlow::Continue(()) => Ok(()),
    }
}

/// Fail-fast visitor holding the catalog.
struct FunctionCallVisitor<'c, C: ?Sized> {
    catalog: &'c C,
}

impl<'c, C: Catalog + ?Sized> FunctionCallVisitor<'c, C> {
    fn check_call(&self, call: &FunctionCall) -> Result<(), Diag> {
        let name = QualifiedName::from_parts(&call.name)?;
        let overloads = self.catalog.lookup_functions(&name)?;

        // Unknown to the catalog: accept.
        if overloads.is_empty() {
            trace!(function = %name, "function not in catalog, skipping arity check");
            return Ok(());
        }

        let arg_count = call.arg_count();
        if overloads.iter().any(|sig| sig.arity() == arg_count) {
            return Ok(());
        }

        debug!(
            function = %name,
            arg_count,
            overloads = overloads.len(),
            "no overload matches argument count"
        );
        Err(undefined_function(&name.name, arg_count, call.span.start))
    }
}

impl<'a, 'c, C: Catalog + ?Sized> Visitor<'a> for FunctionCallVisitor<'c, C> {
    type Break = Diag;

    fn visit(&mut self, node: Node<'a>) -> VisitResult<Diag> {
        if let Node::FunctionCall(call) = node {
            if let Err(diag) = self.check_call(call) {
                return ControlFlow::Break(diag);
            }
        }
        ControlFlow::Continue(Descend::Into)
    }
}
