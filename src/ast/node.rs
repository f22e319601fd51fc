//! Borrowed, uniform view over walkable AST nodes.

use crate::ast::Span;
use crate::ast::expression::{
    CaseExpression, Expression, FunctionCall, ParameterRef, SortBy, WhenClause,
};
use crate::ast::statement::{
    Assignment, CommonTableExpr, ConflictAction, DeleteStatement, InsertSource, InsertStatement,
    ResultTarget, SelectBody, SelectStatement, Statement, TableRef, UpdateStatement,
};

/// Borrowed AST node view used by the walker and visitors.
///
/// Function calls and parameter references reached through an
/// [`Expression`] are reported as [`Node::FunctionCall`] and
/// [`Node::Parameter`] rather than as [`Node::Expression`], so every call
/// and every parameter is observed exactly once.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Statement(&'a Statement),
    Select(&'a SelectStatement),
    Insert(&'a InsertStatement),
    Update(&'a UpdateStatement),
    Delete(&'a DeleteStatement),
    CommonTableExpr(&'a CommonTableExpr),
    TableRef(&'a TableRef),
    ResultTarget(&'a ResultTarget),
    SortBy(&'a SortBy),
    Expression(&'a Expression),
    FunctionCall(&'a FunctionCall),
    Parameter(&'a ParameterRef),
}

impl<'a> Node<'a> {
    /// Wraps an expression, surfacing calls and parameters as their own kinds.
    pub fn expression(expr: &'a Expression) -> Self {
        match expr {
            Expression::FunctionCall(call) => Node::FunctionCall(call),
            Expression::Parameter(param) => Node::Parameter(param),
            other => Node::Expression(other),
        }
    }

    /// Returns the source span of the underlying node.
    pub fn span(&self) -> &'a Span {
        match *self {
            Node::Statement(statement) => statement.span(),
            Node::Select(select) => &select.span,
            Node::Insert(insert) => &insert.span,
            Node::Update(update) => &update.span,
            Node::Delete(delete) => &delete.span,
            Node::CommonTableExpr(cte) => &cte.span,
            Node::TableRef(table) => match table {
                TableRef::Table(range) => &range.span,
                TableRef::Subquery { span, .. }
                | TableRef::Function { span, .. }
                | TableRef::Join { span, .. } => span,
            },
            Node::ResultTarget(target) => &target.span,
            Node::SortBy(sort) => &sort.span,
            Node::Expression(expr) => expr.span(),
            Node::FunctionCall(call) => &call.span,
            Node::Parameter(param) => &param.span,
        }
    }

    /// Appends the direct children of this node to `out`, in source order.
    pub(crate) fn push_children(self, out: &mut Vec<Node<'a>>) {
        match self {
            Node::Statement(statement) => out.push(match statement {
                Statement::Select(select) => Node::Select(select),
                Statement::Insert(insert) => Node::Insert(insert),
                Statement::Update(update) => Node::Update(update),
                Statement::Delete(delete) => Node::Delete(delete),
            }),
            Node::Select(select) => push_select(select, out),
            Node::Insert(insert) => {
                out.extend(insert.with.iter().map(Node::CommonTableExpr));
                if let InsertSource::Select(source) = &insert.source {
                    out.push(Node::Select(source));
                }
                if let Some(ConflictAction::Update {
                    assignments,
                    where_clause,
                }) = insert.on_conflict.as_ref().map(|conflict| &conflict.action)
                {
                    push_assignments(assignments, out);
                    out.extend(where_clause.iter().map(Node::expression));
                }
                out.extend(insert.returning.iter().map(Node::ResultTarget));
            }
            Node::Update(update) => {
                out.extend(update.with.iter().map(Node::CommonTableExpr));
                push_assignments(&update.assignments, out);
                out.extend(update.from.iter().map(Node::TableRef));
                out.extend(update.where_clause.iter().map(Node::expression));
                out.extend(update.returning.iter().map(Node::ResultTarget));
            }
            Node::Delete(delete) => {
                out.extend(delete.with.iter().map(Node::CommonTableExpr));
                out.extend(delete.using.iter().map(Node::TableRef));
                out.extend(delete.where_clause.iter().map(Node::expression));
                out.extend(delete.returning.iter().map(Node::ResultTarget));
            }
            Node::CommonTableExpr(cte) => out.push(Node::Select(&cte.query)),
            Node::TableRef(table) => match table {
                TableRef::Table(_) => {}
                TableRef::Subquery { query, .. } => out.push(Node::Select(query)),
                TableRef::Function { call, .. } => out.push(Node::FunctionCall(call)),
                TableRef::Join {
                    left, right, on, ..
                } => {
                    out.push(Node::TableRef(left));
                    out.push(Node::TableRef(right));
                    out.extend(on.iter().map(Node::expression));
                }
            },
            Node::ResultTarget(target) => out.push(Node::expression(&target.expr)),
            Node::SortBy(sort) => out.push(Node::expression(&sort.expr)),
            Node::Expression(expr) => push_expression_children(expr, out),
            Node::FunctionCall(call) => {
                out.extend(call.args.iter().map(Node::expression));
                out.extend(call.agg_order.iter().map(Node::SortBy));
                out.extend(call.agg_filter.iter().map(|filter| Node::expression(filter)));
                if let Some(window) = &call.over {
                    out.extend(window.partition_by.iter().map(Node::expression));
                    out.extend(window.order_by.iter().map(Node::SortBy));
                }
            }
            Node::Parameter(_) => {}
        }
    }
}

fn push_select<'a>(select: &'a SelectStatement, out: &mut Vec<Node<'a>>) {
    out.extend(select.with.iter().map(Node::CommonTableExpr));
    match &select.body {
        SelectBody::Values(rows) => {
            for row in rows {
                out.extend(row.iter().map(Node::expression));
            }
        }
        SelectBody::Query(spec) => {
            out.extend(spec.targets.iter().map(Node::ResultTarget));
            out.extend(spec.from.iter().map(Node::TableRef));
            out.extend(spec.where_clause.iter().map(Node::expression));
            out.extend(spec.group_by.iter().map(Node::expression));
            out.extend(spec.having.iter().map(Node::expression));
        }
        SelectBody::SetOperation { left, right, .. } => {
            out.push(Node::Select(left));
            out.push(Node::Select(right));
        }
    }
    out.extend(select.order_by.iter().map(Node::SortBy));
    out.extend(select.limit.iter().map(Node::expression));
    out.extend(select.offset.iter().map(Node::expression));
}

fn push_assignments<'a>(assignments: &'a [Assignment], out: &mut Vec<Node<'a>>) {
    out.extend(assignments.iter().map(|assignment| Node::expression(&assignment.value)));
}

fn push_expression_children<'a>(expr: &'a Expression, out: &mut Vec<Node<'a>>) {
    match expr {
        Expression::Literal(..)
        | Expression::Column(_)
        | Expression::Star(..)
        | Expression::Default(_) => {}
        // Reported as their own node kinds by `Node::expression`.
        Expression::Parameter(_) | Expression::FunctionCall(_) => {}
        Expression::Unary(_, operand, _) => out.push(Node::expression(operand)),
        Expression::Binary(_, left, right, _) => {
            out.push(Node::expression(left));
            out.push(Node::expression(right));
        }
        Expression::Cast(inner, _, _) => out.push(Node::expression(inner)),
        Expression::Case(case) => push_case(case, out),
        Expression::InList { expr, list, .. } => {
            out.push(Node::expression(expr));
            out.extend(list.iter().map(Node::expression));
        }
        Expression::InSubquery { expr, query, .. } => {
            out.push(Node::expression(expr));
            out.push(Node::Select(query));
        }
        Expression::IsNull { expr, .. } => out.push(Node::expression(expr)),
        Expression::Subquery(query, _) | Expression::Exists(query, _) => {
            out.push(Node::Select(query))
        }
        Expression::Array(items, _) | Expression::Row(items, _) => {
            out.extend(items.iter().map(Node::expression))
        }
    }
}

fn push_case<'a>(case: &'a CaseExpression, out: &mut Vec<Node<'a>>) {
    out.extend(case.operand.iter().map(|operand| Node::expression(operand)));
    for WhenClause {
        condition, result, ..
    } in &case.when_clauses
    {
        out.push(Node::expression(condition));
        out.push(Node::expression(result));
    }
    out.extend(case.else_result.iter().map(|result| Node::expression(result)));
}
