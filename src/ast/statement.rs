//! Statement AST nodes: SELECT, INSERT, UPDATE, and DELETE.

use crate::ast::expression::{Expression, SortBy};
use crate::ast::expression::FunctionCall;
use crate::ast::{Span, Spanned};
use smol_str::SmolStr;

/// Top-level SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
}

impl Statement {
    /// Returns the source span of the statement.
    pub fn span(&self) -> &Span {
        match self {
            Statement::Select(select) => &select.span,
            Statement::Insert(insert) => &insert.span,
            Statement::Update(update) => &update.span,
            Statement::Delete(delete) => &delete.span,
        }
    }

    /// Returns the INSERT node when this is an INSERT statement.
    pub fn as_insert(&self) -> Option<&InsertStatement> {
        match self {
            Statement::Insert(insert) => Some(insert),
            _ => None,
        }
    }
}

// ============================================================================
// Shared clauses
// ============================================================================

/// Table reference by name (`schema.table AS alias`).
#[derive(Debug, Clone, PartialEq)]
pub struct RangeVar {
    pub schema: Option<SmolStr>,
    pub name: SmolStr,
    pub alias: Option<SmolStr>,
    pub span: Span,
}

/// One entry of a `WITH` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpr {
    pub name: SmolStr,
    pub columns: Vec<SmolStr>,
    pub query: Box<SelectStatement>,
    pub span: Span,
}

/// An output expression in a SELECT list or RETURNING clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTarget {
    pub expr: Expression,
    pub alias: Option<SmolStr>,
    pub span: Span,
}

/// `column = value` inside UPDATE SET or ON CONFLICT DO UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: Spanned<SmolStr>,
    pub value: Expression,
}

/// Item of a FROM or USING list.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// Named table or view
    Table(RangeVar),

    /// Derived table `(SELECT ...) AS alias`
    Subquery {
        query: Box<SelectStatement>,
        alias: Option<SmolStr>,
        lateral: bool,
        span: Span,
    },

    /// Set-returning function in FROM (`generate_series(1, 10) AS g`)
    Function {
        call: FunctionCall,
        alias: Option<SmolStr>,
        span: Span,
    },

    /// Joined pair of table references
    Join {
        kind: JoinKind,
        left: Box<TableRef>,
        right: Box<TableRef>,
        on: Option<Expression>,
        using: Vec<SmolStr>,
        span: Span,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

// ============================================================================
// SELECT
// ============================================================================

/// SELECT statement, VALUES list, or set operation over selects.
///
/// A literal `VALUES (...), (...)` is a select whose body is
/// [`SelectBody::Values`], which is also how the source of
/// `INSERT ... VALUES` is represented.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub with: Vec<CommonTableExpr>,
    pub body: SelectBody,
    pub order_by: Vec<SortBy>,
    pub limit: Option<Expression>,
    pub offset: Option<Expression>,
    pub span: Span,
}

impl SelectStatement {
    /// Creates a select with the given body and no trailing clauses.
    pub fn new(body: SelectBody, span: Span) -> Self {
        Self {
            with: Vec::new(),
            body,
            order_by: Vec::new(),
            limit: None,
            offset: None,
            span,
        }
    }

    /// Returns the VALUES rows when this select is a literal VALUES list.
    pub fn values_lists(&self) -> Option<&[Vec<Expression>]> {
        match &self.body {
            SelectBody::Values(rows) => Some(rows),
            _ => None,
        }
    }
}

/// Body of a select.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectBody {
    /// `VALUES (a, b), (c, d)`; one inner vector per row
    Values(Vec<Vec<Expression>>),

    /// `SELECT targets FROM ... WHERE ... GROUP BY ... HAVING ...`
    Query(QuerySpec),

    /// `left UNION|INTERSECT|EXCEPT [ALL] right`
    SetOperation {
        op: SetOperator,
        all: bool,
        left: Box<SelectStatement>,
        right: Box<SelectStatement>,
    },
}

/// The core of a plain SELECT.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuerySpec {
    pub distinct: bool,
    pub targets: Vec<ResultTarget>,
    pub from: Vec<TableRef>,
    pub where_clause: Option<Expression>,
    pub group_by: Vec<Expression>,
    pub having: Option<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

// ============================================================================
// INSERT / UPDATE / DELETE
// ============================================================================

/// INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub with: Vec<CommonTableExpr>,
    pub relation: RangeVar,
    /// Explicit target column list; empty when omitted.
    pub columns: Vec<Spanned<SmolStr>>,
    pub source: InsertSource,
    pub on_conflict: Option<OnConflict>,
    pub returning: Vec<ResultTarget>,
    pub span: Span,
}

/// Where the inserted rows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// `VALUES ...` or `SELECT ...`
    Select(Box<SelectStatement>),
    /// `DEFAULT VALUES`
    DefaultValues,
}

/// `ON CONFLICT [(target)] DO ...`
#[derive(Debug, Clone, PartialEq)]
pub struct OnConflict {
    pub target: Vec<SmolStr>,
    pub action: ConflictAction,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConflictAction {
    Nothing,
    Update {
        assignments: Vec<Assignment>,
        where_clause: Option<Expression>,
    },
}

/// UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub with: Vec<CommonTableExpr>,
    pub relation: RangeVar,
    pub assignments: Vec<Assignment>,
    pub from: Vec<TableRef>,
    pub where_clause: Option<Expression>,
    pub returning: Vec<ResultTarget>,
    pub span: Span,
}

/// DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub with: Vec<CommonTableExpr>,
    pub relation: RangeVar,
    pub using: Vec<TableRef>,
    pub where_clause: Option<Expression>,
    pub returning: Vec<ResultTarget>,
    pub span: Span,
}
