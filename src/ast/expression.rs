//! Expression AST nodes for SQL.
//!
//! This module defines the value-expression forms a statement may contain:
//! - Literals and column references
//! - Positional parameters (`$1`, `$2`, ...)
//! - Function calls, including aggregate and window decorations
//! - Operators, CASE, CAST, and sub-query expressions

use crate::ast::Span;
use crate::ast::statement::SelectStatement;
use smol_str::SmolStr;

// ============================================================================
// Expression - Top-level expression type
// ============================================================================

/// Represents any value expression in a SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal constant (NULL, boolean, numeric, string)
    Literal(Literal, Span),

    /// Column reference, possibly qualified (`t.a`, `s.t.a`)
    Column(ColumnRef),

    /// Bare `*` or `t.*` in a target list
    Star(Option<SmolStr>, Span),

    /// Positional parameter reference (`$n`)
    Parameter(ParameterRef),

    /// Function call (`lower(a)`, `count(*)`, `pg_catalog.now()`)
    FunctionCall(FunctionCall),

    /// Prefix operator (`-a`, `NOT a`)
    Unary(UnaryOperator, Box<Expression>, Span),

    /// Infix operator (`a + b`, `a = b`, `a AND b`)
    Binary(BinaryOperator, Box<Expression>, Box<Expression>, Span),

    /// `expr::type` or `CAST(expr AS type)`
    Cast(Box<Expression>, TypeName, Span),

    /// CASE expression (simple or searched)
    Case(CaseExpression),

    /// `expr [NOT] IN (a, b, c)`
    InList {
        expr: Box<Expression>,
        list: Vec<Expression>,
        negated: bool,
        span: Span,
    },

    /// `expr [NOT] IN (SELECT ...)`
    InSubquery {
        expr: Box<Expression>,
        query: Box<SelectStatement>,
        negated: bool,
        span: Span,
    },

    /// `expr IS [NOT] NULL`
    IsNull {
        expr: Box<Expression>,
        negated: bool,
        span: Span,
    },

    /// Scalar sub-query `(SELECT ...)`
    Subquery(Box<SelectStatement>, Span),

    /// `EXISTS (SELECT ...)`
    Exists(Box<SelectStatement>, Span),

    /// `ARRAY[a, b, c]`
    Array(Vec<Expression>, Span),

    /// `ROW(a, b)` or `(a, b)`
    Row(Vec<Expression>, Span),

    /// `DEFAULT` placeholder inside a VALUES row
    Default(Span),
}

impl Expression {
    /// Returns the source span of this expression.
    pub fn span(&self) -> &Span {
        match self {
            Expression::Literal(_, span)
            | Expression::Star(_, span)
            | Expression::Unary(_, _, span)
            | Expression::Binary(_, _, _, span)
            | Expression::Cast(_, _, span)
            | Expression::InList { span, .. }
            | Expression::InSubquery { span, .. }
            | Expression::IsNull { span, .. }
            | Expression::Subquery(_, span)
            | Expression::Exists(_, span)
            | Expression::Array(_, span)
            | Expression::Row(_, span)
            | Expression::Default(span) => span,
            Expression::Column(column) => &column.span,
            Expression::Parameter(param) => &param.span,
            Expression::FunctionCall(call) => &call.span,
            Expression::Case(case) => &case.span,
        }
    }
}

// ============================================================================
// Leaves
// ============================================================================

/// Literal constants.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    /// Numeric literal kept in its source spelling (`1.50`, `1e10`).
    Numeric(SmolStr),
    String(SmolStr),
}

/// Reference to a column by (possibly qualified) name.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub parts: Vec<SmolStr>,
    pub span: Span,
}

/// Positional parameter reference such as `$3`.
///
/// The same number may appear any number of times in one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRef {
    /// The 1-based position written in source.
    pub number: u32,
    pub span: Span,
}

/// Type name used by CAST expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    /// Name parts (`pg_catalog.int4` -> `["pg_catalog", "int4"]`).
    pub names: Vec<SmolStr>,
    /// Number of trailing `[]` array dimensions.
    pub array_bounds: usize,
    pub span: Span,
}

// ============================================================================
// Function calls
// ============================================================================

/// Function invocation.
///
/// `name` holds the dotted name parts exactly as written; it is turned into a
/// qualified catalog name only when a check needs to look it up.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: Vec<SmolStr>,
    pub args: Vec<Expression>,
    /// `count(*)`; a star call has no entries in `args`.
    pub agg_star: bool,
    pub agg_distinct: bool,
    /// `string_agg(a, ',' ORDER BY b)`
    pub agg_order: Vec<SortBy>,
    /// `FILTER (WHERE ...)`
    pub agg_filter: Option<Box<Expression>>,
    /// `OVER (...)`
    pub over: Option<WindowSpec>,
    pub span: Span,
}

impl FunctionCall {
    /// Creates a plain call with positional arguments.
    pub fn new(name: Vec<SmolStr>, args: Vec<Expression>, span: Span) -> Self {
        Self {
            name,
            args,
            agg_star: false,
            agg_distinct: false,
            agg_order: Vec::new(),
            agg_filter: None,
            over: None,
            span,
        }
    }

    /// Number of arguments supplied at the call site.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// The unqualified function name (last name part).
    pub fn base_name(&self) -> Option<&SmolStr> {
        self.name.last()
    }
}

/// Window definition attached to a call through `OVER`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub partition_by: Vec<Expression>,
    pub order_by: Vec<SortBy>,
    pub span: Span,
}

/// Sort key (`ORDER BY expr [ASC|DESC] [NULLS FIRST|LAST]`).
#[derive(Debug, Clone, PartialEq)]
pub struct SortBy {
    pub expr: Expression,
    pub direction: SortDirection,
    pub nulls: Option<NullsOrder>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Default,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

// ============================================================================
// Compound expressions
// ============================================================================

/// CASE expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpression {
    /// Operand of a simple CASE (`CASE x WHEN ...`); `None` for searched CASE.
    pub operand: Option<Box<Expression>>,
    pub when_clauses: Vec<WhenClause>,
    pub else_result: Option<Box<Expression>>,
    pub span: Span,
}

/// `WHEN condition THEN result`
#[derive(Debug, Clone, PartialEq)]
pub struct WhenClause {
    pub condition: Expression,
    pub result: Expression,
    pub span: Span,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Concat,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Like,
    ILike,
    And,
    Or,
}
