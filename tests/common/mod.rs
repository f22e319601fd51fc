//! Common test utilities
//!
//! Builders for the statement shapes the checks care about, plus a catalog
//! fixture. Spans are synthetic: each builder takes the byte offset where
//! the node would start in the statement text.
//!
//! # Expression Builders
//! - [`param`], [`int`], [`text`], [`column`], [`call`], [`qualified_call`]
//!
//! # Statement Builders
//! - [`select`], [`select_where`], [`insert_values`], [`insert_rows`]
//!
//! # Catalog Fixtures
//! - [`test_catalog`] - builtins plus a few user functions

#![allow(dead_code)]

use sql_checks::ast::expression::{BinaryOperator, ColumnRef, Expression, FunctionCall, Literal, ParameterRef};
use sql_checks::ast::statement::{
    InsertSource, InsertStatement, QuerySpec, RangeVar, ResultTarget, SelectBody,
    SelectStatement, Statement,
};
use sql_checks::ast::Spanned;
use sql_checks::diag::Diag;
use sql_checks::semantic::{ArgumentSignature, FunctionSignature, InMemoryCatalog};
use smol_str::SmolStr;

// ============================================================================
// Expression Builders
// ============================================================================

/// `$number` at byte offset `at`.
pub fn param(number: u32, at: usize) -> Expression {
    Expression::Parameter(ParameterRef {
        number,
        span: at..at + 1 + number.to_string().len(),
    })
}

/// Integer literal at `at`.
pub fn int(value: i64, at: usize) -> Expression {
    Expression::Literal(Literal::Integer(value), at..at + value.to_string().len())
}

/// String literal at `at`.
pub fn text(value: &str, at: usize) -> Expression {
    Expression::Literal(Literal::String(value.into()), at..at + value.len() + 2)
}

/// Unqualified column reference at `at`.
pub fn column(name: &str, at: usize) -> Expression {
    Expression::Column(ColumnRef {
        parts: vec![name.into()],
        span: at..at + name.len(),
    })
}

/// `name(args...)` at `at`.
pub fn call(name: &str, args: Vec<Expression>, at: usize) -> Expression {
    qualified_call(&[name], args, at)
}

/// Call with a dotted name (`schema.name(...)`) at `at`.
pub fn qualified_call(parts: &[&str], args: Vec<Expression>, at: usize) -> Expression {
    let end = args.last().map_or(at + 2, |arg| arg.span().end + 1);
    Expression::FunctionCall(FunctionCall::new(
        parts.iter().map(|part| SmolStr::new(part)).collect(),
        args,
        at..end,
    ))
}

/// `left = right`.
pub fn eq(left: Expression, right: Expression) -> Expression {
    binary(BinaryOperator::Equal, left, right)
}

/// `left AND right`.
pub fn and(left: Expression, right: Expression) -> Expression {
    binary(BinaryOperator::And, left, right)
}

fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Expression {
    let span = left.span().start..right.span().end;
    Expression::Binary(op, Box::new(left), Box::new(right), span)
}

// ============================================================================
// Statement Builders
// ============================================================================

/// Wraps expressions as unaliased result targets.
pub fn targets(exprs: Vec<Expression>) -> Vec<ResultTarget> {
    exprs
        .into_iter()
        .map(|expr| ResultTarget {
            span: expr.span().clone(),
            expr,
            alias: None,
        })
        .collect()
}

/// `SELECT exprs...`
pub fn select(exprs: Vec<Expression>) -> Statement {
    Statement::Select(select_statement(exprs, None))
}

/// `SELECT exprs... FROM t WHERE where_clause`
pub fn select_where(exprs: Vec<Expression>, where_clause: Expression) -> Statement {
    Statement::Select(select_statement(exprs, Some(where_clause)))
}

/// Plain select node, for use as a subquery.
pub fn select_statement(exprs: Vec<Expression>, where_clause: Option<Expression>) -> SelectStatement {
    let from = if where_clause.is_some() {
        vec![sql_checks::ast::statement::TableRef::Table(table("t", 0))]
    } else {
        Vec::new()
    };
    SelectStatement::new(
        SelectBody::Query(QuerySpec {
            targets: targets(exprs),
            from,
            where_clause,
            ..QuerySpec::default()
        }),
        0..200,
    )
}

/// Table reference `name` at `at`.
pub fn table(name: &str, at: usize) -> RangeVar {
    RangeVar {
        schema: None,
        name: name.into(),
        alias: None,
        span: at..at + name.len(),
    }
}

/// Target column list; each column is placed at the given offset.
pub fn columns(names: &[(&str, usize)]) -> Vec<Spanned<SmolStr>> {
    names
        .iter()
        .map(|&(name, at)| Spanned::new(SmolStr::new(name), at..at + name.len()))
        .collect()
}

/// `INSERT INTO t (columns) VALUES (row)`
pub fn insert_values(columns: Vec<Spanned<SmolStr>>, row: Vec<Expression>) -> Statement {
    insert_rows(columns, vec![row])
}

/// `INSERT INTO t (columns) VALUES (row), (row), ...`
pub fn insert_rows(columns: Vec<Spanned<SmolStr>>, rows: Vec<Vec<Expression>>) -> Statement {
    insert_from(
        columns,
        InsertSource::Select(Box::new(SelectStatement::new(
            SelectBody::Values(rows),
            0..200,
        ))),
    )
}

/// INSERT with an arbitrary source.
pub fn insert_from(columns: Vec<Spanned<SmolStr>>, source: InsertSource) -> Statement {
    Statement::Insert(InsertStatement {
        with: Vec::new(),
        relation: table("t", 12),
        columns,
        source,
        on_conflict: None,
        returning: Vec::new(),
        span: 0..200,
    })
}

// ============================================================================
// Catalog Fixtures
// ============================================================================

/// Builtins plus:
/// - `public.add(integer, integer)`
/// - `app.greet(text)` and `app.greet(text, text)`
/// - `app.now_utc()` known only by argument count
pub fn test_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::with_builtins();
    catalog
        .add_function(
            "add",
            FunctionSignature::declared(
                "add",
                vec![
                    ArgumentSignature::named("a", "integer"),
                    ArgumentSignature::named("b", "integer"),
                ],
                "integer",
            ),
        )
        .expect("register add");
    catalog
        .add_function(
            "app.greet",
            FunctionSignature::declared("greet", vec![ArgumentSignature::unnamed("text")], "text"),
        )
        .expect("register greet/1");
    catalog
        .add_function(
            "app.greet",
            FunctionSignature::declared(
                "greet",
                vec![
                    ArgumentSignature::unnamed("text"),
                    ArgumentSignature::unnamed("text"),
                ],
                "text",
            ),
        )
        .expect("register greet/2");
    catalog
        .add_function("app.now_utc", FunctionSignature::with_arg_count("now_utc", 0, "timestamp"))
        .expect("register now_utc");
    catalog
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Asserts a diagnostic's code and message.
pub fn assert_diag(result: Result<(), Diag>, code: &str, message: &str) -> Diag {
    let diag = match result {
        Ok(()) => panic!("expected {code} \"{message}\", got Ok"),
        Err(diag) => diag,
    };
    assert_eq!(diag.code, code, "unexpected code for {diag:?}");
    assert_eq!(diag.message, message, "unexpected message for {diag:?}");
    diag
}
