//! Semantic checks for parsed SQL statements.
//!
//! These checks run after parsing and before type inference. Each one is a
//! pure function of the statement (and, for function calls, a [`Catalog`])
//! and reports at most one [`Diag`](crate::diag::Diag).
//!
//! # Example
//!
//! ```
//! use sql_checks::ast::expression::{Expression, FunctionCall, Literal};
//! use sql_checks::ast::statement::{QuerySpec, ResultTarget, SelectBody, SelectStatement, Statement};
//! use sql_checks::semantic::{InMemoryCatalog, StatementValidator};
//!
//! // SELECT lower(1, 2)
//! let call = FunctionCall::new(
//!     vec!["lower".into()],
//!     vec![
//!         Expression::Literal(Literal::Integer(1), 13..14),
//!         Expression::Literal(Literal::Integer(2), 16..17),
//!     ],
//!     7..18,
//! );
//! let statement = Statement::Select(SelectStatement::new(
//!     SelectBody::Query(QuerySpec {
//!         targets: vec![ResultTarget {
//!             expr: Expression::FunctionCall(call),
//!             alias: None,
//!             span: 7..18,
//!         }],
//!         ..QuerySpec::default()
//!     }),
//!     0..18,
//! ));
//!
//! let catalog = InMemoryCatalog::with_builtins();
//! let err = StatementValidator::new(&catalog).validate(&statement).unwrap_err();
//! assert_eq!(err.code, "42883");
//! assert_eq!(err.message, "function lower(unknown, unknown) does not exist");
//! assert_eq!(err.location, Some(7));
//! ```

pub mod callable;
pub mod catalog;
pub mod diag;
pub mod validator;

pub use callable::{ArgumentSignature, FunctionSignature, builtin_functions};
pub use catalog::{Catalog, CatalogConfig, InMemoryCatalog, QualifiedName};
pub use validator::{
    StatementValidator, ValidationConfig, validate_function_calls, validate_insert_arity,
    validate_parameter_numbering,
};
