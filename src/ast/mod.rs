//! SQL statement AST, node view, and walker.
//!
//! The node model is a closed set of statement and expression kinds. The
//! parser that builds it lives outside this crate; checks only borrow it.

pub mod expression;
mod node;
mod span;
pub mod statement;
pub mod visit;
pub mod visitors;

pub use expression::{Expression, FunctionCall, ParameterRef};
pub use node::Node;
pub use span::{Span, Spanned};
pub use statement::{InsertStatement, SelectStatement, Statement};
pub use visit::{Descend, VisitResult, Visitor, VisitorFn, walk, walk_statement};
