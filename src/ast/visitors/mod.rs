//! Ready-to-use AST visitors.

pub mod collecting;

pub use collecting::CollectingVisitor;
