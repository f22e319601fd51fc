//! Semantic validation for parsed SQL statements.
//!
//! The crate works on an already parsed statement tree and rejects
//! statements that are syntactically valid but semantically broken:
//!
//! - gaps in positional parameter numbering (`$1, $3` without `$2`);
//! - calls to known functions with an argument count no overload accepts;
//! - single-row `INSERT ... VALUES` with a column/value count mismatch.
//!
//! Diagnostics carry PostgreSQL SQLSTATE codes and render through miette.
//! See [`semantic`] for an end-to-end example.

pub mod ast;
pub mod diag;
pub mod lexer;
pub mod semantic;

// Re-export syntax span primitives.
pub use ast::{Span, Spanned};

pub use diag::{Diag, SourceFile, SqlState, convert_diag_to_report};
pub use lexer::{LexerResult, split_qualified_name, tokenize};
pub use semantic::{Catalog, InMemoryCatalog, StatementValidator, ValidationConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_accessible() {
        let _span: Span = 0..5;
        let spanned = Spanned::new(42, 0..5);
        assert_eq!(spanned.location(), 0);
        assert_eq!(SqlState::SYNTAX_ERROR, "42601");
    }
}
