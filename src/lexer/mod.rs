//! Lexical analysis of dotted SQL names.
//!
//! Catalog entries and fixtures often spell function names as text
//! (`"pg_catalog.lower"`, `app."CamelCase"`). This module splits such text
//! into name parts with the same folding rules the SQL parser applies:
//! unquoted identifiers are lower-cased, quoted identifiers are kept as
//! written.

pub mod token;

use crate::diag::{Diag, SqlState};
use logos::Logos;
use smol_str::SmolStr;
use token::{Token, TokenKind};

/// Result of lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerResult {
    /// The tokens produced.
    pub tokens: Vec<Token>,
    /// Diagnostics for unrecognized input.
    pub diagnostics: Vec<Diag>,
}

/// Tokenizes `source`, continuing past unrecognized characters.
pub fn tokenize(source: &str) -> LexerResult {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    let mut lexer = TokenKind::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token::new(kind, span)),
            Err(()) => diagnostics.push(
                Diag::new(
                    SqlState::SYNTAX_ERROR,
                    format!("syntax error at or near \"{}\"", lexer.slice()),
                )
                .with_location(span.start),
            ),
        }
    }

    LexerResult {
        tokens,
        diagnostics,
    }
}

/// Splits a dotted name into its parts.
///
/// Fails with `42601` on unrecognized characters, empty quoted identifiers,
/// and misplaced or doubled dots.
pub fn split_qualified_name(source: &str) -> Result<Vec<SmolStr>, Diag> {
    let LexerResult {
        tokens,
        diagnostics,
    } = tokenize(source);
    if let Some(first) = diagnostics.into_iter().next() {
        return Err(first);
    }

    let mut parts = Vec::new();
    let mut expect_part = true;
    for token in tokens {
        match (token.kind, expect_part) {
            (TokenKind::Identifier(part), true) => parts.push(part),
            (TokenKind::QuotedIdentifier(part), true) => {
                if part.is_empty() {
                    return Err(Diag::new(
                        SqlState::SYNTAX_ERROR,
                        "zero-length delimited identifier",
                    )
                    .with_location(token.span.start));
                }
                parts.push(part);
            }
            (TokenKind::Dot, false) => {}
            (kind, _) => {
                return Err(Diag::new(
                    SqlState::SYNTAX_ERROR,
                    format!("syntax error at or near \"{kind}\""),
                )
                .with_location(token.span.start));
            }
        }
        expect_part = !expect_part;
    }

    if expect_part && !parts.is_empty() {
        return Err(Diag::new(
            SqlState::SYNTAX_ERROR,
            "syntax error at end of input",
        )
        .with_location(source.len()));
    }
    Ok(parts)
}
