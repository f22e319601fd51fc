//! Tokens of dotted SQL names.

use crate::ast::Span;
use logos::Logos;
use smol_str::SmolStr;
use std::fmt;

/// The kind of a lexical token in a dotted name such as `pg_catalog."Lower"`.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Unquoted identifier, folded to lower case. Non-ASCII letters are
    /// accepted and kept as written.
    #[regex(r"[A-Za-z_\u{80}-\u{10FFFF}][A-Za-z0-9_$\u{80}-\u{10FFFF}]*", |lex| SmolStr::new(lex.slice().to_ascii_lowercase()))]
    Identifier(SmolStr),

    /// Double-quoted identifier; case is kept and `""` unescapes to `"`.
    #[regex(r#""([^"]|"")*""#, |lex| {
        let slice = lex.slice();
        SmolStr::new(slice[1..slice.len() - 1].replace("\"\"", "\""))
    })]
    QuotedIdentifier(SmolStr),

    #[token(".")]
    Dot,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "{name}"),
            TokenKind::QuotedIdentifier(name) => write!(f, "\"{}\"", name.replace('"', "\"\"")),
            TokenKind::Dot => write!(f, "."),
        }
    }
}

/// A token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
