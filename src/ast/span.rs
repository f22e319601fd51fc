//! Source spans.

use std::ops::Range;

/// Byte range in the statement text.
///
/// A span's `start` is the location reported in diagnostics.
pub type Span = Range<usize>;

/// A value with an associated source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Creates a new spanned value.
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    /// Byte offset where this value starts.
    pub fn location(&self) -> usize {
        self.span.start
    }

    /// Extracts the inner value, discarding the span.
    pub fn into_inner(self) -> T {
        self.node
    }
}

impl<T> AsRef<T> for Spanned<T> {
    fn as_ref(&self) -> &T {
        &self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanned_location_is_span_start() {
        let column = Spanned::new("a", 20..21);
        assert_eq!(column.location(), 20);
        assert_eq!(*column.as_ref(), "a");
        assert_eq!(column.into_inner(), "a");
    }
}
