//! Diagnostic model shared by every check.
//!
//! A [`Diag`] carries a five-character SQLSTATE code, a message, an optional
//! hint, and an optional byte offset into the statement text. Codes are
//! part of the public contract; callers may match on them.

use miette::{Diagnostic, LabeledSpan, Report, Severity};
use std::fmt;

/// SQLSTATE codes emitted by this crate, named after the PostgreSQL
/// condition names.
pub struct SqlState;

impl SqlState {
    /// `42P18`: a parameter's data type cannot be determined.
    pub const INDETERMINATE_DATATYPE: &'static str = "42P18";
    /// `42883`: no function matches the name and arguments.
    pub const UNDEFINED_FUNCTION: &'static str = "42883";
    /// `42601`: syntax error, including column/value count mismatches.
    pub const SYNTAX_ERROR: &'static str = "42601";
    /// `3F000`: the named schema does not exist.
    pub const INVALID_SCHEMA_NAME: &'static str = "3F000";
    /// `0A000`: feature not supported.
    pub const FEATURE_NOT_SUPPORTED: &'static str = "0A000";
}

/// A single semantic error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    /// Five-character SQLSTATE code.
    pub code: String,
    /// Primary, human-readable message.
    pub message: String,
    /// Optional suggestion on how to fix the statement.
    pub hint: Option<String>,
    /// Byte offset of the offending construct in the statement text.
    pub location: Option<usize>,
}

impl Diag {
    /// Creates a diagnostic with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            hint: None,
            location: None,
        }
    }

    /// Sets the hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the byte offset.
    pub fn with_location(mut self, location: usize) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Diag {}

impl Diagnostic for Diag {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.hint
            .as_ref()
            .map(|hint| Box::new(hint) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.location.map(|offset| {
            Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
                None,
                (offset, 0),
            ))) as Box<dyn Iterator<Item = LabeledSpan>>
        })
    }
}

/// Statement text used when rendering diagnostics.
#[derive(Debug, Clone)]
pub struct SourceFile {
    content: String,
    name: Option<String>,
}

impl SourceFile {
    /// Creates a new source file from the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: None,
        }
    }

    /// Creates a new source file with a name, such as the query file path.
    pub fn with_name(content: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: Some(name.into()),
        }
    }

    /// Returns the source content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the source file name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Clamps a byte offset to the end of this source.
    pub fn clamp_location(&self, location: usize) -> usize {
        location.min(self.content.len())
    }
}

/// Converts a diagnostic to a miette [`Report`] with source context.
///
/// Locations past the end of the source are clamped so rendering never
/// panics on a stale offset.
pub fn convert_diag_to_report(diag: &Diag, source: &SourceFile) -> Report {
    let mut diag = diag.clone();
    diag.location = diag.location.map(|offset| source.clamp_location(offset));

    let report = Report::new(diag);
    match source.name() {
        Some(name) => {
            report.with_source_code(miette::NamedSource::new(name, source.content().to_string()))
        }
        None => report.with_source_code(source.content().to_string()),
    }
}
