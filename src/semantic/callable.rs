//! Function signatures as resolved from the catalog.
//!
//! A signature either declares its argument list, in which case its arity
//! is the list length, or carries a bare argument count (`arg_n`), which is
//! how builtin functions without declared argument metadata are described.

use smol_str::SmolStr;

// ============================================================================
// Signature Types
// ============================================================================

/// One overload of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Unqualified function name.
    pub name: SmolStr,

    /// Declared arguments, when the catalog knows them.
    pub arguments: Option<Vec<ArgumentSignature>>,

    /// Argument count used when `arguments` is `None`.
    pub arg_n: usize,

    /// Return type name.
    pub return_type: SmolStr,
}

impl FunctionSignature {
    /// Creates a signature with a declared argument list.
    pub fn declared(
        name: impl Into<SmolStr>,
        arguments: Vec<ArgumentSignature>,
        return_type: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            arg_n: arguments.len(),
            arguments: Some(arguments),
            return_type: return_type.into(),
        }
    }

    /// Creates a signature known only by its argument count.
    pub fn with_arg_count(
        name: impl Into<SmolStr>,
        arg_n: usize,
        return_type: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            arguments: None,
            arg_n,
            return_type: return_type.into(),
        }
    }

    /// Number of arguments this overload accepts.
    pub fn arity(&self) -> usize {
        match &self.arguments {
            Some(arguments) => arguments.len(),
            None => self.arg_n,
        }
    }
}

/// A declared function argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSignature {
    /// Argument name, if declared (`CREATE FUNCTION f(a int)`).
    pub name: Option<SmolStr>,

    /// Argument type name.
    pub type_name: SmolStr,
}

impl ArgumentSignature {
    /// Creates a named argument.
    pub fn named(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: type_name.into(),
        }
    }

    /// Creates an unnamed argument.
    pub fn unnamed(type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: None,
            type_name: type_name.into(),
        }
    }
}

// ============================================================================
// Built-in Functions
// ============================================================================

/// Frequently used `pg_catalog` functions: (name, argument count, return type).
///
/// Each row is one overload.
const PG_CATALOG_FUNCTIONS: &[(&str, usize, &str)] = &[
    // Aggregates
    ("count", 0, "bigint"),
    ("count", 1, "bigint"),
    ("sum", 1, "numeric"),
    ("avg", 1, "numeric"),
    ("min", 1, "anyelement"),
    ("max", 1, "anyelement"),
    ("array_agg", 1, "anyarray"),
    ("string_agg", 2, "text"),
    ("bool_and", 1, "boolean"),
    ("bool_or", 1, "boolean"),
    // Window
    ("row_number", 0, "bigint"),
    ("rank", 0, "bigint"),
    ("dense_rank", 0, "bigint"),
    ("lag", 1, "anyelement"),
    ("lag", 2, "anyelement"),
    ("lag", 3, "anyelement"),
    ("lead", 1, "anyelement"),
    ("lead", 2, "anyelement"),
    ("lead", 3, "anyelement"),
    // Numeric
    ("abs", 1, "numeric"),
    ("ceil", 1, "numeric"),
    ("floor", 1, "numeric"),
    ("round", 1, "numeric"),
    ("round", 2, "numeric"),
    ("power", 2, "double precision"),
    ("sqrt", 1, "double precision"),
    ("random", 0, "double precision"),
    // String
    ("lower", 1, "text"),
    ("upper", 1, "text"),
    ("length", 1, "integer"),
    ("btrim", 1, "text"),
    ("btrim", 2, "text"),
    ("substr", 2, "text"),
    ("substr", 3, "text"),
    ("substring", 2, "text"),
    ("substring", 3, "text"),
    ("replace", 3, "text"),
    ("md5", 1, "text"),
    ("to_char", 2, "text"),
    // Date/time
    ("now", 0, "timestamp with time zone"),
    ("date_trunc", 2, "timestamp without time zone"),
    ("date_part", 2, "double precision"),
    ("age", 1, "interval"),
    ("age", 2, "interval"),
    // Set-returning and sequences
    ("generate_series", 2, "setof integer"),
    ("generate_series", 3, "setof integer"),
    ("unnest", 1, "setof anyelement"),
    ("nextval", 1, "bigint"),
    ("currval", 1, "bigint"),
];

/// Returns the builtin `pg_catalog` overloads.
pub fn builtin_functions() -> impl Iterator<Item = FunctionSignature> {
    PG_CATALOG_FUNCTIONS
        .iter()
        .map(|&(name, arg_n, return_type)| {
            FunctionSignature::with_arg_count(name, arg_n, return_type)
        })
}
