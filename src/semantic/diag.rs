//! Constructors for the diagnostics reported by the semantic checks.
//!
//! Messages and hints match PostgreSQL's wording so users see the same text
//! they would get from the server.

use crate::diag::{Diag, SqlState};

/// Hint attached to [`undefined_function`].
pub const UNDEFINED_FUNCTION_HINT: &str =
    "No function matches the given name and argument types. You might need to add explicit type casts.";

/// Parameter `$number` is never used, so its type cannot be inferred.
pub fn indeterminate_parameter(number: usize) -> Diag {
    Diag::new(
        SqlState::INDETERMINATE_DATATYPE,
        format!("could not determine data type of parameter ${number}"),
    )
}

/// No overload of `name` takes `arg_count` arguments.
///
/// Argument types are not resolved at this stage, so every argument is
/// rendered as `unknown`.
pub fn undefined_function(name: &str, arg_count: usize, location: usize) -> Diag {
    let signature = vec!["unknown"; arg_count].join(", ");
    Diag::new(
        SqlState::UNDEFINED_FUNCTION,
        format!("function {name}({signature}) does not exist"),
    )
    .with_hint(UNDEFINED_FUNCTION_HINT)
    .with_location(location)
}

/// INSERT lists more target columns than the VALUES row supplies.
pub fn insert_more_target_columns() -> Diag {
    Diag::new(
        SqlState::SYNTAX_ERROR,
        "INSERT has more target columns than expressions",
    )
}

/// The VALUES row supplies more expressions than INSERT lists columns.
pub fn insert_more_expressions() -> Diag {
    Diag::new(
        SqlState::SYNTAX_ERROR,
        "INSERT has more expressions than target columns",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_function_renders_unknown_per_argument() {
        assert_eq!(
            undefined_function("add", 3, 7).message,
            "function add(unknown, unknown, unknown) does not exist"
        );
        assert_eq!(undefined_function("now", 0, 0).message, "function now() does not exist");
    }

    #[test]
    fn indeterminate_parameter_names_the_parameter() {
        let diag = indeterminate_parameter(2);
        assert_eq!(diag.code, "42P18");
        assert_eq!(diag.message, "could not determine data type of parameter $2");
        assert_eq!(diag.hint, None);
        assert_eq!(diag.location, None);
    }
}
