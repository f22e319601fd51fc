//! Statement validator coordinating the semantic checks.
//!
//! Checks run in a fixed order and the first failure is returned:
//!
//! 1. parameter numbering (`42P18`)
//! 2. INSERT column/value arity (`42601`), for INSERT statements only
//! 3. function call resolution (`42883`)

use crate::ast::statement::Statement;
use crate::diag::Diag;
use crate::semantic::catalog::Catalog;

mod callable_validation;
mod insert_validation;
mod parameter_validation;

pub use callable_validation::validate_function_calls;
pub use insert_validation::validate_insert_arity;
pub use parameter_validation::{collect_parameter_numbers, validate_parameter_numbering};

/// Which checks [`StatementValidator`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Check that `$1..$n` has no gaps.
    pub parameter_numbering: bool,

    /// Check function calls against the catalog.
    pub function_calls: bool,

    /// Check single-row `INSERT ... VALUES` arity.
    pub insert_arity: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            parameter_numbering: true,
            function_calls: true,
            insert_arity: true,
        }
    }
}

impl ValidationConfig {
    /// Enables or disables the parameter numbering check.
    pub fn with_parameter_numbering(mut self, enabled: bool) -> Self {
        self.parameter_numbering = enabled;
        self
    }

    /// Enables or disables the function call check.
    pub fn with_function_calls(mut self, enabled: bool) -> Self {
        self.function_calls = enabled;
        self
    }

    /// Enables or disables the INSERT arity check.
    pub fn with_insert_arity(mut self, enabled: bool) -> Self {
        self.insert_arity = enabled;
        self
    }
}

/// Runs the configured checks over one statement.
pub struct StatementValidator<'c, C: ?Sized> {
    /// Validation configuration.
    config: ValidationConfig,

    /// Function catalog.
    catalog: &'c C,
}

impl<'c, C: Catalog + ?Sized> StatementValidator<'c, C> {
    /// Creates a validator running every check.
    pub fn new(catalog: &'c C) -> Self {
        Self::with_config(catalog, ValidationConfig::default())
    }

    /// Creates a validator with a custom configuration.
    pub fn with_config(catalog: &'c C, config: ValidationConfig) -> Self {
        Self { config, catalog }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates `statement`, returning the first diagnostic found.
    pub fn validate(&self, statement: &Statement) -> Result<(), Diag> {
        if self.config.parameter_numbering {
            validate_parameter_numbering(statement)?;
        }
        if self.config.insert_arity {
            if let Some(insert) = statement.as_insert() {
                validate_insert_arity(insert)?;
            }
        }
        if self.config.function_calls {
            validate_function_calls(self.catalog, statement)?;
        }
        Ok(())
    }
}
