//! Positional parameter numbering check.
//!
//! Every parameter `$1..$n` must be used somewhere in the statement, or the
//! pipeline has no way to infer its type.

use std::collections::BTreeSet;

use tracing::debug;

use crate::ast::Node;
use crate::ast::statement::Statement;
use crate::ast::visitors::CollectingVisitor;
use crate::diag::Diag;
use crate::semantic::diag::indeterminate_parameter;

/// Returns the distinct parameter numbers used anywhere in `statement`.
pub fn collect_parameter_numbers(statement: &Statement) -> BTreeSet<u32> {
    CollectingVisitor::new(|node| match node {
        Node::Parameter(param) => Some(param.number),
        _ => None,
    })
    .collect(statement)
    .into_iter()
    .collect()
}

/// Checks that parameter numbers have no gap.
///
/// Only numbers up to the count of distinct parameters are checked, and the
/// smallest missing one is reported: `$1, $3` and `$1, $5` both report `$2`.
/// A `$0` counts toward the bound without filling a slot.
pub fn validate_parameter_numbering(statement: &Statement) -> Result<(), Diag> {
    let seen = collect_parameter_numbers(statement);

    let missing = (1..=seen.len()).find(|&number| match u32::try_from(number) {
        Ok(number) => !seen.contains(&number),
        Err(_) => true,
    });

    match missing {
        Some(number) => {
            let diag = indeterminate_parameter(number);
            debug!(code = %diag.code, parameter = number, distinct = seen.len(), "parameter numbering check failed");
            Err(diag)
        }
        None => Ok(()),
    }
}
