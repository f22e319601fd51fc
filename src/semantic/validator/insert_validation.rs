//! Column/value arity check for single-row `INSERT ... VALUES`.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::ast::statement::{InsertSource, InsertStatement};
use crate::diag::Diag;
use crate::semantic::diag::{insert_more_expressions, insert_more_target_columns};

/// Checks that a single-row VALUES insert supplies one expression per target
/// column.
///
/// Inserts fed by a query, by `DEFAULT VALUES`, or by more than one VALUES
/// row are accepted unchecked. An omitted column list counts as zero target
/// columns.
///
/// The diagnostic points at the first surplus column or expression.
pub fn validate_insert_arity(insert: &InsertStatement) -> Result<(), Diag> {
    let InsertSource::Select(select) = &insert.source else {
        return Ok(());
    };
    let Some([row]) = select.values_lists() else {
        trace!(relation = %insert.relation.name, "insert arity check skipped: not a single VALUES row");
        return Ok(());
    };
    let diag = match insert.columns.len().cmp(&row.len()) {
        Ordering::Equal => return Ok(()),
        Ordering::Greater => insert_more_target_columns()
            .with_location(insert.columns[row.len()].location()),
        Ordering::Less => {
            insert_more_expressions().with_location(row[insert.columns.len()].span().start)
        }
    };
    debug!(
        code = %diag.code,
        relation = %insert.relation.name,
        columns = insert.columns.len(),
        values = row.len(),
        "insert arity check failed"
    );
    Err(diag)
}
