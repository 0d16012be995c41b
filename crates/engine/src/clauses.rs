use crate::error::MergeError;
use model::core::{column::ColumnDescriptor, table::TableReference};
use statement::{
    ast::{
        expr::{BinaryOp, BinaryOperator, Expr},
        merge::MergeAssignment,
    },
    qualified,
};
use std::collections::HashSet;

pub const TARGET_ALIAS: &str = "T";
pub const SOURCE_ALIAS: &str = "S";

/// The typed clause set a merge statement is assembled from.
///
/// `insert_columns` and `insert_values` are built from the same ordered
/// column sequence, so position i of one corresponds to position i of the
/// other.
#[derive(Debug, Clone)]
pub struct MergeClauses {
    pub join: Expr,
    pub update: Vec<MergeAssignment>,
    pub insert_columns: Vec<String>,
    pub insert_values: Vec<Expr>,
}

/// Classifies the target's columns against the key set and assembles the
/// four clause fragments.
///
/// The join predicate follows the caller-supplied key order; the update and
/// insert lists follow the catalog's column order. Key columns are excluded
/// from the update set but kept in the insert lists, since a new row must
/// receive its key values. Key names that match no column are not checked
/// here and fail at the store.
pub fn build(
    table: &TableReference,
    columns: &[ColumnDescriptor],
    keys: &[String],
) -> Result<MergeClauses, MergeError> {
    let key_set: HashSet<&str> = keys.iter().map(String::as_str).collect();

    let update: Vec<MergeAssignment> = columns
        .iter()
        .filter(|col| !key_set.contains(col.name.as_str()))
        .map(|col| MergeAssignment {
            column: col.name.clone(),
            value: qualified(SOURCE_ALIAS, &col.name),
        })
        .collect();

    if update.is_empty() {
        return Err(MergeError::NoUpdatableColumns {
            table: table.to_string(),
        });
    }

    let insert_columns: Vec<String> = columns.iter().map(|col| col.name.clone()).collect();
    let insert_values: Vec<Expr> = columns
        .iter()
        .map(|col| qualified(SOURCE_ALIAS, &col.name))
        .collect();

    Ok(MergeClauses {
        join: join_predicate(keys),
        update,
        insert_columns,
        insert_values,
    })
}

fn join_predicate(keys: &[String]) -> Expr {
    let mut terms = keys.iter().map(|key| {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: qualified(TARGET_ALIAS, key),
            op: BinaryOperator::Eq,
            right: qualified(SOURCE_ALIAS, key),
        }))
    });

    let first = match terms.next() {
        Some(expr) => expr,
        None => Expr::Literal("TRUE".to_string()),
    };

    terms.fold(first, |acc, term| {
        Expr::BinaryOp(Box::new(BinaryOp {
            left: acc,
            op: BinaryOperator::And,
            right: term,
        }))
    })
}
