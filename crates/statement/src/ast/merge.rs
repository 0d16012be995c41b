//! Defines the AST for MERGE (upsert) statements.

use crate::ast::{common::TableRef, expr::Expr};

#[derive(Debug, Clone)]
pub struct Merge {
    pub target: TableRef,
    pub target_alias: Option<String>,
    pub source: TableRef,
    pub source_alias: Option<String>,
    pub on: Expr,
    pub when_matched: Option<MergeMatched>,
    pub when_not_matched: Option<MergeNotMatched>,
}

#[derive(Debug, Clone)]
pub enum MergeMatched {
    Update { assignments: Vec<MergeAssignment> },
    DoNothing,
}

/// The INSERT arm. `columns` and `values` are positionally aligned:
/// position i of one corresponds to position i of the other.
#[derive(Debug, Clone)]
pub struct MergeNotMatched {
    pub columns: Vec<String>,
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct MergeAssignment {
    pub column: String,
    pub value: Expr,
}
