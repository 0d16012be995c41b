use crate::core::table::TableReference;
use serde::{Deserialize, Serialize};

/// A resolved merge request: where to merge, where from, and which columns
/// define a row match.
///
/// `keys` keeps the caller-supplied order; the join predicate is built in
/// that order. `options` is a reserved extension slot and currently has no
/// recognized content; `null` and `{}` are both accepted without effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRequest {
    pub target: TableReference,
    pub source: TableReference,
    pub keys: Vec<String>,
    pub options: Option<serde_json::Value>,
}
