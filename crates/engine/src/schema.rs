use crate::error::MergeError;
use connectors::adapter::StoreAdapter;
use model::core::{column::ColumnDescriptor, table::TableReference};

/// Fetches the target's ordered column descriptors from the catalog.
///
/// The source table is never introspected: its rows are assumed to carry a
/// superset of the target's columns, and a violated assumption surfaces as
/// an execution-time failure.
pub async fn target_columns(
    adapter: &dyn StoreAdapter,
    table: &TableReference,
) -> Result<Vec<ColumnDescriptor>, MergeError> {
    let columns = adapter.table_columns(table).await?;
    if columns.is_empty() {
        return Err(MergeError::SchemaNotFound {
            table: table.to_string(),
        });
    }
    Ok(columns)
}
