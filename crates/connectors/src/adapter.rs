use crate::error::{ConnectorError, DbError};
use async_trait::async_trait;
use model::core::{column::ColumnDescriptor, table::TableReference};
use statement::dialect::Dialect;

/// The boundary to the underlying table store.
///
/// Covers the two collaborator contracts the generator relies on: the
/// catalog's column listing and single-statement execution. Both calls are
/// atomic, all-or-nothing requests from the generator's point of view.
#[async_trait]
pub trait StoreAdapter {
    async fn connect(url: &str) -> Result<Self, ConnectorError>
    where
        Self: Sized;

    /// The store's current catalog, used to complete partially qualified
    /// table references.
    async fn current_catalog(&self) -> Result<String, DbError>;

    /// Ordered `(column_name, declared_type)` descriptors for exactly the
    /// given `(catalog, namespace, name)` triple. Empty if the table,
    /// namespace, or catalog does not exist.
    async fn table_columns(
        &self,
        table: &TableReference,
    ) -> Result<Vec<ColumnDescriptor>, DbError>;

    /// Executes one statement as a single atomic unit of work.
    async fn exec(&self, statement: &str) -> Result<(), DbError>;

    /// The dialect statements must be rendered in for this store.
    fn dialect(&self) -> &dyn Dialect;
}
