use crate::{
    adapter::StoreAdapter,
    error::{ConnectorError, DbError},
    sql::postgres::utils::connect_client,
};
use async_trait::async_trait;
use model::core::{column::ColumnDescriptor, table::TableReference};
use statement::dialect::{self, Dialect};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_postgres::Client;
use tracing::debug;

#[derive(Clone)]
pub struct PgAdapter {
    client: Arc<RwLock<Client>>,
    dialect: dialect::Postgres,
}

const QUERY_CURRENT_CATALOG_SQL: &str = include_str!("sql/current_catalog.sql");
const QUERY_TABLE_COLUMNS_SQL: &str = include_str!("sql/table_columns.sql");

#[async_trait]
impl StoreAdapter for PgAdapter {
    async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let client = connect_client(url).await?;
        Ok(Self {
            client: Arc::new(RwLock::new(client)),
            dialect: dialect::Postgres,
        })
    }

    async fn current_catalog(&self) -> Result<String, DbError> {
        let client = self.client.read().await;
        let row = client.query_one(QUERY_CURRENT_CATALOG_SQL, &[]).await?;
        Ok(row.try_get(0)?)
    }

    async fn table_columns(
        &self,
        table: &TableReference,
    ) -> Result<Vec<ColumnDescriptor>, DbError> {
        let client = self.client.read().await;
        let rows = client
            .query(
                QUERY_TABLE_COLUMNS_SQL,
                &[&table.catalog, &table.namespace, &table.name],
            )
            .await?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in &rows {
            columns.push(ColumnDescriptor {
                name: row.try_get("column_name")?,
                declared_type: row.try_get("data_type")?,
            });
        }

        debug!("Introspected {} column(s) for {}", columns.len(), table);
        Ok(columns)
    }

    async fn exec(&self, statement: &str) -> Result<(), DbError> {
        let client = self.client.read().await;
        client.batch_execute(statement).await?;
        Ok(())
    }

    fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }
}
