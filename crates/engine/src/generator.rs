use crate::{
    clauses::{self, MergeClauses, SOURCE_ALIAS, TARGET_ALIAS},
    error::MergeError,
    resolve, schema, validate,
};
use connectors::adapter::StoreAdapter;
use model::core::{context::AmbientContext, request::MergeRequest};
use statement::{
    ast::{common::TableRef, merge::Merge},
    builder::merge::MergeBuilder,
    dialect::Dialect,
    renderer::{Render, Renderer},
};
use tracing::{debug, error, info};

/// A fully generated merge plan: the resolved request plus the assembled
/// statement AST. Rendering to text happens at the final boundary, against
/// whichever dialect the caller supplies.
pub struct GeneratedMerge {
    pub request: MergeRequest,
    ast: Merge,
}

impl GeneratedMerge {
    pub fn render(&self, dialect: &dyn Dialect) -> String {
        let mut renderer = Renderer::new(dialect);
        self.ast.render(&mut renderer);
        renderer.finish()
    }
}

/// Runs the generation pipeline: validate, resolve both references against
/// the store's ambient catalog, introspect the target, classify columns,
/// and assemble the statement AST. No statement is executed.
pub async fn generate(
    adapter: &dyn StoreAdapter,
    target: &str,
    source: &str,
    keys: &[String],
    options: Option<serde_json::Value>,
) -> Result<GeneratedMerge, MergeError> {
    validate::validate(target, source, keys)?;

    let ambient = AmbientContext::new(adapter.current_catalog().await?);
    let request = MergeRequest {
        target: resolve::resolve(target, &ambient),
        source: resolve::resolve(source, &ambient),
        keys: keys.to_vec(),
        options,
    };

    let columns = schema::target_columns(adapter, &request.target).await?;
    let clauses = clauses::build(&request.target, &columns, &request.keys)?;
    let ast = assemble(&request, clauses);

    Ok(GeneratedMerge { request, ast })
}

/// Generates the upsert statement for `(target, source, keys)` and executes
/// it as one atomic unit of work, returning a human-readable status line.
///
/// On failure the error is enriched with the exact statement text that was
/// attempted, then propagated; nothing is retried at this layer.
pub async fn generate_and_execute(
    adapter: &dyn StoreAdapter,
    target: &str,
    source: &str,
    keys: &[String],
    options: Option<serde_json::Value>,
) -> Result<String, MergeError> {
    let generated = generate(adapter, target, source, keys, options).await?;
    let statement = generated.render(adapter.dialect());
    debug!("Generated statement: {statement}");

    if let Err(err) = adapter.exec(&statement).await {
        error!(%err, %statement, "Merge execution failed");
        return Err(MergeError::Execution {
            statement,
            source: err,
        });
    }

    let status = format!(
        "Merge completed: {} <- {} on {} key column(s)",
        generated.request.target,
        generated.request.source,
        generated.request.keys.len()
    );
    info!("{status}");
    Ok(status)
}

fn assemble(request: &MergeRequest, clauses: MergeClauses) -> Merge {
    MergeBuilder::new(
        TableRef::from(&request.target),
        TableRef::from(&request.source),
    )
    .target_alias(TARGET_ALIAS)
    .source_alias(SOURCE_ALIAS)
    .on(clauses.join)
    .when_matched_update(clauses.update)
    .when_not_matched_insert(clauses.insert_columns, clauses.insert_values)
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use connectors::error::{ConnectorError, DbError};
    use model::core::{column::ColumnDescriptor, table::TableReference};
    use statement::dialect::{self, BigQuery};
    use std::sync::Mutex;

    /// In-memory stand-in for the store: canned introspection results, a
    /// log of executed statements, and an optional injected failure.
    struct MockAdapter {
        columns: Vec<ColumnDescriptor>,
        executed: Mutex<Vec<String>>,
        fail_exec: Option<String>,
        dialect: dialect::Postgres,
    }

    impl MockAdapter {
        fn new(columns: Vec<ColumnDescriptor>) -> Self {
            Self {
                columns,
                executed: Mutex::new(Vec::new()),
                fail_exec: None,
                dialect: dialect::Postgres,
            }
        }

        fn failing(columns: Vec<ColumnDescriptor>, message: &str) -> Self {
            Self {
                fail_exec: Some(message.to_string()),
                ..Self::new(columns)
            }
        }

        fn executed(&self) -> Vec<String> {
            self.executed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StoreAdapter for MockAdapter {
        async fn connect(_url: &str) -> Result<Self, ConnectorError> {
            unimplemented!("mock adapters are constructed directly")
        }

        async fn current_catalog(&self) -> Result<String, DbError> {
            Ok("proj".to_string())
        }

        async fn table_columns(
            &self,
            _table: &TableReference,
        ) -> Result<Vec<ColumnDescriptor>, DbError> {
            Ok(self.columns.clone())
        }

        async fn exec(&self, statement: &str) -> Result<(), DbError> {
            self.executed.lock().unwrap().push(statement.to_string());
            match &self.fail_exec {
                Some(message) => Err(DbError::Unknown(message.clone())),
                None => Ok(()),
            }
        }

        fn dialect(&self) -> &dyn Dialect {
            &self.dialect
        }
    }

    fn customer_columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("customer_id", "bigint"),
            ColumnDescriptor::new("name", "text"),
            ColumnDescriptor::new("email", "text"),
        ]
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const EXPECTED_CUSTOMERS_SQL: &str = concat!(
        "MERGE INTO \"proj\".\"ds\".\"target_customers\" AS \"T\" ",
        "USING \"proj\".\"ds\".\"staging_customers\" AS \"S\" ",
        "ON (\"T\".\"customer_id\" = \"S\".\"customer_id\") ",
        "WHEN MATCHED THEN UPDATE SET \"name\" = \"S\".\"name\", \"email\" = \"S\".\"email\" ",
        "WHEN NOT MATCHED THEN INSERT (\"customer_id\", \"name\", \"email\") ",
        "VALUES (\"S\".\"customer_id\", \"S\".\"name\", \"S\".\"email\");"
    );

    #[tokio::test]
    async fn test_generate_and_execute_submits_the_rendered_statement() {
        let adapter = MockAdapter::new(customer_columns());

        let status = generate_and_execute(
            &adapter,
            "proj.ds.target_customers",
            "ds.staging_customers",
            &keys(&["customer_id"]),
            None,
        )
        .await
        .unwrap();

        assert_eq!(adapter.executed(), vec![EXPECTED_CUSTOMERS_SQL.to_string()]);
        assert!(status.contains("proj.ds.target_customers"));
        assert!(status.contains("1 key column(s)"));
    }

    #[tokio::test]
    async fn test_generate_renders_per_dialect() {
        let adapter = MockAdapter::new(customer_columns());

        let generated = generate(
            &adapter,
            "proj.ds.target_customers",
            "proj.ds.staging_customers",
            &keys(&["customer_id"]),
            Some(serde_json::json!({})),
        )
        .await
        .unwrap();

        assert_eq!(generated.render(&dialect::Postgres), EXPECTED_CUSTOMERS_SQL);
        assert!(generated.render(&BigQuery).starts_with("MERGE INTO `proj`.`ds`.`target_customers`"));
    }

    #[tokio::test]
    async fn test_repeated_invocations_generate_identical_statements() {
        let adapter = MockAdapter::new(customer_columns());

        for _ in 0..2 {
            generate_and_execute(
                &adapter,
                "proj.ds.target_customers",
                "ds.staging_customers",
                &keys(&["customer_id"]),
                None,
            )
            .await
            .unwrap();
        }

        let executed = adapter.executed();
        assert_eq!(executed.len(), 2);
        assert_eq!(executed[0], executed[1]);
    }

    #[tokio::test]
    async fn test_empty_introspection_fails_before_any_execution() {
        let adapter = MockAdapter::new(Vec::new());

        let err = generate_and_execute(
            &adapter,
            "proj.ds.missing",
            "proj.ds.staging",
            &keys(&["id"]),
            None,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, MergeError::SchemaNotFound { .. }));
        assert!(adapter.executed().is_empty());
    }

    #[tokio::test]
    async fn test_all_key_columns_fails_before_any_execution() {
        let adapter = MockAdapter::new(vec![
            ColumnDescriptor::new("order_id", "bigint"),
            ColumnDescriptor::new("order_line_item", "bigint"),
        ]);

        let err = generate_and_execute(
            &adapter,
            "proj.ds.target_orders",
            "proj.ds.staging_orders",
            &keys(&["order_id", "order_line_item"]),
            None,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, MergeError::NoUpdatableColumns { .. }));
        assert!(adapter.executed().is_empty());
    }

    #[tokio::test]
    async fn test_execution_failure_carries_the_attempted_statement() {
        let adapter = MockAdapter::failing(customer_columns(), "permission denied");

        let err = generate_and_execute(
            &adapter,
            "proj.ds.target_customers",
            "ds.staging_customers",
            &keys(&["customer_id"]),
            None,
        )
        .await
        .unwrap_err();

        match err {
            MergeError::Execution { statement, source } => {
                assert_eq!(statement, EXPECTED_CUSTOMERS_SQL);
                assert!(source.to_string().contains("permission denied"));
            }
            other => panic!("expected an execution error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_input_fails_without_touching_the_store() {
        let adapter = MockAdapter::new(customer_columns());

        let err = generate_and_execute(&adapter, "proj.ds.target", "proj.ds.staging", &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, MergeError::InvalidInput(_)));
        assert!(adapter.executed().is_empty());
    }
}
