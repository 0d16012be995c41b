use connectors::error::DbError;
use thiserror::Error;

/// Top-level errors for the merge generator.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The invocation was malformed. Raised before any external call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog introspection returned zero columns for the resolved target
    /// reference. Indicates a non-existent table or a reference that never
    /// resolved to one.
    #[error("No columns found for table '{table}'")]
    SchemaNotFound { table: String },

    /// Every target column is also a key column, so no UPDATE clause can be
    /// formed. A hard failure, not silently degraded behavior.
    #[error("No updatable columns for table '{table}': every column is a key column")]
    NoUpdatableColumns { table: String },

    /// The store failed below the statement level (introspection included).
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// The store rejected or failed the generated statement. Carries the
    /// exact statement text that was attempted, so a failure can be
    /// diagnosed without re-deriving the statement.
    #[error("Merge execution failed: {source}; statement: {statement}")]
    Execution {
        statement: String,
        #[source]
        source: DbError,
    },
}
