use connectors::error::{ConnectorError, DbError};
use engine::error::MergeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to write the output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to connect to the store: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Merge failed: {0}")]
    Merge(#[from] MergeError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Invalid JSON passed to --options: {0}")]
    OptionsParse(serde_json::Error),

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}
