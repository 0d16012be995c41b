use thiserror::Error;

/// All errors coming from the store/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any SQL driver error, including rejected statements.
    #[error("SQL error: {0}")]
    Sql(#[from] tokio_postgres::Error),

    /// A failure reported without an underlying driver error.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Errors happening during adapter or connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The connection string could not be parsed.
    #[error("Invalid connection string: {0}")]
    InvalidUrl(String),

    /// TLS connector setup failed.
    #[error("TLS error: {0}")]
    Tls(#[from] native_tls::Error),

    /// The driver failed to establish the connection.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}
