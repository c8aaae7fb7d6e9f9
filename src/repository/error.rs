// ==========================================
// Repository layer - error types
// ==========================================
// thiserror derive; absence of rows is never an error here (explicit
// Option / empty Vec returns), so every variant is fatal for the
// current run.
// ==========================================

use thiserror::Error;

/// Failure against either data source. Fatal for the current run:
/// the caller reports it and ends, releasing acquired connections.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("data source connection failed: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("connection lock failed: {0}")]
    Lock(String),

    #[error("row mapping failed: {0}")]
    Mapping(String),
}

impl From<rusqlite::Error> for DataSourceError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, Some(msg))
                if code.code == rusqlite::ErrorCode::CannotOpen =>
            {
                DataSourceError::Connection(msg)
            }
            other => DataSourceError::Query(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for DataSourceError {
    fn from(err: serde_json::Error) -> Self {
        DataSourceError::Mapping(err.to_string())
    }
}

/// Result alias for the repository layer
pub type DataSourceResult<T> = Result<T, DataSourceError>;
