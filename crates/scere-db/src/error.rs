//! Store and loader error types.

use scere_common::ApiError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("query result is missing expected column: {0}")]
    MissingColumn(String),

    #[error("unexpected chromosome value: {0:?}")]
    BadChromosome(String),

    #[error("unexpected value in column {0}")]
    UnexpectedValue(String),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Internal(anyhow::Error::new(err))
    }
}
