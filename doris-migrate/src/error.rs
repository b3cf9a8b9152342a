//! Error types for the migration runner

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    /// Failure reported by the MySQL driver, shown as the driver's own text.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("connection attempt timed out after {0:?}")]
    ConnectTimeout(Duration),

    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = MigrationError> = std::result::Result<T, E>;
