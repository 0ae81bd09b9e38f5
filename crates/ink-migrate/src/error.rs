//! Error types for migrations and configuration.

use ink_orm::OrmError;

/// Errors that can occur while migrating or opening a configured database.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// A statement of a migration batch failed. Statements that ran before
    /// it stay applied.
    #[error("Migration {version} failed at '{statement}': {source}")]
    StatementFailed {
        /// Version key of the failing batch.
        version: u32,
        /// The failing statement.
        statement: String,
        /// Error reported by the table engine.
        source: OrmError,
    },

    /// Table engine error outside of a migration statement.
    #[error(transparent)]
    Orm(#[from] OrmError),

    /// The engine returned something unexpected for `user_version`.
    #[error("Database error: {0}")]
    Database(String),

    /// IO error (reading the configuration file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for migration operations.
pub type Result<T> = std::result::Result<T, MigrateError>;
