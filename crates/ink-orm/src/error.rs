//! Error types for the table engine.

use std::fmt;

use ink_sql_core::PredicateError;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Which constraint the engine reported as violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// `UNIQUE` or `PRIMARY KEY`
    Unique,
    /// `NOT NULL`
    NotNull,
    /// `CHECK`
    Check,
    /// `FOREIGN KEY`
    ForeignKey,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique => write!(f, "unique"),
            Self::NotNull => write!(f, "not-null"),
            Self::Check => write!(f, "check"),
            Self::ForeignKey => write!(f, "foreign key"),
        }
    }
}

/// Table engine errors.
#[derive(Debug, Error)]
pub enum OrmError {
    /// The where-predicate is malformed; no SQL was sent.
    #[error(transparent)]
    InvalidPredicate(#[from] PredicateError),

    /// The engine rejected or failed to run a statement.
    #[error("engine error: {0}")]
    Engine(sqlx::Error),

    /// The engine reported a constraint violation.
    #[error("{kind} constraint violated: {message}")]
    ConstraintViolation {
        /// Violated constraint.
        kind: ConstraintKind,
        /// Message as reported by the engine.
        message: String,
    },
}

impl OrmError {
    /// Returns true for errors reported by the engine, including
    /// constraint violations.
    #[must_use]
    pub const fn is_engine_error(&self) -> bool {
        matches!(self, Self::Engine(_) | Self::ConstraintViolation { .. })
    }

    /// Returns the violated constraint, if this is a constraint violation.
    #[must_use]
    pub const fn constraint(&self) -> Option<ConstraintKind> {
        match self {
            Self::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for OrmError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let kind = match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                _ => None,
            };
            if let Some(kind) = kind {
                return Self::ConstraintViolation {
                    kind,
                    message: db_err.message().to_string(),
                };
            }
        }
        Self::Engine(err)
    }
}

/// Result type alias for table engine operations.
pub type Result<T> = std::result::Result<T, OrmError>;
