//! Transactions.

use sqlx::Sqlite;
use tracing::{debug, warn};

use ink_sql_core::{Row, SqlValue};

use crate::bind::{bind_all, decode_row};
use crate::error::Result;

/// An open transaction on a [`Database`](crate::Database).
///
/// Statements run in submission order. Dropping the transaction without
/// calling [`commit`](Self::commit) rolls it back.
pub struct Transaction {
    inner: sqlx::Transaction<'static, Sqlite>,
}

impl Transaction {
    pub(crate) const fn new(inner: sqlx::Transaction<'static, Sqlite>) -> Self {
        Self { inner }
    }

    /// Executes a statement and returns the number of rows affected.
    pub async fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        debug!(sql = %sql, params = params.len(), "Executing statement");
        match bind_all(sql, params).execute(&mut *self.inner).await {
            Ok(result) => Ok(result.rows_affected()),
            Err(err) => {
                warn!(sql = %sql, error = %err, "Statement failed");
                Err(err.into())
            }
        }
    }

    /// Runs a query and returns all result rows.
    pub async fn fetch_all(&mut self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        debug!(sql = %sql, params = params.len(), "Running query");
        let rows = match bind_all(sql, params).fetch_all(&mut *self.inner).await {
            Ok(rows) => rows,
            Err(err) => {
                warn!(sql = %sql, error = %err, "Query failed");
                return Err(err.into());
            }
        };
        rows.iter().map(decode_row).collect()
    }

    /// Runs a query and returns the first column of the first row, or
    /// `None` if there is no row.
    pub async fn fetch_scalar(&mut self, sql: &str, params: &[SqlValue]) -> Result<Option<SqlValue>> {
        let rows = self.fetch_all(sql, params).await?;
        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| row.values().first().map(|v| (*v).clone())))
    }

    /// Commits the transaction.
    pub async fn commit(self) -> Result<()> {
        self.inner.commit().await?;
        Ok(())
    }

    /// Rolls the transaction back.
    pub async fn rollback(self) -> Result<()> {
        self.inner.rollback().await?;
        Ok(())
    }
}
