//! Database handle.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use ink_sql_core::Columns;

use crate::error::Result;
use crate::table::Table;
use crate::transaction::Transaction;

/// A handle to a SQLite database.
///
/// The handle holds a single connection, so transactions are serialized in
/// the order they are opened. Cloning the handle shares the connection.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens a database.
    ///
    /// `name` is either a `sqlite:` URL, `:memory:`, or a file path. A file
    /// that does not exist yet is created.
    pub async fn open(name: &str) -> Result<Self> {
        let options = if name.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(name)?
        } else if name == ":memory:" {
            SqliteConnectOptions::new().in_memory(true)
        } else {
            SqliteConnectOptions::new()
                .filename(name)
                .create_if_missing(true)
        };
        debug!(database = %name, "Opening database");
        Self::connect(options).await
    }

    /// Opens a private in-memory database.
    pub async fn open_in_memory() -> Result<Self> {
        Self::connect(SqliteConnectOptions::new().in_memory(true)).await
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self> {
        // An in-memory database lives as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns a handle to a table with the given columns. Nothing is sent
    /// to the engine.
    #[must_use]
    pub fn table(&self, name: &str, columns: Columns) -> Table {
        Table::new(self.clone(), name, columns)
    }

    /// Returns a handle to a table after creating it if missing.
    pub async fn create_table(&self, name: &str, columns: Columns) -> Result<Table> {
        let table = self.table(name, columns);
        table.create_table().await?;
        Ok(table)
    }

    /// Opens a transaction.
    pub async fn begin(&self) -> Result<Transaction> {
        Ok(Transaction::new(self.pool.begin().await?))
    }

    /// Closes the connection.
    pub async fn close(&self) {
        info!("Closing database");
        self.pool.close().await;
    }
}
