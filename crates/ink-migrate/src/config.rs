//! Database configuration files.
//!
//! ```json
//! {
//!     "name": "sqlite:app.db",
//!     "version": 2,
//!     "auto_migrate": true,
//!     "auto_create_tables": true,
//!     "migrations": {
//!         "1": ["ALTER TABLE todos ADD COLUMN due TEXT"]
//!     },
//!     "tables": [
//!         {
//!             "name": "todos",
//!             "columns": [
//!                 { "name": "id", "type": "INTEGER", "constraints": ["PRIMARY_KEY"] },
//!                 { "name": "title", "type": "TEXT", "constraints": ["NOT_NULL"] },
//!                 { "name": "due", "type": "TEXT" }
//!             ]
//!         }
//!     ]
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use ink_orm::{Columns, Database, Table};

use crate::error::{MigrateError, Result};
use crate::migrations::Migrations;
use crate::runner::{MigrationReport, MigrationRunner};

/// A table declared in a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table name.
    pub name: String,
    /// Column declarations, in order.
    pub columns: Columns,
}

/// Configuration of a database: where it lives, its schema version, the
/// migrations leading there and the tables it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database name: a `sqlite:` URL, `:memory:` or a file path.
    pub name: String,
    /// Target schema version.
    pub version: u32,
    /// Migration batches.
    #[serde(default)]
    pub migrations: Migrations,
    /// Migrate to `version` when opening.
    #[serde(default, alias = "autoMigrate")]
    pub auto_migrate: bool,
    /// Create the declared tables when opening.
    #[serde(default, alias = "autoCreateTables")]
    pub auto_create_tables: bool,
    /// Declared tables.
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

impl DatabaseConfig {
    /// Creates a configuration with no migrations or tables.
    #[must_use]
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
            migrations: Migrations::new(),
            auto_migrate: false,
            auto_create_tables: false,
            tables: Vec::new(),
        }
    }

    /// Reads a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    /// Returns the declared table, if any.
    #[must_use]
    pub fn table_config(&self, name: &str) -> Option<&TableConfig> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Opens the database, then migrates it when `auto_migrate` is set and
    /// creates the declared tables when `auto_create_tables` is set.
    pub async fn open(&self) -> Result<Database> {
        let db = Database::open(&self.name).await?;
        if self.auto_migrate {
            self.migrate(&db).await?;
        }
        if self.auto_create_tables {
            self.create_tables(&db).await?;
        }
        Ok(db)
    }

    /// Migrates `db` to the configured version.
    pub async fn migrate(&self, db: &Database) -> Result<MigrationReport> {
        self.runner(db).run(self.version).await
    }

    /// Returns a runner for the configured migrations.
    #[must_use]
    pub fn runner(&self, db: &Database) -> MigrationRunner {
        MigrationRunner::new(db.clone(), self.migrations.clone())
    }

    /// Returns handles to the declared tables, in declaration order.
    #[must_use]
    pub fn tables(&self, db: &Database) -> Vec<Table> {
        self.tables
            .iter()
            .map(|t| db.table(&t.name, t.columns.clone()))
            .collect()
    }

    /// Creates every declared table that does not exist yet.
    pub async fn create_tables(&self, db: &Database) -> Result<Vec<Table>> {
        let tables = self.tables(db);
        for table in &tables {
            table.create_table().await?;
        }
        info!(count = tables.len(), "Declared tables ready");
        Ok(tables)
    }
}

impl FromStr for DatabaseConfig {
    type Err = MigrateError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
