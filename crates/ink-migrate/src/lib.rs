//! Versioned SQL migrations for `ink-orm` databases.
//!
//! The schema version of a database is stored in SQLite's `user_version`
//! pragma. [`Migrations`] maps a version to the statements that upgrade a
//! database from it; [`MigrationRunner`] applies the pending batches in
//! ascending order and stores the target version.
//!
//! A failed statement stops the run. Statements that already ran are not
//! rolled back, so a batch can be left half applied.
//!
//! # Example
//!
//! ```rust
//! use ink_migrate::{MigrationRunner, Migrations};
//! use ink_orm::Database;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ink_migrate::Result<()> {
//! let db = Database::open_in_memory().await?;
//! let migrations = Migrations::new()
//!     .version(0, ["CREATE TABLE todos (id INTEGER PRIMARY KEY, title TEXT)"])
//!     .version(1, ["ALTER TABLE todos ADD COLUMN done BOOLEAN DEFAULT FALSE"]);
//!
//! let report = MigrationRunner::new(db, migrations).run(2).await?;
//! assert_eq!(report.applied, vec![0, 1]);
//! # Ok(())
//! # }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Migrate to the configured version
//! ink-migrate --config db.json migrate
//!
//! # Show the pending statements without running them
//! ink-migrate --config db.json migrate --dry-run
//!
//! # Print the stored version
//! ink-migrate --database sqlite:app.db version
//! ```

pub mod config;
pub mod error;
pub mod migrations;
pub mod runner;

pub use config::{DatabaseConfig, TableConfig};
pub use error::{MigrateError, Result};
pub use migrations::{sql, Migrations};
pub use runner::{MigrationReport, MigrationRunner};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::config::{DatabaseConfig, TableConfig};
    pub use crate::error::{MigrateError, Result};
    pub use crate::migrations::Migrations;
    pub use crate::runner::{MigrationReport, MigrationRunner};
}
