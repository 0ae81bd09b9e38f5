//! Migration runner.
//!
//! The schema version is kept in SQLite's `user_version` pragma. Running
//! to a target version applies every batch keyed `current <= key < target`
//! in ascending order and then stores the target.
//!
//! Each statement is committed on its own. When a statement fails the run
//! stops there; statements already applied, including earlier statements
//! of the same batch, are not rolled back and the stored version is left
//! unchanged.

use tracing::{debug, info, warn};

use ink_orm::{Database, SqlValue};

use crate::error::{MigrateError, Result};
use crate::migrations::Migrations;

/// Outcome of a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Version before the run.
    pub from: u32,
    /// Version after the run.
    pub to: u32,
    /// Batches applied, in order.
    pub applied: Vec<u32>,
}

impl MigrationReport {
    /// Returns true if the stored version changed.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Applies [`Migrations`] to a database.
#[derive(Debug, Clone)]
pub struct MigrationRunner {
    db: Database,
    migrations: Migrations,
}

impl MigrationRunner {
    /// Creates a runner.
    #[must_use]
    pub const fn new(db: Database, migrations: Migrations) -> Self {
        Self { db, migrations }
    }

    /// Returns the migrations.
    #[must_use]
    pub const fn migrations(&self) -> &Migrations {
        &self.migrations
    }

    /// Reads the stored schema version.
    pub async fn current_version(&self) -> Result<u32> {
        let mut tx = self.db.begin().await?;
        let value = tx.fetch_scalar("PRAGMA user_version", &[]).await?;
        tx.commit().await?;

        match value {
            Some(SqlValue::Int(version)) => u32::try_from(version)
                .map_err(|_| MigrateError::Database(format!("user_version out of range: {version}"))),
            other => Err(MigrateError::Database(format!(
                "unexpected user_version: {other:?}"
            ))),
        }
    }

    /// Stores the schema version.
    pub async fn set_version(&self, version: u32) -> Result<()> {
        let mut tx = self.db.begin().await?;
        tx.execute(&format!("PRAGMA user_version = {version}"), &[])
            .await?;
        tx.commit().await?;
        debug!(version, "Stored user_version");
        Ok(())
    }

    /// Returns the batches a run to `target` would apply, without running
    /// anything.
    pub async fn plan(&self, target: u32) -> Result<Vec<(u32, Vec<String>)>> {
        let current = self.current_version().await?;
        Ok(self
            .migrations
            .pending(current, target)
            .map(|(version, batch)| (version, batch.to_vec()))
            .collect())
    }

    /// Migrates the database to `target`.
    ///
    /// Does nothing when the stored version is already at or past
    /// `target`.
    pub async fn run(&self, target: u32) -> Result<MigrationReport> {
        let current = self.current_version().await?;
        if current >= target {
            info!(current, target, "Database is up to date");
            return Ok(MigrationReport {
                from: current,
                to: current,
                applied: Vec::new(),
            });
        }

        let mut applied = Vec::new();
        for (version, batch) in self.migrations.pending(current, target) {
            info!(version, statements = batch.len(), "Applying migration");
            for statement in batch {
                self.apply(version, statement).await?;
            }
            applied.push(version);
        }

        self.set_version(target).await?;
        info!(from = current, to = target, "Migrated user_version");

        Ok(MigrationReport {
            from: current,
            to: target,
            applied,
        })
    }

    async fn apply(&self, version: u32, statement: &str) -> Result<()> {
        let failed = |source| MigrateError::StatementFailed {
            version,
            statement: statement.to_string(),
            source,
        };

        let mut tx = self.db.begin().await?;
        if let Err(err) = tx.execute(statement, &[]).await {
            warn!(version, statement = %statement, "Migration statement failed");
            return Err(failed(err));
        }
        tx.commit().await.map_err(failed)?;
        debug!(version, statement = %statement, "Executed migration statement");
        Ok(())
    }
}
