//! ink-migrate CLI
//!
//! Command-line tool for migrating configured databases.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ink_migrate::prelude::*;
use ink_orm::Database;
use ink_sql_core::builder::CreateTable;

/// Versioned SQL migrations for SQLite databases.
#[derive(Parser)]
#[command(name = "ink-migrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL or path. Defaults to the name in the configuration.
    #[arg(short, long, env = "DATABASE_URL")]
    database: Option<String>,

    /// JSON database configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations.
    Migrate {
        /// Version to migrate to (the configured version if not specified).
        #[arg(short, long)]
        target: Option<u32>,

        /// Show the pending statements without executing them.
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the stored schema version.
    Version,

    /// Create the tables declared in the configuration.
    CreateTables,

    /// Print the CREATE TABLE statements of the configuration.
    Sql,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => Some(
            DatabaseConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
        ),
        None => None,
    };

    if let Commands::Sql = cli.command {
        let config = require_config(config.as_ref())?;
        for table in &config.tables {
            println!("{};", CreateTable::new(&table.name, &table.columns).build());
        }
        return Ok(());
    }

    let database = match (&cli.database, &config) {
        (Some(database), _) => database.clone(),
        (None, Some(config)) => config.name.clone(),
        (None, None) => bail!("No database given; pass --database or --config"),
    };
    let db = Database::open(&database)
        .await
        .with_context(|| format!("Failed to open {database}"))?;

    match cli.command {
        Commands::Migrate { target, dry_run } => {
            let config = require_config(config.as_ref())?;
            let target = target.unwrap_or(config.version);
            let runner = config.runner(&db);

            if dry_run {
                info!("Dry run mode - SQL will be printed but not executed.");
                let plan = runner.plan(target).await?;
                if plan.is_empty() {
                    info!("No pending migrations.");
                }
                for (version, statements) in plan {
                    println!("-- version {version}");
                    for statement in statements {
                        println!("{statement}");
                    }
                }
            } else {
                let report = runner.run(target).await?;
                if report.changed() {
                    info!(
                        "Migrated from version {} to {} ({} batches)",
                        report.from,
                        report.to,
                        report.applied.len()
                    );
                } else {
                    info!("Nothing to migrate; version is {}", report.from);
                }
            }
        }

        Commands::Version => {
            let runner = MigrationRunner::new(db.clone(), Migrations::new());
            println!("{}", runner.current_version().await?);
        }

        Commands::CreateTables => {
            let config = require_config(config.as_ref())?;
            let tables = config.create_tables(&db).await?;
            for table in &tables {
                info!("Table ready: {}", table.name());
            }
        }

        Commands::Sql => {}
    }

    db.close().await;
    Ok(())
}

fn require_config(config: Option<&DatabaseConfig>) -> anyhow::Result<&DatabaseConfig> {
    match config {
        Some(config) => Ok(config),
        None => bail!("This command needs --config"),
    }
}
