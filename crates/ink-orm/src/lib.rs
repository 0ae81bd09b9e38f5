//! # ink-orm
//!
//! A table engine on SQLite.
//!
//! This crate provides:
//! - [`Database`] for opening a database and its transactions
//! - [`Table`] for create, drop, select, insert, update, delete and
//!   aggregate operations, each in its own transaction
//! - [`OrmError`] separating malformed predicates from engine failures
//!
//! ## Quick Start
//!
//! ```rust
//! use ink_orm::{ColumnDef, ColumnType, Columns, Database, Predicate, QueryOptions, Row};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ink_orm::Result<()> {
//! let db = Database::open_in_memory().await?;
//! let todos = db
//!     .create_table(
//!         "todos",
//!         Columns::new()
//!             .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
//!             .column(ColumnDef::new("title", ColumnType::Text).not_null())
//!             .column(ColumnDef::new("done", ColumnType::Boolean).default_value(false)),
//!     )
//!     .await?;
//!
//! todos.insert(&Row::new().set("id", 1).set("title", "Buy milk")).await?;
//! todos
//!     .update(
//!         &Row::new().set("done", true),
//!         &QueryOptions::new().filter(Predicate::new().eq("id", 1)),
//!     )
//!     .await?;
//!
//! let done = todos
//!     .select(&QueryOptions::new().filter(Predicate::new().eq("done", true)))
//!     .await?;
//! assert_eq!(done.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Transactions
//!
//! The database holds one connection, so transactions run one at a time in
//! the order they were opened. [`Database::begin`] exposes the same
//! primitive the table operations use.

mod bind;
mod database;
mod error;
mod table;
mod transaction;

pub use database::Database;
pub use error::{ConstraintKind, OrmError, Result};
pub use table::Table;
pub use transaction::Transaction;

pub use ink_sql_core::{
    ColumnConstraint, ColumnDef, ColumnType, Columns, CompareOp, Comparators, Order, Predicate,
    QueryOptions, RenderMode, Row, SqlValue, ToSqlValue,
};
