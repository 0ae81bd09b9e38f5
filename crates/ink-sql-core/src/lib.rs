//! # ink-sql-core
//!
//! Structured where-predicates and the SQL statements built from them.
//!
//! This crate provides:
//! - A predicate model: columns mapped to literals or operator sets, with
//!   `$not` negation and `$or` disjunction
//! - A compiler from predicates to a parenthesized WHERE expression plus
//!   bound parameters
//! - Statement assembly for SELECT, UPDATE, DELETE, INSERT, aggregates
//!   and CREATE / DROP TABLE
//!
//! Nothing here performs I/O; `ink-orm` executes the statements.
//!
//! ## Compiling a predicate
//!
//! ```rust
//! use ink_sql_core::compiler::{compile, RenderMode};
//! use ink_sql_core::predicate::Predicate;
//! use serde_json::json;
//!
//! let predicate = Predicate::from_json(&json!({
//!     "age": { "$gte": 17, "$lt": 23 },
//!     "$or": [
//!         { "money": { "$not": { "$not": { "$gte": 1000 } } } },
//!         { "name": { "$neq": "John Doe" } }
//!     ]
//! }))
//! .unwrap();
//!
//! let clause = compile(&predicate, RenderMode::Parameterized).unwrap();
//! assert_eq!(
//!     clause.sql,
//!     "(age >= ? AND age < ? AND ((NOT (NOT (money >= ?))) OR (name != ?)))"
//! );
//! assert_eq!(clause.params.len(), 4);
//! ```
//!
//! ## Parameter binding
//!
//! Parameterized rendering is the default. [`compiler::RenderMode::Inline`]
//! exists for callers that relied on literal operands in the clause text;
//! it does not escape strings. INSERT values and UPDATE assignments are
//! bound in either mode.

pub mod builder;
pub mod compiler;
mod error;
pub mod predicate;
pub mod row;
pub mod schema;
pub mod value;

pub use builder::{assemble, Order, OrderBy, QueryOptions};
pub use compiler::{compile, CompiledClause, RenderMode};
pub use error::{PredicateError, Result};
pub use predicate::{CompareOp, Comparators, Predicate};
pub use row::Row;
pub use schema::{ColumnConstraint, ColumnDef, ColumnType, Columns};
pub use value::{SqlValue, ToSqlValue};
