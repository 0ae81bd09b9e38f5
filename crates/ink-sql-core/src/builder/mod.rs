//! Statement assembly.
//!
//! [`assemble`] appends the optional WHERE, ORDER BY and LIMIT fragments of
//! [`QueryOptions`] to a base statement, always in that order. The
//! statement builders in this module produce the base statements for
//! each table operation.
//!
//! # Example
//!
//! ```rust
//! use ink_sql_core::builder::{assemble, Order, QueryOptions};
//! use ink_sql_core::compiler::RenderMode;
//! use ink_sql_core::predicate::Predicate;
//!
//! let options = QueryOptions::new()
//!     .filter(Predicate::new().eq("a", 1))
//!     .order_by("a", Order::Asc)
//!     .limit(5);
//! let (sql, params) = assemble("SELECT * FROM t", &options, RenderMode::Parameterized).unwrap();
//!
//! assert_eq!(sql, "SELECT * FROM t WHERE (a = ?) ORDER BY a ASC LIMIT 5");
//! assert_eq!(params.len(), 1);
//! ```

mod aggregate;
mod delete;
mod insert;
mod select;
mod table;
mod update;

use std::fmt;

pub use aggregate::{Aggregate, AggregateSelect};
pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use table::{CreateTable, DropTable};
pub use update::Update;

use crate::compiler::{compile, RenderMode};
use crate::error::Result;
use crate::predicate::Predicate;
use crate::value::SqlValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Ascending order (ASC)
    #[default]
    Asc,
    /// Descending order (DESC)
    Desc,
}

impl Order {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// An ordering specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Column to order by
    pub column: String,
    /// Order direction
    pub order: Order,
}

impl OrderBy {
    /// Creates an ordering specification.
    #[must_use]
    pub fn new(column: &str, order: Order) -> Self {
        Self {
            column: column.to_string(),
            order,
        }
    }

    /// Parses a `-`-prefixed specification: `"-created_at"` sorts
    /// descending, `"name"` ascending.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        spec.strip_prefix('-').map_or_else(
            || Self::new(spec, Order::Asc),
            |column| Self::new(column, Order::Desc),
        )
    }

    /// Returns the SQL representation.
    #[must_use]
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.column, self.order)
    }
}

/// Options shared by select, update and delete.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOptions {
    /// Columns to select (`None` = `*`). Only used by SELECT.
    pub columns: Option<Vec<String>>,
    /// Row filter.
    pub filter: Option<Predicate>,
    /// ORDER BY entries, in clause order.
    pub order_by: Vec<OrderBy>,
    /// Maximum number of rows.
    pub limit: Option<u64>,
}

impl QueryOptions {
    /// Creates empty options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: None,
            filter: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Selects specific columns.
    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = Some(columns.iter().map(|c| (*c).to_string()).collect());
        self
    }

    /// Sets the row filter.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filter = Some(predicate);
        self
    }

    /// Appends an ORDER BY entry.
    #[must_use]
    pub fn order_by(mut self, column: &str, order: Order) -> Self {
        self.order_by.push(OrderBy::new(column, order));
        self
    }

    /// Appends an ORDER BY entry from a `-`-prefixed specification.
    #[must_use]
    pub fn order_by_spec(mut self, spec: &str) -> Self {
        self.order_by.push(OrderBy::parse(spec));
        self
    }

    /// Limits the number of rows.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Appends WHERE, ORDER BY and LIMIT fragments to `base`.
///
/// A filter that is absent or has no entries produces no WHERE clause;
/// an empty ORDER BY list produces no ORDER BY clause.
///
/// # Errors
///
/// Returns an error if the filter is malformed.
pub fn assemble(
    base: &str,
    options: &QueryOptions,
    mode: RenderMode,
) -> Result<(String, Vec<SqlValue>)> {
    let mut sql = String::from(base);
    let mut params = Vec::new();

    push_where(&mut sql, &mut params, options.filter.as_ref(), mode)?;

    if !options.order_by.is_empty() {
        sql.push_str(" ORDER BY ");
        let parts: Vec<String> = options.order_by.iter().map(OrderBy::to_sql).collect();
        sql.push_str(&parts.join(", "));
    }

    if let Some(limit) = options.limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    Ok((sql, params))
}

/// Appends ` WHERE <clause>` when the filter is present and non-empty.
pub(crate) fn push_where(
    sql: &mut String,
    params: &mut Vec<SqlValue>,
    filter: Option<&Predicate>,
    mode: RenderMode,
) -> Result<()> {
    if let Some(predicate) = filter.filter(|p| !p.is_empty()) {
        let clause = compile(predicate, mode)?;
        sql.push_str(" WHERE ");
        sql.push_str(&clause.sql);
        params.extend(clause.params);
    }
    Ok(())
}
