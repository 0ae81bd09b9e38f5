//! Aggregate SELECT builder.

use super::push_where;
use crate::compiler::RenderMode;
use crate::error::Result;
use crate::predicate::Predicate;
use crate::value::SqlValue;

/// An aggregate function over a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate {
    /// `SUM(column)`
    Sum(String),
    /// `COUNT(*)`
    Count,
}

impl Aggregate {
    /// Creates a SUM aggregate.
    #[must_use]
    pub fn sum(column: &str) -> Self {
        Self::Sum(column.to_string())
    }

    /// Returns the SQL representation.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Sum(column) => format!("SUM({column})"),
            Self::Count => String::from("COUNT(*)"),
        }
    }
}

/// Builds `SELECT <aggregate> FROM <table>` with an optional WHERE clause.
#[derive(Debug, Clone, Copy)]
pub struct AggregateSelect<'a> {
    table: &'a str,
    aggregate: &'a Aggregate,
    filter: Option<&'a Predicate>,
    mode: RenderMode,
}

impl<'a> AggregateSelect<'a> {
    /// Creates an aggregate builder.
    #[must_use]
    pub const fn new(table: &'a str, aggregate: &'a Aggregate) -> Self {
        Self {
            table,
            aggregate,
            filter: None,
            mode: RenderMode::Parameterized,
        }
    }

    /// Sets the row filter.
    #[must_use]
    pub const fn filter(mut self, filter: Option<&'a Predicate>) -> Self {
        self.filter = filter;
        self
    }

    /// Sets how where-clause operands are rendered.
    #[must_use]
    pub const fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the statement and returns SQL with parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is malformed.
    pub fn build(self) -> Result<(String, Vec<SqlValue>)> {
        let mut sql = format!("SELECT {} FROM {}", self.aggregate.to_sql(), self.table);
        let mut params = Vec::new();
        push_where(&mut sql, &mut params, self.filter, self.mode)?;
        Ok((sql, params))
    }
}
