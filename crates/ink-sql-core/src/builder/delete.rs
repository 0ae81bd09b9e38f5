//! DELETE statement builder.

use super::push_where;
use crate::compiler::RenderMode;
use crate::error::Result;
use crate::predicate::Predicate;
use crate::value::SqlValue;

/// Builds `DELETE FROM <table>` with an optional WHERE clause.
///
/// **Warning**: without a filter (or with an empty one) every row is
/// deleted.
#[derive(Debug, Clone, Copy)]
pub struct Delete<'a> {
    table: &'a str,
    filter: Option<&'a Predicate>,
    mode: RenderMode,
}

impl<'a> Delete<'a> {
    /// Creates a DELETE builder for `table`.
    #[must_use]
    pub const fn new(table: &'a str) -> Self {
        Self {
            table,
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
        let mut sql = format!("DELETE FROM {}", self.table);
        let mut params = Vec::new();
        push_where(&mut sql, &mut params, self.filter, self.mode)?;
        Ok((sql, params))
    }
}
