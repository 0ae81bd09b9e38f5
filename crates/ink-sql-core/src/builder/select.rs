//! SELECT statement builder.

use super::{assemble, QueryOptions};
use crate::compiler::RenderMode;
use crate::error::Result;
use crate::value::SqlValue;

/// Builds `SELECT <columns|*> FROM <table>` followed by the query options.
#[derive(Debug, Clone, Copy)]
pub struct Select<'a> {
    table: &'a str,
    options: &'a QueryOptions,
    mode: RenderMode,
}

impl<'a> Select<'a> {
    /// Creates a SELECT builder for `table`.
    #[must_use]
    pub const fn new(table: &'a str, options: &'a QueryOptions) -> Self {
        Self {
            table,
            options,
            mode: RenderMode::Parameterized,
        }
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
        let columns = match &self.options.columns {
            Some(columns) if !columns.is_empty() => columns.join(", "),
            _ => String::from("*"),
        };
        let base = format!("SELECT {columns} FROM {}", self.table);
        assemble(&base, self.options, self.mode)
    }
}
