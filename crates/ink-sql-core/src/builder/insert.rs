//! INSERT statement builder.

use crate::row::Row;
use crate::value::SqlValue;

/// Builds `INSERT INTO <table> (<cols>) VALUES (?, ...)`.
///
/// Row values are always bound as parameters; there is no inline mode for
/// inserts.
#[derive(Debug, Clone, Copy)]
pub struct Insert<'a> {
    table: &'a str,
    row: &'a Row,
}

impl<'a> Insert<'a> {
    /// Creates an INSERT builder for one row.
    #[must_use]
    pub const fn new(table: &'a str, row: &'a Row) -> Self {
        Self { table, row }
    }

    /// Builds the statement and returns SQL with parameters.
    ///
    /// An empty row inserts `DEFAULT VALUES`.
    #[must_use]
    pub fn build(self) -> (String, Vec<SqlValue>) {
        if self.row.is_empty() {
            return (format!("INSERT INTO {} DEFAULT VALUES", self.table), vec![]);
        }

        let placeholders: Vec<&str> = self.row.iter().map(|_| "?").collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.row.columns().join(", "),
            placeholders.join(", ")
        );
        let params = self.row.values().into_iter().cloned().collect();
        (sql, params)
    }
}
