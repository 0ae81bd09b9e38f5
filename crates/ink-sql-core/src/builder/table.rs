//! CREATE TABLE / DROP TABLE builders.

use crate::schema::{ColumnDef, Columns};

/// Builds `CREATE TABLE IF NOT EXISTS <table> (<column defs>)`.
#[derive(Debug, Clone, Copy)]
pub struct CreateTable<'a> {
    table: &'a str,
    columns: &'a Columns,
}

impl<'a> CreateTable<'a> {
    /// Creates a CREATE TABLE builder.
    #[must_use]
    pub const fn new(table: &'a str, columns: &'a Columns) -> Self {
        Self { table, columns }
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> String {
        let defs: Vec<String> = self.columns.iter().map(ColumnDef::to_sql).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.table,
            defs.join(", ")
        )
    }
}

/// Builds `DROP TABLE IF EXISTS <table>`.
#[derive(Debug, Clone, Copy)]
pub struct DropTable<'a> {
    table: &'a str,
}

impl<'a> DropTable<'a> {
    /// Creates a DROP TABLE builder.
    #[must_use]
    pub const fn new(table: &'a str) -> Self {
        Self { table }
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.table)
    }
}
