//! Column schema declarations.
//!
//! A table is declared as an ordered list of columns, each with a data
//! type, constraints and an optional default. The declaration is used to
//! render `CREATE TABLE` and to convert values read back from the engine.

use serde::{Deserialize, Serialize};

use crate::value::{SqlValue, ToSqlValue};

/// Column data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    /// `TEXT`
    Text,
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
    /// `BOOLEAN` (stored by SQLite as 0/1)
    Boolean,
}

impl ColumnType {
    /// Returns the SQL type name.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Boolean => "BOOLEAN",
        }
    }
}

/// Column constraints. `DEFAULT` is carried separately on [`ColumnDef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnConstraint {
    /// `NOT NULL`
    #[serde(alias = "NOT NULL")]
    NotNull,
    /// `UNIQUE`
    Unique,
    /// `PRIMARY KEY`
    #[serde(alias = "PRIMARY KEY")]
    PrimaryKey,
}

impl ColumnConstraint {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::NotNull => "NOT NULL",
            Self::Unique => "UNIQUE",
            Self::PrimaryKey => "PRIMARY KEY",
        }
    }
}

/// Definition of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Data type.
    #[serde(rename = "type")]
    pub data_type: ColumnType,
    /// Constraints, rendered in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<ColumnConstraint>,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<SqlValue>,
}

impl ColumnDef {
    /// Creates a column without constraints or default.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            constraints: Vec::new(),
            default: None,
        }
    }

    /// Adds a constraint.
    #[must_use]
    pub fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Adds `NOT NULL`.
    #[must_use]
    pub fn not_null(self) -> Self {
        self.constraint(ColumnConstraint::NotNull)
    }

    /// Adds `UNIQUE`.
    #[must_use]
    pub fn unique(self) -> Self {
        self.constraint(ColumnConstraint::Unique)
    }

    /// Adds `PRIMARY KEY`.
    #[must_use]
    pub fn primary_key(self) -> Self {
        self.constraint(ColumnConstraint::PrimaryKey)
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value<V: ToSqlValue>(mut self, value: V) -> Self {
        self.default = Some(value.to_sql_value());
        self
    }

    /// Returns the column definition as used in `CREATE TABLE`:
    /// `name TYPE[ CONSTRAINT...][ DEFAULT value]`.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.as_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        if let Some(default) = &self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(&default.to_sql_literal());
        }
        sql
    }
}

/// The ordered column map of a table.
///
/// Column names are unique; adding a column with an existing name replaces
/// its definition in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Columns {
    columns: Vec<ColumnDef>,
}

impl Columns {
    /// Creates an empty column map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Adds a column.
    #[must_use]
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.insert(column);
        self
    }

    /// Adds or replaces a column.
    pub fn insert(&mut self, column: ColumnDef) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the column names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Iterates over the columns in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDef> {
        self.columns.iter()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no columns are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<ColumnDef> for Columns {
    fn from_iter<I: IntoIterator<Item = ColumnDef>>(iter: I) -> Self {
        let mut columns = Self::new();
        for column in iter {
            columns.insert(column);
        }
        columns
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a ColumnDef;
    type IntoIter = std::slice::Iter<'a, ColumnDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_sql_plain() {
        assert_eq!(
            ColumnDef::new("name", ColumnType::Text).to_sql(),
            "name TEXT"
        );
    }

    #[test]
    fn test_column_sql_constraints_and_default() {
        let column = ColumnDef::new("id", ColumnType::Text)
            .primary_key()
            .unique();
        assert_eq!(column.to_sql(), "id TEXT PRIMARY KEY UNIQUE");

        let verified = ColumnDef::new("verified", ColumnType::Boolean).default_value(false);
        assert_eq!(verified.to_sql(), "verified BOOLEAN DEFAULT FALSE");

        let title = ColumnDef::new("title", ColumnType::Text)
            .not_null()
            .default_value("it's new");
        assert_eq!(title.to_sql(), "title TEXT NOT NULL DEFAULT 'it''s new'");
    }

    #[test]
    fn test_columns_replace_duplicate_name() {
        let columns = Columns::new()
            .column(ColumnDef::new("a", ColumnType::Text))
            .column(ColumnDef::new("b", ColumnType::Integer))
            .column(ColumnDef::new("a", ColumnType::Real));
        assert_eq!(columns.names(), vec!["a", "b"]);
        assert_eq!(columns.get("a").unwrap().data_type, ColumnType::Real);
    }

    #[test]
    fn test_deserialize_columns() {
        let columns: Columns = serde_json::from_str(
            r#"[
                {"name": "id", "type": "TEXT", "constraints": ["PRIMARY_KEY", "UNIQUE"]},
                {"name": "age", "type": "INTEGER"},
                {"name": "verified", "type": "BOOLEAN", "default": false}
            ]"#,
        )
        .unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(
            columns.get("id").unwrap().to_sql(),
            "id TEXT PRIMARY KEY UNIQUE"
        );
        assert_eq!(
            columns.get("verified").unwrap().default,
            Some(SqlValue::Bool(false))
        );
    }

    #[test]
    fn test_deserialize_sql_spelled_constraints() {
        let column: ColumnDef = serde_json::from_str(
            r#"{"name": "id", "type": "INTEGER", "constraints": ["PRIMARY KEY", "NOT NULL"]}"#,
        )
        .unwrap();
        assert_eq!(
            column.constraints,
            vec![ColumnConstraint::PrimaryKey, ColumnConstraint::NotNull]
        );
    }
}
