//! Ordered rows of column values.

use crate::value::{SqlValue, ToSqlValue};

/// A row: column names mapped to values, in insertion order.
///
/// Used for rows to insert, for the SET part of updates, and for rows
/// read back from the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<(String, SqlValue)>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Sets a column value, builder style.
    #[must_use]
    pub fn set<V: ToSqlValue>(mut self, column: &str, value: V) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets a column value. An existing column keeps its position.
    pub fn insert<V: ToSqlValue>(&mut self, column: &str, value: V) {
        let value = value.to_sql_value();
        match self.values.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((column.to_string(), value)),
        }
    }

    /// Returns the value of a column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value of a column.
    pub fn get_mut(&mut self, column: &str) -> Option<&mut SqlValue> {
        self.values
            .iter_mut()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.values.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns the values in column order.
    #[must_use]
    pub fn values(&self) -> Vec<&SqlValue> {
        self.values.iter().map(|(_, value)| value).collect()
    }

    /// Iterates over `(column, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (S, SqlValue)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.insert(&column.into(), value);
        }
        row
    }
}
