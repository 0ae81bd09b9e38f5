//! UPDATE statement builder.

use super::{assemble, QueryOptions};
use crate::compiler::RenderMode;
use crate::error::Result;
use crate::row::Row;
use crate::value::SqlValue;

/// Builds `UPDATE <table> SET col = ?[, ...]` followed by the query options.
///
/// SET values are always bound as parameters, whatever the render mode of
/// the where-clause. ORDER BY and LIMIT are passed through unchanged; not
/// every engine accepts them on UPDATE.
#[derive(Debug, Clone, Copy)]
pub struct Update<'a> {
    table: &'a str,
    set: &'a Row,
    options: &'a QueryOptions,
    mode: RenderMode,
}

impl<'a> Update<'a> {
    /// Creates an UPDATE builder for `table`.
    #[must_use]
    pub const fn new(table: &'a str, set: &'a Row, options: &'a QueryOptions) -> Self {
        Self {
            table,
            set,
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

    /// Builds the statement and returns SQL with parameters. SET values
    /// come first in the parameter list.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is malformed.
    pub fn build(self) -> Result<(String, Vec<SqlValue>)> {
        let assignments: Vec<String> = self
            .set
            .columns()
            .into_iter()
            .map(|column| format!("{column} = ?"))
            .collect();
        let base = format!("UPDATE {} SET {}", self.table, assignments.join(", "));

        let (sql, where_params) = assemble(&base, self.options, self.mode)?;
        let mut params: Vec<SqlValue> = self.set.values().into_iter().cloned().collect();
        params.extend(where_params);
        Ok((sql, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;

    #[test]
    fn test_update_with_where() {
        let set = Row::new().set("done", true).set("title", "Walk dog");
        let options = QueryOptions::new().filter(Predicate::new().eq("id", "a1"));
        let (sql, params) = Update::new("todos", &set, &options).build().unwrap();
        assert_eq!(sql, "UPDATE todos SET done = ?, title = ? WHERE (id = ?)");
        assert_eq!(
            params,
            vec![
                SqlValue::Bool(true),
                SqlValue::Text(String::from("Walk dog")),
                SqlValue::Text(String::from("a1")),
            ]
        );
    }

    #[test]
    fn test_update_set_values_stay_bound_in_inline_mode() {
        let set = Row::new().set("title", "'; DROP TABLE todos; --");
        let options = QueryOptions::new().filter(Predicate::new().eq("id", 7));
        let (sql, params) = Update::new("todos", &set, &options)
            .mode(RenderMode::Inline)
            .build()
            .unwrap();
        assert_eq!(sql, "UPDATE todos SET title = ? WHERE (id = 7)");
        assert_eq!(
            params,
            vec![SqlValue::Text(String::from("'; DROP TABLE todos; --"))]
        );
    }

    #[test]
    fn test_update_passes_limit_through() {
        let set = Row::new().set("n", 0);
        let options = QueryOptions::new().limit(1);
        let (sql, _) = Update::new("counters", &set, &options).build().unwrap();
        assert_eq!(sql, "UPDATE counters SET n = ? LIMIT 1");
    }
}
