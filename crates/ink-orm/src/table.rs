//! The table engine.
//!
//! Every operation on a [`Table`] runs in its own transaction, which is
//! committed when the operation succeeds and rolled back otherwise.

use tracing::{info, warn};

use ink_sql_core::builder::{
    Aggregate, AggregateSelect, CreateTable, Delete, DropTable, Insert, Select, Update,
};
use ink_sql_core::{ColumnType, Columns, Predicate, QueryOptions, RenderMode, Row, SqlValue};

use crate::database::Database;
use crate::error::Result;

/// A table: a name plus its ordered column declarations.
#[derive(Debug, Clone)]
pub struct Table {
    db: Database,
    name: String,
    columns: Columns,
    mode: RenderMode,
}

impl Table {
    pub(crate) fn new(db: Database, name: &str, columns: Columns) -> Self {
        Self {
            db,
            name: name.to_string(),
            columns,
            mode: RenderMode::default(),
        }
    }

    /// Sets how where-clause operands are rendered.
    ///
    /// [`RenderMode::Inline`] writes operands into the clause text without
    /// escaping. Only use it with trusted predicates.
    #[must_use]
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column declarations.
    #[must_use]
    pub const fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Returns the render mode of where-clauses.
    #[must_use]
    pub const fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Creates the table if it does not exist.
    pub async fn create_table(&self) -> Result<()> {
        let sql = CreateTable::new(&self.name, &self.columns).build();
        self.execute(&sql, &[]).await?;
        info!(table = %self.name, "Created table");
        Ok(())
    }

    /// Drops the table if it exists.
    pub async fn delete_table(&self) -> Result<()> {
        let sql = DropTable::new(&self.name).build();
        self.execute(&sql, &[]).await?;
        info!(table = %self.name, "Dropped table");
        Ok(())
    }

    /// Returns the rows matching `options`.
    ///
    /// Values of `BOOLEAN` columns are returned as booleans.
    pub async fn select(&self, options: &QueryOptions) -> Result<Vec<Row>> {
        let (sql, params) = Select::new(&self.name, options).mode(self.mode).build()?;
        let mut tx = self.db.begin().await?;
        let mut rows = tx.fetch_all(&sql, &params).await?;
        tx.commit().await?;

        for row in &mut rows {
            self.restore_booleans(row);
        }
        Ok(rows)
    }

    /// Inserts a row. Values are always bound.
    pub async fn insert(&self, row: &Row) -> Result<()> {
        let (sql, params) = Insert::new(&self.name, row).build();
        self.execute(&sql, &params).await?;
        Ok(())
    }

    /// Assigns the columns of `set` on every row matching `options` and
    /// returns the number of rows changed. Assigned values are always bound.
    pub async fn update(&self, set: &Row, options: &QueryOptions) -> Result<u64> {
        let (sql, params) = Update::new(&self.name, set, options)
            .mode(self.mode)
            .build()?;
        self.execute(&sql, &params).await
    }

    /// Deletes the rows matching the filter of `options` and returns how
    /// many were removed. Without a filter every row is deleted.
    ///
    /// Column selection, ordering and limit are ignored.
    pub async fn delete(&self, options: &QueryOptions) -> Result<u64> {
        let (sql, params) = Delete::new(&self.name)
            .filter(options.filter.as_ref())
            .mode(self.mode)
            .build()?;
        self.execute(&sql, &params).await
    }

    /// Sums `column` over the rows matching `filter`. An empty match sums
    /// to `0`.
    pub async fn sum(&self, column: &str, filter: Option<&Predicate>) -> Result<SqlValue> {
        let aggregate = Aggregate::sum(column);
        let value = self.aggregate(&aggregate, filter).await?;
        Ok(match value {
            None | Some(SqlValue::Null) => SqlValue::Int(0),
            Some(value) => value,
        })
    }

    /// Counts the rows matching `filter`.
    pub async fn count(&self, filter: Option<&Predicate>) -> Result<i64> {
        let value = self.aggregate(&Aggregate::Count, filter).await?;
        Ok(value.and_then(|v| v.as_i64()).unwrap_or(0))
    }

    async fn aggregate(
        &self,
        aggregate: &Aggregate,
        filter: Option<&Predicate>,
    ) -> Result<Option<SqlValue>> {
        let (sql, params) = AggregateSelect::new(&self.name, aggregate)
            .filter(filter)
            .mode(self.mode)
            .build()?;
        let mut tx = self.db.begin().await?;
        let value = tx.fetch_scalar(&sql, &params).await?;
        tx.commit().await?;
        Ok(value)
    }

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        let mut tx = self.db.begin().await?;
        let affected = match tx.execute(sql, params).await {
            Ok(affected) => affected,
            Err(err) => {
                warn!(table = %self.name, error = %err, "Operation failed, rolling back");
                return Err(err);
            }
        };
        tx.commit().await?;
        Ok(affected)
    }

    fn restore_booleans(&self, row: &mut Row) {
        for column in &self.columns {
            if column.data_type != ColumnType::Boolean {
                continue;
            }
            if let Some(value) = row.get_mut(&column.name) {
                if let SqlValue::Int(i) = *value {
                    *value = SqlValue::Bool(i != 0);
                }
            }
        }
    }
}
