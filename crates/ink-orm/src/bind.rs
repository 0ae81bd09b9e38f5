//! Parameter binding and row decoding for SQLite.

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row as _, Sqlite, TypeInfo, ValueRef};

use ink_sql_core::{Row, SqlValue};

use crate::error::Result;

/// Binds every parameter of a compiled statement, in order.
pub(crate) fn bind_all<'q>(
    sql: &'q str,
    params: &[SqlValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    params
        .iter()
        .cloned()
        .fold(sqlx::query(sql), bind_param)
}

/// Binds a single value to a raw query.
fn bind_param<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}

/// Converts an engine row into a [`Row`], keeping the column order of the
/// result set. Values are decoded by their storage class.
pub(crate) fn decode_row(row: &SqliteRow) -> Result<Row> {
    let mut decoded = Row::new();
    for (index, column) in row.columns().iter().enumerate() {
        let value = decode_value(row, index)?;
        decoded.insert(sqlx::Column::name(column), value);
    }
    Ok(decoded)
}

fn decode_value(row: &SqliteRow, index: usize) -> Result<SqlValue> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }
    let storage = raw.type_info().name().to_ascii_uppercase();

    let value = match storage.as_str() {
        "INTEGER" | "BOOLEAN" => SqlValue::Int(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" => SqlValue::Float(row.try_get_unchecked::<f64, _>(index)?),
        "BLOB" => SqlValue::Blob(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        _ => SqlValue::Text(row.try_get_unchecked::<String, _>(index)?),
    };
    Ok(value)
}
