#![allow(dead_code)]

use ink_orm::{ColumnDef, ColumnType, Columns, Database, Order, QueryOptions, Row, Table};

/// Column declarations of the `students` fixture table.
pub fn student_columns() -> Columns {
    Columns::new()
        .column(ColumnDef::new("name", ColumnType::Text).primary_key())
        .column(ColumnDef::new("age", ColumnType::Integer).not_null())
        .column(ColumnDef::new("gpa", ColumnType::Real))
        .column(ColumnDef::new("money", ColumnType::Integer).default_value(0))
        .column(ColumnDef::new("verified", ColumnType::Boolean).default_value(false))
}

pub fn student(name: &str, age: i64, gpa: f64, money: i64, verified: bool) -> Row {
    Row::new()
        .set("name", name)
        .set("age", age)
        .set("gpa", gpa)
        .set("money", money)
        .set("verified", verified)
}

/// Creates an in-memory database holding the populated `students` table.
pub async fn students() -> (Database, Table) {
    let db = Database::open_in_memory().await.unwrap();
    let table = db.create_table("students", student_columns()).await.unwrap();
    for row in [
        student("Ada", 17, 3.9, 1500, true),
        student("Bob", 19, 2.5, 200, false),
        student("Cy", 22, 3.1, 1000, true),
        student("Dee", 23, 4.0, 50, false),
        student("John Doe", 20, 3.5, 3000, false),
    ] {
        table.insert(&row).await.unwrap();
    }
    (db, table)
}

/// Creates an in-memory database holding an empty `todos` table.
pub async fn todos() -> (Database, Table) {
    let db = Database::open_in_memory().await.unwrap();
    let table = db
        .create_table(
            "todos",
            Columns::new()
                .column(ColumnDef::new("id", ColumnType::Integer).primary_key())
                .column(ColumnDef::new("title", ColumnType::Text).not_null())
                .column(ColumnDef::new("done", ColumnType::Boolean).default_value(false)),
        )
        .await
        .unwrap();
    (db, table)
}

/// Options ordering by name, so results are deterministic.
pub fn by_name() -> QueryOptions {
    QueryOptions::new().order_by("name", Order::Asc)
}

/// Returns the `name` column of each row.
pub fn names(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_else(|| panic!("row without name: {row:?}"))
                .to_string()
        })
        .collect()
}
