#![allow(dead_code)]

use ink_orm::{Database, QueryOptions, SqlValue};

pub const CREATE_LOG: &str = "CREATE TABLE log (id INTEGER PRIMARY KEY AUTOINCREMENT, entry TEXT)";

pub fn log(entry: &str) -> String {
    format!("INSERT INTO log (entry) VALUES ('{entry}')")
}

/// Returns the `log` entries in insertion order.
pub async fn entries(db: &Database) -> Vec<String> {
    let mut tx = db.begin().await.unwrap();
    let rows = tx
        .fetch_all("SELECT entry FROM log ORDER BY id ASC", &[])
        .await
        .unwrap();
    tx.commit().await.unwrap();
    rows.iter()
        .map(|row| match row.get("entry") {
            Some(SqlValue::Text(entry)) => entry.clone(),
            other => panic!("unexpected entry: {other:?}"),
        })
        .collect()
}

/// Returns whether `table` exists.
pub async fn table_exists(db: &Database, table: &str) -> bool {
    db.table(table, ink_orm::Columns::new())
        .select(&QueryOptions::new().limit(0))
        .await
        .is_ok()
}
