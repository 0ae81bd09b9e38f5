//! Table operations against in-memory SQLite.

mod common;
use common::*;

use ink_orm::{
    Comparators, ConstraintKind, Database, Order, OrmError, Predicate, QueryOptions, Row,
    SqlValue,
};
use serde_json::json;

// ===================================================================
// select
// ===================================================================

#[tokio::test]
async fn select_all_rows() {
    let (_db, table) = students().await;
    let rows = table.select(&by_name()).await.unwrap();
    assert_eq!(names(&rows), vec!["Ada", "Bob", "Cy", "Dee", "John Doe"]);
}

#[tokio::test]
async fn select_keeps_column_order_and_types() {
    let (_db, table) = students().await;
    let rows = table
        .select(&QueryOptions::new().filter(Predicate::new().eq("name", "Ada")))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let ada = &rows[0];
    assert_eq!(ada.columns(), vec!["name", "age", "gpa", "money", "verified"]);
    assert_eq!(ada.get("age"), Some(&SqlValue::Int(17)));
    assert_eq!(ada.get("gpa"), Some(&SqlValue::Float(3.9)));
    assert_eq!(ada.get("verified"), Some(&SqlValue::Bool(true)));
}

#[tokio::test]
async fn select_columns_order_and_limit() {
    let (_db, table) = students().await;
    let options = QueryOptions::new()
        .columns(&["name", "age"])
        .order_by("age", Order::Desc)
        .limit(2);
    let rows = table.select(&options).await.unwrap();
    assert_eq!(names(&rows), vec!["Dee", "Cy"]);
    assert_eq!(rows[0].columns(), vec!["name", "age"]);
}

#[tokio::test]
async fn select_with_comparators() {
    let (_db, table) = students().await;
    let options = by_name().filter(
        Predicate::new().column("age", Comparators::new().gte(19).lt(23)),
    );
    let rows = table.select(&options).await.unwrap();
    assert_eq!(names(&rows), vec!["Bob", "Cy", "John Doe"]);
}

#[tokio::test]
async fn select_with_json_predicate() {
    let (_db, table) = students().await;
    let predicate = Predicate::from_json(&json!({
        "verified": false,
        "$or": [{ "age": { "$lt": 18 } }, { "gpa": { "$gte": 3.5 } }]
    }))
    .unwrap();
    let rows = table.select(&by_name().filter(predicate)).await.unwrap();
    assert_eq!(names(&rows), vec!["Dee", "John Doe"]);
}

#[tokio::test]
async fn select_with_negation() {
    let (_db, table) = students().await;
    let predicate = Predicate::from_json(&json!({
        "money": { "$not": { "$gte": 1000 } }
    }))
    .unwrap();
    let rows = table.select(&by_name().filter(predicate)).await.unwrap();
    assert_eq!(names(&rows), vec!["Bob", "Dee"]);
}

#[tokio::test]
async fn select_with_negated_disjunction() {
    let (_db, table) = students().await;
    let predicate = Predicate::from_json(&json!({
        "name": { "$not": { "$or": [{ "age": 17 }, { "age": 23 }] } }
    }))
    .unwrap();
    let rows = table.select(&by_name().filter(predicate)).await.unwrap();
    assert_eq!(names(&rows), vec!["Bob", "Cy", "John Doe"]);
}

#[tokio::test]
async fn select_combined_example() {
    let (_db, table) = students().await;
    let predicate = Predicate::from_json(&json!({
        "age": { "$gte": 17, "$lt": 23 },
        "$or": [
            { "money": { "$not": { "$not": { "$gte": 1000 } } } },
            { "name": { "$neq": "John Doe" } }
        ]
    }))
    .unwrap();
    let rows = table.select(&by_name().filter(predicate)).await.unwrap();
    assert_eq!(names(&rows), vec!["Ada", "Bob", "Cy", "John Doe"]);
}

// ===================================================================
// insert / update / delete
// ===================================================================

#[tokio::test]
async fn insert_applies_defaults() {
    let (_db, table) = todos().await;
    table
        .insert(&Row::new().set("id", 1).set("title", "Buy milk"))
        .await
        .unwrap();
    let rows = table.select(&QueryOptions::new()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("done"), Some(&SqlValue::Bool(false)));
}

#[tokio::test]
async fn insert_binds_hostile_text() {
    let (_db, table) = todos().await;
    let hostile = "'); DROP TABLE todos; --";
    table
        .insert(&Row::new().set("id", 1).set("title", hostile))
        .await
        .unwrap();

    let rows = table
        .select(&QueryOptions::new().filter(Predicate::new().eq("title", hostile)))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("title"), Some(&SqlValue::Text(hostile.to_string())));
}

#[tokio::test]
async fn update_returns_rows_affected() {
    let (_db, table) = students().await;
    let changed = table
        .update(
            &Row::new().set("verified", true).set("money", 0),
            &QueryOptions::new().filter(Predicate::new().eq("verified", false)),
        )
        .await
        .unwrap();
    assert_eq!(changed, 3);
    assert_eq!(
        table
            .count(Some(&Predicate::new().eq("verified", true)))
            .await
            .unwrap(),
        5
    );
}

#[tokio::test]
async fn update_without_filter_changes_every_row() {
    let (_db, table) = students().await;
    let changed = table
        .update(&Row::new().set("gpa", 2.0), &QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(changed, 5);
    assert_eq!(table.sum("gpa", None).await.unwrap(), SqlValue::Float(10.0));
}

#[tokio::test]
async fn update_binds_hostile_text_in_inline_mode() {
    let (_db, table) = todos().await;
    let table = table.with_render_mode(ink_orm::RenderMode::Inline);
    table
        .insert(&Row::new().set("id", 1).set("title", "x"))
        .await
        .unwrap();
    let hostile = "x'; DELETE FROM todos; --";
    table
        .update(
            &Row::new().set("title", hostile),
            &QueryOptions::new().filter(Predicate::new().eq("id", 1)),
        )
        .await
        .unwrap();
    let rows = table.select(&QueryOptions::new()).await.unwrap();
    assert_eq!(rows[0].get("title"), Some(&SqlValue::Text(hostile.to_string())));
}

#[tokio::test]
async fn delete_with_filter() {
    let (_db, table) = students().await;
    let removed = table
        .delete(&QueryOptions::new().filter(
            Predicate::new().column("age", Comparators::new().gt(20)),
        ))
        .await
        .unwrap();
    assert_eq!(removed, 2);
    let rows = table.select(&by_name()).await.unwrap();
    assert_eq!(names(&rows), vec!["Ada", "Bob", "John Doe"]);
}

#[tokio::test]
async fn delete_without_filter_removes_everything() {
    let (_db, table) = students().await;
    let removed = table
        .delete(&QueryOptions::new().order_by("name", Order::Asc).limit(1))
        .await
        .unwrap();
    assert_eq!(removed, 5);
    assert_eq!(table.count(None).await.unwrap(), 0);
}

// ===================================================================
// sum / count
// ===================================================================

#[tokio::test]
async fn sum_with_filter() {
    let (_db, table) = students().await;
    let total = table
        .sum(
            "money",
            Some(&Predicate::new().column("age", Comparators::new().lt(20))),
        )
        .await
        .unwrap();
    assert_eq!(total, SqlValue::Int(1700));
}

#[tokio::test]
async fn sum_of_real_column() {
    let (_db, table) = students().await;
    let total = table
        .sum("gpa", Some(&Predicate::new().eq("name", "Ada")))
        .await
        .unwrap();
    assert_eq!(total, SqlValue::Float(3.9));
}

#[tokio::test]
async fn sum_of_no_rows_is_zero() {
    let (_db, table) = students().await;
    let total = table
        .sum("money", Some(&Predicate::new().eq("name", "Nobody")))
        .await
        .unwrap();
    assert_eq!(total, SqlValue::Int(0));

    let (_db, empty) = todos().await;
    assert_eq!(empty.sum("id", None).await.unwrap(), SqlValue::Int(0));
}

#[tokio::test]
async fn count_rows() {
    let (_db, table) = students().await;
    assert_eq!(table.count(None).await.unwrap(), 5);
    assert_eq!(
        table
            .count(Some(&Predicate::new().eq("verified", true)))
            .await
            .unwrap(),
        2
    );
}

// ===================================================================
// errors
// ===================================================================

#[tokio::test]
async fn duplicate_primary_key_is_a_constraint_violation() {
    let (_db, table) = students().await;
    let err = table
        .insert(&student("Ada", 30, 1.0, 0, false))
        .await
        .unwrap_err();
    assert!(err.is_engine_error());
    assert_eq!(err.constraint(), Some(ConstraintKind::Unique));
    assert_eq!(table.count(None).await.unwrap(), 5);
}

#[tokio::test]
async fn missing_not_null_column_is_a_constraint_violation() {
    let (_db, table) = todos().await;
    let err = table.insert(&Row::new().set("id", 1)).await.unwrap_err();
    assert_eq!(err.constraint(), Some(ConstraintKind::NotNull));
}

#[tokio::test]
async fn malformed_predicate_sends_nothing() {
    let (_db, table) = students().await;
    let err = table
        .delete(&QueryOptions::new().filter(Predicate::new().any(vec![])))
        .await
        .unwrap_err();
    assert!(matches!(err, OrmError::InvalidPredicate(_)));
    assert!(!err.is_engine_error());
    assert_eq!(table.count(None).await.unwrap(), 5);
}

#[tokio::test]
async fn empty_or_branch_is_rejected_before_the_engine() {
    let (_db, table) = students().await;
    for document in [
        json!({ "$or": [{}, { "name": "Ada" }] }),
        json!({ "name": { "$not": { "$or": [{}] } } }),
    ] {
        let err = Predicate::from_json(&document).unwrap_err();
        assert!(matches!(OrmError::from(err), OrmError::InvalidPredicate(_)));
    }

    let built = Predicate::new().any(vec![Predicate::new(), Predicate::new().eq("name", "Ada")]);
    let err = table
        .select(&QueryOptions::new().filter(built))
        .await
        .unwrap_err();
    assert!(matches!(err, OrmError::InvalidPredicate(_)));
}

#[tokio::test]
async fn unknown_table_is_an_engine_error() {
    let db = Database::open_in_memory().await.unwrap();
    let table = db.table("missing", common::student_columns());
    let err = table.select(&QueryOptions::new()).await.unwrap_err();
    assert!(matches!(err, OrmError::Engine(_)));
}

#[tokio::test]
async fn delete_table_drops_it() {
    let (_db, table) = students().await;
    table.delete_table().await.unwrap();
    assert!(table.select(&QueryOptions::new()).await.is_err());
    // Dropping again is not an error.
    table.delete_table().await.unwrap();
}

#[tokio::test]
async fn create_table_is_idempotent() {
    let (_db, table) = students().await;
    table.create_table().await.unwrap();
    assert_eq!(table.count(None).await.unwrap(), 5);
}
