#![allow(dead_code)]

use ink_sql_core::compiler::{compile, CompiledClause, RenderMode};
use ink_sql_core::predicate::Predicate;
use ink_sql_core::SqlValue;
use regex::Regex;
use serde_json::Value;

pub fn parse(document: &Value) -> Predicate {
    Predicate::from_json(document)
        .unwrap_or_else(|e| panic!("Failed to parse: {document}\nError: {e}"))
}

pub fn compile_json(document: &Value, mode: RenderMode) -> CompiledClause {
    compile(&parse(document), mode)
        .unwrap_or_else(|e| panic!("Failed to compile: {document}\nError: {e}"))
}

/// Asserts that `actual` is `expected` wrapped in any number of outer
/// parentheses.
pub fn assert_clause(actual: &str, expected: &str) {
    let pattern = format!(r"^\(*{}\)*$", regex::escape(expected));
    let re = Regex::new(&pattern).unwrap();
    assert!(
        re.is_match(actual),
        "Clause mismatch.\n  Expected (mod outer parens): {expected}\n  Actual:                      {actual}"
    );
}

/// Compiles `document` in parameterized mode and checks text and params.
pub fn assert_compiles(document: &Value, expected: &str, params: &[SqlValue]) {
    let clause = compile_json(document, RenderMode::Parameterized);
    assert_clause(&clause.sql, expected);
    assert_eq!(clause.params, params, "Parameter mismatch for {document}");
}

pub fn int(n: i64) -> SqlValue {
    SqlValue::Int(n)
}

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}
