//! Reading predicates from JSON documents.

use serde_json::{Map, Value};

use super::{Comparators, CompareOp, Condition, Entry, Negation, Predicate, NOT_KEY, OR_KEY};
use crate::error::{PredicateError, Result};
use crate::value::SqlValue;

impl Predicate {
    /// Parses a predicate document such as
    /// `{"age": {"$gte": 17}, "$or": [{"name": "Ada"}]}`.
    ///
    /// Key order is preserved, so the compiled clause follows the document.
    ///
    /// # Errors
    ///
    /// Returns [`PredicateError::InvalidShape`] when the document is not an
    /// object, uses an operator outside a column, has an empty or
    /// non-array `$or`, or gives a column a value that is neither a
    /// literal nor a well-formed comparator set.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(PredicateError::shape(format!(
                "predicate must be an object, got {value}"
            )));
        };
        parse_predicate(map)
    }
}

impl TryFrom<&Value> for Predicate {
    type Error = PredicateError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl TryFrom<Value> for Predicate {
    type Error = PredicateError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(&value)
    }
}

fn parse_predicate(map: &Map<String, Value>) -> Result<Predicate> {
    let mut predicate = Predicate::new();
    for (key, value) in map {
        let entry = if key == OR_KEY {
            Entry::Or(parse_branches(value)?)
        } else if key.starts_with('$') {
            return Err(PredicateError::shape(format!(
                "operator `{key}` must be nested under a column"
            )));
        } else {
            Entry::Column {
                name: key.clone(),
                condition: parse_condition(key, value)?,
            }
        };
        predicate = predicate.with_entry(entry);
    }
    Ok(predicate)
}

fn parse_branches(value: &Value) -> Result<Vec<Predicate>> {
    let Value::Array(items) = value else {
        return Err(PredicateError::shape("`$or` must hold an array of predicates"));
    };
    if items.is_empty() {
        return Err(PredicateError::shape("`$or` must not be empty"));
    }
    items
        .iter()
        .map(|item| match item {
            Value::Object(map) if map.is_empty() => {
                Err(PredicateError::shape("`$or` branch must not be empty"))
            }
            Value::Object(map) => parse_predicate(map),
            other => Err(PredicateError::shape(format!(
                "`$or` branch must be an object, got {other}"
            ))),
        })
        .collect()
}

fn parse_condition(column: &str, value: &Value) -> Result<Condition> {
    match value {
        Value::Object(map) => Ok(Condition::Comparators(parse_comparators(column, map)?)),
        other => Ok(Condition::Literal(parse_literal(column, other)?)),
    }
}

fn parse_comparators(column: &str, map: &Map<String, Value>) -> Result<Comparators> {
    if map.is_empty() {
        return Err(PredicateError::shape(format!(
            "column `{column}` has an empty operator set"
        )));
    }

    let mut set = Comparators::new();
    for (key, value) in map {
        if key == NOT_KEY {
            set = match value {
                Value::Object(inner) if is_disjunction(inner) => {
                    set.not_any(parse_branches(&inner[OR_KEY])?)
                }
                Value::Object(inner) => set.not(parse_comparators(column, inner)?),
                other => {
                    return Err(PredicateError::shape(format!(
                        "`$not` on column `{column}` must hold an object, got {other}"
                    )))
                }
            };
        } else if let Some(op) = CompareOp::from_key(key) {
            set = set.compare(op, parse_literal(column, value)?);
        } else {
            return Err(PredicateError::shape(format!(
                "unknown operator `{key}` on column `{column}`"
            )));
        }
    }
    Ok(set)
}

fn is_disjunction(map: &Map<String, Value>) -> bool {
    map.len() == 1 && map.contains_key(OR_KEY)
}

fn parse_literal(column: &str, value: &Value) -> Result<SqlValue> {
    match value {
        Value::Bool(b) => Ok(SqlValue::Bool(*b)),
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        Value::Number(n) => n
            .as_i64()
            .map(SqlValue::Int)
            .or_else(|| n.as_f64().map(SqlValue::Float))
            .ok_or_else(|| {
                PredicateError::shape(format!("number {n} on column `{column}` is out of range"))
            }),
        other => Err(PredicateError::shape(format!(
            "column `{column}` must hold a string, number, boolean or operator set, got {other}"
        ))),
    }
}
