//! Predicate compiler.
//!
//! Turns a [`Predicate`] into a parenthesized boolean expression plus the
//! ordered list of values bound to its placeholders. Compilation is a
//! recursive descent over the predicate, depth-first and left to right in
//! entry order; parameters are collected in the same order, so the n-th
//! `?` in the text binds the n-th parameter.
//!
//! ```rust
//! use ink_sql_core::compiler::{compile, RenderMode};
//! use ink_sql_core::predicate::{Comparators, Predicate};
//!
//! let predicate = Predicate::new().column("age", Comparators::new().gte(17).lt(23));
//! let clause = compile(&predicate, RenderMode::Parameterized).unwrap();
//! assert_eq!(clause.sql, "(age >= ? AND age < ?)");
//! assert_eq!(clause.params.len(), 2);
//! ```

use crate::error::{PredicateError, Result};
use crate::predicate::{ComparatorEntry, Comparators, Condition, Entry, Negation, Predicate};
use crate::value::SqlValue;

/// How operands are written into the clause text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Every operand becomes a `?` placeholder and its value is returned
    /// in [`CompiledClause::params`].
    #[default]
    Parameterized,
    /// Legacy mode: operands are written into the text and no parameters
    /// are returned.
    ///
    /// **Warning**: strings are wrapped in single quotes without any
    /// escaping, so a value containing `'` changes the statement. Only use
    /// this with trusted values.
    Inline,
}

/// A compiled where-clause.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledClause {
    /// Boolean expression, wrapped in one pair of parentheses.
    pub sql: String,
    /// Bound values, in placeholder order. Empty in [`RenderMode::Inline`].
    pub params: Vec<SqlValue>,
}

impl CompiledClause {
    /// Consumes the clause and returns the SQL and parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}

/// Compiles a predicate.
///
/// An empty predicate compiles to `()`; callers decide whether to emit a
/// WHERE clause at all.
///
/// # Errors
///
/// Returns [`PredicateError::InvalidShape`] for an empty `$or` or `$or`
/// branch, more than one `$or` in a map, an empty comparator set, more than one `$not` in a
/// set, or an operand that is not a string, number or boolean.
pub fn compile(predicate: &Predicate, mode: RenderMode) -> Result<CompiledClause> {
    let mut compiler = Compiler {
        mode,
        params: Vec::new(),
    };
    let sql = compiler.conjunction(predicate)?;
    Ok(CompiledClause {
        sql,
        params: compiler.params,
    })
}

struct Compiler {
    mode: RenderMode,
    params: Vec<SqlValue>,
}

impl Compiler {
    fn conjunction(&mut self, predicate: &Predicate) -> Result<String> {
        let mut chunks = Vec::with_capacity(predicate.len());
        let mut seen_or = false;

        for entry in predicate.entries() {
            match entry {
                Entry::Column {
                    name,
                    condition: Condition::Literal(value),
                } => {
                    let operand = self.operand(name, value)?;
                    chunks.push(format!("{name} = {operand}"));
                }
                Entry::Column {
                    name,
                    condition: Condition::Comparators(set),
                } => chunks.push(self.comparators(name, set)?),
                Entry::Or(branches) => {
                    if seen_or {
                        return Err(PredicateError::shape(
                            "a predicate may contain only one `$or` entry",
                        ));
                    }
                    seen_or = true;
                    chunks.push(self.disjunction(branches)?);
                }
            }
        }

        Ok(format!("({})", chunks.join(" AND ")))
    }

    fn disjunction(&mut self, branches: &[Predicate]) -> Result<String> {
        if branches.is_empty() {
            return Err(PredicateError::shape("`$or` must not be empty"));
        }
        if branches.iter().any(Predicate::is_empty) {
            return Err(PredicateError::shape("`$or` branch must not be empty"));
        }
        let parts = branches
            .iter()
            .map(|branch| self.conjunction(branch))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("({})", parts.join(" OR ")))
    }

    fn comparators(&mut self, column: &str, set: &Comparators) -> Result<String> {
        if set.is_empty() {
            return Err(PredicateError::shape(format!(
                "column `{column}` has an empty operator set"
            )));
        }

        let mut parts = Vec::with_capacity(set.entries().len());
        let mut seen_not = false;

        for entry in set.entries() {
            match entry {
                ComparatorEntry::Compare(op, value) => {
                    let operand = self.operand(column, value)?;
                    parts.push(format!("{column} {op} {operand}"));
                }
                ComparatorEntry::Not(negation) => {
                    if seen_not {
                        return Err(PredicateError::shape(format!(
                            "column `{column}` may contain only one `$not`"
                        )));
                    }
                    seen_not = true;
                    // Same text as compiling `{column: inner}` as its own map.
                    let inner = match negation {
                        Negation::Comparators(inner) => {
                            format!("({})", self.comparators(column, inner)?)
                        }
                        Negation::Or(branches) => format!("({})", self.disjunction(branches)?),
                    };
                    parts.push(format!("NOT {inner}"));
                }
            }
        }

        Ok(parts.join(" AND "))
    }

    fn operand(&mut self, column: &str, value: &SqlValue) -> Result<String> {
        if !value.is_literal() {
            return Err(PredicateError::shape(format!(
                "column `{column}` compares against {value:?}; only strings, finite numbers and booleans are allowed"
            )));
        }
        match self.mode {
            RenderMode::Parameterized => {
                self.params.push(value.clone());
                Ok(String::from("?"))
            }
            RenderMode::Inline => Ok(inline_operand(value)),
        }
    }
}

/// Legacy inline rendering. Strings are quoted but not escaped.
fn inline_operand(value: &SqlValue) -> String {
    match value {
        SqlValue::Text(s) => format!("'{s}'"),
        SqlValue::Bool(b) => b.to_string(),
        SqlValue::Int(n) => n.to_string(),
        SqlValue::Float(f) => f.to_string(),
        other => other.to_sql_literal(),
    }
}
