//! Structured where-predicates.
//!
//! A predicate is a map of columns to conditions. Entries of one map are
//! combined with AND, the branches of an `$or` entry with OR. Each column
//! either carries a literal (implicit equality) or a set of comparison
//! operators, which may itself contain one negated set.
//!
//! ```rust
//! use ink_sql_core::predicate::{Comparators, Predicate};
//!
//! // { age: { $gte: 17, $lt: 23 }, $or: [{ name: "Ada" }, { gpa: 4 }] }
//! let predicate = Predicate::new()
//!     .column("age", Comparators::new().gte(17).lt(23))
//!     .any(vec![Predicate::new().eq("name", "Ada"), Predicate::new().eq("gpa", 4)]);
//!
//! assert_eq!(predicate.len(), 2);
//! ```
//!
//! The same shape can be read from JSON with [`Predicate::from_json`].

mod json;

use std::fmt;

use crate::value::{SqlValue, ToSqlValue};

/// Reserved key of a disjunction entry.
pub const OR_KEY: &str = "$or";
/// Reserved key of a negated comparator set.
pub const NOT_KEY: &str = "$not";

/// Comparison operators available inside a comparator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Equal (`$eq`, `=`)
    Eq,
    /// Not equal (`$neq`, `!=`)
    Neq,
    /// Less than (`$lt`, `<`)
    Lt,
    /// Less than or equal (`$lte`, `<=`)
    Lte,
    /// Greater than (`$gt`, `>`)
    Gt,
    /// Greater than or equal (`$gte`, `>=`)
    Gte,
}

impl CompareOp {
    /// All operators, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Eq,
        Self::Neq,
        Self::Lt,
        Self::Lte,
        Self::Gt,
        Self::Gte,
    ];

    /// Returns the SQL symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }

    /// Returns the document key (`$eq`, `$neq`, ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Eq => "$eq",
            Self::Neq => "$neq",
            Self::Lt => "$lt",
            Self::Lte => "$lte",
            Self::Gt => "$gt",
            Self::Gte => "$gte",
        }
    }

    /// Looks up an operator by its document key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A conjunction map: entries are AND-ed in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predicate {
    entries: Vec<Entry>,
}

/// One entry of a [`Predicate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A column and the condition applied to it.
    Column {
        /// Column name.
        name: String,
        /// Condition on the column.
        condition: Condition,
    },
    /// The `$or` entry: branches are OR-ed.
    Or(Vec<Predicate>),
}

/// Condition attached to a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Literal value, sugar for `$eq`.
    Literal(SqlValue),
    /// A set of comparison operators.
    Comparators(Comparators),
}

/// A comparator set: entries are AND-ed in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparators {
    entries: Vec<ComparatorEntry>,
}

/// One entry of a [`Comparators`] set.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparatorEntry {
    /// `column <op> value`
    Compare(CompareOp, SqlValue),
    /// `$not`
    Not(Negation),
}

/// Payload of a `$not` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Negation {
    /// A nested comparator set on the same column.
    Comparators(Box<Comparators>),
    /// A nested disjunction.
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Creates an empty predicate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds `column = value`.
    #[must_use]
    pub fn eq<V: ToSqlValue>(self, column: &str, value: V) -> Self {
        self.with_entry(Entry::Column {
            name: column.to_string(),
            condition: Condition::Literal(value.to_sql_value()),
        })
    }

    /// Adds a comparator set for `column`.
    #[must_use]
    pub fn column(self, column: &str, comparators: Comparators) -> Self {
        self.with_entry(Entry::Column {
            name: column.to_string(),
            condition: Condition::Comparators(comparators),
        })
    }

    /// Adds an `$or` entry with the given branches.
    #[must_use]
    pub fn any(self, branches: Vec<Self>) -> Self {
        self.with_entry(Entry::Or(branches))
    }

    /// Appends a raw entry.
    #[must_use]
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the predicate has no entries.
    ///
    /// An empty predicate still compiles (to `()`); statement assembly
    /// treats it as absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Comparators {
    /// Creates an empty comparator set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds `$eq`.
    #[must_use]
    pub fn eq<V: ToSqlValue>(self, value: V) -> Self {
        self.compare(CompareOp::Eq, value)
    }

    /// Adds `$neq`.
    #[must_use]
    pub fn neq<V: ToSqlValue>(self, value: V) -> Self {
        self.compare(CompareOp::Neq, value)
    }

    /// Adds `$lt`.
    #[must_use]
    pub fn lt<V: ToSqlValue>(self, value: V) -> Self {
        self.compare(CompareOp::Lt, value)
    }

    /// Adds `$lte`.
    #[must_use]
    pub fn lte<V: ToSqlValue>(self, value: V) -> Self {
        self.compare(CompareOp::Lte, value)
    }

    /// Adds `$gt`.
    #[must_use]
    pub fn gt<V: ToSqlValue>(self, value: V) -> Self {
        self.compare(CompareOp::Gt, value)
    }

    /// Adds `$gte`.
    #[must_use]
    pub fn gte<V: ToSqlValue>(self, value: V) -> Self {
        self.compare(CompareOp::Gte, value)
    }

    /// Adds an operator entry.
    #[must_use]
    pub fn compare<V: ToSqlValue>(mut self, op: CompareOp, value: V) -> Self {
        self.entries
            .push(ComparatorEntry::Compare(op, value.to_sql_value()));
        self
    }

    /// Adds `$not` over a nested comparator set.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self, inner: Self) -> Self {
        self.entries
            .push(ComparatorEntry::Not(Negation::Comparators(Box::new(inner))));
        self
    }

    /// Adds `$not` over a disjunction.
    #[must_use]
    pub fn not_any(mut self, branches: Vec<Predicate>) -> Self {
        self.entries.push(ComparatorEntry::Not(Negation::Or(branches)));
        self
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ComparatorEntry] {
        &self.entries
    }

    /// Returns true if the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_keys_round_trip() {
        for op in CompareOp::ALL {
            assert_eq!(CompareOp::from_key(op.key()), Some(op));
        }
        assert_eq!(CompareOp::from_key("$not"), None);
        assert_eq!(CompareOp::from_key("$like"), None);
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(CompareOp::Neq.to_string(), "!=");
        assert_eq!(CompareOp::Lte.symbol(), "<=");
    }

    #[test]
    fn test_builder_keeps_insertion_order() {
        let predicate = Predicate::new()
            .any(vec![Predicate::new().eq("a", 1)])
            .eq("b", 2);
        assert!(matches!(predicate.entries()[0], Entry::Or(_)));
        assert!(matches!(
            &predicate.entries()[1],
            Entry::Column { name, .. } if name == "b"
        ));
    }

    #[test]
    fn test_comparators_builder() {
        let set = Comparators::new().gte(17).not(Comparators::new().eq(20));
        assert_eq!(set.entries().len(), 2);
        assert_eq!(
            set.entries()[0],
            ComparatorEntry::Compare(CompareOp::Gte, SqlValue::Int(17))
        );
        assert!(matches!(
            set.entries()[1],
            ComparatorEntry::Not(Negation::Comparators(_))
        ));
    }

    #[test]
    fn test_empty_predicate() {
        assert!(Predicate::new().is_empty());
        assert!(!Predicate::new().eq("a", 1).is_empty());
    }
}
