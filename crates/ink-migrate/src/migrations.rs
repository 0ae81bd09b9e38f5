//! Versioned migration batches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalizes a migration statement: surrounding whitespace is trimmed and
/// a trailing `;` is added when missing.
#[must_use]
pub fn sql(statement: &str) -> String {
    let trimmed = statement.trim();
    if trimmed.ends_with(';') {
        trimmed.to_string()
    } else {
        format!("{trimmed};")
    }
}

/// Statement batches keyed by the schema version they migrate from.
///
/// The batch under key `n` upgrades a database at version `n`. In JSON the
/// keys are decimal strings:
///
/// ```rust
/// use ink_migrate::Migrations;
///
/// let migrations: Migrations = serde_json::from_str(r#"{
///     "1": ["ALTER TABLE todos ADD COLUMN due TEXT"],
///     "0": ["CREATE TABLE todos (id INTEGER PRIMARY KEY)"]
/// }"#).unwrap();
///
/// assert_eq!(migrations.versions(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Migrations {
    batches: BTreeMap<u32, Vec<String>>,
}

impl Migrations {
    /// Creates an empty set of migrations.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            batches: BTreeMap::new(),
        }
    }

    /// Adds the batch for `version`, builder style. Statements are
    /// normalized with [`sql`].
    #[must_use]
    pub fn version<I, S>(mut self, version: u32, statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(version, statements);
        self
    }

    /// Adds or replaces the batch for `version`.
    pub fn insert<I, S>(&mut self, version: u32, statements: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch = statements.into_iter().map(|s| sql(s.as_ref())).collect();
        self.batches.insert(version, batch);
    }

    /// Returns the statements of a batch.
    #[must_use]
    pub fn get(&self, version: u32) -> Option<&[String]> {
        self.batches.get(&version).map(Vec::as_slice)
    }

    /// Returns the version keys in ascending order.
    #[must_use]
    pub fn versions(&self) -> Vec<u32> {
        self.batches.keys().copied().collect()
    }

    /// Returns the batches that take a database from `current` to
    /// `target`: every key with `current <= key < target`, ascending.
    pub fn pending(&self, current: u32, target: u32) -> impl Iterator<Item = (u32, &[String])> {
        let range = if current < target {
            Some(self.batches.range(current..target))
        } else {
            None
        };
        range
            .into_iter()
            .flatten()
            .map(|(version, batch)| (*version, batch.as_slice()))
    }

    /// Returns the number of batches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Returns true if there are no batches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
