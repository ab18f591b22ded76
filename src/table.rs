//! Ordered map type for TOML tables.
//!
//! This module provides [`Table`], a wrapper around [`IndexMap`] that maintains
//! insertion order for key/value pairs. The formatter itself never relies on
//! that order — output keys are always sorted alphabetically — but a
//! deterministic iteration order keeps conversions and tests predictable.
//!
//! The document root handed to the formatter is itself a `Table`.
//!
//! ## Examples
//!
//! ```rust
//! use pretty_toml::{Table, Value};
//!
//! let mut table = Table::new();
//! table.insert("name".to_string(), Value::from("Alice"));
//! table.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::collections::HashMap;

/// An ordered map of string keys to TOML values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order.
/// The formatter sorts keys alphabetically on output regardless of the order
/// they carry here.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::{Table, Value};
///
/// let mut table = Table::new();
/// table.insert("first".to_string(), Value::from(1));
/// table.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = table.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table(IndexMap<String, crate::Value>);

impl Table {
    /// Creates an empty `Table`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretty_toml::Table;
    ///
    /// let table = Table::new();
    /// assert!(table.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Table(IndexMap::new())
    }

    /// Creates an empty `Table` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the table already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretty_toml::{Table, Value};
    ///
    /// let mut table = Table::new();
    /// assert!(table.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(table.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns the number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the table, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the table, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the table, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Returns the table's keys sorted alphabetically.
    ///
    /// This is the order the formatter processes a table level in.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.0.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl From<HashMap<String, crate::Value>> for Table {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        let mut entries: Vec<_> = map.into_iter().collect();
        // HashMap iteration order is unspecified; pin it down
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Table(entries.into_iter().collect())
    }
}

impl From<Table> for HashMap<String, crate::Value> {
    fn from(table: Table) -> Self {
        table.0.into_iter().collect()
    }
}

impl IntoIterator for Table {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for Table {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Table(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, crate::Value)> for Table {
    fn extend<T: IntoIterator<Item = (String, crate::Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
