//! Ordered attribute storage for elements.
//!
//! This module provides [`AttributeMap`], a wrapper around [`IndexMap`] that
//! keeps attributes in insertion order. Insertion order never reaches the
//! output (attributes are always re-sorted by rank and name), but it keeps
//! debugging output and serde round trips stable.
//!
//! Keys starting with `.` are metadata rather than markup. They can be stored
//! but are skipped by [`AttributeMap::content`], which is what the serializer
//! iterates.
//!
//! ## Examples
//!
//! ```rust
//! use etwriter::AttributeMap;
//!
//! let mut map = AttributeMap::new();
//! map.insert("name", "Alice");
//! map.insert(".note", "internal");
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.content().count(), 1);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Returns `true` for reserved metadata keys (those starting with `.`).
#[inline]
#[must_use]
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with('.')
}

/// An ordered map of attribute names to values.
///
/// # Examples
///
/// ```rust
/// use etwriter::AttributeMap;
///
/// let mut map = AttributeMap::new();
/// map.insert("second", "2");
/// map.insert("first", "1");
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["second", "first"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(IndexMap<String, String>);

impl AttributeMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        AttributeMap(IndexMap::new())
    }

    /// Creates an empty map with room for `capacity` attributes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AttributeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts an attribute, returning the previous value for that name.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes an attribute, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Returns the value stored for `key`, metadata keys included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use etwriter::AttributeMap;
    ///
    /// let map: AttributeMap = [("x", "10")].into_iter().collect();
    /// assert_eq!(map.get("x"), Some("10"));
    /// assert_eq!(map.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `true` if `key` is stored.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of stored attributes, metadata keys included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attribute names in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Name/value pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Iterates over the attributes that are written as markup, skipping
    /// metadata keys.
    pub fn content(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(k, _)| !is_metadata_key(k))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        AttributeMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_value_in_place() {
        let mut map = AttributeMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        assert_eq!(map.insert("a", "3"), Some("1".to_string()));
        let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: AttributeMap = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        map.remove("b");
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_content_skips_metadata() {
        let map: AttributeMap = [(".comments", "x"), ("id", "1"), (".other", "y")]
            .into_iter()
            .collect();
        let content: Vec<_> = map.content().collect();
        assert_eq!(content, vec![("id", "1")]);
    }

    #[test]
    fn test_serde_is_a_plain_object() {
        let map: AttributeMap = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
        let back: AttributeMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
