//! Insertion-ordered map backing [`Value::Object`](crate::Value::Object).
//!
//! Backed by [`IndexMap`], so lookups and inserts are O(1) while iteration
//! follows insertion order.

use indexmap::IndexMap;

use crate::value::Value;

/// String-keyed map with unique keys and insertion order.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a key-value pair.
    ///
    /// A duplicate key overwrites the earlier value in place (last write
    /// wins, first position kept) and returns the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.values()
    }
}

/// Key-order-insensitive: two maps are equal when they hold the same keys
/// mapped to equal values.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| o == v))
    }
}

/// Borrowing iterator over `(key, value)` pairs.
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>> Extend<(K, Value)> for Map {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order() {
        let mut map = Map::new();
        map.insert("b", Value::Int(1));
        map.insert("a", Value::Int(2));
        map.insert("c", Value::Int(3));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_key_overwrites_in_place() {
        let mut map = Map::new();
        assert_eq!(map.insert("a", Value::Int(1)), None);
        map.insert("b", Value::Null);
        assert_eq!(map.insert("a", Value::Int(2)), Some(Value::Int(1)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::Int(2)));
        assert_eq!(map.keys().next(), Some("a"));
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut map: Map = [("x", Value::Int(1)), ("y", Value::Int(2)), ("z", Value::Int(3))]
            .into_iter()
            .collect();
        assert_eq!(map.remove("y"), Some(Value::Int(2)));
        assert_eq!(map.remove("y"), None);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["x", "z"]);
    }

    #[test]
    fn equality_ignores_key_order() {
        let a: Map = [("a", Value::Int(1)), ("b", Value::Bool(true))]
            .into_iter()
            .collect();
        let b: Map = [("b", Value::Bool(true)), ("a", Value::Int(1))]
            .into_iter()
            .collect();
        assert_eq!(a, b);

        let c: Map = [("a", Value::Int(1))].into_iter().collect();
        assert_ne!(a, c);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut map = Map::new();
        map.insert("n", Value::Int(1));
        if let Some(v) = map.get_mut("n") {
            *v = Value::Int(5);
        }
        assert_eq!(map.get("n"), Some(&Value::Int(5)));
        assert!(map.contains_key("n"));
        assert!(!map.contains_key("m"));
    }

    #[test]
    fn remove_then_reinsert_appends() {
        let mut map: Map = [("a", Value::Int(1)), ("b", Value::Int(2))]
            .into_iter()
            .collect();
        map.remove("a");
        map.insert("a", Value::Int(3));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
