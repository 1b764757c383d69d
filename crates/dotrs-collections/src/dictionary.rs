//! Hash map from keys to values
//!
//! Enumerating a dictionary yields one [`KeyValuePair`] object per entry.
//! Use [`ObjectKey`](dotrs_core::ObjectKey) as the key type to key by object
//! value equality.

use crate::error::{CollectionError, CollectionResult};
use crate::pair::KeyValuePair;
use crate::{Element, NAMESPACE};
use dotrs_core::{enumerate_snapshot, Enumerable, Object, ObjectEnumerator, Ptr, ToObject, TypeBuilder};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Collection of unique keys and their values
#[derive(Debug)]
pub struct Dictionary<K, V> {
    entries: RwLock<FxHashMap<K, V>>,
}

/// Create an empty dictionary behind a handle
pub fn make_dictionary<K, V>() -> Ptr<Dictionary<K, V>>
where
    K: Element + Hash + Eq,
    V: Element,
{
    Ptr::new(Dictionary::new())
}

impl<K: Hash + Eq, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<K, V> Dictionary<K, V>
where
    K: ToObject + Clone + Hash + Eq,
    V: Clone,
{
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry; fails if the key is already present
    pub fn add(&self, key: K, value: V) -> CollectionResult<()> {
        let mut entries = self.entries.write();
        if entries.contains_key(&key) {
            return Err(CollectionError::DuplicateKey(key.to_object().to_string()));
        }
        entries.insert(key, value);
        Ok(())
    }

    /// Insert or overwrite; returns the previous value
    pub fn set(&self, key: K, value: V) -> Option<V> {
        self.entries.write().insert(key, value)
    }

    /// Copy of the value for `key`
    pub fn get(&self, key: &K) -> CollectionResult<V> {
        self.try_get_value(key)
            .ok_or_else(|| CollectionError::KeyNotFound(key.to_object().to_string()))
    }

    /// Copy of the value for `key`, if present
    pub fn try_get_value(&self, key: &K) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    /// Check if `key` is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Remove the entry for `key`; returns whether one was present
    pub fn remove(&self, key: &K) -> bool {
        self.entries.write().remove(key).is_some()
    }

    /// Copy of the keys
    pub fn keys(&self) -> Vec<K> {
        self.entries.read().keys().cloned().collect()
    }

    /// Copy of the values
    pub fn values(&self) -> Vec<V> {
        self.entries.read().values().cloned().collect()
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<K: Clone + Hash + Eq, V: Clone + PartialEq> Dictionary<K, V> {
    /// Check if any entry has an equal value
    pub fn contains_value(&self, value: &V) -> bool {
        self.entries.read().values().any(|v| v == value)
    }
}

impl<K, V> Enumerable for Dictionary<K, V>
where
    K: Element + Hash + Eq,
    V: Element,
{
    fn count(&self) -> usize {
        self.entries.read().len()
    }

    fn enumerate(&self) -> ObjectEnumerator {
        let pairs = self
            .entries
            .read()
            .iter()
            .map(|(key, value)| KeyValuePair::new(key.to_object(), value.to_object()).into_object())
            .collect();
        enumerate_snapshot(pairs)
    }
}

impl<K, V> Object for Dictionary<K, V>
where
    K: Element + Hash + Eq,
    V: Element,
{
    fn as_enumerable(&self) -> Option<&dyn Enumerable> {
        Some(self)
    }

    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace(NAMESPACE).with_name("Dictionary`2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotrs_core::{box_str, box_value, enumerate_object, ObjectKey};

    #[test]
    fn test_dictionary_add_get() {
        let dict = Dictionary::new();
        dict.add("a".to_string(), 1).unwrap();
        dict.add("b".to_string(), 2).unwrap();

        assert_eq!(dict.count(), 2);
        assert_eq!(dict.get(&"a".to_string()).unwrap(), 1);
        assert_eq!(dict.try_get_value(&"z".to_string()), None);
        assert_eq!(
            dict.get(&"z".to_string()).unwrap_err(),
            CollectionError::KeyNotFound("z".to_string())
        );
    }

    #[test]
    fn test_dictionary_duplicate_key() {
        let dict = Dictionary::new();
        dict.add(1i32, 'x').unwrap();

        assert_eq!(
            dict.add(1i32, 'y').unwrap_err(),
            CollectionError::DuplicateKey("1".to_string())
        );
        assert_eq!(dict.set(1i32, 'y'), Some('x'));
        assert_eq!(dict.get(&1).unwrap(), 'y');
    }

    #[test]
    fn test_dictionary_remove_and_clear() {
        let dict = Dictionary::new();
        dict.set(1i64, true);
        dict.set(2i64, false);

        assert!(dict.remove(&1));
        assert!(!dict.remove(&1));
        assert!(!dict.contains_key(&1));
        assert!(dict.contains_value(&false));

        dict.clear();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_dictionary_keys_values() {
        let dict = Dictionary::new();
        dict.set(1i32, 10i32);
        dict.set(2i32, 20i32);

        let mut keys = dict.keys();
        keys.sort();
        let mut values = dict.values();
        values.sort();

        assert_eq!(keys, vec![1, 2]);
        assert_eq!(values, vec![10, 20]);
    }

    #[test]
    fn test_dictionary_enumerates_pairs() {
        let dict = make_dictionary::<String, i32>();
        dict.add("k".to_string(), 3).unwrap();

        let pairs: Vec<_> = enumerate_object(&dict.to_object()).unwrap().collect();

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].to_string(), "[k, 3]");
        let pair = pairs[0].downcast_ref::<KeyValuePair>().unwrap();
        assert!(pair.key().equals(&box_str("k")));
        assert!(pair.value().equals(&box_value(3i32)));
    }

    #[test]
    fn test_dictionary_object_keys() {
        let dict = make_dictionary::<ObjectKey, i32>();
        dict.add(ObjectKey::new(box_value(5i32)), 50).unwrap();

        // Distinct handle, equal value
        assert_eq!(dict.get(&ObjectKey::new(box_value(5i32))).unwrap(), 50);
        assert!(dict.add(ObjectKey::new(box_value(5i32)), 51).is_err());
        assert!(!dict.contains_key(&ObjectKey::new(box_value(5i64))));
        assert_eq!(
            dict.to_object().get_type().full_name(),
            "System.Collections.Generic.Dictionary`2"
        );
    }
}
