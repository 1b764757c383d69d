//! Unordered set of unique elements

use crate::{Element, NAMESPACE};
use dotrs_core::{enumerate_snapshot, Enumerable, Object, ObjectEnumerator, Ptr, TypeBuilder};
use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Set of unique elements
#[derive(Debug)]
pub struct HashSet<T> {
    items: RwLock<FxHashSet<T>>,
}

/// Create an empty set behind a handle
pub fn make_hash_set<T: Element + Hash + Eq>() -> Ptr<HashSet<T>> {
    Ptr::new(HashSet::new())
}

impl<T: Hash + Eq> Default for HashSet<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(FxHashSet::default()),
        }
    }
}

impl<T: Clone + Hash + Eq> HashSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element; returns false if it was already present
    pub fn add(&self, item: T) -> bool {
        self.items.write().insert(item)
    }

    /// Check if an equal element is present
    pub fn contains(&self, item: &T) -> bool {
        self.items.read().contains(item)
    }

    /// Remove an element; returns whether it was present
    pub fn remove(&self, item: &T) -> bool {
        self.items.write().remove(item)
    }

    /// Add every element of `other`
    pub fn union_with<I: IntoIterator<Item = T>>(&self, other: I) {
        self.items.write().extend(other);
    }

    /// Keep only elements that also appear in `other`
    pub fn intersect_with<I: IntoIterator<Item = T>>(&self, other: I) {
        let other: FxHashSet<T> = other.into_iter().collect();
        self.items.write().retain(|item| other.contains(item));
    }

    /// Number of elements
    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    /// Check if the set has no elements
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Remove every element
    pub fn clear(&self) {
        self.items.write().clear();
    }

    /// Copy of the elements in unspecified order
    pub fn to_vec(&self) -> Vec<T> {
        self.items.read().iter().cloned().collect()
    }
}

impl<T: Element + Hash + Eq> Enumerable for HashSet<T> {
    fn count(&self) -> usize {
        self.items.read().len()
    }

    fn enumerate(&self) -> ObjectEnumerator {
        enumerate_snapshot(self.items.read().iter().map(|item| item.to_object()).collect())
    }
}

impl<T: Element + Hash + Eq> Object for HashSet<T> {
    fn as_enumerable(&self) -> Option<&dyn Enumerable> {
        Some(self)
    }

    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace(NAMESPACE).with_name("HashSet`1")
    }
}
