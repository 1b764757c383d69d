//! Growable list
//!
//! `List<T>` is the indexable collection of the adapter set. It keeps its
//! elements in a `Vec` behind a read/write lock, so a list shared through
//! several handles can be filled and read from any of them.

use crate::error::{CollectionError, CollectionResult};
use crate::{Element, NAMESPACE};
use dotrs_core::{
    enumerate_snapshot, Enumerable, FromObject, Object, ObjectEnumerator, ObjectRef, Ptr,
    TypeBuilder,
};
use parking_lot::RwLock;
use std::cmp::Ordering;

/// Ordered, indexable collection
#[derive(Debug)]
pub struct List<T> {
    items: RwLock<Vec<T>>,
}

/// Create an empty list behind a handle
pub fn make_list<T: Element>() -> Ptr<List<T>> {
    Ptr::new(List::new())
}

impl<T: Clone> List<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Create an empty list with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Take ownership of existing elements
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Append an element
    pub fn add(&self, item: T) {
        self.items.write().push(item);
    }

    /// Append every element of `items`
    pub fn add_range<I: IntoIterator<Item = T>>(&self, items: I) {
        self.items.write().extend(items);
    }

    /// Copy of the element at `index`
    pub fn get(&self, index: usize) -> CollectionResult<T> {
        let items = self.items.read();
        items.get(index).cloned().ok_or(CollectionError::IndexOutOfRange {
            index,
            count: items.len(),
        })
    }

    /// Replace the element at `index`
    pub fn set(&self, index: usize, item: T) -> CollectionResult<()> {
        let mut items = self.items.write();
        let count = items.len();
        match items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(CollectionError::IndexOutOfRange { index, count }),
        }
    }

    /// Insert at `index`, shifting later elements; `index == count` appends
    pub fn insert(&self, index: usize, item: T) -> CollectionResult<()> {
        let mut items = self.items.write();
        if index > items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                count: items.len(),
            });
        }
        items.insert(index, item);
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&self, index: usize) -> CollectionResult<T> {
        let mut items = self.items.write();
        if index >= items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                count: items.len(),
            });
        }
        Ok(items.remove(index))
    }

    /// Remove every element
    pub fn clear(&self) {
        self.items.write().clear();
    }

    /// Number of elements
    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    /// Check if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Copy of the elements in order
    pub fn to_vec(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Stable in-place sort
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.write().sort_by(compare);
    }
}

impl<T: Clone + PartialEq> List<T> {
    /// Check if an equal element is present
    pub fn contains(&self, item: &T) -> bool {
        self.items.read().contains(item)
    }

    /// Position of the first equal element
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.read().iter().position(|x| x == item)
    }

    /// Remove the first equal element; returns whether one was found
    pub fn remove(&self, item: &T) -> bool {
        let mut items = self.items.write();
        match items.iter().position(|x| x == item) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T: Element + FromObject> List<T> {
    /// Append an untyped element, converting it to `T`
    pub fn add_object(&self, item: &ObjectRef) -> CollectionResult<()> {
        let item = T::from_object(item)?;
        self.add(item);
        Ok(())
    }
}

impl<T: Element> List<T> {
    /// The element at `index` as an object handle
    pub fn item(&self, index: usize) -> CollectionResult<ObjectRef> {
        self.get(index).map(|item| item.to_object())
    }
}

impl<T: Element> Enumerable for List<T> {
    fn count(&self) -> usize {
        self.items.read().len()
    }

    fn enumerate(&self) -> ObjectEnumerator {
        enumerate_snapshot(self.items.read().iter().map(|item| item.to_object()).collect())
    }
}

impl<T: Element> Object for List<T> {
    fn as_enumerable(&self) -> Option<&dyn Enumerable> {
        Some(self)
    }

    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace(NAMESPACE).with_name("List`1")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Clone> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}
