//! First-in first-out queue

use crate::error::{CollectionError, CollectionResult};
use crate::{Element, NAMESPACE};
use dotrs_core::{enumerate_snapshot, Enumerable, Object, ObjectEnumerator, Ptr, TypeBuilder};
use parking_lot::RwLock;
use std::collections::VecDeque;

/// FIFO queue; enumerates from front to back
#[derive(Debug)]
pub struct Queue<T> {
    items: RwLock<VecDeque<T>>,
}

/// Create an empty queue behind a handle
pub fn make_queue<T: Element>() -> Ptr<Queue<T>> {
    Ptr::new(Queue::new())
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(VecDeque::new()),
        }
    }
}

impl<T: Clone> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to the back
    pub fn enqueue(&self, item: T) {
        self.items.write().push_back(item);
    }

    /// Remove from the front
    pub fn dequeue(&self) -> CollectionResult<T> {
        self.try_dequeue().ok_or(CollectionError::Empty)
    }

    /// Remove from the front, if any
    pub fn try_dequeue(&self) -> Option<T> {
        self.items.write().pop_front()
    }

    /// Copy of the front element
    pub fn peek(&self) -> CollectionResult<T> {
        self.items.read().front().cloned().ok_or(CollectionError::Empty)
    }

    /// Number of queued elements
    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    /// Check if the queue has no elements
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Remove every element
    pub fn clear(&self) {
        self.items.write().clear();
    }
}

impl<T: Element> Enumerable for Queue<T> {
    fn count(&self) -> usize {
        self.items.read().len()
    }

    fn enumerate(&self) -> ObjectEnumerator {
        enumerate_snapshot(self.items.read().iter().map(|item| item.to_object()).collect())
    }
}

impl<T: Element> Object for Queue<T> {
    fn as_enumerable(&self) -> Option<&dyn Enumerable> {
        Some(self)
    }

    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace(NAMESPACE).with_name("Queue`1")
    }
}
