//! Element enumeration over object handles
//!
//! Collections expose their elements as [`ObjectRef`]s through
//! [`Enumerable`], so generic code can walk any container without knowing its
//! element type. Enumerators iterate a snapshot taken when `enumerate` is
//! called; later mutation of the source does not affect them.

use crate::object::ObjectRef;

/// Boxed iterator over object handles
pub type ObjectEnumerator = Box<dyn Iterator<Item = ObjectRef> + Send>;

/// A container whose elements can be enumerated as objects
pub trait Enumerable: Send + Sync {
    /// Number of elements
    fn count(&self) -> usize;

    /// Iterate over a snapshot of the elements
    fn enumerate(&self) -> ObjectEnumerator;
}

/// Enumerate an object if it is a collection (`None` for null or non-collections)
pub fn enumerate_object(object: &ObjectRef) -> Option<ObjectEnumerator> {
    object
        .as_deref()
        .and_then(|object| object.as_enumerable())
        .map(|collection| collection.enumerate())
}

/// Snapshot a slice of handles into an enumerator
pub fn enumerate_snapshot(items: Vec<ObjectRef>) -> ObjectEnumerator {
    Box::new(items.into_iter())
}
