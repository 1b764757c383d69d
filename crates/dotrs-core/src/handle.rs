//! Reference-counted smart handles
//!
//! This module provides `Ptr<T>`, the shared-ownership handle every
//! reference-semantics value lives behind.
//!
//! # Ownership
//!
//! ```text
//! Ptr ──┐
//! Ptr ──┼──► Arc control block ─► strong count (atomic) ─► T
//! Ptr ──┘
//! ```
//!
//! Cloning a handle attaches (increments the count), dropping it detaches.
//! The pointee is destroyed exactly once, when the last handle goes away.
//! A handle may also be null; dereferencing a null handle panics.

use crate::error::{ObjectError, ObjectResult};
use crate::object::{Object, ObjectRef};
use crate::types::{type_of, Type};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A nullable, shared-ownership handle to a heap-allocated value
pub struct Ptr<T: ?Sized> {
    inner: Option<Arc<T>>,
}

impl<T> Ptr<T> {
    /// Move a value onto the heap and return the first handle to it
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: Some(Arc::new(value)),
        }
    }
}

impl<T: ?Sized> Ptr<T> {
    /// Create a null handle
    #[inline]
    pub const fn null() -> Self {
        Self { inner: None }
    }

    /// Adopt an existing `Arc`
    #[inline]
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self { inner: Some(arc) }
    }

    /// Check if the handle is null
    #[inline]
    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    /// Borrow the pointee, or `None` for a null handle
    #[inline]
    pub fn as_deref(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Borrow the pointee, failing with `NullReference` for a null handle
    #[inline]
    pub fn try_get(&self) -> ObjectResult<&T> {
        self.inner.as_deref().ok_or(ObjectError::NullReference)
    }

    /// Borrow the underlying `Arc`
    #[inline]
    pub fn as_arc(&self) -> Option<&Arc<T>> {
        self.inner.as_ref()
    }

    /// Consume the handle, returning the underlying `Arc`
    #[inline]
    pub fn into_arc(self) -> Option<Arc<T>> {
        self.inner
    }

    /// Number of live handles sharing the pointee (0 for null)
    #[inline]
    pub fn reference_count(&self) -> usize {
        self.inner.as_ref().map_or(0, Arc::strong_count)
    }

    /// Point this handle at the target of `other`.
    ///
    /// The incoming target is attached before the outgoing one is released,
    /// so assigning a handle to itself or to an alias never drops the pointee.
    pub fn assign(&mut self, other: &Ptr<T>) {
        let incoming = other.inner.clone();
        let outgoing = std::mem::replace(&mut self.inner, incoming);
        drop(outgoing);
    }

    /// Move the target out, leaving this handle null. The count is untouched.
    #[inline]
    pub fn take(&mut self) -> Ptr<T> {
        Ptr {
            inner: self.inner.take(),
        }
    }

    /// Release the target and become null
    #[inline]
    pub fn reset(&mut self) {
        self.inner = None;
    }

    /// Check whether two handles share a pointee (two nulls compare equal)
    #[inline]
    pub fn ptr_eq(&self, other: &Ptr<T>) -> bool {
        self.addr() == other.addr()
    }

    /// Address of the pointee as usize (0 for null)
    #[inline]
    pub fn addr(&self) -> usize {
        // Cast to thin pointer first to handle unsized types
        self.inner
            .as_ref()
            .map_or(0, |arc| Arc::as_ptr(arc).cast::<()>() as usize)
    }
}

impl<T: Object> Ptr<T> {
    /// Upcast to an untyped object handle
    #[inline]
    pub fn into_object(self) -> ObjectRef {
        match self.inner {
            Some(arc) => {
                let object: Arc<dyn Object> = arc;
                Ptr::from_arc(object)
            }
            None => Ptr::null(),
        }
    }

    /// Upcast a copy of this handle
    #[inline]
    pub fn to_object(&self) -> ObjectRef {
        self.clone().into_object()
    }
}

impl Ptr<dyn Object> {
    /// Check whether the pointee's dynamic type is `T` (false for null)
    pub fn is<T: Object>(&self) -> bool {
        self.as_deref().is_some_and(|object| object.as_any().is::<T>())
    }

    /// Check whether the pointee's type is `ty` or declares it as a base (false for null)
    pub fn is_instance_of(&self, ty: &Type) -> bool {
        self.as_deref()
            .is_some_and(|object| ty.is_assignable_from(&object.get_type()))
    }

    /// Borrow the pointee as `T` if that is its dynamic type
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_deref().and_then(|object| object.as_any().downcast_ref::<T>())
    }

    /// Checked downcast. A null handle casts to a null `Ptr<T>`.
    pub fn try_cast<T: Object>(&self) -> ObjectResult<Ptr<T>> {
        let Some(arc) = &self.inner else {
            return Ok(Ptr::null());
        };
        match arc.clone().into_any_arc().downcast::<T>() {
            Ok(typed) => Ok(Ptr::from_arc(typed)),
            Err(_) => Err(ObjectError::InvalidCast {
                expected: type_of::<T>().full_name(),
                actual: arc.get_type().full_name(),
            }),
        }
    }

    /// Downcast that is only valid after `is::<T>()` returned true.
    ///
    /// # Panics
    ///
    /// Panics with the `InvalidCast` message when the pointee is not a `T`.
    pub fn cast<T: Object>(&self) -> Ptr<T> {
        match self.try_cast::<T>() {
            Ok(typed) => typed,
            Err(err) => panic!("{}", err),
        }
    }
}

// Clone attaches another handle to the same pointee (shallow copy)
impl<T: ?Sized> Clone for Ptr<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> Default for Ptr<T> {
    fn default() -> Self {
        Self::null()
    }
}

// Equality based on pointer identity
impl<T: ?Sized> PartialEq for Ptr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized> Eq for Ptr<T> {}

// Hash based on pointer address
impl<T: ?Sized> Hash for Ptr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

// Deref to access the pointee; null is a programmer error
impl<T: ?Sized> Deref for Ptr<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self.inner.as_deref() {
            Some(value) => value,
            None => panic!("{}", ObjectError::NullReference),
        }
    }
}

impl<T: ?Sized> From<Arc<T>> for Ptr<T> {
    fn from(arc: Arc<T>) -> Self {
        Self::from_arc(arc)
    }
}

// Display shows the pointee's text form; null prints as empty
impl<T: Object + ?Sized> fmt::Display for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_deref() {
            Some(object) => f.write_str(&Object::to_string(object)),
            None => Ok(()),
        }
    }
}

impl<T: Object + ?Sized> fmt::Debug for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_deref() {
            Some(object) => write!(f, "Ptr<{}>({:#x})", object.get_type().full_name(), self.addr()),
            None => f.write_str("null"),
        }
    }
}
