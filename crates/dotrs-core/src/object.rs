//! Object base and identity contract
//!
//! Every reference-semantics value implements [`Object`]. Generic code
//! (collections, formatting, equality checks) works over [`ObjectRef`]
//! without knowing concrete element types.

use crate::enumerable::Enumerable;
use crate::handle::Ptr;
use crate::types::{type_of, Type, TypeBuilder};
use rustc_hash::FxHasher;
use std::any::Any;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Untyped handle to any object
pub type ObjectRef = Ptr<dyn Object>;

/// Polymorphic root of the object model
///
/// Default bodies give reference semantics: `equals` is address identity and
/// `hash_code` is derived from the address. A type that overrides `equals`
/// must override `hash_code` so that equal objects hash equally.
pub trait Object: ObjectExt + Send + Sync + 'static {
    /// Whether `other` is equal to this instance
    fn equals(&self, other: &ObjectRef) -> bool {
        other.as_deref().is_some_and(|other| same_instance(self, other))
    }

    /// Hash consistent with `equals`
    fn hash_code(&self) -> u64 {
        hash_address(address_of(self))
    }

    /// Text form of this instance; the full type name by default
    fn to_string(&self) -> String {
        self.get_type().full_name()
    }

    /// Runtime type descriptor of this instance
    fn get_type(&self) -> Type {
        self.concrete_type()
    }

    /// Element access for collection objects
    fn as_enumerable(&self) -> Option<&dyn Enumerable> {
        None
    }

    /// Customise the descriptor built for this type on first use
    fn describe(builder: TypeBuilder) -> TypeBuilder
    where
        Self: Sized,
    {
        builder
    }
}

/// Plumbing shared by every object, implemented automatically
pub trait ObjectExt {
    /// Borrow as `Any` for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Convert a shared pointee into an `Any` for owning downcasts
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// Descriptor of the concrete type
    fn concrete_type(&self) -> Type;
}

impl<T: Object> ObjectExt for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn concrete_type(&self) -> Type {
        type_of::<T>()
    }
}

/// An object with no state and no overrides
#[derive(Debug, Default)]
pub struct PlainObject;

impl Object for PlainObject {
    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace("System").with_name("PlainObject")
    }
}

/// Create a fresh plain object
pub fn new_object() -> ObjectRef {
    Ptr::new(PlainObject).into_object()
}

/// Whether two handles refer to the same instance (two nulls are equal)
pub fn reference_equals(a: &ObjectRef, b: &ObjectRef) -> bool {
    a.ptr_eq(b)
}

/// Null-safe value equality
pub fn equals(a: &ObjectRef, b: &ObjectRef) -> bool {
    match a.as_deref() {
        Some(object) => object.equals(b),
        None => b.is_null(),
    }
}

/// Map key that uses `hash_code`/`equals` instead of handle identity
#[derive(Clone, Debug, Default)]
pub struct ObjectKey(pub ObjectRef);

impl ObjectKey {
    /// Wrap a handle
    pub fn new(object: ObjectRef) -> Self {
        Self(object)
    }

    /// Borrow the wrapped handle
    pub fn object(&self) -> &ObjectRef {
        &self.0
    }
}

impl PartialEq for ObjectKey {
    fn eq(&self, other: &Self) -> bool {
        equals(&self.0, &other.0)
    }
}

impl Eq for ObjectKey {}

impl Hash for ObjectKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_deref().map_or(0, |object| object.hash_code()).hash(state);
    }
}

impl From<ObjectRef> for ObjectKey {
    fn from(object: ObjectRef) -> Self {
        Self(object)
    }
}

fn address_of<T: ?Sized>(value: &T) -> usize {
    (value as *const T).cast::<()>() as usize
}

fn same_instance<A: ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    address_of(a) == address_of(b)
}

pub(crate) fn hash_address(addr: usize) -> u64 {
    let mut hasher = FxHasher::default();
    addr.hash(&mut hasher);
    hasher.finish()
}
