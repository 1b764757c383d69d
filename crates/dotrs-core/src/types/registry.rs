//! Process-wide descriptor cache
//!
//! Maps `TypeId` to the singleton descriptor of that type. Each entry is a
//! `OnceCell`, so a descriptor is built exactly once even when several threads
//! ask for it before it exists. Building happens outside the map lock, which
//! lets a descriptor's builder request other descriptors (its base, say).
//! A builder must not request its own descriptor.

use crate::handle::Ptr;
use crate::object::Object;
use crate::types::descriptor::{Type, TypeBuilder, TypeInfo};
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::any::TypeId;
use std::sync::Arc;

type Slot = Arc<OnceCell<Type>>;

static DESCRIPTORS: Lazy<RwLock<FxHashMap<TypeId, Slot>>> = Lazy::new(Default::default);

/// Marker key for the `System.Enum` root
struct EnumRoot;

/// Get or build the descriptor for `id`
pub(crate) fn descriptor<F>(id: TypeId, build: F) -> Type
where
    F: FnOnce() -> TypeInfo,
{
    slot(id)
        .get_or_init(|| {
            let info = build();
            log::trace!("created type descriptor {}", info.full_name());
            Ptr::new(info)
        })
        .clone()
}

fn slot(id: TypeId) -> Slot {
    if let Some(slot) = DESCRIPTORS.read().get(&id) {
        return slot.clone();
    }
    DESCRIPTORS.write().entry(id).or_default().clone()
}

/// Descriptor of the object type `T`
pub fn type_of<T: Object>() -> Type {
    descriptor(TypeId::of::<T>(), || {
        T::describe(TypeBuilder::for_type::<T>()).build()
    })
}

/// The abstract root descriptor, `System.Object`
pub fn object_type() -> Type {
    let id = TypeId::of::<dyn Object>();
    descriptor(id, || {
        TypeBuilder::new(id, "System", "Object")
            .abstract_type()
            .build()
    })
}

/// The abstract base of every enum descriptor, `System.Enum`
pub fn enum_base_type() -> Type {
    let id = TypeId::of::<EnumRoot>();
    descriptor(id, || {
        TypeBuilder::new(id, "System", "Enum")
            .with_base(object_type())
            .abstract_type()
            .build()
    })
}

/// Descriptor for `id` if it has already been built
pub fn lookup(id: TypeId) -> Option<Type> {
    DESCRIPTORS
        .read()
        .get(&id)
        .and_then(|slot| slot.get().cloned())
}
