//! Key/value pair objects produced by dictionary enumeration

use crate::NAMESPACE;
use dotrs_core::{equals, Object, ObjectRef, Ptr, TypeBuilder};

/// A key and its value, both as object handles
#[derive(Debug, Clone)]
pub struct KeyValuePair {
    key: ObjectRef,
    value: ObjectRef,
}

impl KeyValuePair {
    /// Pair up two handles
    pub fn new(key: ObjectRef, value: ObjectRef) -> Self {
        Self { key, value }
    }

    /// The key
    pub fn key(&self) -> &ObjectRef {
        &self.key
    }

    /// The value
    pub fn value(&self) -> &ObjectRef {
        &self.value
    }

    /// Put the pair behind an object handle
    pub fn into_object(self) -> ObjectRef {
        Ptr::new(self).into_object()
    }
}

impl Object for KeyValuePair {
    fn equals(&self, other: &ObjectRef) -> bool {
        other
            .downcast_ref::<KeyValuePair>()
            .is_some_and(|other| equals(&self.key, &other.key) && equals(&self.value, &other.value))
    }

    fn hash_code(&self) -> u64 {
        let key = self.key.as_deref().map_or(0, |k| k.hash_code());
        let value = self.value.as_deref().map_or(0, |v| v.hash_code());
        key.rotate_left(5) ^ value
    }

    fn to_string(&self) -> String {
        format!("[{}, {}]", self.key, self.value)
    }

    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace(NAMESPACE).with_name("KeyValuePair`2")
    }
}
