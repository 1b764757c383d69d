//! Boxed immutable strings

use crate::handle::Ptr;
use crate::object::{Object, ObjectRef};
use crate::types::TypeBuilder;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// An immutable string with value equality
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringObject {
    value: Box<str>,
}

impl StringObject {
    /// Copy `value` into a new string object
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into().into_boxed_str(),
        }
    }

    /// The text
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Check if the string is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Object for StringObject {
    fn equals(&self, other: &ObjectRef) -> bool {
        other
            .downcast_ref::<StringObject>()
            .is_some_and(|other| other.value == self.value)
    }

    fn hash_code(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.value.hash(&mut hasher);
        hasher.finish()
    }

    fn to_string(&self) -> String {
        self.value.to_string()
    }

    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace("System").with_name("String")
    }
}

/// Box a string behind an object handle
pub fn box_str(value: &str) -> ObjectRef {
    Ptr::new(StringObject::new(value)).into_object()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_equality() {
        let a = box_str("str");
        let b = box_str("str");
        let c = box_str("str1");

        assert!(a.equals(&a));
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a.hash_code(), c.hash_code());
    }

    #[test]
    fn test_string_text_and_type() {
        let a = box_str("hello");

        assert_eq!(a.to_string(), "hello");
        assert_eq!(a.get_type().full_name(), "System.String");
        assert_eq!(a.downcast_ref::<StringObject>().map(StringObject::len), Some(5));
    }
}
