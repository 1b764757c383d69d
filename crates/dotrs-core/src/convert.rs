//! Boxing and unboxing conversions
//!
//! [`ToObject`] turns a Rust value into an object handle; [`FromObject`]
//! recovers it. Generic containers use these to expose typed contents as
//! objects.
//!
//! # Example
//!
//! ```ignore
//! use dotrs_core::{FromObject, ToObject};
//!
//! let object = 42i32.to_object();
//! assert_eq!(object.to_string(), "42");
//! assert_eq!(i32::from_object(&object)?, 42);
//!
//! let missing: Option<i32> = None;
//! assert!(missing.to_object().is_null());
//! ```

use crate::boxed::{box_value, unbox, Boxed};
use crate::enums::EnumValue;
use crate::error::{ObjectError, ObjectResult};
use crate::handle::Ptr;
use crate::object::{Object, ObjectKey, ObjectRef};
use crate::string::{box_str, StringObject};
use crate::types::type_of;

/// Convert a Rust value into an object handle
pub trait ToObject {
    /// Box or share this value as an object
    fn to_object(&self) -> ObjectRef;
}

/// Convert an object handle back into a Rust value
pub trait FromObject: Sized {
    /// Extract a value, failing with `NullReference` or `InvalidCast`
    fn from_object(object: &ObjectRef) -> ObjectResult<Self>;
}

macro_rules! impl_primitive_conversions {
    ($($ty:ty),+) => {
        $(
            impl ToObject for $ty {
                fn to_object(&self) -> ObjectRef {
                    box_value(*self)
                }
            }

            impl FromObject for $ty {
                fn from_object(object: &ObjectRef) -> ObjectResult<Self> {
                    unbox::<$ty>(object)
                }
            }
        )+
    };
}

impl_primitive_conversions!(bool, char, i32, i64, f64);

impl ToObject for str {
    fn to_object(&self) -> ObjectRef {
        box_str(self)
    }
}

impl ToObject for String {
    fn to_object(&self) -> ObjectRef {
        box_str(self)
    }
}

impl FromObject for String {
    fn from_object(object: &ObjectRef) -> ObjectResult<Self> {
        let pointee = object.try_get()?;
        object
            .downcast_ref::<StringObject>()
            .map(|text| text.as_str().to_string())
            .ok_or_else(|| ObjectError::InvalidCast {
                expected: type_of::<StringObject>().full_name(),
                actual: pointee.get_type().full_name(),
            })
    }
}

impl ToObject for EnumValue {
    fn to_object(&self) -> ObjectRef {
        Ptr::new(self.clone()).into_object()
    }
}

impl ToObject for ObjectRef {
    fn to_object(&self) -> ObjectRef {
        self.clone()
    }
}

impl FromObject for ObjectRef {
    fn from_object(object: &ObjectRef) -> ObjectResult<Self> {
        Ok(object.clone())
    }
}

impl ToObject for ObjectKey {
    fn to_object(&self) -> ObjectRef {
        self.object().clone()
    }
}

impl FromObject for ObjectKey {
    fn from_object(object: &ObjectRef) -> ObjectResult<Self> {
        Ok(ObjectKey::new(object.clone()))
    }
}

impl<T: Object> ToObject for Ptr<T> {
    fn to_object(&self) -> ObjectRef {
        self.clone().into_object()
    }
}

// A null handle converts to a null typed handle
impl<T: Object> FromObject for Ptr<T> {
    fn from_object(object: &ObjectRef) -> ObjectResult<Self> {
        object.try_cast::<T>()
    }
}

impl<T: ToObject> ToObject for Option<T> {
    fn to_object(&self) -> ObjectRef {
        match self {
            Some(value) => value.to_object(),
            None => Ptr::null(),
        }
    }
}

impl<T: FromObject> FromObject for Option<T> {
    fn from_object(object: &ObjectRef) -> ObjectResult<Self> {
        if object.is_null() {
            return Ok(None);
        }
        T::from_object(object).map(Some)
    }
}

impl<T: crate::boxed::Primitive> FromObject for Boxed<T> {
    fn from_object(object: &ObjectRef) -> ObjectResult<Self> {
        unbox::<T>(object).map(Boxed::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::Int;
    use crate::object::new_object;

    #[test]
    fn test_primitive_round_trip() {
        assert!(bool::from_object(&true.to_object()).unwrap());
        assert_eq!(char::from_object(&'z'.to_object()).unwrap(), 'z');
        assert_eq!(i32::from_object(&(-3i32).to_object()).unwrap(), -3);
        assert_eq!(i64::from_object(&(1i64 << 40).to_object()).unwrap(), 1 << 40);
        assert_eq!(f64::from_object(&0.25f64.to_object()).unwrap(), 0.25);
    }

    #[test]
    fn test_string_round_trip() {
        let object = "abc".to_object();

        assert_eq!(object.to_string(), "abc");
        assert_eq!(String::from_object(&object).unwrap(), "abc");
        assert!(String::from_object(&1i32.to_object()).is_err());
    }

    #[test]
    fn test_null_handling() {
        let null: ObjectRef = Ptr::null();

        assert_eq!(i32::from_object(&null).unwrap_err(), ObjectError::NullReference);
        assert_eq!(Option::<i32>::from_object(&null).unwrap(), None);
        assert_eq!(Option::<i32>::from_object(&7i32.to_object()).unwrap(), Some(7));
        assert!(None::<i32>.to_object().is_null());
    }

    #[test]
    fn test_wrong_kind_is_invalid_cast() {
        let err = i64::from_object(&1i32.to_object()).unwrap_err();
        assert_eq!(
            err,
            ObjectError::InvalidCast {
                expected: "System.Int64".to_string(),
                actual: "System.Int32".to_string(),
            }
        );
    }

    #[test]
    fn test_handles_share_pointee() {
        let object = new_object();
        let shared = object.to_object();
        assert!(shared.ptr_eq(&object));

        let typed = Ptr::new(Int::new(4));
        let upcast = ToObject::to_object(&typed);
        assert_eq!(upcast.addr(), typed.addr());
        assert_eq!(Ptr::<Int>::from_object(&upcast).unwrap(), typed);
    }
}
