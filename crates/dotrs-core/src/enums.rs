//! Boxed enums
//!
//! Enum types expose their members through [`EnumType`] (usually generated by
//! [`declare_enum!`]). Their descriptors carry the name to ordinal map, which
//! is what [`EnumValue::parse`] resolves text against.

use crate::error::{ObjectError, ObjectResult};
use crate::handle::Ptr;
use crate::object::{Object, ObjectRef};
use crate::types::{descriptor, enum_base_type, Type, TypeBuilder};
use rustc_hash::FxHasher;
use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// A Rust enum that can be boxed and parsed by name
pub trait EnumType: Copy + Send + Sync + 'static {
    /// Descriptor namespace
    const NAMESPACE: &'static str;

    /// Descriptor name
    const NAME: &'static str;

    /// Members in declaration order
    fn variants() -> &'static [(&'static str, Self)];

    /// Ordinal of this member
    fn ordinal(self) -> i32;

    /// Member with the given ordinal
    fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::variants()
            .iter()
            .find(|(_, member)| member.ordinal() == ordinal)
            .map(|(_, member)| *member)
    }
}

/// Descriptor of the enum `E`
pub fn enum_type<E: EnumType>() -> Type {
    let id = TypeId::of::<E>();
    descriptor(id, || {
        TypeBuilder::new(id, E::NAMESPACE, E::NAME)
            .with_base(enum_base_type())
            .with_enum_values(E::variants().iter().map(|(name, member)| (*name, member.ordinal())))
            .build()
    })
}

/// Boxed enum member: an ordinal tagged with its enum descriptor
#[derive(Debug, Clone)]
pub struct EnumValue {
    ordinal: i32,
    ty: Type,
}

impl EnumValue {
    /// Box a typed member
    pub fn of<E: EnumType>(member: E) -> Self {
        Self {
            ordinal: member.ordinal(),
            ty: enum_type::<E>(),
        }
    }

    /// Box a raw ordinal of an enum descriptor
    pub fn from_ordinal(ty: &Type, ordinal: i32) -> ObjectResult<Self> {
        if !ty.try_get()?.is_enum() {
            return Err(ObjectError::NotAnEnum(ty.full_name()));
        }
        Ok(Self {
            ordinal,
            ty: ty.clone(),
        })
    }

    /// Resolve a member name against an enum descriptor
    pub fn parse(ty: &Type, text: &str) -> ObjectResult<Self> {
        let info = ty.try_get()?;
        if !info.is_enum() {
            return Err(ObjectError::NotAnEnum(info.full_name()));
        }
        let ordinal = info
            .enum_ordinal(text)
            .ok_or_else(|| ObjectError::UnknownEnumName {
                type_name: info.full_name(),
                name: text.to_string(),
            })?;
        Ok(Self {
            ordinal,
            ty: ty.clone(),
        })
    }

    /// The member ordinal
    pub fn ordinal(&self) -> i32 {
        self.ordinal
    }

    /// The member name, if the ordinal is named
    pub fn name(&self) -> Option<&str> {
        self.ty.enum_name(self.ordinal)
    }

    /// Convert back to the typed member
    pub fn to_enum<E: EnumType>(&self) -> ObjectResult<E> {
        let expected = enum_type::<E>();
        if expected != self.ty {
            return Err(ObjectError::InvalidCast {
                expected: expected.full_name(),
                actual: self.ty.full_name(),
            });
        }
        E::from_ordinal(self.ordinal).ok_or_else(|| ObjectError::InvalidCast {
            expected: expected.full_name(),
            actual: format!("{}({})", self.ty.full_name(), self.ordinal),
        })
    }
}

impl Object for EnumValue {
    fn equals(&self, other: &ObjectRef) -> bool {
        other
            .downcast_ref::<EnumValue>()
            .is_some_and(|other| other.ty == self.ty && other.ordinal == self.ordinal)
    }

    fn hash_code(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.ordinal.hash(&mut hasher);
        hasher.finish()
    }

    fn to_string(&self) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => self.ordinal.to_string(),
        }
    }

    fn get_type(&self) -> Type {
        self.ty.clone()
    }
}

/// Box a typed enum member behind an object handle
pub fn box_enum<E: EnumType>(member: E) -> ObjectRef {
    box_enum_value(EnumValue::of(member))
}

/// Put an already-built enum value behind an object handle
pub fn box_enum_value(value: EnumValue) -> ObjectRef {
    Ptr::new(value).into_object()
}

/// Recover a typed enum member from an object handle
pub fn unbox_enum<E: EnumType>(object: &ObjectRef) -> ObjectResult<E> {
    let pointee = object.try_get()?;
    match object.downcast_ref::<EnumValue>() {
        Some(value) => value.to_enum::<E>(),
        None => Err(ObjectError::InvalidCast {
            expected: enum_type::<E>().full_name(),
            actual: pointee.get_type().full_name(),
        }),
    }
}

/// Declare a Rust enum together with its [`EnumType`] implementation.
///
/// ```ignore
/// declare_enum! {
///     /// Sample colours
///     pub enum Color in "Dot.Test" {
///         Empty = 0,
///         Blue = 1,
///         Red = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! declare_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $namespace:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $crate::EnumType for $name {
            const NAMESPACE: &'static str = $namespace;
            const NAME: &'static str = stringify!($name);

            fn variants() -> &'static [(&'static str, Self)] {
                &[$((stringify!($variant), $name::$variant)),+]
            }

            fn ordinal(self) -> i32 {
                self as i32
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::Int;
    use crate::types::type_of;

    declare_enum! {
        enum Colors in "Dot.Test" {
            Empty = 0,
            Blue = 1,
            Red = 2,
        }
    }

    declare_enum! {
        enum Apples in "Dot.Test" {
            Empty = 0,
            Red = 1,
        }
    }

    #[test]
    fn test_enum_descriptor() {
        let ty = enum_type::<Colors>();

        assert_eq!(ty.full_name(), "Dot.Test.Colors");
        assert!(ty.is_enum());
        assert!(ty.is_subclass_of(&enum_base_type()));
        assert_eq!(ty.enum_ordinal("Red"), Some(2));
        assert_eq!(ty, enum_type::<Colors>());
    }

    #[test]
    fn test_enum_box_round_trip() {
        let object = box_enum(Colors::Blue);

        assert_eq!(object.to_string(), "Blue");
        assert_eq!(unbox_enum::<Colors>(&object).unwrap(), Colors::Blue);
        assert_eq!(object.get_type(), enum_type::<Colors>());
    }

    #[test]
    fn test_enum_parse() {
        let ty = enum_type::<Colors>();
        let parsed = EnumValue::parse(&ty, "Red").unwrap();

        assert_eq!(parsed.ordinal(), 2);
        assert_eq!(parsed.to_enum::<Colors>().unwrap(), Colors::Red);
        assert!(Ptr::new(parsed).into_object().equals(&box_enum(Colors::Red)));
    }

    #[test]
    fn test_enum_parse_unknown_name() {
        let err = EnumValue::parse(&enum_type::<Colors>(), "Green").unwrap_err();
        assert!(matches!(err, ObjectError::UnknownEnumName { .. }));
        assert!(err.is_lookup());
    }

    #[test]
    fn test_enum_parse_not_enum() {
        let err = EnumValue::parse(&type_of::<Int>(), "Red").unwrap_err();
        assert_eq!(err, ObjectError::NotAnEnum("System.Int32".to_string()));
    }

    #[test]
    fn test_same_ordinal_different_enum() {
        let red_apple = box_enum(Apples::Red);
        let blue = box_enum(Colors::Blue);

        assert!(!red_apple.equals(&blue));
        assert!(unbox_enum::<Colors>(&red_apple).is_err());
    }

    #[test]
    fn test_unnamed_ordinal_prints_decimal() {
        let value = EnumValue::from_ordinal(&enum_type::<Colors>(), 7).unwrap();

        assert_eq!(Object::to_string(&value), "7");
        assert!(value.to_enum::<Colors>().is_err());
    }
}
