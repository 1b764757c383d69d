//! DotRs Object Model Core
//!
//! This crate provides the shared-ownership object model including:
//! - Nullable smart handles with atomic reference counting (`Ptr`)
//! - The `Object` contract (equality, hashing, text form, runtime type)
//! - Boxed primitives, strings and enums with parse/format support
//! - Process-wide type descriptors and a reflective `Activator`
//! - The `Enumerable` seam used by collection adapters

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod activator;
pub mod boxed;
pub mod convert;
pub mod enumerable;
pub mod enums;
pub mod error;
pub mod handle;
pub mod object;
pub mod string;
pub mod types;

pub use activator::{Activator, ActivatorOptions, ConstructorFn, ConstructorInfo, ParameterInfo};
pub use boxed::{box_value, unbox, Bool, Boxed, Char, Double, Int, Long, Primitive};
pub use convert::{FromObject, ToObject};
pub use enumerable::{enumerate_object, enumerate_snapshot, Enumerable, ObjectEnumerator};
pub use enums::{box_enum, box_enum_value, enum_type, unbox_enum, EnumType, EnumValue};
pub use error::{ObjectError, ObjectResult};
pub use handle::Ptr;
pub use object::{equals, new_object, reference_equals, Object, ObjectExt, ObjectKey, ObjectRef, PlainObject};
pub use string::{box_str, StringObject};
pub use types::{enum_base_type, lookup, object_type, type_of, Type, TypeBuilder, TypeInfo};
