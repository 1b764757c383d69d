//! Boxed primitives
//!
//! [`Boxed<T>`] wraps a copy of a primitive value so it can live behind an
//! [`ObjectRef`] alongside reference types. Unlike plain objects, boxes
//! compare and hash by the wrapped value.

use crate::error::{ObjectError, ObjectResult};
use crate::handle::Ptr;
use crate::object::{Object, ObjectRef};
use crate::types::TypeBuilder;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// A value type that can be boxed
///
/// Implemented for `bool`, `char`, `i32`, `i64` and `f64`. Applications may
/// implement it for their own copyable value structs.
pub trait Primitive: Copy + PartialEq + Send + Sync + 'static {
    /// Descriptor namespace
    const NAMESPACE: &'static str = "System";

    /// Descriptor name
    const NAME: &'static str;

    /// Hash of the value; equal values must hash equally
    fn hash_value(&self) -> u64;

    /// Canonical text form, the inverse of `parse_value`
    fn format_value(&self) -> String;

    /// Parse the canonical text form
    fn parse_value(text: &str) -> ObjectResult<Self>;
}

/// Immutable box around a primitive value
#[derive(Debug, Clone, Copy)]
pub struct Boxed<T: Primitive> {
    value: T,
}

/// Boxed `bool`
pub type Bool = Boxed<bool>;
/// Boxed `char`
pub type Char = Boxed<char>;
/// Boxed `i32`
pub type Int = Boxed<i32>;
/// Boxed `i64`
pub type Long = Boxed<i64>;
/// Boxed `f64`
pub type Double = Boxed<f64>;

impl<T: Primitive> Boxed<T> {
    /// Box a copy of `value`
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// The wrapped value
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Parse text into a box
    pub fn parse(text: &str) -> ObjectResult<Self> {
        T::parse_value(text).map(Self::new)
    }
}

impl<T: Primitive + Default> Default for Boxed<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Primitive> Object for Boxed<T> {
    fn equals(&self, other: &ObjectRef) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| other.value == self.value)
    }

    fn hash_code(&self) -> u64 {
        self.value.hash_value()
    }

    fn to_string(&self) -> String {
        self.value.format_value()
    }

    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace(T::NAMESPACE).with_name(T::NAME)
    }
}

impl Boxed<f64> {
    /// Sentinel meaning "no value"
    pub const EMPTY: f64 = -1e100;

    /// Tolerance for fuzzy comparison; `equals` stays exact
    pub const TOLERANCE: f64 = 1e-10;

    /// Whether `value` is the empty sentinel
    pub fn is_empty(value: f64) -> bool {
        value == Self::EMPTY
    }

    /// Whether two doubles are within `TOLERANCE` of each other
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= Self::TOLERANCE
    }
}

impl Boxed<i64> {
    /// Sentinel meaning "no value"
    pub const EMPTY: i64 = i64::MIN;

    /// Whether `value` is the empty sentinel
    pub fn is_empty(value: i64) -> bool {
        value == Self::EMPTY
    }
}

/// Box a primitive behind an object handle
pub fn box_value<T: Primitive>(value: T) -> ObjectRef {
    Ptr::new(Boxed::new(value)).into_object()
}

/// Recover a primitive from an object handle
pub fn unbox<T: Primitive>(object: &ObjectRef) -> ObjectResult<T> {
    let pointee = object.try_get()?;
    match object.downcast_ref::<Boxed<T>>() {
        Some(boxed) => Ok(boxed.value),
        None => Err(ObjectError::InvalidCast {
            expected: crate::types::type_of::<Boxed<T>>().full_name(),
            actual: pointee.get_type().full_name(),
        }),
    }
}

fn fx_hash<H: Hash>(value: H) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

impl Primitive for bool {
    const NAME: &'static str = "Bool";

    fn hash_value(&self) -> u64 {
        fx_hash(self)
    }

    fn format_value(&self) -> String {
        let text = if *self { "True" } else { "False" };
        text.to_string()
    }

    fn parse_value(text: &str) -> ObjectResult<Self> {
        match text {
            "True" => Ok(true),
            "False" => Ok(false),
            _ => Err(ObjectError::parse(text, Self::NAME, "expected 'True' or 'False'")),
        }
    }
}

impl Primitive for char {
    const NAME: &'static str = "Char";

    fn hash_value(&self) -> u64 {
        fx_hash(self)
    }

    // Decimal code point
    fn format_value(&self) -> String {
        itoa::Buffer::new().format(u32::from(*self)).to_string()
    }

    fn parse_value(text: &str) -> ObjectResult<Self> {
        let code = text
            .trim()
            .parse::<u32>()
            .map_err(|e| ObjectError::parse(text, Self::NAME, e))?;
        char::from_u32(code)
            .ok_or_else(|| ObjectError::parse(text, Self::NAME, "not a Unicode scalar value"))
    }
}

impl Primitive for i32 {
    const NAME: &'static str = "Int32";

    fn hash_value(&self) -> u64 {
        fx_hash(self)
    }

    fn format_value(&self) -> String {
        itoa::Buffer::new().format(*self).to_string()
    }

    fn parse_value(text: &str) -> ObjectResult<Self> {
        text.trim()
            .parse()
            .map_err(|e| ObjectError::parse(text, Self::NAME, e))
    }
}

impl Primitive for i64 {
    const NAME: &'static str = "Int64";

    fn hash_value(&self) -> u64 {
        fx_hash(self)
    }

    fn format_value(&self) -> String {
        itoa::Buffer::new().format(*self).to_string()
    }

    fn parse_value(text: &str) -> ObjectResult<Self> {
        text.trim()
            .parse()
            .map_err(|e| ObjectError::parse(text, Self::NAME, e))
    }
}

impl Primitive for f64 {
    const NAME: &'static str = "Double";

    // 0.0 == -0.0, so both must hash alike
    fn hash_value(&self) -> u64 {
        let normalized = if *self == 0.0 { 0.0f64 } else { *self };
        fx_hash(normalized.to_bits())
    }

    fn format_value(&self) -> String {
        ryu::Buffer::new().format(*self).to_string()
    }

    fn parse_value(text: &str) -> ObjectResult<Self> {
        text.trim()
            .parse()
            .map_err(|e| ObjectError::parse(text, Self::NAME, e))
    }
}
