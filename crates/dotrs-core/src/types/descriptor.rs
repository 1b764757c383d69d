//! Runtime type descriptors
//!
//! A [`TypeInfo`] names a type (namespace plus name), links to its base
//! descriptor, and for enums carries the name to ordinal map. Descriptors are
//! process-wide singletons, so `Type == Type` is handle identity.

use crate::handle::Ptr;
use crate::object::{Object, ObjectRef};
use crate::types::registry::object_type;
use rustc_hash::FxHasher;
use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// Handle to a type descriptor
pub type Type = Ptr<TypeInfo>;

/// Runtime type information
#[derive(Debug)]
pub struct TypeInfo {
    id: TypeId,
    namespace: String,
    name: String,
    base: Option<Type>,
    is_abstract: bool,
    enum_values: Option<Vec<(String, i32)>>,
}

impl TypeInfo {
    /// Rust type identity this descriptor was built for
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Namespace (may be empty)
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Unqualified name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Namespace.Name`, or just the name when the namespace is empty
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Base descriptor (`None` only for the root)
    pub fn base_type(&self) -> Option<&Type> {
        self.base.as_ref()
    }

    /// Whether instances of this exact type can never be created
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Whether this descriptor is an enum
    pub fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }

    /// Enum members in declaration order (empty for non-enums)
    pub fn enum_values(&self) -> &[(String, i32)] {
        self.enum_values.as_deref().unwrap_or(&[])
    }

    /// Ordinal of an enum member by name
    pub fn enum_ordinal(&self, name: &str) -> Option<i32> {
        self.enum_values()
            .iter()
            .find(|(member, _)| member == name)
            .map(|(_, ordinal)| *ordinal)
    }

    /// Name of the first enum member with the given ordinal
    pub fn enum_name(&self, ordinal: i32) -> Option<&str> {
        self.enum_values()
            .iter()
            .find(|(_, value)| *value == ordinal)
            .map(|(member, _)| member.as_str())
    }

    /// Whether `base` is a strict ancestor of this type
    pub fn is_subclass_of(&self, base: &TypeInfo) -> bool {
        let mut current = self.base.as_ref();
        while let Some(ty) = current {
            if ty.id == base.id {
                return true;
            }
            current = ty.base.as_ref();
        }
        false
    }

    /// Whether a value of type `other` can stand in for this type
    pub fn is_assignable_from(&self, other: &TypeInfo) -> bool {
        self.id == other.id || other.is_subclass_of(self)
    }
}

impl Object for TypeInfo {
    fn equals(&self, other: &ObjectRef) -> bool {
        other
            .downcast_ref::<TypeInfo>()
            .is_some_and(|other| other.id == self.id)
    }

    fn hash_code(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.id.hash(&mut hasher);
        hasher.finish()
    }

    fn to_string(&self) -> String {
        self.full_name()
    }

    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace("System").with_name("Type")
    }
}

/// Builder for [`TypeInfo`]
#[derive(Debug)]
pub struct TypeBuilder {
    id: TypeId,
    namespace: String,
    name: String,
    base: Option<Type>,
    is_abstract: bool,
    enum_values: Option<Vec<(String, i32)>>,
}

impl TypeBuilder {
    /// Start a root descriptor with no base
    pub fn new(id: TypeId, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            namespace: namespace.into(),
            name: name.into(),
            base: None,
            is_abstract: false,
            enum_values: None,
        }
    }

    /// Start a descriptor for `T`, named after its Rust path and based on `System.Object`
    pub fn for_type<T: ?Sized + 'static>() -> Self {
        let (namespace, name) = split_type_name(std::any::type_name::<T>());
        Self {
            base: Some(object_type()),
            ..Self::new(TypeId::of::<T>(), namespace, name)
        }
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the unqualified name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the base descriptor
    pub fn with_base(mut self, base: Type) -> Self {
        self.base = Some(base);
        self
    }

    /// Mark the type as abstract
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Mark the type as an enum with the given members
    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        self.enum_values = Some(
            values
                .into_iter()
                .map(|(name, ordinal)| (name.into(), ordinal))
                .collect(),
        );
        self
    }

    /// Finish the descriptor
    pub fn build(self) -> TypeInfo {
        TypeInfo {
            id: self.id,
            namespace: self.namespace,
            name: self.name,
            base: self.base,
            is_abstract: self.is_abstract,
            enum_values: self.enum_values,
        }
    }
}

/// Split `a::b::Name<G>` into (`a.b`, `Name<G>`)
fn split_type_name(full: &str) -> (String, String) {
    let generic_start = full.find('<').unwrap_or(full.len());
    let path = &full[..generic_start];
    match path.rfind("::") {
        Some(pos) => (path[..pos].replace("::", "."), full[pos + 2..].to_string()),
        None => (String::new(), full.to_string()),
    }
}
