//! Reflective construction
//!
//! An [`Activator`] owns a table of constructors per type descriptor and a
//! name index, and creates instances from a descriptor plus an argument list.
//! Each activator is independent; nothing here is process-global except the
//! descriptors themselves.
//!
//! # Constructor selection
//!
//! ```text
//! create_instance_with(ty, args)
//!   ├─ ty abstract?              → AbstractType
//!   ├─ no constructors?          → NotConstructible
//!   ├─ first ctor where
//!   │    params.len() == args.len()
//!   │    and every arg matches   → invoke
//!   └─ otherwise                 → NoMatchingConstructor
//! ```
//!
//! An argument matches a parameter when it is null, when its descriptor is
//! the parameter descriptor, or (with `match_derived_arguments`) when its
//! descriptor derives from the parameter descriptor.

use crate::boxed::{Bool, Char, Double, Int, Long};
use crate::enums::{box_enum_value, enum_type, EnumType, EnumValue};
use crate::error::{ObjectError, ObjectResult};
use crate::handle::Ptr;
use crate::object::{Object, ObjectRef, PlainObject};
use crate::string::StringObject;
use crate::types::{enum_base_type, object_type, type_of, Type};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// Constructor body: receives exactly as many arguments as it declares
pub type ConstructorFn = Arc<dyn Fn(&[ObjectRef]) -> ObjectResult<ObjectRef> + Send + Sync>;

/// Activator configuration
#[derive(Debug, Clone)]
pub struct ActivatorOptions {
    /// Pre-register default constructors for the built-in types
    pub register_builtins: bool,

    /// Let an argument whose type derives from the parameter type match
    pub match_derived_arguments: bool,
}

impl Default for ActivatorOptions {
    fn default() -> Self {
        Self {
            register_builtins: true,
            match_derived_arguments: true,
        }
    }
}

/// A declared constructor parameter
#[derive(Debug, Clone)]
pub struct ParameterInfo {
    name: String,
    parameter_type: Type,
    position: usize,
}

impl ParameterInfo {
    /// Parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter type
    pub fn parameter_type(&self) -> &Type {
        &self.parameter_type
    }

    /// Zero-based position in the parameter list
    pub fn position(&self) -> usize {
        self.position
    }

    fn accepts(&self, argument: &ObjectRef, match_derived: bool) -> bool {
        let Some(argument) = argument.as_deref() else {
            return true;
        };
        let actual = argument.get_type();
        if actual == self.parameter_type {
            return true;
        }
        match_derived && self.parameter_type.is_assignable_from(&actual)
    }
}

/// A registered constructor
#[derive(Clone)]
pub struct ConstructorInfo {
    declaring_type: Type,
    parameters: Vec<ParameterInfo>,
    body: ConstructorFn,
}

impl ConstructorInfo {
    /// Describe a constructor of `declaring_type`
    pub fn new<F>(declaring_type: Type, parameters: &[(&str, Type)], body: F) -> Self
    where
        F: Fn(&[ObjectRef]) -> ObjectResult<ObjectRef> + Send + Sync + 'static,
    {
        let parameters = parameters
            .iter()
            .enumerate()
            .map(|(position, (name, parameter_type))| ParameterInfo {
                name: name.to_string(),
                parameter_type: parameter_type.clone(),
                position,
            })
            .collect();
        Self {
            declaring_type,
            parameters,
            body: Arc::new(body),
        }
    }

    /// Type this constructor creates
    pub fn declaring_type(&self) -> &Type {
        &self.declaring_type
    }

    /// Declared parameters in order
    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    /// Whether `arguments` can be passed to this constructor
    pub fn matches(&self, arguments: &[ObjectRef], match_derived: bool) -> bool {
        self.parameters.len() == arguments.len()
            && self
                .parameters
                .iter()
                .zip(arguments)
                .all(|(parameter, argument)| parameter.accepts(argument, match_derived))
    }

    /// Run the constructor
    pub fn invoke(&self, arguments: &[ObjectRef]) -> ObjectResult<ObjectRef> {
        if arguments.len() != self.parameters.len() {
            return Err(ObjectError::ArgumentCount {
                expected: self.parameters.len(),
                got: arguments.len(),
            });
        }
        (self.body)(arguments)
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("declaring_type", &self.declaring_type.full_name())
            .field("parameters", &self.parameters.len())
            .finish()
    }
}

/// Creates instances from type descriptors
pub struct Activator {
    options: ActivatorOptions,

    /// Constructors per descriptor, in registration order
    constructors: DashMap<TypeId, Vec<ConstructorInfo>>,

    /// Descriptors by full name
    full_names: DashMap<String, Type>,

    /// Descriptors by unqualified name (first registration wins)
    short_names: DashMap<String, Type>,
}

impl Activator {
    /// Create an activator with default options
    pub fn new() -> Self {
        Self::with_options(ActivatorOptions::default())
    }

    /// Create an activator with specific options
    pub fn with_options(options: ActivatorOptions) -> Self {
        let activator = Self {
            options,
            constructors: DashMap::new(),
            full_names: DashMap::new(),
            short_names: DashMap::new(),
        };

        activator.register_type(object_type());
        activator.register_type(enum_base_type());

        if activator.options.register_builtins {
            activator.register_default::<Bool>();
            activator.register_default::<Char>();
            activator.register_default::<Int>();
            activator.register_default::<Long>();
            activator.register_default::<Double>();
            activator.register_default::<StringObject>();
            activator.register_default::<PlainObject>();
        }

        activator
    }

    /// Options this activator was built with
    pub fn options(&self) -> &ActivatorOptions {
        &self.options
    }

    /// Make a descriptor resolvable by name; the first type bound to a name keeps it
    pub fn register_type(&self, ty: Type) {
        let full_name = ty.full_name();
        self.short_names
            .entry(ty.name().to_string())
            .or_insert_with(|| ty.clone());
        match self.full_names.entry(full_name) {
            Entry::Occupied(existing) => {
                if existing.get() != &ty {
                    log::debug!("type name {} already bound, keeping first", existing.key());
                }
            }
            Entry::Vacant(slot) => {
                log::debug!("registered type {}", slot.key());
                slot.insert(ty);
            }
        }
    }

    /// Register a constructor for `ty`; earlier registrations take precedence
    pub fn register_constructor<F>(&self, ty: &Type, parameters: &[(&str, Type)], body: F)
    where
        F: Fn(&[ObjectRef]) -> ObjectResult<ObjectRef> + Send + Sync + 'static,
    {
        self.register_type(ty.clone());
        let constructor = ConstructorInfo::new(ty.clone(), parameters, body);
        log::debug!(
            "registered constructor {}({})",
            ty.full_name(),
            constructor
                .parameters()
                .iter()
                .map(|p| p.parameter_type().full_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.constructors.entry(ty.id()).or_default().push(constructor);
    }

    /// Register the parameterless constructor of `T`
    pub fn register_default<T: Object + Default>(&self) -> Type {
        let ty = type_of::<T>();
        self.register_constructor(&ty, &[], |_| Ok(Ptr::new(T::default()).into_object()));
        ty
    }

    /// Make the enum `E` resolvable by name
    pub fn register_enum<E: EnumType>(&self) -> Type {
        let ty = enum_type::<E>();
        self.register_type(ty.clone());
        ty
    }

    /// Resolve a descriptor by full or unqualified name
    pub fn get_type(&self, name: &str) -> ObjectResult<Type> {
        self.full_names
            .get(name)
            .or_else(|| self.short_names.get(name))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ObjectError::UnknownType(name.to_string()))
    }

    /// Constructors registered for `ty`, in registration order
    pub fn constructors(&self, ty: &Type) -> Vec<ConstructorInfo> {
        self.constructors
            .get(&ty.id())
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Create an instance with the parameterless constructor
    pub fn create_instance(&self, ty: &Type) -> ObjectResult<ObjectRef> {
        self.create_instance_with(ty, &[])
    }

    /// Create an instance with the first constructor matching `arguments`
    pub fn create_instance_with(&self, ty: &Type, arguments: &[ObjectRef]) -> ObjectResult<ObjectRef> {
        let info = ty.try_get()?;
        if info.is_abstract() {
            return Err(ObjectError::AbstractType(info.full_name()));
        }

        // Snapshot so the table is not locked while constructors run
        let constructors = self.constructors(ty);
        if constructors.is_empty() {
            return Err(ObjectError::NotConstructible(info.full_name()));
        }

        constructors
            .iter()
            .find(|ctor| ctor.matches(arguments, self.options.match_derived_arguments))
            .ok_or_else(|| ObjectError::NoMatchingConstructor {
                type_name: info.full_name(),
                argument_count: arguments.len(),
            })?
            .invoke(arguments)
    }

    /// Resolve `name` and create an instance of it
    pub fn create_instance_by_name(&self, name: &str, arguments: &[ObjectRef]) -> ObjectResult<ObjectRef> {
        let ty = self.get_type(name)?;
        self.create_instance_with(&ty, arguments)
    }

    /// Resolve an enum by name and parse one of its members
    pub fn parse_enum(&self, type_name: &str, text: &str) -> ObjectResult<ObjectRef> {
        let ty = self.get_type(type_name)?;
        EnumValue::parse(&ty, text).map(box_enum_value)
    }
}

impl Default for Activator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Activator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activator")
            .field("options", &self.options)
            .field("types", &self.full_names.len())
            .field("constructible", &self.constructors.len())
            .finish()
    }
}
