//! Integration tests for descriptors, enums and reflective construction

use dotrs_core::{
    box_enum, declare_enum, enum_base_type, enum_type, object_type, type_of, unbox_enum, Activator,
    EnumType, EnumValue, FromObject, Object, ObjectError, ObjectRef, Ptr, StringObject, ToObject,
    TypeBuilder,
};

declare_enum! {
    /// Sample colours with a non-contiguous member
    pub enum Colors in "Dot.Sample" {
        Empty = 0,
        Blue = 1,
        Red = 2,
        Custom = 10,
    }
}

/// Abstract base used for derived-argument matching
struct Shape;

impl Object for Shape {
    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace("Dot.Sample").with_name("Shape").abstract_type()
    }
}

struct Circle {
    radius: f64,
}

impl Object for Circle {
    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder
            .with_namespace("Dot.Sample")
            .with_name("Circle")
            .with_base(type_of::<Shape>())
    }

    fn to_string(&self) -> String {
        format!("Circle({})", self.radius)
    }
}

/// Holds any shape
struct Frame {
    shape: ObjectRef,
    label: String,
}

impl Object for Frame {
    fn describe(builder: TypeBuilder) -> TypeBuilder {
        builder.with_namespace("Dot.Sample").with_name("Frame")
    }
}

fn sample_activator() -> Activator {
    let activator = Activator::new();

    activator.register_type(type_of::<Shape>());
    activator.register_constructor(&type_of::<Circle>(), &[("radius", type_of::<dotrs_core::Double>())], |args| {
        Ok(Ptr::new(Circle {
            radius: f64::from_object(&args[0])?,
        })
        .into_object())
    });
    activator.register_constructor(
        &type_of::<Frame>(),
        &[("shape", type_of::<Shape>()), ("label", type_of::<StringObject>())],
        |args| {
            Ok(Ptr::new(Frame {
                shape: args[0].clone(),
                label: Option::<String>::from_object(&args[1])?.unwrap_or_default(),
            })
            .into_object())
        },
    );
    activator.register_enum::<Colors>();
    activator
}

#[test]
fn test_descriptor_hierarchy() {
    let circle = type_of::<Circle>();
    let shape = type_of::<Shape>();

    assert!(circle.is_subclass_of(&shape));
    assert!(circle.is_subclass_of(&object_type()));
    assert!(shape.is_assignable_from(&circle));
    assert!(!circle.is_assignable_from(&shape));
    assert_eq!(circle.base_type(), Some(&shape));
}

#[test]
fn test_type_of_value_matches_type_of_static() {
    let circle = Ptr::new(Circle { radius: 1.0 }).into_object();

    assert_eq!(circle.get_type(), type_of::<Circle>());
    assert_ne!(circle.get_type(), type_of::<Shape>());
    assert_eq!(circle.to_string(), "Circle(1)");
}

#[test]
fn test_abstract_base_not_instantiable() {
    let activator = sample_activator();

    assert_eq!(
        activator.create_instance_by_name("Dot.Sample.Shape", &[]).unwrap_err(),
        ObjectError::AbstractType("Dot.Sample.Shape".to_string())
    );
}

#[test]
fn test_derived_argument_accepted() {
    let activator = sample_activator();
    let circle = activator
        .create_instance_by_name("Circle", &[2.0f64.to_object()])
        .unwrap();

    let frame = activator
        .create_instance_by_name("Dot.Sample.Frame", &[circle.clone(), "main".to_object()])
        .unwrap();
    let frame = frame.cast::<Frame>();

    assert!(frame.shape.ptr_eq(&circle));
    assert_eq!(frame.label, "main");
}

#[test]
fn test_null_arguments_accepted() {
    let activator = sample_activator();
    let frame = activator
        .create_instance_by_name("Frame", &[Ptr::null(), Ptr::null()])
        .unwrap();
    let frame = frame.cast::<Frame>();

    assert!(frame.shape.is_null());
    assert!(frame.label.is_empty());
}

#[test]
fn test_mismatched_argument_rejected() {
    let activator = sample_activator();

    assert!(matches!(
        activator.create_instance_by_name("Frame", &[1i32.to_object(), "x".to_object()]),
        Err(ObjectError::NoMatchingConstructor { argument_count: 2, .. })
    ));
}

#[test]
fn test_enum_descriptor_and_parse() {
    let activator = sample_activator();
    let ty = enum_type::<Colors>();

    assert!(ty.is_subclass_of(&enum_base_type()));
    assert_eq!(ty.enum_values().len(), Colors::variants().len());

    let parsed = activator.parse_enum("Dot.Sample.Colors", "Custom").unwrap();
    assert_eq!(parsed.to_string(), "Custom");
    assert_eq!(unbox_enum::<Colors>(&parsed).unwrap(), Colors::Custom);
    assert!(parsed.equals(&box_enum(Colors::Custom)));

    assert!(EnumValue::parse(&ty, "red").is_err());
    assert!(matches!(
        activator.create_instance(&enum_base_type()),
        Err(ObjectError::AbstractType(_))
    ));
}

#[test]
fn test_enum_not_constructible() {
    let activator = sample_activator();

    assert_eq!(
        activator.create_instance(&enum_type::<Colors>()).unwrap_err(),
        ObjectError::NotConstructible("Dot.Sample.Colors".to_string())
    );
}
