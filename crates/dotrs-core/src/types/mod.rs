//! Runtime type information
//!
//! Descriptors for identity and type checks, plus the process-wide cache
//! that hands out one descriptor per Rust type.

mod descriptor;
mod registry;

pub use descriptor::{Type, TypeBuilder, TypeInfo};
pub use registry::{enum_base_type, lookup, object_type, type_of};

pub(crate) use registry::descriptor;
