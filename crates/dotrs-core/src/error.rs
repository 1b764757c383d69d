//! Error types for the object model

/// Result type for object model operations
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Faults raised by handles, boxing, parsing and the activator
///
/// Parse, lookup and construction faults are returned to the caller.
/// `NullReference` and `InvalidCast` are also the panic messages of the
/// dereferencing and casting accessors that do not return a `Result`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectError {
    /// Dereferenced a null handle
    #[error("Pointer is not initialized")]
    NullReference,

    /// Checked downcast to a type the pointee is not
    #[error("Cast cannot be performed: expected {expected}, got {actual}")]
    InvalidCast {
        /// Requested type name
        expected: String,
        /// Dynamic type name of the pointee
        actual: String,
    },

    /// Malformed text passed to a primitive parser
    #[error("Cannot parse '{text}' as {target}: {reason}")]
    Parse {
        /// Input text
        text: String,
        /// Target type name
        target: &'static str,
        /// Underlying parser message
        reason: String,
    },

    /// Enum parse with a name that is not a member of the enum
    #[error("'{name}' is not a member of enum {type_name}")]
    UnknownEnumName {
        /// Enum type name
        type_name: String,
        /// Requested member name
        name: String,
    },

    /// Enum operation on a descriptor that is not an enum
    #[error("Type {0} is not an enum")]
    NotAnEnum(String),

    /// Attempt to instantiate an abstract type
    #[error("Cannot create an instance of abstract type {0}")]
    AbstractType(String),

    /// Activator lookup on a type with no registered constructors
    #[error("Type {0} does not have registered constructors")]
    NotConstructible(String),

    /// Constructors exist but none accepts the given arguments
    #[error("No matching public constructor was found for {type_name} with {argument_count} argument(s)")]
    NoMatchingConstructor {
        /// Type name
        type_name: String,
        /// Number of arguments supplied
        argument_count: usize,
    },

    /// Lookup of a type name that was never registered
    #[error("Type {0} is not registered")]
    UnknownType(String),

    /// Constructor invoked with the wrong number of arguments
    #[error("Wrong number of arguments: expected {expected}, got {got}")]
    ArgumentCount {
        /// Declared parameter count
        expected: usize,
        /// Supplied argument count
        got: usize,
    },
}

impl ObjectError {
    /// Build a parse fault from any parser error
    pub fn parse(text: &str, target: &'static str, reason: impl ToString) -> Self {
        ObjectError::Parse {
            text: text.to_string(),
            target,
            reason: reason.to_string(),
        }
    }

    /// Check if this is a recoverable lookup fault (enum name, type or constructor)
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            ObjectError::UnknownEnumName { .. }
                | ObjectError::UnknownType(_)
                | ObjectError::NotConstructible(_)
                | ObjectError::NoMatchingConstructor { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_reference_message() {
        assert_eq!(
            ObjectError::NullReference.to_string(),
            "Pointer is not initialized"
        );
    }

    #[test]
    fn test_parse_fault_carries_input() {
        let err = ObjectError::parse("abc", "Int32", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Cannot parse 'abc' as Int32: invalid digit found in string"
        );
        assert!(!err.is_lookup());
    }

    #[test]
    fn test_lookup_classification() {
        assert!(ObjectError::UnknownType("X".into()).is_lookup());
        assert!(ObjectError::NotConstructible("X".into()).is_lookup());
        assert!(!ObjectError::NotAnEnum("X".into()).is_lookup());
    }
}
