//! Error types for the bindery crate.

use thiserror::Error;

use crate::value::Kind;

/// Errors raised while building specs or applying bound functions.
///
/// Dispatch errors (`AttributeNotFound`, `MethodNotFound`,
/// `AttributeNotWritable`, `ArityMismatch`) are raised by [`Bindable`]
/// implementations at the first failing access and propagate to the caller
/// of the bound function unwrapped; no partial result is produced.
///
/// [`Bindable`]: crate::Bindable
#[derive(Debug, Error)]
pub enum BindError {
    /// Invalid regular expression in a filter spec.
    #[error("invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The receiver exposes no readable attribute or method under this name.
    #[error("no readable attribute or method '{name}' on {type_name}")]
    AttributeNotFound {
        name: String,
        type_name: &'static str,
    },

    /// The receiver exposes no invokable method under this name.
    #[error("no method '{name}' on {type_name}")]
    MethodNotFound {
        name: String,
        type_name: &'static str,
    },

    /// The receiver exposes no writer for this attribute.
    #[error("attribute '{name}' on {type_name} is not writable")]
    AttributeNotWritable {
        name: String,
        type_name: &'static str,
    },

    /// An argument list does not match the accessor's parameters.
    #[error("'{name}' takes {expected} argument(s), {got} given")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A value had the wrong kind for the requested conversion or write.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl BindError {
    /// `AttributeNotFound` for the receiver type `T`.
    pub fn attribute_not_found<T: ?Sized>(name: &str) -> Self {
        BindError::AttributeNotFound {
            name: name.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `MethodNotFound` for the receiver type `T`.
    pub fn method_not_found<T: ?Sized>(name: &str) -> Self {
        BindError::MethodNotFound {
            name: name.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `AttributeNotWritable` for the receiver type `T`.
    pub fn not_writable<T: ?Sized>(name: &str) -> Self {
        BindError::AttributeNotWritable {
            name: name.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `ArityMismatch` for an accessor or method invocation.
    pub fn arity(name: &str, expected: usize, got: usize) -> Self {
        BindError::ArityMismatch {
            name: name.to_string(),
            expected,
            got,
        }
    }

    /// `TypeMismatch` against an actual [`Kind`].
    pub fn type_mismatch(expected: &'static str, actual: Kind) -> Self {
        BindError::TypeMismatch {
            expected,
            actual: actual.as_str(),
        }
    }
}

/// Result type for bindery operations.
pub type Result<T> = std::result::Result<T, BindError>;
