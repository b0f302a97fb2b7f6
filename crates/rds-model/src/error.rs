//! Error types for closed-value decoding

use thiserror::Error;

use crate::codec::ScalarKind;

/// Errors raised while converting a wire scalar into a closed-value enum
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// No converter is registered under the requested scalar type name
    #[error("no converter registered for scalar type '{0}'")]
    NoConverter(String),

    /// The converter could not turn the text into a value of its kind
    #[error("cannot convert '{input}' to {kind}")]
    Conversion { kind: ScalarKind, input: String },

    /// The converted scalar is not the kind the enum is backed by
    #[error("{type_name} expects a {expected} value but got {found}")]
    TypeMismatch {
        type_name: &'static str,
        expected: ScalarKind,
        found: ScalarKind,
    },

    /// Strict decoding only: the value is well-formed but not registered
    #[error("'{value}' is not a registered {type_name} value")]
    NotInRegistry {
        type_name: &'static str,
        value: String,
    },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Returns true if the failure came from the closed-set check rather than
    /// from the scalar conversion itself
    #[must_use]
    pub fn is_unregistered(&self) -> bool {
        matches!(self, CodecError::NotInRegistry { .. })
    }
}
