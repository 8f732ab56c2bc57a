//! Error types for stand-in records
//!
//! Declaring a stand-in never touches storage, so most of these surface only
//! on first use: reading a member that was never synthesized, resolving an
//! association whose target has no Null class, or a model descriptor failing
//! to report its schema.

use thiserror::Error;

use crate::model::RecordType;

/// Result type alias for stand-in operations
pub type NullResult<T> = Result<T, NullError>;

/// Error types for Null and Void stand-ins
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NullError {
    /// The stand-in has no accessor, body method or association with this name.
    /// Also raised for attribute reads before the backing table exists.
    #[error("undefined method '{name}' for {record_type}")]
    NoSuchMember { record_type: RecordType, name: String },

    /// No model with this name has been registered
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// A to-one association points at a model without a Null class
    #[error("Model '{0}' has no Null class defined")]
    MissingNullClass(String),

    /// A model has no Void class defined
    #[error("Model '{0}' has no Void class defined")]
    MissingVoidClass(String),

    /// A second Null/Void declaration for the same model
    #[error("{kind} is already defined for model '{model}'")]
    DuplicateDefinition { model: String, kind: String },

    /// The model descriptor could not report its schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// A Void override names neither a model attribute nor an assignment
    #[error("Unknown attribute '{name}' in overrides for {model}")]
    UnknownOverride { model: String, name: String },

    /// A Void override names a body method or `id`, which always win over overrides
    #[error("Override '{name}' for {model} is shadowed by a method")]
    ShadowedOverride { model: String, name: String },

    /// The registry that produced a stand-in no longer exists
    #[error("Registry for this stand-in has been dropped")]
    RegistryDropped,

    /// Invalid configuration value
    #[error("Configuration error: invalid value '{value}' for '{field}', expected {expected}")]
    Configuration {
        field: String,
        value: String,
        expected: String,
    },
}

impl NullError {
    /// Create a "method not found" error for a record type
    pub fn no_such_member(record_type: &RecordType, name: impl Into<String>) -> Self {
        Self::NoSuchMember {
            record_type: record_type.clone(),
            name: name.into(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Check if this error is a "method not found" condition
    pub fn is_no_such_member(&self) -> bool {
        matches!(self, Self::NoSuchMember { .. })
    }
}
