//! Centralized error types for DSForge.

use thiserror::Error;

/// Main error type for DSForge operations.
///
/// Every variant is local and recoverable. Commands decide and report these
/// before touching the store, so a rejected command never leaves a partial
/// mutation behind.
#[derive(Error, Debug)]
pub enum DsError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Cannot remove the last {entity} of {parent}")]
    MinimumCardinality { entity: &'static str, parent: String },

    #[error("State '{0}' is protected while other states exist")]
    ProtectedState(String),

    #[error("Name '{name}' is already used in {scope}")]
    DuplicateName { name: String, scope: String },

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Variant not found: {0}")]
    VariantNotFound(String),

    #[error("State not found: {0}")]
    StateNotFound(String),

    #[error("Unknown style property: {0}")]
    UnknownProperty(String),

    #[error("Invalid value for '{property}': expected {expected}")]
    InvalidValue {
        property: String,
        expected: &'static str,
    },

    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export failed: {0}")]
    Export(String),
}

/// Result type for DSForge operations.
pub type DsResult<T> = Result<T, DsError>;

impl DsError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create an invalid name error.
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    /// Whether this error is a cardinality rejection (last variant / last state).
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Self::MinimumCardinality { .. })
    }
}
