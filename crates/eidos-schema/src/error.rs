//! Error types for the schema crate.
//!
//! Derivation itself is total and never fails; errors arise only at the
//! registry and serialization boundaries.

use thiserror::Error;

/// Errors that can occur when registering or serializing schemas.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A registered name violates the schema-registry naming grammar.
    #[error("Invalid schema name '{name}': must match ^[A-Za-z0-9._-]+$")]
    InvalidName {
        /// The offending name.
        name: String,
    },

    /// Failed to serialize a schema to JSON.
    #[error("Failed to serialize schema: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
