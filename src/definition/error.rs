//! Definition document error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while loading or writing definition documents
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Document declares a format version this crate cannot read
    #[error("Unsupported definition version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Document parsed but describes an invalid machine
    #[error(transparent)]
    Invalid(#[from] BuildError),
}
