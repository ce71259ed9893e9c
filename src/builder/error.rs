//! Errors produced while building a state machine definition.

use thiserror::Error;

/// A single problem found in a strict definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("Event name must not be empty")]
    EmptyEventName,

    #[error("Event '{event}' has an empty state name")]
    EmptyStateName { event: String },

    #[error("Event '{event}' maps '{from}' to both '{existing}' and '{redeclared}'")]
    ConflictingTransition {
        event: String,
        from: String,
        existing: String,
        redeclared: String,
    },
}

/// Errors that can occur when building state machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid state machine definition: {}", summarize(.violations))]
    InvalidDefinition { violations: Vec<DefinitionViolation> },
}

impl BuildError {
    pub fn violations(&self) -> &[DefinitionViolation] {
        match self {
            BuildError::InvalidDefinition { violations } => violations,
        }
    }
}

fn summarize(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
