//! Versioned JSON documents describing a state machine definition.
//!
//! Definitions can live in configuration instead of code:
//!
//! ```json
//! {
//!   "version": 1,
//!   "events": {
//!     "activate": { "draft": "active" },
//!     "archive": { "draft": "archived", "active": "archived" }
//!   }
//! }
//! ```

use crate::builder::StateMachineBuilder;
use crate::core::TransitionTable;
use crate::machine::StateMachine;
use serde::{Deserialize, Serialize};

pub mod declarations;
pub mod error;

pub use declarations::EventDeclarations;
pub use error::DefinitionError;

/// Version identifier for the definition format
pub const DEFINITION_VERSION: u32 = 1;

/// Serializable form of a [`StateMachine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionDocument {
    /// Document format version
    pub version: u32,

    /// Event name -> source state -> destination state, as declared
    pub events: EventDeclarations,
}

impl DefinitionDocument {
    pub fn new(table: &TransitionTable) -> Self {
        Self {
            version: DEFINITION_VERSION,
            events: EventDeclarations::from(table),
        }
    }

    /// Check the version and rebuild the machine with strict validation.
    ///
    /// A source state declared twice with different destinations, whether
    /// through a repeated key inside one event or a repeated event key, is
    /// reported as a conflict rather than resolved by position.
    pub fn into_machine(self) -> Result<StateMachine, DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }

        let machine = self
            .events
            .into_iter()
            .fold(StateMachineBuilder::new().strict(true), |builder, (event, pairs)| {
                builder.event(event, pairs)
            })
            .build()?;

        Ok(machine)
    }
}

impl StateMachine {
    pub fn to_document(&self) -> DefinitionDocument {
        DefinitionDocument::new(self.table())
    }

    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string(&self.to_document())
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(&self.to_document())
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Load a machine from a JSON definition document.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let document: DefinitionDocument = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        document.into_machine()
    }
}
