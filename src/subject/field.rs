//! In-memory state storage for plain subjects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage cell for a subject's current state.
///
/// Plain subjects embed one of these and forward [`Subject::state`] and
/// [`Subject::set_state`] to it, usually through [`impl_subject!`].
///
/// [`Subject::state`]: crate::Subject::state
/// [`Subject::set_state`]: crate::Subject::set_state
/// [`impl_subject!`]: crate::impl_subject
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateField(Option<String>);

impl StateField {
    /// An unset field.
    pub fn new() -> Self {
        Self(None)
    }

    pub fn with(state: impl Into<String>) -> Self {
        Self(Some(state.into()))
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn set(&mut self, state: impl Into<String>) {
        self.0 = Some(state.into());
    }

    pub fn is(&self, state: &str) -> bool {
        self.get() == Some(state)
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(state) => f.write_str(state),
            None => f.write_str("<unset>"),
        }
    }
}

impl From<&str> for StateField {
    fn from(state: &str) -> Self {
        Self::with(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let field = StateField::new();

        assert!(field.is_unset());
        assert_eq!(field.get(), None);
        assert_eq!(field.to_string(), "<unset>");
    }

    #[test]
    fn set_overwrites() {
        let mut field = StateField::with("draft");
        field.set("active");

        assert!(field.is("active"));
        assert!(!field.is("draft"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let field = StateField::from("active");

        assert_eq!(serde_json::to_string(&field).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&StateField::new()).unwrap(), "null");
    }
}
