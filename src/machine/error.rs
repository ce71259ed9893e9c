//! Errors raised while firing events.

use thiserror::Error;

/// An event was fired from a state that has no registered transition for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot '{event}' when state is {}", describe_state(.state))]
pub struct IllegalTransition {
    pub event: String,
    /// `None` when the subject had no state assigned yet.
    pub state: Option<String>,
}

impl IllegalTransition {
    pub fn new(event: impl Into<String>, state: Option<&str>) -> Self {
        Self {
            event: event.into(),
            state: state.map(str::to_string),
        }
    }
}

fn describe_state(state: &Option<String>) -> String {
    match state {
        Some(state) => format!("'{state}'"),
        None => "unset".to_string(),
    }
}

/// Errors returned by the `fire*` family.
///
/// `E` is the error type of the business logic run during the transition.
/// It is passed through unchanged.
#[derive(Debug, Error)]
pub enum TransitionError<E> {
    #[error(transparent)]
    Illegal(#[from] IllegalTransition),

    #[error("transition action failed: {0}")]
    Action(#[source] E),

    #[error("failed to persist state '{state}': {source}")]
    Persist {
        state: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl<E> TransitionError<E> {
    pub fn is_illegal(&self) -> bool {
        matches!(self, TransitionError::Illegal(_))
    }

    pub fn as_illegal(&self) -> Option<&IllegalTransition> {
        match self {
            TransitionError::Illegal(illegal) => Some(illegal),
            _ => None,
        }
    }

    /// Recover the business logic error, if that is what failed.
    pub fn into_action(self) -> Option<E> {
        match self {
            TransitionError::Action(error) => Some(error),
            _ => None,
        }
    }

    /// Short code suitable for logs or API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            TransitionError::Illegal(_) => "ILLEGAL_TRANSITION",
            TransitionError::Action(_) => "ACTION_FAILED",
            TransitionError::Persist { .. } => "PERSIST_FAILED",
        }
    }
}
