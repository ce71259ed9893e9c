//! Context handed to business logic and hooks during a transition.

use serde::{Deserialize, Serialize};

/// A resolved transition attempt: the event being fired, the state it is
/// fired from and the state it will commit.
///
/// Business logic sees the pending destination through `to` before the
/// subject's state is committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionContext {
    pub event: String,
    pub from: String,
    pub to: String,
}

impl TransitionContext {
    pub fn new(event: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when the transition leaves the state unchanged.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}
