//! Subjects whose state lives in a persistence layer.

use super::Subject;

/// A subject that can durably save itself after a transition.
///
/// Firing through [`StateMachine::fire_persisted`] saves best-effort,
/// reporting failures through [`Persistent::on_persist_failed`].
/// [`StateMachine::fire_persisted_strict`] returns the failure instead.
///
/// Implementing this trait does not change plain [`StateMachine::fire`] or
/// [`StateMachine::fire_with`]: those commit in memory only and never call
/// [`persist`](Persistent::persist). Pick the persisted variant at the call
/// site when the transition must be saved.
///
/// [`StateMachine::fire`]: crate::StateMachine::fire
/// [`StateMachine::fire_with`]: crate::StateMachine::fire_with
/// [`StateMachine::fire_persisted`]: crate::StateMachine::fire_persisted
/// [`StateMachine::fire_persisted_strict`]: crate::StateMachine::fire_persisted_strict
pub trait Persistent: Subject {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save the subject, including its committed state.
    fn persist(&mut self) -> Result<(), Self::Error>;

    /// Called when a best-effort save fails. The error is not propagated.
    fn on_persist_failed(&mut self, error: &Self::Error) {
        tracing::warn!(
            state = ?self.state(),
            error = %error,
            "failed to persist state after transition"
        );
    }
}
