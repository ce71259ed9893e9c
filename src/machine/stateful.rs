//! Attaching a state machine to a subject type.

use super::{Outcome, StateMachine, TransitionError};
use crate::core::TransitionContext;
use crate::subject::{Persistent, Subject};
use std::convert::Infallible;

/// A subject type with one state machine shared by all its instances.
///
/// Implementors only supply [`Stateful::state_machine`]. The instance-level
/// firing methods forward to it.
///
/// # Example
///
/// ```rust
/// use simple_state_machine::{impl_subject, state_machine, StateField, Stateful, Subject};
///
/// state_machine! {
///     static TICKET_MACHINE {
///         "start" => { "open" => "in_progress" },
///         "close" => { "open" => "closed", "in_progress" => "closed" },
///     }
/// }
///
/// #[derive(Default)]
/// struct Ticket {
///     state: StateField,
/// }
///
/// impl_subject!(Ticket, state, machine = TICKET_MACHINE);
///
/// let mut ticket = Ticket::default();
/// ticket.set_initial_state("open");
/// assert!(ticket.can_fire("start"));
///
/// ticket.fire("start").unwrap();
/// ticket.fire("close").unwrap();
/// assert!(ticket.is_state("closed"));
/// ```
pub trait Stateful: Subject + Sized {
    fn state_machine() -> &'static StateMachine;

    /// In-memory transition. Persistent types are not saved; see
    /// [`fire_persisted`](Self::fire_persisted).
    fn fire(&mut self, event: impl AsRef<str>) -> Result<Outcome<()>, TransitionError<Infallible>> {
        Self::state_machine().fire(self, event)
    }

    fn fire_with<R, E, F>(
        &mut self,
        event: impl AsRef<str>,
        action: F,
    ) -> Result<Outcome<R>, TransitionError<E>>
    where
        F: FnOnce(&mut Self, &TransitionContext) -> Result<R, E>,
    {
        Self::state_machine().fire_with(self, event, action)
    }

    fn fire_persisted<R, E, F>(
        &mut self,
        event: impl AsRef<str>,
        action: F,
    ) -> Result<Outcome<R>, TransitionError<E>>
    where
        Self: Persistent,
        F: FnOnce(&mut Self, &TransitionContext) -> Result<R, E>,
    {
        Self::state_machine().fire_persisted(self, event, action)
    }

    fn fire_persisted_strict<R, E, F>(
        &mut self,
        event: impl AsRef<str>,
        action: F,
    ) -> Result<Outcome<R>, TransitionError<E>>
    where
        Self: Persistent,
        F: FnOnce(&mut Self, &TransitionContext) -> Result<R, E>,
    {
        Self::state_machine().fire_persisted_strict(self, event, action)
    }

    fn can_fire(&self, event: &str) -> bool {
        Self::state_machine().can_fire(self.state(), event)
    }

    fn available_events(&self) -> Vec<&'static str> {
        Self::state_machine().available_events(self.state())
    }
}
