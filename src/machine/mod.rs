//! The state machine definition and the transition guard.
//!
//! A [`StateMachine`] owns the transition table for one subject type and
//! fires events against subjects:
//!
//! 1. resolve the destination for `(event, current state)`
//! 2. reject through the subject's illegal-transition hook if there is none
//! 3. otherwise run the business logic, commit the new state and call the
//!    success hook
//!
//! State is committed only after the business logic succeeds, so a failing
//! action leaves the subject exactly as it was.

mod error;
mod stateful;

pub use error::{IllegalTransition, TransitionError};
pub use stateful::Stateful;

use crate::core::{TransitionContext, TransitionTable};
use crate::subject::{Persistent, Subject};
use std::collections::BTreeSet;
use std::convert::Infallible;

/// Result of a fire call that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<R> {
    /// The transition was committed. Holds the business logic's result.
    Transitioned(R),

    /// The transition was illegal and the subject's hook accepted that
    /// without failing. State is unchanged.
    Rejected(IllegalTransition),
}

impl<R> Outcome<R> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Outcome::Transitioned(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    pub fn output(&self) -> Option<&R> {
        match self {
            Outcome::Transitioned(output) => Some(output),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn into_output(self) -> Option<R> {
        match self {
            Outcome::Transitioned(output) => Some(output),
            Outcome::Rejected(_) => None,
        }
    }
}

/// Event declarations for a subject type, and the guard that fires them.
///
/// # Example
///
/// ```rust
/// use simple_state_machine::{impl_subject, StateField, StateMachine, Subject};
///
/// #[derive(Default)]
/// struct Article {
///     state: StateField,
/// }
///
/// impl_subject!(Article, state);
///
/// let mut machine = StateMachine::new();
/// machine.event("activate", [("draft", "active")]);
///
/// let mut article = Article::default();
/// article.set_initial_state("draft");
///
/// machine.fire(&mut article, "activate").unwrap();
/// assert!(article.is_state("active"));
///
/// let error = machine.fire(&mut article, "activate").unwrap_err();
/// assert_eq!(error.to_string(), "cannot 'activate' when state is 'active'");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateMachine {
    table: TransitionTable,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: TransitionTable) -> Self {
        Self { table }
    }

    /// Declare `event` with its `{from: to}` pairs.
    ///
    /// May be called any number of times. Pairs for the same event merge,
    /// and redeclaring a source state overwrites its destination.
    pub fn event<I, F, T>(&mut self, event: impl Into<String>, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: AsRef<str>,
        T: AsRef<str>,
    {
        self.table.register(event, pairs);
        self
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn lookup(&self, event: &str, from: &str) -> Option<&str> {
        self.table.lookup(event, from)
    }

    /// Every state name mentioned by any event.
    pub fn states(&self) -> BTreeSet<&str> {
        self.table.states()
    }

    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.table.events()
    }

    /// Whether `event` has a transition out of `state`. Unset never does.
    pub fn can_fire(&self, state: Option<&str>, event: &str) -> bool {
        state.is_some_and(|from| self.lookup(event, from).is_some())
    }

    pub fn available_events(&self, state: Option<&str>) -> Vec<&str> {
        state
            .map(|from| self.table.available_events(from))
            .unwrap_or_default()
    }

    /// Fire `event` with no business logic.
    ///
    /// Commits in memory only, even for [`Persistent`](crate::Persistent)
    /// subjects. Use [`fire_persisted`](Self::fire_persisted) to save.
    pub fn fire<S>(
        &self,
        subject: &mut S,
        event: impl AsRef<str>,
    ) -> Result<Outcome<()>, TransitionError<Infallible>>
    where
        S: Subject,
    {
        self.fire_with(subject, event, |_, _| Ok(()))
    }

    /// Fire `event`, running `action` as the transition's business logic.
    ///
    /// The action sees the subject still in its source state together with
    /// the resolved [`TransitionContext`]. If it fails, its error is returned
    /// as [`TransitionError::Action`] and nothing is committed. Like
    /// [`fire`](Self::fire), this never saves the subject.
    pub fn fire_with<S, R, E, F>(
        &self,
        subject: &mut S,
        event: impl AsRef<str>,
        action: F,
    ) -> Result<Outcome<R>, TransitionError<E>>
    where
        S: Subject,
        F: FnOnce(&mut S, &TransitionContext) -> Result<R, E>,
    {
        self.transition(subject, event.as_ref(), action, |subject, context| {
            subject.on_transition_succeeded(context);
            Ok(())
        })
    }

    /// Fire `event` and save the subject afterwards, best-effort.
    ///
    /// A failed save is logged and handed to
    /// [`Persistent::on_persist_failed`], and the call still succeeds.
    pub fn fire_persisted<S, R, E, F>(
        &self,
        subject: &mut S,
        event: impl AsRef<str>,
        action: F,
    ) -> Result<Outcome<R>, TransitionError<E>>
    where
        S: Persistent,
        F: FnOnce(&mut S, &TransitionContext) -> Result<R, E>,
    {
        self.transition(subject, event.as_ref(), action, |subject, context| {
            subject.on_transition_succeeded(context);
            if let Err(error) = subject.persist() {
                subject.on_persist_failed(&error);
            }
            Ok(())
        })
    }

    /// Fire `event` and save the subject afterwards, failing if the save
    /// fails.
    ///
    /// The in-memory state keeps the committed destination even when the
    /// save fails.
    pub fn fire_persisted_strict<S, R, E, F>(
        &self,
        subject: &mut S,
        event: impl AsRef<str>,
        action: F,
    ) -> Result<Outcome<R>, TransitionError<E>>
    where
        S: Persistent,
        F: FnOnce(&mut S, &TransitionContext) -> Result<R, E>,
    {
        self.transition(subject, event.as_ref(), action, |subject, context| {
            subject.on_transition_succeeded(context);
            subject
                .persist()
                .map_err(|source| TransitionError::Persist {
                    state: context.to.clone(),
                    source: Box::new(source),
                })
        })
    }

    fn transition<S, R, E, F, C>(
        &self,
        subject: &mut S,
        event: &str,
        action: F,
        on_success: C,
    ) -> Result<Outcome<R>, TransitionError<E>>
    where
        S: Subject,
        F: FnOnce(&mut S, &TransitionContext) -> Result<R, E>,
        C: FnOnce(&mut S, &TransitionContext) -> Result<(), TransitionError<E>>,
    {
        let from = subject.state();
        tracing::trace!(event = %event, from = ?from, "attempting transition");

        let context = match from.and_then(|from| Some((from, self.lookup(event, from)?))) {
            Some((from, to)) => TransitionContext::new(event, from, to),
            None => {
                let illegal = IllegalTransition::new(event, from);
                tracing::debug!(event = %event, from = ?from, "illegal transition");
                return match subject.on_illegal_transition(illegal.clone()) {
                    Ok(()) => Ok(Outcome::Rejected(illegal)),
                    Err(error) => Err(TransitionError::Illegal(error)),
                };
            }
        };

        let output = action(subject, &context).map_err(TransitionError::Action)?;
        subject.set_state(&context.to);
        tracing::debug!(
            event = %context.event,
            from = %context.from,
            to = %context.to,
            "transition committed"
        );
        on_success(subject, &context)?;

        Ok(Outcome::Transitioned(output))
    }
}

impl From<TransitionTable> for StateMachine {
    fn from(table: TransitionTable) -> Self {
        Self::from_table(table)
    }
}
