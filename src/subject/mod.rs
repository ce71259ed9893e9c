//! Subjects: the objects whose state a machine manages.
//!
//! A subject exposes its current state through [`Subject`] and may override
//! the hooks the guard calls around a transition. Types that keep their
//! state in a persistence layer additionally implement [`Persistent`].

mod field;
mod persistent;

pub use field::StateField;
pub use persistent::Persistent;

use crate::core::TransitionContext;
use crate::machine::IllegalTransition;

/// An object with a string-valued current state.
///
/// Only the getter and setter are required. Every other method has a
/// default that an implementor can replace.
///
/// # Example
///
/// ```rust
/// use simple_state_machine::{IllegalTransition, StateField, Subject};
///
/// #[derive(Default)]
/// struct Order {
///     state: StateField,
///     errors: Vec<String>,
/// }
///
/// impl Subject for Order {
///     fn state(&self) -> Option<&str> {
///         self.state.get()
///     }
///
///     fn set_state(&mut self, state: &str) {
///         self.state.set(state);
///     }
///
///     // Record the problem instead of failing.
///     fn on_illegal_transition(&mut self, illegal: IllegalTransition) -> Result<(), IllegalTransition> {
///         self.errors.push(illegal.to_string());
///         Ok(())
///     }
/// }
///
/// let mut order = Order::default();
/// order.set_initial_state("draft");
/// assert!(order.is_state("draft"));
/// ```
pub trait Subject {
    /// Current state, `None` while unset.
    fn state(&self) -> Option<&str>;

    fn set_state(&mut self, state: &str);

    /// Assign the starting state without going through any event.
    fn set_initial_state(&mut self, state: &str) {
        self.set_state(state);
    }

    /// State predicate.
    fn is_state(&self, name: &str) -> bool {
        self.state() == Some(name)
    }

    /// Called once after a legal transition has been committed.
    fn on_transition_succeeded(&mut self, _context: &TransitionContext) {}

    /// Called when an event has no transition from the current state.
    ///
    /// Returning `Err` fails the fire call. Returning `Ok(())` accepts the
    /// rejection and the fire call reports [`Outcome::Rejected`].
    ///
    /// [`Outcome::Rejected`]: crate::Outcome::Rejected
    fn on_illegal_transition(&mut self, illegal: IllegalTransition) -> Result<(), IllegalTransition> {
        Err(illegal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Light {
        state: StateField,
    }

    impl Subject for Light {
        fn state(&self) -> Option<&str> {
            self.state.get()
        }

        fn set_state(&mut self, state: &str) {
            self.state.set(state);
        }
    }

    #[test]
    fn predicate_tracks_state() {
        let mut light = Light::default();
        assert!(!light.is_state("off"));

        light.set_initial_state("off");
        assert!(light.is_state("off"));
        assert!(!light.is_state("on"));
    }

    #[test]
    fn default_illegal_hook_fails() {
        let mut light = Light::default();
        let result = light.on_illegal_transition(IllegalTransition::new("switch", None));

        assert_eq!(result, Err(IllegalTransition::new("switch", None)));
    }
}
