//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and macros for declaring events
//! once per subject type.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::{BuildError, DefinitionViolation};
pub use machine::StateMachineBuilder;

use crate::machine::StateMachine;

/// Build a machine from `(event, from, to)` triples, last one winning.
///
/// # Example
///
/// ```
/// use simple_state_machine::builder::from_triples;
///
/// let machine = from_triples([
///     ("activate", "draft", "active"),
///     ("archive", "active", "archived"),
/// ]);
///
/// assert_eq!(machine.lookup("archive", "active"), Some("archived"));
/// ```
pub fn from_triples<I, V, F, T>(triples: I) -> StateMachine
where
    I: IntoIterator<Item = (V, F, T)>,
    V: Into<String>,
    F: AsRef<str>,
    T: AsRef<str>,
{
    let mut machine = StateMachine::new();
    for (event, from, to) in triples {
        machine.event(event, [(from, to)]);
    }
    machine
}
