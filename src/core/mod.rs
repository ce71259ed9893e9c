//! Core data types of the state machine.
//!
//! This module holds the plain data the rest of the crate operates on:
//! - The transition table, built once per subject type
//! - The transition context resolved for each fired event
//!
//! Nothing in here touches a subject.

mod context;
mod table;

pub use context::TransitionContext;
pub use table::{EventTransitions, TransitionTable};
