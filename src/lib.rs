//! Simple State Machine: retrofit finite state machine behavior onto your types.
//!
//! A subject type declares its events once, as `{from: to}` pairs per event
//! name. Instances then fire those events: the machine checks the transition
//! is legal for the current state, runs the caller's business logic, commits
//! the new state and calls the subject's success hook. Illegal transitions go
//! to an overridable hook that fails by default.
//!
//! # Core Concepts
//!
//! - **Transition table**: event name -> source state -> destination state
//! - **Subject**: any type exposing its state through the `Subject` trait
//! - **Guard**: the legality check performed by `StateMachine::fire_with`
//! - **Persistence**: `Persistent` subjects are saved after each transition,
//!   best-effort or strictly
//!
//! # Example
//!
//! ```rust
//! use simple_state_machine::{impl_subject, state_machine, StateField, Stateful, Subject};
//!
//! state_machine! {
//!     static ARTICLE_MACHINE {
//!         "activate" => { "draft" => "active" },
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Article {
//!     state: StateField,
//! }
//!
//! impl_subject!(Article, state, machine = ARTICLE_MACHINE);
//!
//! let mut article = Article::default();
//! article.set_initial_state("draft");
//!
//! article.fire("activate").unwrap();
//! assert!(article.is_state("active"));
//! assert!(!article.is_state("draft"));
//!
//! // No transition out of "active" is registered for "activate".
//! let error = article.fire("activate").unwrap_err();
//! assert!(error.is_illegal());
//! assert!(article.is_state("active"));
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod machine;
pub mod subject;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{TransitionContext, TransitionTable};
pub use definition::{DefinitionDocument, DefinitionError, EventDeclarations};
pub use machine::{IllegalTransition, Outcome, StateMachine, Stateful, TransitionError};
pub use subject::{Persistent, StateField, Subject};
