//! Builder for constructing state machines.

use crate::builder::error::{BuildError, DefinitionViolation};
use crate::core::TransitionTable;
use crate::machine::StateMachine;
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<DefinitionViolation>>;

struct Declaration {
    event: String,
    pairs: Vec<(String, String)>,
}

/// Builder for declaring events with a fluent API.
///
/// By default declarations behave exactly like [`StateMachine::event`]:
/// redeclaring a source state silently replaces its destination. With
/// [`strict`](Self::strict) enabled, `build` instead reports every
/// conflicting redeclaration and every empty name at once.
pub struct StateMachineBuilder {
    declarations: Vec<Declaration>,
    strict: bool,
}

impl StateMachineBuilder {
    /// Create a new, lenient builder.
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
            strict: false,
        }
    }

    /// Reject conflicting or empty declarations in `build`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Declare an event with its `{from: to}` pairs.
    pub fn event<I, F, T>(mut self, event: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: AsRef<str>,
        T: AsRef<str>,
    {
        self.declarations.push(Declaration {
            event: event.into(),
            pairs: pairs
                .into_iter()
                .map(|(from, to)| (from.as_ref().to_string(), to.as_ref().to_string()))
                .collect(),
        });
        self
    }

    /// Build the state machine.
    /// In strict mode returns an error listing all violations.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        if self.strict {
            if let Validation::Failure(violations) = self.validate() {
                return Err(BuildError::InvalidDefinition {
                    violations: violations.iter().cloned().collect(),
                });
            }
        }

        let mut table = TransitionTable::new();
        for declaration in self.declarations {
            table.register(declaration.event, declaration.pairs);
        }

        Ok(StateMachine::from_table(table))
    }

    fn validate(&self) -> Check {
        let mut checks: Vec<Check> = Vec::new();
        let mut seen: BTreeMap<(&str, &str), &str> = BTreeMap::new();

        for declaration in &self.declarations {
            let event = declaration.event.as_str();
            if event.is_empty() {
                checks.push(Validation::fail(DefinitionViolation::EmptyEventName));
            }

            for (from, to) in &declaration.pairs {
                if from.is_empty() || to.is_empty() {
                    checks.push(Validation::fail(DefinitionViolation::EmptyStateName {
                        event: event.to_string(),
                    }));
                }

                match seen.insert((event, from.as_str()), to.as_str()) {
                    Some(existing) if existing != to.as_str() => {
                        checks.push(Validation::fail(
                            DefinitionViolation::ConflictingTransition {
                                event: event.to_string(),
                                from: from.clone(),
                                existing: existing.to_string(),
                                redeclared: to.clone(),
                            },
                        ));
                    }
                    _ => checks.push(Validation::success(())),
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl Default for StateMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
