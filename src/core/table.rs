//! Transition table: event name -> source state -> destination state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

/// Per-event mapping from source state to destination state.
pub type EventTransitions = BTreeMap<String, String>;

/// Two-level mapping from event name to `{from: to}` pairs.
///
/// Within one event each source state maps to exactly one destination.
/// Registering the same `(event, from)` pair again overwrites the previous
/// destination, but the replaced destination still counts as a declared
/// state.
///
/// Serializes as the nested `{event: {from: to}}` map only.
///
/// # Example
///
/// ```rust
/// use simple_state_machine::core::TransitionTable;
///
/// let mut table = TransitionTable::new();
/// table.register("activate", [("draft", "active")]);
/// table.register("archive", [("draft", "archived"), ("active", "archived")]);
///
/// assert_eq!(table.lookup("activate", "draft"), Some("active"));
/// assert_eq!(table.lookup("activate", "active"), None);
/// assert_eq!(table.states().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    events: BTreeMap<String, EventTransitions>,
    states: BTreeSet<String>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event with its `{from: to}` pairs.
    ///
    /// Never fails. The event entry is created even when `pairs` is empty.
    pub fn register<I, F, T>(&mut self, event: impl Into<String>, pairs: I)
    where
        I: IntoIterator<Item = (F, T)>,
        F: AsRef<str>,
        T: AsRef<str>,
    {
        let event = event.into();
        let transitions = self.events.entry(event.clone()).or_default();

        for (from, to) in pairs {
            let from = from.as_ref();
            let to = to.as_ref();
            self.states.insert(from.to_string());
            self.states.insert(to.to_string());
            match transitions.insert(from.to_string(), to.to_string()) {
                Some(previous) if previous != to => {
                    tracing::debug!(
                        event = %event,
                        from = %from,
                        previous = %previous,
                        to = %to,
                        "transition redeclared, last registration wins"
                    );
                }
                Some(_) => {}
                None => {
                    tracing::debug!(event = %event, from = %from, to = %to, "transition registered");
                }
            }
        }
    }

    /// Resolve the destination of `event` from `from`.
    ///
    /// `None` means the transition is illegal, including when the event
    /// was never registered.
    pub fn lookup(&self, event: &str, from: &str) -> Option<&str> {
        self.events
            .get(event)
            .and_then(|transitions| transitions.get(from))
            .map(String::as_str)
    }

    /// The `{from: to}` pairs registered for `event`.
    pub fn transitions(&self, event: &str) -> Option<&EventTransitions> {
        self.events.get(event)
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Registered event names in sorted order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    /// Every distinct state name ever declared as a source or a destination,
    /// including destinations later replaced by a redeclaration.
    pub fn states(&self) -> BTreeSet<&str> {
        self.states.iter().map(String::as_str).collect()
    }

    /// Events that have a registered transition out of `from`.
    pub fn available_events(&self, from: &str) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(_, transitions)| transitions.contains_key(from))
            .map(|(event, _)| event.as_str())
            .collect()
    }

    /// All `(event, from, to)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.events.iter().flat_map(|(event, transitions)| {
            transitions
                .iter()
                .map(move |(from, to)| (event.as_str(), from.as_str(), to.as_str()))
        })
    }

    /// Number of registered `(event, from)` pairs.
    pub fn len(&self) -> usize {
        self.events.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for TransitionTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.events.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TransitionTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let events = BTreeMap::<String, EventTransitions>::deserialize(deserializer)?;
        let mut table = Self::new();
        for (event, transitions) in events {
            table.register(event, transitions);
        }
        Ok(table)
    }
}
