//! Event declarations as written in a definition document.
//!
//! JSON objects may repeat a key. A plain map would keep the last value
//! silently, so declarations are read in document order with duplicates
//! intact and left to the strict builder to judge.

use crate::core::TransitionTable;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `(from, to)` pairs of one event, in document order.
pub type DeclaredPairs = Vec<(String, String)>;

/// Event declarations in document order, duplicates included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventDeclarations(Vec<(String, DeclaredPairs)>);

impl EventDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration. Earlier declarations of `event` are kept.
    pub fn declare(&mut self, event: impl Into<String>, pairs: DeclaredPairs) {
        self.0.push((event.into(), pairs));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(String, String)])> {
        self.0
            .iter()
            .map(|(event, pairs)| (event.as_str(), pairs.as_slice()))
    }

    /// Number of event declarations, counting repeats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&TransitionTable> for EventDeclarations {
    fn from(table: &TransitionTable) -> Self {
        let mut declarations = Self::new();
        for event in table.events() {
            let pairs = table
                .transitions(event)
                .map(|transitions| {
                    transitions
                        .iter()
                        .map(|(from, to)| (from.clone(), to.clone()))
                        .collect()
                })
                .unwrap_or_default();
            declarations.declare(event, pairs);
        }
        declarations
    }
}

impl IntoIterator for EventDeclarations {
    type Item = (String, DeclaredPairs);
    type IntoIter = std::vec::IntoIter<(String, DeclaredPairs)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

struct PairsRef<'a>(&'a [(String, String)]);

impl Serialize for PairsRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (from, to) in self.0 {
            map.serialize_entry(from, to)?;
        }
        map.end()
    }
}

impl Serialize for EventDeclarations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (event, pairs) in &self.0 {
            map.serialize_entry(event, &PairsRef(pairs))?;
        }
        map.end()
    }
}

struct OrderedPairs(DeclaredPairs);

impl<'de> Deserialize<'de> for OrderedPairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OrderedPairs;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of source state to destination state")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::new();
                while let Some((from, to)) = map.next_entry::<String, String>()? {
                    pairs.push((from, to));
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

impl<'de> Deserialize<'de> for EventDeclarations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DeclarationsVisitor;

        impl<'de> Visitor<'de> for DeclarationsVisitor {
            type Value = EventDeclarations;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of event name to transitions")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut declarations = EventDeclarations::new();
                while let Some((event, pairs)) = map.next_entry::<String, OrderedPairs>()? {
                    declarations.declare(event, pairs.0);
                }
                Ok(declarations)
            }
        }

        deserializer.deserialize_map(DeclarationsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_repeated_keys_in_document_order() {
        let json = r#"{
            "activate": {"draft": "active", "draft": "pending"},
            "archive": {"draft": "archived"},
            "activate": {"active": "active"}
        }"#;

        let declarations: EventDeclarations = serde_json::from_str(json).unwrap();
        let events: Vec<&str> = declarations.iter().map(|(event, _)| event).collect();

        assert_eq!(events, vec!["activate", "archive", "activate"]);
        let (_, first) = declarations.iter().next().unwrap();
        assert_eq!(
            first,
            &[
                ("draft".to_string(), "active".to_string()),
                ("draft".to_string(), "pending".to_string()),
            ]
        );
    }

    #[test]
    fn built_from_table_serializes_as_nested_map() {
        let mut table = TransitionTable::new();
        table.register("archive", [("draft", "archived"), ("active", "archived")]);
        table.register("noop", Vec::<(&str, &str)>::new());

        let value = serde_json::to_value(EventDeclarations::from(&table)).unwrap();

        assert_eq!(value["archive"]["active"], "archived");
        assert_eq!(value["noop"], serde_json::json!({}));
    }

    #[test]
    fn rejects_non_map_transitions() {
        let result = serde_json::from_str::<EventDeclarations>(r#"{"activate": ["draft"]}"#);

        assert!(result.is_err());
    }
}
