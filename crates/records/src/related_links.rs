//! Order-preserving wire model for a Q&A record's `related_links` mapping.
//!
//! The data service declares reference categories as an object:
//!
//! ```json
//! { "nutrients": ["維生素C", "鎂"], "naturalPrescriptions": ["規律散步"] }
//! ```
//!
//! Key order is significant: when the same keyword is declared under two categories the first
//! declared category wins. Generic map types would lose that order, so this type deserializes
//! the object into an ordered list of `(category key, keywords)` entries.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Category keys and their keyword lists, in declaration order.
///
/// A key repeated on the wire keeps its first position and accumulates keywords.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelatedLinks {
    entries: Vec<(String, Vec<String>)>,
}

impl RelatedLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `keywords` under `category`, keeping the category's first position.
    pub fn push(&mut self, category: impl Into<String>, keywords: Vec<String>) {
        let category = category.into();
        match self.entries.iter_mut().find(|(key, _)| *key == category) {
            Some((_, existing)) => existing.extend(keywords),
            None => self.entries.push((category, keywords)),
        }
    }

    /// Iterates `(category key, keywords)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, keywords)| (key.as_str(), keywords.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for RelatedLinks {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut links = Self::new();
        for (category, keywords) in iter {
            links.push(category, keywords);
        }
        links
    }
}

impl Serialize for RelatedLinks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, keywords) in &self.entries {
            map.serialize_entry(category, keywords)?;
        }
        map.end()
    }
}

struct RelatedLinksVisitor;

impl<'de> Visitor<'de> for RelatedLinksVisitor {
    type Value = RelatedLinks;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of category names to keyword lists")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut links = RelatedLinks::new();
        while let Some((category, keywords)) = access.next_entry::<String, Vec<String>>()? {
            links.push(category, keywords);
        }
        Ok(links)
    }

    // The service emits `null` for answers without references.
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(RelatedLinks::new())
    }
}

impl<'de> Deserialize<'de> for RelatedLinks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RelatedLinksVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_declaration_order() {
        let links: RelatedLinks = serde_json::from_str(
            r#"{"naturalPrescriptions": ["X"], "nutrients": ["X", "鎂"], "drugs": []}"#,
        )
        .unwrap();
        let keys: Vec<&str> = links.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["naturalPrescriptions", "nutrients", "drugs"]);
    }

    #[test]
    fn yaml_keeps_declaration_order() {
        let links: RelatedLinks =
            serde_yaml::from_str("nutrients:\n  - X\nnaturalPrescriptions:\n  - X\n").unwrap();
        let keys: Vec<&str> = links.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["nutrients", "naturalPrescriptions"]);
    }

    #[test]
    fn repeated_key_accumulates_in_first_position() {
        let links: RelatedLinks = [
            ("nutrients", vec!["A".to_string()]),
            ("drugs", vec!["B".to_string()]),
            ("nutrients", vec!["C".to_string()]),
        ]
        .into_iter()
        .collect();
        let entries: Vec<(&str, &[String])> = links.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "nutrients");
        assert_eq!(entries[0].1, ["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn null_is_empty() {
        let links: RelatedLinks = serde_json::from_str("null").unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn serializes_in_declaration_order() {
        let links: RelatedLinks = [
            ("nutrients", vec!["維生素C".to_string()]),
            ("naturalPrescriptions", vec!["規律散步".to_string()]),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(
            json,
            r#"{"nutrients":["維生素C"],"naturalPrescriptions":["規律散步"]}"#
        );
    }
}
