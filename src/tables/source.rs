// SPDX-License-Identifier: PMPL-1.0-or-later

//! Table document parsing.
//!
//! A document maps language keys to character→code mappings. Entry order is
//! significant, so documents are read into ordered pair lists instead of
//! hash maps.

use crate::error::{MorseError, Result};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// A mapping that remembers the order its keys were written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderedMap<V>(pub Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping with string keys")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

pub(crate) type TableDocument = OrderedMap<OrderedMap<String>>;

pub(crate) fn parse_document(content: &str, format: Format, origin: &str) -> Result<TableDocument> {
    match format {
        Format::Json => serde_json::from_str(content)
            .map_err(|err| MorseError::DataUnavailable(format!("parsing json {}: {}", origin, err))),
        Format::Yaml => serde_yaml::from_str(content)
            .map_err(|err| MorseError::DataUnavailable(format!("parsing yaml {}: {}", origin, err))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_entry_order() {
        let doc = parse_document(r#"{"special": {"z": "--..", "a": ".-"}}"#, Format::Json, "test")
            .unwrap();
        let (lang, entries) = &doc.0[0];
        assert_eq!(lang, "special");
        let keys: Vec<&str> = entries.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn yaml_keeps_entry_order() {
        let doc = parse_document("numbers:\n  \"9\": \"----.\"\n  \"0\": \"-----\"\n", Format::Yaml, "test")
            .unwrap();
        let (_, entries) = &doc.0[0];
        let keys: Vec<&str> = entries.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["9", "0"]);
    }

    #[test]
    fn malformed_documents_are_data_errors() {
        let err = parse_document("[1, 2]", Format::Json, "test").unwrap_err();
        assert!(matches!(err, MorseError::DataUnavailable(_)));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("t.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("t.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("t.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("tables")), Format::Json);
    }
}
