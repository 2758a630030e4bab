// SPDX-License-Identifier: PMPL-1.0-or-later

//! Symbol table store.
//!
//! Holds one [`SymbolTable`] per [`Language`] plus its derived
//! [`InverseTable`]. A store is immutable once built; the built-in tables are
//! parsed once per process and shared by reference.
//!
//! Codes are stored in the canonical `.`/`-` alphabet. Two placeholder codes,
//! `" "` and `"\n"`, pass through the encoder verbatim and are left out of the
//! chart and of the inverse tables.

pub mod source;

pub use source::Format;

use crate::error::{logged, MorseError, Result};
use crate::types::{single_char, Language, DASH, DOT};
use source::{parse_document, TableDocument};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const BUILTIN_TABLES: &str = include_str!("../../data/tables.json");

static BUILTIN: OnceLock<Result<TableStore>> = OnceLock::new();

pub fn is_placeholder(code: &str) -> bool {
    code == " " || code == "\n"
}

fn is_morse(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c == DOT || c == DASH)
}

/// Ordered character → code mapping for one language.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<(char, String)>,
    index: HashMap<char, usize>,
}

impl SymbolTable {
    pub fn get(&self, character: char) -> Option<&str> {
        self.index
            .get(&character)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(c, code)| (*c, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the code → character mapping. When several characters share a
    /// code the first one listed keeps it; the rest are reported as shadowed.
    pub fn invert(&self) -> InverseTable {
        let mut map: HashMap<String, char> = HashMap::with_capacity(self.entries.len());
        let mut shadowed = Vec::new();
        for (character, code) in &self.entries {
            if is_placeholder(code) {
                continue;
            }
            match map.get(code) {
                Some(&kept) => shadowed.push(Shadowed {
                    code: code.clone(),
                    kept,
                    dropped: *character,
                }),
                None => {
                    map.insert(code.clone(), *character);
                }
            }
        }
        InverseTable { map, shadowed }
    }

    fn push(&mut self, character: char, code: String) -> bool {
        if self.index.contains_key(&character) {
            return false;
        }
        self.index.insert(character, self.entries.len());
        self.entries.push((character, code));
        true
    }
}

/// A character that lost its code to an earlier entry during inversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    pub code: String,
    pub kept: char,
    pub dropped: char,
}

/// Code → character mapping for one language.
#[derive(Debug, Clone, Default)]
pub struct InverseTable {
    map: HashMap<String, char>,
    shadowed: Vec<Shadowed>,
}

impl InverseTable {
    pub fn get(&self, code: &str) -> Option<char> {
        self.map.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn shadowed(&self) -> &[Shadowed] {
        &self.shadowed
    }
}

/// Encode and decode tables for every loaded language.
#[derive(Debug, Clone)]
pub struct TableStore {
    encodes: HashMap<Language, SymbolTable>,
    decodes: HashMap<Language, InverseTable>,
    origin: String,
}

impl TableStore {
    /// The tables compiled into the crate, parsed on first use.
    pub fn builtin() -> Result<&'static TableStore> {
        BUILTIN
            .get_or_init(|| TableStore::parse(BUILTIN_TABLES, Format::Json, "built-in tables"))
            .as_ref()
            .map_err(|err| logged(err.clone()))
    }

    pub fn from_path(path: &Path) -> Result<TableStore> {
        let content = fs::read_to_string(path).map_err(|err| {
            MorseError::DataUnavailable(format!("reading {}: {}", path.display(), err))
        });
        content
            .and_then(|content| {
                TableStore::parse(&content, Format::from_path(path), &path.display().to_string())
            })
            .map_err(logged)
    }

    pub fn parse(content: &str, format: Format, origin: &str) -> Result<TableStore> {
        let document = parse_document(content, format, origin)?;
        let encodes = build_encodes(document, origin)?;
        let decodes = encodes
            .iter()
            .map(|(lang, table)| (*lang, table.invert()))
            .collect::<HashMap<_, _>>();

        for (lang, inverse) in &decodes {
            for entry in inverse.shadowed() {
                debug!(
                    language = %lang,
                    code = %entry.code,
                    kept = %entry.kept,
                    dropped = %entry.dropped,
                    "duplicate code, first entry wins"
                );
            }
        }
        debug!(origin, languages = encodes.len(), "loaded symbol tables");

        Ok(TableStore {
            encodes,
            decodes,
            origin: origin.to_string(),
        })
    }

    pub fn encode_table(&self, lang: Language) -> Result<&SymbolTable> {
        self.encodes
            .get(&lang)
            .ok_or_else(|| MorseError::UnknownLanguage(lang.key().to_string()))
    }

    pub fn decode_table(&self, lang: Language) -> Result<&InverseTable> {
        self.decodes
            .get(&lang)
            .ok_or_else(|| MorseError::UnknownLanguage(lang.key().to_string()))
    }

    /// Resolves a caller-supplied key to a language this store has tables for.
    pub fn language(&self, raw: &str) -> Result<Language> {
        let lang = Language::parse(raw)?;
        if self.encodes.contains_key(&lang) {
            Ok(lang)
        } else {
            Err(MorseError::UnknownLanguage(lang.key().to_string()))
        }
    }

    /// Loaded languages in chart order.
    pub fn languages(&self) -> Vec<Language> {
        Language::all()
            .iter()
            .copied()
            .filter(|lang| self.encodes.contains_key(lang))
            .collect()
    }

    /// Where the tables were read from.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

fn build_encodes(document: TableDocument, origin: &str) -> Result<HashMap<Language, SymbolTable>> {
    let invalid = |detail: String| MorseError::DataUnavailable(format!("{}: {}", origin, detail));

    let mut encodes = HashMap::new();
    for (key, entries) in document.0 {
        let lang =
            Language::from_key(&key).ok_or_else(|| invalid(format!("unknown language '{}'", key)))?;
        let mut table = SymbolTable::default();
        for (raw, code) in entries.0 {
            let character = single_char(&raw)
                .ok_or_else(|| invalid(format!("{}: key {:?} is not a single character", key, raw)))?;
            if character.to_lowercase().ne(std::iter::once(character)) {
                return Err(invalid(format!("{}: key {:?} is not lowercase", key, raw)));
            }
            if !is_morse(&code) && !is_placeholder(&code) {
                return Err(invalid(format!("{}: code {:?} for {:?} is not morse", key, code, raw)));
            }
            if !table.push(character, code) {
                return Err(invalid(format!("{}: duplicate key {:?}", key, raw)));
            }
        }
        if encodes.insert(lang, table).is_some() {
            return Err(invalid(format!("language '{}' listed twice", key)));
        }
    }

    for required in [Language::Numbers, Language::Special] {
        if !encodes.contains_key(&required) {
            return Err(invalid(format!("missing required table '{}'", required)));
        }
    }
    Ok(encodes)
}
