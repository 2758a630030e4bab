// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for morse-kit

use crate::error::{MorseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical glyphs used inside the symbol tables.
pub const DOT: char = '.';
pub const DASH: char = '-';

/// Supported table languages.
///
/// `Numbers` and `Special` are full tables of their own and double as the
/// fallback tables consulted for every other language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    Russian,
    Ukrainian,
    Numbers,
    Special,
}

impl Language {
    /// Key used in table documents and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::Russian => "russian",
            Language::Ukrainian => "ukrainian",
            Language::Numbers => "numbers",
            Language::Special => "special",
        }
    }

    /// Exact key match, no normalisation.
    pub fn from_key(key: &str) -> Option<Language> {
        match key {
            "english" => Some(Language::English),
            "spanish" => Some(Language::Spanish),
            "french" => Some(Language::French),
            "russian" => Some(Language::Russian),
            "ukrainian" => Some(Language::Ukrainian),
            "numbers" => Some(Language::Numbers),
            "special" => Some(Language::Special),
            _ => None,
        }
    }

    /// Lowercase and trim caller input before matching it against the keys.
    pub fn parse(raw: &str) -> Result<Language> {
        let key = raw.trim().to_lowercase();
        Language::from_key(&key).ok_or(MorseError::UnknownLanguage(key))
    }

    /// All languages, in chart order.
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Spanish,
            Language::French,
            Language::Russian,
            Language::Ukrainian,
            Language::Numbers,
            Language::Special,
        ]
    }

    /// Header text used by the chart and the language listing.
    pub fn title(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Russian => "Russian",
            Language::Ukrainian => "Ukrainian",
            Language::Numbers => "Numbers",
            Language::Special => "Special",
        }
    }

    /// Alphabets whose Morse repertoire has a single symbol for `ch`.
    ///
    /// Russian and Ukrainian keep `----` for `ш`.
    pub fn has_ch_digraph(&self) -> bool {
        matches!(
            self,
            Language::English | Language::Spanish | Language::French
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Returns the only character of `s`, or `None` when `s` is not exactly one
/// character long.
pub(crate) fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Validated caller glyphs for dots, dashes and word separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub dot: char,
    pub dash: char,
    pub separator: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            dot: DOT,
            dash: DASH,
            separator: '/',
        }
    }
}

impl Glyphs {
    pub fn new(dot: &str, dash: &str, separator: &str) -> Result<Glyphs> {
        let (Some(dot), Some(dash), Some(separator)) =
            (single_char(dot), single_char(dash), single_char(separator))
        else {
            return Err(MorseError::InvalidGlyphs);
        };
        Ok(Glyphs {
            dot,
            dash,
            separator,
        })
    }

    /// Rewrites a canonical table code with these glyphs.
    pub fn render(&self, code: &str) -> String {
        render_code(code, self.dot, self.dash)
    }

    /// Maps a caller glyph back onto the canonical table alphabet.
    pub fn to_canonical(&self, c: char) -> char {
        if c == self.dot {
            DOT
        } else if c == self.dash {
            DASH
        } else {
            c
        }
    }

    /// True when `c` may appear in a decode input.
    pub fn admits(&self, c: char) -> bool {
        c == self.dot || c == self.dash || c == self.separator || c == ' ' || c == '\n'
    }
}

pub(crate) fn render_code(code: &str, dot: char, dash: char) -> String {
    code.chars()
        .map(|c| match c {
            DOT => dot,
            DASH => dash,
            other => other,
        })
        .collect()
}

/// Options shared by [`crate::encode`] and [`crate::decode`].
///
/// Glyphs are plain strings so that command-line input can be passed through
/// untouched; they are validated on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    pub dot: String,
    pub dash: String,
    pub separator: String,
    /// Emitted for characters or codes no table knows.
    pub error: String,
    /// Annotate every letter with its source in brackets.
    pub markup: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            dot: ".".to_string(),
            dash: "-".to_string(),
            separator: "/".to_string(),
            error: "*".to_string(),
            markup: false,
        }
    }
}

impl CodecOptions {
    pub fn glyphs(&self) -> Result<Glyphs> {
        Glyphs::new(&self.dot, &self.dash, &self.separator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub dot: String,
    pub dash: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            dot: "·".to_string(),
            dash: "-".to_string(),
        }
    }
}
