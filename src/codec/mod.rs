// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text ⇄ Morse transcoding.
//!
//! Both directions walk the same ordered list of tables: the selected
//! language first, then `numbers`, then `special`. The first table that knows
//! a character (or code) wins; nothing matching degrades to the caller's
//! error glyph.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

use crate::types::Language;

/// Canonical code of the single-symbol `ch` digraph.
pub const DIGRAPH_CODE: &str = "----";
pub const DIGRAPH: &str = "ch";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Tables to probe, in priority order.
///
/// Decoding with `numbers` or `special` selected stays inside that table so
/// that, say, a numbers-only decode never turns a code into punctuation.
pub fn fallback_chain(lang: Language, direction: Direction) -> Vec<Language> {
    let mut chain = vec![lang];
    let isolated =
        direction == Direction::Decode && matches!(lang, Language::Numbers | Language::Special);
    if !isolated {
        for fallback in [Language::Numbers, Language::Special] {
            if !chain.contains(&fallback) {
                chain.push(fallback);
            }
        }
    }
    chain
}
