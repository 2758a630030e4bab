// SPDX-License-Identifier: PMPL-1.0-or-later

use super::{fallback_chain, Direction, DIGRAPH, DIGRAPH_CODE};
use crate::error::{logged, MorseError, Result};
use crate::tables::{InverseTable, TableStore};
use crate::tokenizer::{tokenize, Token, TokenizeMode};
use crate::types::CodecOptions;

/// Decodes Morse `code` back into text.
///
/// `code` may only contain the configured dot, dash and separator glyphs,
/// spaces and newlines. Codes no table in the fallback chain knows become
/// `options.error`. The result is not trimmed.
pub fn decode(tables: &TableStore, code: &str, language: &str, options: &CodecOptions) -> Result<String> {
    let glyphs = options.glyphs().map_err(logged)?;
    if !code.chars().all(|c| glyphs.admits(c)) {
        return Err(logged(MorseError::InvalidCharacters));
    }
    let lang = tables.language(language).map_err(logged)?;
    let chain = fallback_chain(lang, Direction::Decode)
        .into_iter()
        .map(|l| tables.decode_table(l))
        .collect::<Result<Vec<&InverseTable>>>()
        .map_err(logged)?;

    let mut out = String::with_capacity(code.len() / 2);
    for token in tokenize(code.trim(), &glyphs, TokenizeMode::Text) {
        match token {
            Token::Letter(raw) => {
                let canonical: String = raw.chars().map(|c| glyphs.to_canonical(c)).collect();
                if options.markup {
                    out.push('[');
                    out.push_str(&raw);
                    out.push(']');
                }
                if canonical == DIGRAPH_CODE && lang.has_ch_digraph() {
                    out.push_str(DIGRAPH);
                } else if let Some(c) = chain.iter().find_map(|table| table.get(&canonical)) {
                    out.push(c);
                } else {
                    out.push_str(&options.error);
                }
            }
            Token::WordSeparator | Token::Space => out.push(' '),
            Token::Newline => out.push('\n'),
        }
    }
    Ok(out)
}
