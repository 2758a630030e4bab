// SPDX-License-Identifier: PMPL-1.0-or-later

use super::{fallback_chain, Direction, DIGRAPH};
use crate::error::{logged, Result};
use crate::tables::{is_placeholder, SymbolTable, TableStore};
use crate::types::CodecOptions;

/// Encodes `text` into Morse code.
///
/// The text is trimmed and lowercased first. Letters become space-separated
/// codes, spaces become the separator glyph, and characters missing from
/// every table in the fallback chain become `options.error`.
///
/// Fails before producing output when the glyphs are invalid or the language
/// is not loaded.
pub fn encode(tables: &TableStore, text: &str, language: &str, options: &CodecOptions) -> Result<String> {
    let glyphs = options.glyphs().map_err(logged)?;
    let lang = tables.language(language).map_err(logged)?;
    let chain = fallback_chain(lang, Direction::Encode)
        .into_iter()
        .map(|l| tables.encode_table(l))
        .collect::<Result<Vec<&SymbolTable>>>()
        .map_err(logged)?;

    let text = text.trim().to_lowercase();
    let digraph = glyphs.dash.to_string().repeat(4);
    let mut out = String::with_capacity(text.len() * 4);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == 'c' && chars.peek() == Some(&'h') {
            chars.next();
            push_letter(&mut out, options.markup, DIGRAPH, &digraph);
        } else if c == ' ' {
            out.push(glyphs.separator);
        } else if let Some(code) = chain.iter().find_map(|table| table.get(c)) {
            if is_placeholder(code) {
                out.push_str(code);
            } else {
                push_letter(&mut out, options.markup, &c.to_string(), &glyphs.render(code));
            }
        } else {
            push_letter(&mut out, options.markup, &c.to_string(), &options.error);
        }
        out.push(' ');
    }

    if out.ends_with(' ') {
        out.pop();
    }
    Ok(out)
}

fn push_letter(out: &mut String, markup: bool, source: &str, code: &str) {
    if markup {
        out.push('[');
        out.push_str(source);
        out.push(']');
    }
    out.push_str(code);
}
