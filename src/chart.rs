// SPDX-License-Identifier: PMPL-1.0-or-later

//! Printable chart of every loaded table.

use crate::error::{logged, MorseError, Result};
use crate::tables::{is_placeholder, TableStore};
use crate::types::{render_code, single_char, ChartOptions};
use std::fmt::Write;

const TITLE: &str = "Morse Code Chart";
const RULE_WIDTH: usize = 15;

/// Renders the chart as text, ending in a single newline.
///
/// Output depends only on the tables and the glyphs, so repeated calls with
/// the same arguments are byte-identical.
pub fn render_chart(tables: &TableStore, options: &ChartOptions) -> Result<String> {
    let (Some(dot), Some(dash)) = (single_char(&options.dot), single_char(&options.dash)) else {
        return Err(logged(MorseError::InvalidGlyphs));
    };

    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(out, "{}\n\n{}\n", TITLE, rule);

    for lang in tables.languages() {
        let table = tables.encode_table(lang)?;
        let _ = write!(out, "\n{}\n", lang.title());
        for (character, code) in table.iter() {
            if is_placeholder(code) {
                continue;
            }
            let _ = writeln!(out, "{:<5} {}", character, render_code(code, dot, dash));
        }
        let _ = write!(out, "\n{}\n", rule);
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    Ok(out)
}
