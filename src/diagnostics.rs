// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-diagnostics for the symbol tables (`morse-kit doctor`).

use crate::codec::DIGRAPH_CODE;
use crate::error::MorseError;
use crate::tables::TableStore;
use crate::types::Language;
use anyhow::{anyhow, Result};
use colored::*;
use std::env;

pub const TABLES_ENV: &str = "MORSE_KIT_TABLES";

pub fn run_self_diagnostics(tables: std::result::Result<&TableStore, MorseError>) -> Result<()> {
    println!("{}", "morse-kit self-diagnostics".bold());

    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("morse-kit {}", env!("CARGO_PKG_VERSION")),
    )];
    checks.push(check_env());
    match tables {
        Ok(tables) => checks.extend(table_checks(tables)),
        Err(err) => checks.push(Diagnostic::error("tables", err.to_string())),
    }

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

/// One line of the diagnostics report per loaded language, plus the source.
pub fn table_checks(tables: &TableStore) -> Vec<Diagnostic> {
    let mut checks = vec![Diagnostic::ok("table source", tables.origin().to_string())];

    for lang in Language::all() {
        let (Ok(table), Ok(inverse)) = (tables.encode_table(*lang), tables.decode_table(*lang)) else {
            checks.push(Diagnostic::warning(lang.key(), "not loaded".to_string()));
            continue;
        };

        let mut detail = format!("{} characters, {} codes", table.len(), inverse.len());
        let shadowed = inverse.shadowed();
        if !shadowed.is_empty() {
            let pairs: Vec<String> = shadowed
                .iter()
                .map(|s| format!("{} -> {} ({})", s.dropped, s.kept, s.code))
                .collect();
            detail.push_str(&format!("; decodes as first entry: {}", pairs.join(", ")));
        }

        let hidden = lang
            .has_ch_digraph()
            .then(|| inverse.get(DIGRAPH_CODE))
            .flatten();
        let diagnostic = match hidden {
            Some(c) => Diagnostic::warning(
                lang.key(),
                format!("{}; '{}' is unreachable, {} decodes as ch", detail, c, DIGRAPH_CODE),
            ),
            None if shadowed.is_empty() => Diagnostic::ok(lang.key(), detail),
            None => Diagnostic::warning(lang.key(), detail),
        };
        checks.push(diagnostic);
    }

    checks
}

fn check_env() -> Diagnostic {
    match env::var(TABLES_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            Diagnostic::ok("table override", format!("{} = {}", TABLES_ENV, value))
        }
        _ => Diagnostic::ok(
            "table override",
            format!("not configured (set {} to use another table file)", TABLES_ENV),
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:16} {}", self.level.tag(), self.label, self.detail);
    }
}
