// SPDX-License-Identifier: PMPL-1.0-or-later

//! Visual playback backend: echoes every beat to a terminal as it sounds.

use super::{Player, Tone};
use anyhow::{Context, Result};
use colored::*;
use std::io::Write;
use std::time::Duration;

pub struct TerminalPlayer<W: Write> {
    out: W,
    bell: bool,
}

impl<W: Write> TerminalPlayer<W> {
    pub fn new(out: W) -> Self {
        Self { out, bell: false }
    }

    /// Ring the terminal bell on every tone.
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Player for TerminalPlayer<W> {
    fn sound(&mut self, tone: Tone, _volume: f64) -> Result<()> {
        let symbol = match tone {
            Tone::Dot => ".".green().bold(),
            Tone::Dash => "-".green().bold(),
            Tone::Error => "*".red().bold(),
        };
        write!(self.out, "{}", symbol).context("writing playback symbol")?;
        if self.bell {
            write!(self.out, "\x07").context("ringing terminal bell")?;
        }
        self.out.flush().context("flushing playback output")
    }

    fn silence(&mut self, _duration: Duration) -> Result<()> {
        write!(self.out, " ").context("writing playback gap")?;
        self.out.flush().context("flushing playback output")
    }
}
