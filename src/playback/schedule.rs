// SPDX-License-Identifier: PMPL-1.0-or-later

//! Playback schedule: a Morse string turned into timed tones and silences.

use super::PlaybackOptions;
use crate::error::{logged, MorseError, Result};
use crate::tokenizer::{flatten_to_characters, tokenize, Mark, TokenizeMode};
use crate::types::Glyphs;
use std::time::Duration;
use tracing::warn;

pub const MIN_DELAY: f64 = 0.3;
pub const RECOMMENDED_MAX_DELAY: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Dot,
    Dash,
    /// Anything in the input that is not a dot or a dash.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Tone(Tone),
    Silence,
}

/// One step of playback: start `signal`, then wait `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beat {
    pub signal: Signal,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    beats: Vec<Beat>,
    volume: f64,
}

impl Schedule {
    /// Validates the options and lays out every beat of `code`.
    ///
    /// A delay above [`RECOMMENDED_MAX_DELAY`] only logs a warning; one below
    /// [`MIN_DELAY`] is rejected, as is a volume outside `(0, 1]`.
    pub fn build(code: &str, options: &PlaybackOptions) -> Result<Schedule> {
        let glyphs = Glyphs::new(&options.dot, &options.dash, &options.separator).map_err(logged)?;

        let delay = options.delay;
        if delay > RECOMMENDED_MAX_DELAY {
            warn!(
                delay,
                "long delay: longer than the recommended {}s, playback may be slower than expected",
                RECOMMENDED_MAX_DELAY
            );
        }
        if !(delay >= MIN_DELAY) {
            return Err(logged(MorseError::InvalidDelay(delay)));
        }
        if !(options.volume > 0.0 && options.volume <= 1.0) {
            return Err(logged(MorseError::InvalidVolume(options.volume)));
        }

        let marks = flatten_to_characters(&tokenize(code.trim(), &glyphs, TokenizeMode::Sound));
        let beats = marks
            .into_iter()
            .map(|mark| beat_for(mark, &glyphs, delay))
            .collect();

        Ok(Schedule {
            beats,
            volume: options.volume,
        })
    }

    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn total_duration(&self) -> Duration {
        self.beats.iter().map(|beat| beat.duration).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }
}

fn beat_for(mark: Mark, glyphs: &Glyphs, delay: f64) -> Beat {
    let (signal, seconds) = match mark {
        Mark::Char(c) if c == glyphs.dot => (Signal::Tone(Tone::Dot), delay / 2.0),
        Mark::Char(c) if c == glyphs.dash => (Signal::Tone(Tone::Dash), delay),
        Mark::Char(_) => (Signal::Tone(Tone::Error), delay / 1.5),
        Mark::Space | Mark::Newline => (Signal::Silence, delay * 2.7),
        Mark::WordSeparator => (Signal::Silence, delay * 3.0),
    };
    Beat {
        signal,
        duration: Duration::from_secs_f64(seconds),
    }
}
