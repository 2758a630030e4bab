// SPDX-License-Identifier: PMPL-1.0-or-later

//! Timed playback of Morse code.
//!
//! Playback is split into a pure [`Schedule`] (what to sound and for how
//! long) and a [`Player`] backend that produces the sound. The runner waits
//! out each beat in short slices and checks a shared stop flag between them,
//! so raising the flag ends playback within one slice.

mod interrupt;
mod schedule;
mod terminal;

pub use interrupt::stop_on_interrupt;
pub use schedule::{Beat, Schedule, Signal, Tone, MIN_DELAY, RECOMMENDED_MAX_DELAY};
pub use terminal::TerminalPlayer;

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

const WAIT_SLICE: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackOptions {
    /// Base unit in seconds: a dash lasts `delay`, a dot half of it.
    pub delay: f64,
    pub volume: f64,
    pub dot: String,
    pub dash: String,
    pub separator: String,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            delay: 0.5,
            volume: 1.0,
            dot: ".".to_string(),
            dash: "-".to_string(),
            separator: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    /// The stop flag was raised before the schedule finished.
    Interrupted,
}

/// Sound backend. Tones are started here; the runner owns all timing.
pub trait Player {
    fn sound(&mut self, tone: Tone, volume: f64) -> Result<()>;

    /// Called at the start of every silent beat.
    fn silence(&mut self, _duration: Duration) -> Result<()> {
        Ok(())
    }
}

/// Builds the schedule for `code` and plays it.
///
/// Invalid options fail before anything is sounded; the error is a
/// [`crate::MorseError`] inside the returned [`anyhow::Error`].
pub fn play(
    code: &str,
    options: &PlaybackOptions,
    player: &mut dyn Player,
    stop: &AtomicBool,
) -> Result<PlaybackOutcome> {
    let schedule = Schedule::build(code, options)?;
    play_schedule(&schedule, player, stop)
}

pub fn play_schedule(
    schedule: &Schedule,
    player: &mut dyn Player,
    stop: &AtomicBool,
) -> Result<PlaybackOutcome> {
    for beat in schedule.beats() {
        if stop.load(Ordering::Relaxed) {
            return Ok(interrupted());
        }
        match beat.signal {
            Signal::Tone(tone) => player.sound(tone, schedule.volume())?,
            Signal::Silence => player.silence(beat.duration)?,
        }
        if !wait_for(beat.duration, stop) {
            return Ok(interrupted());
        }
    }
    Ok(PlaybackOutcome::Completed)
}

fn interrupted() -> PlaybackOutcome {
    warn!("keyboard interrupt: morse code playback interrupted by user");
    PlaybackOutcome::Interrupted
}

/// Sleeps for `duration` unless `stop` is raised first. Returns false when
/// interrupted.
fn wait_for(duration: Duration, stop: &AtomicBool) -> bool {
    let target = Instant::now() + duration;
    loop {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        let now = Instant::now();
        if now >= target {
            return true;
        }
        thread::sleep(WAIT_SLICE.min(target - now));
    }
}
