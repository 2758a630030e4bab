// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for scheduled playback and cooperative interruption

use anyhow::Result;
use morse_kit::playback::{
    play, play_schedule, PlaybackOptions, PlaybackOutcome, Player, Schedule, TerminalPlayer, Tone,
};
use morse_kit::MorseError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Default)]
struct RecordingPlayer {
    tones: Vec<Tone>,
    silences: usize,
    stop_after: Option<(usize, Arc<AtomicBool>)>,
}

impl Player for RecordingPlayer {
    fn sound(&mut self, tone: Tone, _volume: f64) -> Result<()> {
        self.tones.push(tone);
        if let Some((limit, stop)) = &self.stop_after {
            if self.tones.len() >= *limit {
                stop.store(true, Ordering::Relaxed);
            }
        }
        Ok(())
    }

    fn silence(&mut self, _duration: Duration) -> Result<()> {
        self.silences += 1;
        Ok(())
    }
}

fn fast() -> PlaybackOptions {
    PlaybackOptions {
        delay: 0.3,
        ..PlaybackOptions::default()
    }
}

#[test]
fn test_plays_every_symbol() {
    let mut player = RecordingPlayer::default();
    let stop = AtomicBool::new(false);

    let outcome = play("^", &fast(), &mut player, &stop).unwrap();
    assert_eq!(outcome, PlaybackOutcome::Completed);
    assert_eq!(player.tones, vec![Tone::Error]);
}

#[test]
fn test_interrupt_stops_promptly() {
    let stop = Arc::new(AtomicBool::new(false));
    let mut player = RecordingPlayer {
        stop_after: Some((1, stop.clone())),
        ..RecordingPlayer::default()
    };

    let schedule = Schedule::build("-- --", &fast()).unwrap();
    assert!(schedule.total_duration() > Duration::from_secs(1));

    let start = Instant::now();
    let outcome = play_schedule(&schedule, &mut player, &stop).unwrap();
    assert_eq!(outcome, PlaybackOutcome::Interrupted);
    assert_eq!(player.tones, vec![Tone::Dash]);
    assert!(start.elapsed() < Duration::from_millis(250));
}

#[test]
fn test_raised_flag_plays_nothing() {
    let mut player = RecordingPlayer::default();
    let stop = AtomicBool::new(true);

    let outcome = play(".-", &fast(), &mut player, &stop).unwrap();
    assert_eq!(outcome, PlaybackOutcome::Interrupted);
    assert!(player.tones.is_empty());
}

#[test]
fn test_invalid_options_fail_before_sound() {
    let stop = AtomicBool::new(false);
    let cases = [
        (
            PlaybackOptions {
                delay: 0.1,
                ..PlaybackOptions::default()
            },
            MorseError::InvalidDelay(0.1),
        ),
        (
            PlaybackOptions {
                volume: 0.0,
                ..PlaybackOptions::default()
            },
            MorseError::InvalidVolume(0.0),
        ),
        (
            PlaybackOptions {
                dot: "..".to_string(),
                ..PlaybackOptions::default()
            },
            MorseError::InvalidGlyphs,
        ),
    ];

    for (options, expected) in cases {
        let mut player = RecordingPlayer::default();
        let err = play(".-", &options, &mut player, &stop).unwrap_err();
        assert_eq!(err.downcast_ref::<MorseError>(), Some(&expected));
        assert!(player.tones.is_empty());
        assert_eq!(player.silences, 0);
    }
}

#[test]
fn test_gaps_are_silences() {
    let schedule = Schedule::build("/ /", &fast()).unwrap();
    assert_eq!(schedule.beats().len(), 3);

    let mut player = RecordingPlayer::default();
    let stop = Arc::new(AtomicBool::new(false));
    let raiser = {
        let stop = stop.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            stop.store(true, Ordering::Relaxed);
        })
    };
    let outcome = play_schedule(&schedule, &mut player, &stop).unwrap();
    raiser.join().unwrap();

    assert_eq!(outcome, PlaybackOutcome::Interrupted);
    assert!(player.tones.is_empty());
    assert_eq!(player.silences, 1);
}

#[test]
fn test_terminal_player_echoes_symbols() {
    colored::control::set_override(false);
    let mut player = TerminalPlayer::new(Vec::new());
    let stop = AtomicBool::new(false);

    let outcome = play(". ", &fast(), &mut player, &stop).unwrap();
    assert_eq!(outcome, PlaybackOutcome::Completed);
    assert_eq!(String::from_utf8(player.into_inner()).unwrap(), ".");
}
