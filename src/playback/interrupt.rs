// SPDX-License-Identifier: PMPL-1.0-or-later

//! Keyboard interrupt wiring for playback.

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Routes SIGINT (Ctrl-C) into `stop` instead of killing the process, so a
/// running schedule ends with [`super::PlaybackOutcome::Interrupted`].
///
/// Can only be installed once per process.
pub fn stop_on_interrupt(stop: Arc<AtomicBool>) -> Result<()> {
    ctrlc::set_handler(move || stop.store(true, Ordering::Relaxed))
        .context("installing keyboard interrupt handler")
}
