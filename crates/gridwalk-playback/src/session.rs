#![forbid(unsafe_code)]

//! Playback with a live timer.
//!
//! [`PlaybackSession`] wraps the pure [`Playback`] state machine and owns
//! the one repeating timer in the system. The discipline around that timer:
//!
//! - `play` is cancel-then-spawn as a single operation, so two tickers can
//!   never race the same cursor.
//! - Replacing the recording cancels the ticker *synchronously* before the
//!   swap and bumps the session epoch; ticks already sitting in the channel
//!   carry the old epoch and are discarded by [`PlaybackSession::pump`].
//! - Whenever the state machine stops playing (pause, reset, auto-pause at
//!   the end, a manual step landing on the terminal step), the ticker is
//!   cancelled rather than left firing ignorable ticks.
//!
//! The session is single-threaded cooperative: the host calls
//! [`PlaybackSession::pump`] from its event loop to apply pending ticks.

use std::sync::mpsc;
use std::time::Duration;

use gridwalk_engine::{Recording, Step};
use web_time::Instant;

use crate::controller::{Playback, PlaybackPhase, TickOutcome};
use crate::ticker::{RunningTicker, TickEvent};

/// A [`Playback`] plus its timer.
pub struct PlaybackSession {
    playback: Playback,
    ticker: Option<RunningTicker>,
    epoch: u64,
    sender: mpsc::Sender<TickEvent>,
    receiver: mpsc::Receiver<TickEvent>,
    playing_since: Option<Instant>,
}

impl PlaybackSession {
    /// Start a paused session over `recording`.
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        Self::from_playback(Playback::new(recording))
    }

    /// Start a paused session with explicit playback state.
    #[must_use]
    pub fn from_playback(playback: Playback) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            playback,
            ticker: None,
            epoch: 0,
            sender,
            receiver,
            playing_since: None,
        }
    }

    /// The underlying state machine (read-only; mutate through the session
    /// so the timer stays consistent).
    #[inline]
    #[must_use]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// The step under the cursor.
    #[must_use]
    pub fn current_step(&self) -> &Step {
        self.playback.current_step()
    }

    /// Cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.playback.cursor()
    }

    /// Whether the timer is driving the cursor.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Derived phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.playback.phase()
    }

    /// How long the current play run has been going, if playing.
    #[must_use]
    pub fn playing_for(&self) -> Option<Duration> {
        self.playing_since.map(|since| since.elapsed())
    }

    /// Start playing. Cancels any previous ticker before spawning the new
    /// one; refused (false) when the cursor is already at the end.
    pub fn play(&mut self) -> bool {
        if !self.playback.play() {
            return false;
        }
        self.restart_ticker();
        self.playing_since = Some(Instant::now());
        true
    }

    /// Pause and cancel the ticker.
    pub fn pause(&mut self) {
        self.playback.pause();
        self.stop_ticker();
    }

    /// Manual advance. Keeps playing unless it lands on the terminal step.
    pub fn step_forward(&mut self) -> bool {
        let moved = self.playback.step_forward();
        self.sync_ticker();
        moved
    }

    /// Manual step back, clamped at 0.
    pub fn step_backward(&mut self) -> bool {
        self.playback.step_backward()
    }

    /// Jump the cursor, clamped into bounds.
    pub fn seek(&mut self, index: usize) -> usize {
        let landed = self.playback.seek(index);
        self.sync_ticker();
        landed
    }

    /// Rewind to step 0, paused.
    pub fn reset(&mut self) {
        self.playback.reset();
        self.stop_ticker();
    }

    /// Change the tick interval. A pending tick is not rescheduled; the
    /// next wait uses the new interval.
    pub fn set_speed(&mut self, speed: Duration) {
        self.playback.set_speed(speed);
        if let Some(ticker) = &self.ticker {
            ticker.set_interval(self.playback.speed());
        }
    }

    /// Replace the recording.
    ///
    /// The ticker is cancelled synchronously *before* the swap and the
    /// session epoch is bumped, so no stale tick can ever advance a cursor
    /// into the new recording.
    pub fn load(&mut self, recording: Recording) {
        self.stop_ticker();
        self.epoch += 1;
        self.playback.load(recording);
    }

    /// Apply pending timer ticks to the state machine. Returns how many
    /// steps the cursor advanced.
    ///
    /// Ticks from an earlier epoch (scheduled against a recording that has
    /// since been replaced) are discarded.
    pub fn pump(&mut self) -> usize {
        let mut advanced = 0;
        while let Ok(event) = self.receiver.try_recv() {
            if event.epoch != self.epoch {
                tracing::trace!(
                    tick_epoch = event.epoch,
                    session_epoch = self.epoch,
                    "discarding stale tick"
                );
                continue;
            }
            match self.playback.on_tick() {
                TickOutcome::Advanced => advanced += 1,
                TickOutcome::Completed => {
                    advanced += 1;
                    self.stop_ticker();
                }
                TickOutcome::Ignored => {}
            }
        }
        advanced
    }

    /// Cancel the old ticker (if any) and spawn a fresh one at the current
    /// speed, as one operation.
    fn restart_ticker(&mut self) {
        self.stop_ticker();
        self.ticker = Some(RunningTicker::spawn(
            self.playback.speed(),
            self.epoch,
            self.sender.clone(),
        ));
    }

    /// Cancel the ticker if the state machine stopped playing underneath it.
    fn sync_ticker(&mut self) {
        if !self.playback.is_playing() {
            self.stop_ticker();
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            debug_assert!(ticker.epoch() <= self.epoch);
            ticker.cancel();
        }
        if !self.playback.is_playing() {
            self.playing_since = None;
        }
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
