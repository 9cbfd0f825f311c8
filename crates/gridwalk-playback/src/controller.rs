#![forbid(unsafe_code)]

//! The pure playback state machine.
//!
//! # Invariants
//!
//! 1. The cursor always lies in `[0, recording.len() - 1]`; out-of-range
//!    requests clamp, they never error.
//! 2. `playing` implies the cursor is not on the terminal step: reaching
//!    the end — by tick or by hand — pauses.
//! 3. Replacing the recording resets the cursor to 0 and forces pause in
//!    the same operation; a stale cursor is never observable against a new
//!    recording.

use std::time::Duration;

use gridwalk_engine::{Recording, Step};

/// Default tick interval.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(500);

/// Lower clamp for [`Playback::set_speed`]; a zero interval would spin.
pub const MIN_SPEED: Duration = Duration::from_millis(1);

/// Where playback currently idles (or doesn't).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Cursor at 0, paused.
    AtStart,
    /// Timer running.
    Playing,
    /// Paused somewhere strictly between the first and last step.
    Mid,
    /// Cursor on the terminal step, paused.
    AtEnd,
}

/// What a timer tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; the tick was discarded.
    Ignored,
    /// Cursor advanced one step.
    Advanced,
    /// Cursor landed on the terminal step; playback auto-paused.
    Completed,
}

/// Cursor, playing flag, and speed over one owned [`Recording`].
#[derive(Debug)]
pub struct Playback {
    recording: Recording,
    cursor: usize,
    playing: bool,
    speed: Duration,
}

impl Playback {
    /// Start paused at step 0 with the default speed.
    #[must_use]
    pub fn new(recording: Recording) -> Self {
        Self::with_speed(recording, DEFAULT_SPEED)
    }

    /// Start paused at step 0 with a custom speed.
    #[must_use]
    pub fn with_speed(recording: Recording, speed: Duration) -> Self {
        Self {
            recording,
            cursor: 0,
            playing: false,
            speed: speed.max(MIN_SPEED),
        }
    }

    /// The recording under the cursor.
    #[inline]
    #[must_use]
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Current cursor position.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the timer should be driving the cursor.
    #[inline]
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current tick interval.
    #[inline]
    #[must_use]
    pub const fn speed(&self) -> Duration {
        self.speed
    }

    /// The step under the cursor.
    #[must_use]
    pub fn current_step(&self) -> &Step {
        self.recording
            .step_at(self.cursor)
            .unwrap_or_else(|| self.recording.terminal())
    }

    /// Derived state-machine phase.
    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        if self.playing {
            PlaybackPhase::Playing
        } else if self.cursor == 0 {
            PlaybackPhase::AtStart
        } else if self.cursor == self.recording.last_index() {
            PlaybackPhase::AtEnd
        } else {
            PlaybackPhase::Mid
        }
    }

    /// Advance one step. At the last index this is a cursor no-op that
    /// forces pause. Returns whether the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        if self.cursor >= self.recording.last_index() {
            self.playing = false;
            return false;
        }
        self.cursor += 1;
        if self.cursor == self.recording.last_index() {
            self.playing = false;
        }
        true
    }

    /// Step back one step, clamped at 0. Returns whether the cursor moved.
    pub fn step_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Jump the cursor, clamped into bounds. Returns where it landed.
    pub fn seek(&mut self, index: usize) -> usize {
        self.cursor = index.min(self.recording.last_index());
        if self.cursor == self.recording.last_index() {
            self.playing = false;
        }
        self.cursor
    }

    /// Start playing. Refused (returns false) when already at the end.
    pub fn play(&mut self) -> bool {
        if self.cursor >= self.recording.last_index() {
            return false;
        }
        self.playing = true;
        true
    }

    /// Stop the timer from driving the cursor.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Back to step 0, paused.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.playing = false;
    }

    /// Change the tick interval, clamped to [`MIN_SPEED`]. Takes effect on
    /// the next tick; an already-pending tick is not rescheduled.
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed.max(MIN_SPEED);
    }

    /// Timer-driven advance: like [`Playback::step_forward`] but only while
    /// playing, and reporting when it auto-paused on the terminal step.
    pub fn on_tick(&mut self) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Ignored;
        }
        self.step_forward();
        if self.cursor == self.recording.last_index() {
            self.playing = false;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced
        }
    }

    /// Replace the recording. Always resets — cursor to 0, paused — as part
    /// of the same operation.
    pub fn load(&mut self, recording: Recording) {
        self.recording = recording;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_engine::{AlgorithmKind, create_recording};
    use gridwalk_grid::{Cell, Grid};

    /// 5x5 open-grid BFS recording (50 steps).
    fn recording() -> Recording {
        create_recording(
            Grid::new(5, 5),
            Cell::new(0, 0),
            Cell::new(4, 4),
            AlgorithmKind::BreadthFirst,
        )
        .unwrap()
    }

    /// Minimal 2-step recording (start == goal).
    fn tiny_recording() -> Recording {
        create_recording(
            Grid::new(3, 3),
            Cell::new(1, 1),
            Cell::new(1, 1),
            AlgorithmKind::BreadthFirst,
        )
        .unwrap()
    }

    #[test]
    fn starts_paused_at_zero() {
        let p = Playback::new(recording());
        assert_eq!(p.cursor(), 0);
        assert!(!p.is_playing());
        assert_eq!(p.speed(), DEFAULT_SPEED);
        assert_eq!(p.phase(), PlaybackPhase::AtStart);
        assert_eq!(p.current_step().index, 0);
    }

    #[test]
    fn step_forward_clamps_at_end() {
        let mut p = Playback::new(tiny_recording());
        assert!(p.step_forward());
        assert_eq!(p.cursor(), 1);
        assert_eq!(p.phase(), PlaybackPhase::AtEnd);
        assert!(!p.step_forward());
        assert_eq!(p.cursor(), 1);
    }

    #[test]
    fn step_forward_at_end_forces_pause() {
        let mut p = Playback::new(recording());
        assert!(p.play());
        let last = p.recording().last_index();
        p.seek(last);
        assert!(!p.is_playing(), "landing on the end pauses");
        assert!(!p.step_forward());
        assert!(!p.is_playing());
    }

    #[test]
    fn step_backward_clamps_at_zero() {
        let mut p = Playback::new(recording());
        assert!(!p.step_backward());
        assert_eq!(p.cursor(), 0);
        p.seek(3);
        assert!(p.step_backward());
        assert_eq!(p.cursor(), 2);
    }

    #[test]
    fn seek_clamps_into_bounds() {
        let mut p = Playback::new(recording());
        let last = p.recording().last_index();
        assert_eq!(p.seek(usize::MAX), last);
        assert_eq!(p.seek(0), 0);
        assert_eq!(p.seek(last + 100), last);
    }

    #[test]
    fn play_is_refused_at_the_end() {
        let mut p = Playback::new(recording());
        p.seek(p.recording().last_index());
        assert!(!p.play());
        assert!(!p.is_playing());
    }

    #[test]
    fn tick_advances_only_while_playing() {
        let mut p = Playback::new(recording());
        assert_eq!(p.on_tick(), TickOutcome::Ignored);
        assert_eq!(p.cursor(), 0);
        assert!(p.play());
        assert_eq!(p.on_tick(), TickOutcome::Advanced);
        assert_eq!(p.cursor(), 1);
        assert_eq!(p.phase(), PlaybackPhase::Playing);
    }

    #[test]
    fn tick_auto_pauses_on_the_terminal_step() {
        let mut p = Playback::new(tiny_recording());
        assert!(p.play());
        assert_eq!(p.on_tick(), TickOutcome::Completed);
        assert_eq!(p.cursor(), 1);
        assert!(!p.is_playing());
        assert_eq!(p.on_tick(), TickOutcome::Ignored);
        assert_eq!(p.cursor(), 1, "playback never spins past the end");
    }

    #[test]
    fn reset_rewinds_and_pauses() {
        let mut p = Playback::new(recording());
        p.play();
        p.on_tick();
        p.reset();
        assert_eq!(p.cursor(), 0);
        assert!(!p.is_playing());
    }

    #[test]
    fn set_speed_clamps_zero() {
        let mut p = Playback::new(recording());
        p.set_speed(Duration::ZERO);
        assert_eq!(p.speed(), MIN_SPEED);
        p.set_speed(Duration::from_millis(100));
        assert_eq!(p.speed(), Duration::from_millis(100));
    }

    #[test]
    fn load_always_resets() {
        let mut p = Playback::new(recording());
        p.play();
        p.seek(5);
        p.load(tiny_recording());
        assert_eq!(p.cursor(), 0);
        assert!(!p.is_playing());
        assert_eq!(p.recording().len(), 2);
    }

    #[test]
    fn phase_covers_all_idle_positions() {
        let mut p = Playback::new(recording());
        assert_eq!(p.phase(), PlaybackPhase::AtStart);
        p.seek(1);
        assert_eq!(p.phase(), PlaybackPhase::Mid);
        p.seek(p.recording().last_index());
        assert_eq!(p.phase(), PlaybackPhase::AtEnd);
    }
}
