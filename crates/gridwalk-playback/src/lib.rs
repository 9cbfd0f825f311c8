#![forbid(unsafe_code)]

//! Playback over recordings.
//!
//! Two layers:
//!
//! - [`Playback`] is the pure state machine: a clamped cursor into one
//!   recording, a playing flag, and a speed. Every transition of the
//!   playback contract lives here and is testable without threads; the
//!   timer enters only through [`Playback::on_tick`].
//! - [`PlaybackSession`] adds the one real timer: a background interval
//!   ticker with synchronous cancellation, owned exclusively by the
//!   session. Ticks are epoch-tagged so a tick raced against a recording
//!   swap can never advance a cursor into the wrong recording.

pub mod controller;
pub mod session;
mod ticker;

pub use controller::{DEFAULT_SPEED, MIN_SPEED, Playback, PlaybackPhase, TickOutcome};
pub use session::PlaybackSession;
