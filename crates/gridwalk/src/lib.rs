#![forbid(unsafe_code)]

//! Gridwalk public facade crate.
//!
//! Re-exports the stable surface from the member crates and offers a
//! lightweight prelude. The flow end to end:
//!
//! ```
//! use gridwalk::prelude::*;
//!
//! // Pick a grid and run a search once, recording every step.
//! let model = Preset::by_id("simple").unwrap().model();
//! let recording = create_recording(
//!     model.grid().clone(),
//!     model.start(),
//!     model.goal(),
//!     AlgorithmKind::BreadthFirst,
//! )
//! .unwrap();
//! assert!(recording.found());
//!
//! // Scrub through it.
//! let mut session = PlaybackSession::new(recording);
//! session.step_forward();
//! assert_eq!(session.cursor(), 1);
//! session.reset();
//! assert_eq!(session.cursor(), 0);
//! ```

// --- Grid re-exports -------------------------------------------------------

pub use gridwalk_grid::{Cell, CellState, EditOutcome, Grid, GridModel, PRESETS, Preset};

// --- Engine re-exports -----------------------------------------------------

pub use gridwalk_engine::{
    AlgorithmKind, BreadthFirst, CellClasses, DepthFirst, Endpoint, Highlight, HighlightKind,
    Recording, RequestError, Step, Traversal, TraversalRequest, classify, create_recording,
    record,
};

// --- Playback re-exports ---------------------------------------------------

pub use gridwalk_playback::{
    DEFAULT_SPEED, MIN_SPEED, Playback, PlaybackPhase, PlaybackSession, TickOutcome,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AlgorithmKind, Cell, CellState, Grid, GridModel, Playback, PlaybackSession, Preset,
        Recording, Step, create_recording,
    };
}
