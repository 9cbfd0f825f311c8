#![forbid(unsafe_code)]

//! Step recorder for grid search.
//!
//! Given one [`TraversalRequest`] (grid snapshot, start, goal, algorithm),
//! the recorder runs the search once, synchronously, and produces a
//! [`Recording`]: an ordered, immutable sequence of [`Step`] snapshots that
//! a playback layer can scrub through. Recording is total — an unreachable
//! goal is a normal failure terminal step, never an error — and
//! deterministic: the fixed up/down/left/right neighbor order is the sole
//! tie-breaker, and identical requests produce identical recordings.
//!
//! The two strategies live behind the [`Traversal`] trait:
//! [`BreadthFirst`] (FIFO frontier, back-pointer path reconstruction,
//! shortest path guaranteed) and [`DepthFirst`] (LIFO frontier, carried
//! paths, simple path guaranteed but not minimal).

pub mod bfs;
pub mod classify;
pub mod dfs;
pub mod recorder;
pub mod recording;
pub mod request;
pub mod step;

pub use bfs::BreadthFirst;
pub use classify::{CellClasses, classify};
pub use dfs::DepthFirst;
pub use recorder::{Traversal, create_recording, record};
pub use recording::Recording;
pub use request::{AlgorithmKind, Endpoint, RequestError, TraversalRequest};
pub use step::{Highlight, HighlightKind, Step};
