#![forbid(unsafe_code)]

//! Grid model and editor for gridwalk.
//!
//! This crate owns the walkable/blocked 2-D surface the search engines run
//! over: [`Cell`] coordinates, the dense [`Grid`] matrix, the editable
//! [`GridModel`] (grid + start + goal) with its mutation invariants, and the
//! compiled-in [`Preset`] library of example grids.
//!
//! The grid is read-only to everything except [`GridModel`]; the recorder
//! receives a snapshot and never mutates it.

pub mod cell;
pub mod editor;
pub mod grid;
pub mod presets;

pub use cell::Cell;
pub use editor::{EditOutcome, GridModel};
pub use grid::{CellState, Grid};
pub use presets::{PRESETS, Preset};
