#![forbid(unsafe_code)]

//! Cell classification for the rendering collaborator.
//!
//! The engine renders nothing itself; a renderer asks, for any cell at any
//! step, which visual classes apply. Classes are not exclusive — the goal
//! cell on a success terminal is typically `GOAL | VISITED | ON_PATH |
//! HIGHLIGHTED` at once — so they are modeled as flags.

use bitflags::bitflags;
use gridwalk_grid::{Cell, GridModel};

use crate::step::Step;

bitflags! {
    /// Visual classes a cell can belong to at a given step.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellClasses: u8 {
        const WALL        = 1 << 0;
        const START       = 1 << 1;
        const GOAL        = 1 << 2;
        const VISITED     = 1 << 3;
        const CURRENT     = 1 << 4;
        const HIGHLIGHTED = 1 << 5;
        const ON_PATH     = 1 << 6;
    }
}

/// Classify `cell` as seen at `step`, against the model that produced the
/// recording.
#[must_use]
pub fn classify(model: &GridModel, step: &Step, cell: Cell) -> CellClasses {
    let mut classes = CellClasses::empty();
    if model.grid().is_wall(cell) {
        classes |= CellClasses::WALL;
    }
    if cell == model.start() {
        classes |= CellClasses::START;
    }
    if cell == model.goal() {
        classes |= CellClasses::GOAL;
    }
    if step.has_visited(cell) {
        classes |= CellClasses::VISITED;
    }
    if step.current == Some(cell) {
        classes |= CellClasses::CURRENT;
    }
    if step.is_highlighted(cell) {
        classes |= CellClasses::HIGHLIGHTED;
    }
    if step.on_path(cell) {
        classes |= CellClasses::ON_PATH;
    }
    classes
}
