#![forbid(unsafe_code)]

//! The editable grid model.
//!
//! [`GridModel`] bundles a [`Grid`] with its start and goal markers and is
//! the only mutation path for any of the three. Mutations uphold two
//! invariants:
//!
//! 1. The start and goal cells are never walls: placing a wall on either is
//!    silently rejected, and moving a marker onto a wall is silently
//!    rejected. These are routine user-interaction misses, not faults, so
//!    no error surfaces.
//! 2. Every accepted mutation bumps a monotonically increasing revision,
//!    which is how derived recordings detect staleness.
//!
//! Start and goal may coincide (a search over such a model terminates
//! immediately with a zero-length path), and reachability is never checked
//! here: an unreachable goal is discovered by the recorder, not rejected by
//! the editor.

use crate::cell::Cell;
use crate::grid::{CellState, Grid};
use crate::presets::Preset;

/// Result of an edit operation.
///
/// Rejections are part of normal interaction (clicking a wall onto the start
/// marker); callers typically re-record only on [`EditOutcome::Applied`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The model changed; the revision was bumped.
    Applied,
    /// The edit violated an invariant or changed nothing; the model is
    /// untouched.
    Rejected,
}

impl EditOutcome {
    /// Whether the edit changed the model.
    #[inline]
    #[must_use]
    pub const fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Grid plus start/goal markers, with edit invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    grid: Grid,
    start: Cell,
    goal: Cell,
    revision: u64,
}

impl GridModel {
    /// Create a model from parts.
    ///
    /// The caller supplies a consistent state: start and goal in bounds and
    /// on open cells. Presets are the blessed way to obtain one; mutations
    /// preserve consistency from there.
    #[must_use]
    pub fn new(grid: Grid, start: Cell, goal: Cell) -> Self {
        Self {
            grid,
            start,
            goal,
            revision: 0,
        }
    }

    /// Create a model from a named preset.
    #[must_use]
    pub fn from_preset(preset: &Preset) -> Self {
        preset.model()
    }

    /// The underlying grid (read-only).
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The start marker.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// The goal marker.
    #[inline]
    #[must_use]
    pub const fn goal(&self) -> Cell {
        self.goal
    }

    /// Revision counter, bumped on every accepted mutation.
    ///
    /// A recording derived from this model at revision `n` is stale once
    /// `revision() != n`.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Set a cell to wall or open.
    ///
    /// Rejected when the cell is the current start or goal, out of bounds,
    /// or already in the requested state.
    pub fn set_cell_state(&mut self, cell: Cell, state: CellState) -> EditOutcome {
        if cell == self.start || cell == self.goal {
            tracing::debug!(%cell, "edit rejected: cell is an endpoint marker");
            return EditOutcome::Rejected;
        }
        match self.grid.state(cell) {
            None => EditOutcome::Rejected,
            Some(current) if current == state => EditOutcome::Rejected,
            Some(_) => {
                self.grid.set(cell, state);
                self.bump();
                EditOutcome::Applied
            }
        }
    }

    /// Move the start marker.
    ///
    /// Rejected when the target is a wall or out of bounds. Moving onto the
    /// goal is allowed; start and goal may coincide.
    pub fn move_start(&mut self, cell: Cell) -> EditOutcome {
        self.move_marker(cell, Marker::Start)
    }

    /// Move the goal marker. Same rules as [`GridModel::move_start`].
    pub fn move_goal(&mut self, cell: Cell) -> EditOutcome {
        self.move_marker(cell, Marker::Goal)
    }

    /// Atomically replace grid, start, and goal with a preset's.
    pub fn load_preset(&mut self, preset: &Preset) -> EditOutcome {
        let fresh = preset.model();
        self.grid = fresh.grid;
        self.start = fresh.start;
        self.goal = fresh.goal;
        self.bump();
        EditOutcome::Applied
    }

    /// [`GridModel::load_preset`] by id; rejected when no such preset
    /// exists.
    pub fn load_preset_named(&mut self, id: &str) -> EditOutcome {
        match Preset::by_id(id) {
            Some(preset) => self.load_preset(preset),
            None => {
                tracing::debug!(id, "unknown preset");
                EditOutcome::Rejected
            }
        }
    }

    fn move_marker(&mut self, cell: Cell, marker: Marker) -> EditOutcome {
        if !self.grid.in_bounds(cell) || self.grid.is_wall(cell) {
            tracing::debug!(%cell, ?marker, "move rejected: target is a wall or off-grid");
            return EditOutcome::Rejected;
        }
        let slot = match marker {
            Marker::Start => &mut self.start,
            Marker::Goal => &mut self.goal,
        };
        if *slot == cell {
            return EditOutcome::Rejected;
        }
        *slot = cell;
        self.bump();
        EditOutcome::Applied
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    Start,
    Goal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> GridModel {
        GridModel::new(Grid::new(5, 5), Cell::new(0, 0), Cell::new(4, 4))
    }

    #[test]
    fn wall_on_start_is_rejected() {
        let mut m = model();
        assert_eq!(
            m.set_cell_state(Cell::new(0, 0), CellState::Wall),
            EditOutcome::Rejected
        );
        assert!(!m.grid().is_wall(Cell::new(0, 0)));
        assert_eq!(m.revision(), 0);
    }

    #[test]
    fn wall_on_goal_is_rejected() {
        let mut m = model();
        assert_eq!(
            m.set_cell_state(Cell::new(4, 4), CellState::Wall),
            EditOutcome::Rejected
        );
        assert_eq!(m.revision(), 0);
    }

    #[test]
    fn wall_elsewhere_is_applied_and_bumps_revision() {
        let mut m = model();
        assert_eq!(
            m.set_cell_state(Cell::new(2, 2), CellState::Wall),
            EditOutcome::Applied
        );
        assert!(m.grid().is_wall(Cell::new(2, 2)));
        assert_eq!(m.revision(), 1);
    }

    #[test]
    fn redundant_state_change_is_rejected() {
        let mut m = model();
        assert_eq!(
            m.set_cell_state(Cell::new(2, 2), CellState::Open),
            EditOutcome::Rejected
        );
        assert_eq!(m.revision(), 0);
    }

    #[test]
    fn clearing_a_wall_reopens_it() {
        let mut m = model();
        m.set_cell_state(Cell::new(1, 1), CellState::Wall);
        assert_eq!(
            m.set_cell_state(Cell::new(1, 1), CellState::Open),
            EditOutcome::Applied
        );
        assert!(!m.grid().is_wall(Cell::new(1, 1)));
        assert_eq!(m.revision(), 2);
    }

    #[test]
    fn move_start_onto_wall_is_rejected() {
        let mut m = model();
        m.set_cell_state(Cell::new(2, 2), CellState::Wall);
        assert_eq!(m.move_start(Cell::new(2, 2)), EditOutcome::Rejected);
        assert_eq!(m.start(), Cell::new(0, 0));
    }

    #[test]
    fn move_goal_off_grid_is_rejected() {
        let mut m = model();
        assert_eq!(m.move_goal(Cell::new(9, 9)), EditOutcome::Rejected);
        assert_eq!(m.goal(), Cell::new(4, 4));
    }

    #[test]
    fn start_and_goal_may_coincide() {
        let mut m = model();
        assert_eq!(m.move_start(Cell::new(4, 4)), EditOutcome::Applied);
        assert_eq!(m.start(), m.goal());
    }

    #[test]
    fn wall_under_former_start_position_is_allowed() {
        let mut m = model();
        m.move_start(Cell::new(1, 0));
        assert_eq!(
            m.set_cell_state(Cell::new(0, 0), CellState::Wall),
            EditOutcome::Applied
        );
    }

    #[test]
    fn load_preset_replaces_everything_atomically() {
        let mut m = model();
        m.set_cell_state(Cell::new(2, 2), CellState::Wall);
        let before = m.revision();
        m.load_preset(crate::presets::Preset::by_id("maze").unwrap());
        assert_eq!(m.grid().rows(), 7);
        assert_eq!(m.start(), Cell::new(0, 0));
        assert_eq!(m.goal(), Cell::new(6, 6));
        assert_eq!(m.revision(), before + 1);
    }

    #[test]
    fn unknown_preset_name_is_rejected() {
        let mut m = model();
        assert_eq!(m.load_preset_named("dijkstra"), EditOutcome::Rejected);
        assert_eq!(m.revision(), 0);
        assert_eq!(m.load_preset_named("open"), EditOutcome::Applied);
    }
}
