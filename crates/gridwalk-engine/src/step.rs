#![forbid(unsafe_code)]

//! Immutable traversal snapshots.
//!
//! A [`Step`] captures the complete observable state of the search at one
//! instant: the frontier in container order, the visited set in discovery
//! order, the cell being processed, and a presentation highlight. Steps are
//! the unit of replay — once emitted into a recording they never change.
//!
//! # Invariants
//!
//! 1. `index` is the step's position in its recording: 0-based, strictly
//!    increasing, no gaps.
//! 2. `visited` only ever grows from one step to the next.
//! 3. Exactly one step per recording has `terminal == true`, and it is the
//!    last one.
//! 4. `path`, `distance`, and `path_length` appear only on a terminal
//!    success step (`distance` for breadth-first, `path_length` for
//!    depth-first).

use gridwalk_grid::Cell;

/// What a step's highlight annotates. Presentation-only; carries no
/// algorithmic meaning beyond labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighlightKind {
    /// The start cell, on the initialization step.
    Start,
    /// The cell just removed from the frontier.
    Current,
    /// A freshly discovered cell just added to the frontier.
    FrontierAdd,
    /// The reconstructed start-to-goal path, on the success terminal.
    Path,
    /// Frontier exhausted without reaching the goal.
    Failure,
}

/// A tagged set of cells to emphasize when rendering a step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub kind: HighlightKind,
    pub cells: Vec<Cell>,
}

impl Highlight {
    #[must_use]
    pub fn new(kind: HighlightKind, cells: Vec<Cell>) -> Self {
        Self { kind, cells }
    }
}

/// One immutable snapshot of traversal state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Position in the recording.
    pub index: usize,
    /// Human-readable narration of the event this step represents.
    pub description: String,
    /// Cells pending exploration, in the exact order the underlying
    /// container holds them (queue front-to-back, stack bottom-to-top).
    pub frontier: Vec<Cell>,
    /// Cells marked explored so far, in discovery order.
    pub visited: Vec<Cell>,
    /// The cell being processed, absent on the initialization step and on
    /// the failure terminal.
    pub current: Option<Cell>,
    /// Presentation annotation.
    pub highlight: Highlight,
    /// True only on the goal-reached or frontier-exhausted step.
    pub terminal: bool,
    /// Start-to-goal path (inclusive), success terminal only.
    pub path: Option<Vec<Cell>>,
    /// Path length in edges, breadth-first success terminal only.
    pub distance: Option<usize>,
    /// Path length in cells, depth-first success terminal only.
    pub path_length: Option<usize>,
}

impl Step {
    /// Whether this is the success terminal.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.terminal && self.highlight.kind == HighlightKind::Path
    }

    /// Whether this is the failure terminal.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.terminal && self.highlight.kind == HighlightKind::Failure
    }

    /// Whether `cell` has been visited as of this step.
    #[must_use]
    pub fn has_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Whether `cell` is on this step's terminal path.
    #[must_use]
    pub fn on_path(&self, cell: Cell) -> bool {
        self.path.as_deref().is_some_and(|path| path.contains(&cell))
    }

    /// Whether `cell` is highlighted by this step.
    #[must_use]
    pub fn is_highlighted(&self, cell: Cell) -> bool {
        self.highlight.cells.contains(&cell)
    }
}
