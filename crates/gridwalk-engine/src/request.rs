#![forbid(unsafe_code)]

//! Traversal requests and their preconditions.

use gridwalk_grid::{Cell, Grid, GridModel};
use thiserror::Error;

/// Which search strategy to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    BreadthFirst,
    DepthFirst,
}

impl AlgorithmKind {
    /// Both kinds, in display order.
    pub const ALL: [AlgorithmKind; 2] = [Self::BreadthFirst, Self::DepthFirst];

    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First Search (BFS)",
            Self::DepthFirst => "Depth-First Search (DFS)",
        }
    }

    /// Name of the frontier container this strategy uses.
    #[must_use]
    pub const fn frontier_name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Queue",
            Self::DepthFirst => "Stack",
        }
    }

    /// One-line description for pickers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Explores level by level, guarantees shortest path",
            Self::DepthFirst => "Explores as deep as possible before backtracking",
        }
    }
}

/// Which endpoint of a request failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Precondition violation: the request must never reach a recorder.
///
/// These are programmer errors on the caller's side (inputs that come from
/// an editor can never trip them), not recoverable runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("grid has no cells ({rows}x{cols})")]
    EmptyGrid { rows: u16, cols: u16 },
    #[error("{endpoint} cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        rows: u16,
        cols: u16,
    },
}

/// Everything one recording run consumes, as an immutable value.
///
/// A new request is built whenever the grid, an endpoint, or the algorithm
/// changes; requests are never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalRequest {
    grid: Grid,
    start: Cell,
    goal: Cell,
    algorithm: AlgorithmKind,
    revision: u64,
}

impl TraversalRequest {
    /// Build a request from raw parts. The grid is snapshotted by value.
    #[must_use]
    pub fn new(grid: Grid, start: Cell, goal: Cell, algorithm: AlgorithmKind) -> Self {
        Self {
            grid,
            start,
            goal,
            algorithm,
            revision: 0,
        }
    }

    /// Snapshot a [`GridModel`], capturing its revision for staleness
    /// checks on the derived recording.
    #[must_use]
    pub fn from_model(model: &GridModel, algorithm: AlgorithmKind) -> Self {
        Self {
            grid: model.grid().clone(),
            start: model.start(),
            goal: model.goal(),
            algorithm,
            revision: model.revision(),
        }
    }

    /// The grid snapshot.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The start cell.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// The goal cell.
    #[inline]
    #[must_use]
    pub const fn goal(&self) -> Cell {
        self.goal
    }

    /// The requested strategy.
    #[inline]
    #[must_use]
    pub const fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Grid-model revision this request was snapshotted at (0 for requests
    /// built from raw parts).
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Check the preconditions: non-empty grid, both endpoints in bounds.
    ///
    /// Walls under endpoints and unreachable goals are *not* checked; both
    /// are normal recorder outcomes.
    pub fn validate(&self) -> Result<(), RequestError> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        if self.grid.area() == 0 {
            return Err(RequestError::EmptyGrid { rows, cols });
        }
        for (endpoint, cell) in [(Endpoint::Start, self.start), (Endpoint::Goal, self.goal)] {
            if !self.grid.in_bounds(cell) {
                return Err(RequestError::OutOfBounds {
                    endpoint,
                    cell,
                    rows,
                    cols,
                });
            }
        }
        Ok(())
    }
}
