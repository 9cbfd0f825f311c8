#![forbid(unsafe_code)]

//! The recording contract shared by both strategies.
//!
//! # Determinism
//!
//! Neighbor generation order is fixed — up, down, left, right — and is the
//! sole source of tie-breaking. Visited membership and back-pointers use
//! dense row-major tables sized rows×cols, so no hashing order can leak
//! into the step sequence. Recording one request twice yields identical
//! step sequences.
//!
//! # Cost
//!
//! One pass, bounded by the grid area: each cell enters the frontier at
//! most once (breadth-first) or a bounded number of times (depth-first,
//! once per discovering neighbor), and each frontier operation emits at
//! most one step.

use gridwalk_grid::{Cell, Grid};

use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::recording::Recording;
use crate::request::{AlgorithmKind, RequestError, TraversalRequest};

/// A traversal strategy that can record its own execution.
pub trait Traversal {
    /// Which strategy this is.
    fn kind(&self) -> AlgorithmKind;

    /// Run the search once and record every event.
    ///
    /// Fails only on precondition violations (see
    /// [`TraversalRequest::validate`]); an unreachable goal is a normal
    /// failure terminal step.
    fn record(&self, request: &TraversalRequest) -> Result<Recording, RequestError>;
}

/// Record a request with the strategy it names.
pub fn record(request: &TraversalRequest) -> Result<Recording, RequestError> {
    match request.algorithm() {
        AlgorithmKind::BreadthFirst => BreadthFirst.record(request),
        AlgorithmKind::DepthFirst => DepthFirst.record(request),
    }
}

/// Convenience entry point over raw parts.
///
/// Pure and synchronous: the returned recording is complete, and two calls
/// with identical inputs return identical recordings.
pub fn create_recording(
    grid: Grid,
    start: Cell,
    goal: Cell,
    algorithm: AlgorithmKind,
) -> Result<Recording, RequestError> {
    record(&TraversalRequest::new(grid, start, goal, algorithm))
}

/// In-bounds 4-neighbors of `cell`, in the fixed up/down/left/right order.
pub(crate) fn neighbors4(grid: &Grid, cell: Cell) -> Vec<Cell> {
    const OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    let mut out = Vec::with_capacity(4);
    for (dr, dc) in OFFSETS {
        let row = i32::from(cell.row) + dr;
        let col = i32::from(cell.col) + dc;
        if row >= 0 && row < i32::from(grid.rows()) && col >= 0 && col < i32::from(grid.cols()) {
            out.push(Cell::new(row as u16, col as u16));
        }
    }
    out
}

/// Insertion-ordered visited set over a dense membership bitmap.
///
/// Membership tests are O(1) against the bitmap; `snapshot` preserves
/// discovery order for step emission.
pub(crate) struct VisitedSet {
    members: Vec<bool>,
    order: Vec<Cell>,
}

impl VisitedSet {
    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            members: vec![false; grid.area()],
            order: Vec::new(),
        }
    }

    /// Mark `cell` visited. Returns false if it already was.
    pub(crate) fn insert(&mut self, grid: &Grid, cell: Cell) -> bool {
        let idx = grid.index_of(cell);
        if self.members[idx] {
            return false;
        }
        self.members[idx] = true;
        self.order.push(cell);
        true
    }

    pub(crate) fn contains(&self, grid: &Grid, cell: Cell) -> bool {
        self.members[grid.index_of(cell)]
    }

    /// The visited cells in discovery order, cloned for a step snapshot.
    pub(crate) fn snapshot(&self) -> Vec<Cell> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            neighbors4(&grid, Cell::new(1, 1)),
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbors_are_bounds_filtered() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            neighbors4(&grid, Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(
            neighbors4(&grid, Cell::new(2, 2)),
            vec![Cell::new(1, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn visited_set_preserves_discovery_order() {
        let grid = Grid::new(2, 2);
        let mut visited = VisitedSet::new(&grid);
        assert!(visited.insert(&grid, Cell::new(1, 1)));
        assert!(visited.insert(&grid, Cell::new(0, 0)));
        assert!(!visited.insert(&grid, Cell::new(1, 1)));
        assert_eq!(visited.snapshot(), vec![Cell::new(1, 1), Cell::new(0, 0)]);
        assert!(visited.contains(&grid, Cell::new(0, 0)));
        assert!(!visited.contains(&grid, Cell::new(0, 1)));
    }

    #[test]
    fn dispatch_matches_request_kind() {
        let grid = Grid::new(2, 2);
        let rec = create_recording(
            grid.clone(),
            Cell::new(0, 0),
            Cell::new(1, 1),
            AlgorithmKind::BreadthFirst,
        )
        .unwrap();
        assert_eq!(rec.algorithm(), AlgorithmKind::BreadthFirst);

        let rec = create_recording(
            grid,
            Cell::new(0, 0),
            Cell::new(1, 1),
            AlgorithmKind::DepthFirst,
        )
        .unwrap();
        assert_eq!(rec.algorithm(), AlgorithmKind::DepthFirst);
    }

    #[test]
    fn precondition_violation_surfaces_before_recording() {
        let err = create_recording(
            Grid::new(2, 2),
            Cell::new(0, 0),
            Cell::new(9, 9),
            AlgorithmKind::BreadthFirst,
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::OutOfBounds { .. }));
    }
}
