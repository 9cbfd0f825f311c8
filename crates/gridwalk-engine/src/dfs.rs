#![forbid(unsafe_code)]

//! Depth-first recording.
//!
//! LIFO frontier. Unlike breadth-first, a cell is marked visited when it is
//! *popped*, so the stack can briefly hold the same cell twice (pushed by
//! two different neighbors before either pusher's entry is processed); a
//! pop of an already-visited cell is skipped without emitting a step.
//!
//! Each stack entry carries its own full path from the start, so the
//! terminal path needs no reconstruction. Neighbors are pushed in reversed
//! fixed order so that pops explore in the same up/down/left/right priority
//! as breadth-first, even though traversal goes deep before wide.

use gridwalk_grid::Cell;

use crate::recorder::{Traversal, VisitedSet, neighbors4};
use crate::recording::Recording;
use crate::request::{AlgorithmKind, RequestError, TraversalRequest};
use crate::step::{Highlight, HighlightKind, Step};

/// The depth-first strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

struct StackEntry {
    cell: Cell,
    /// Path from the start up to and including `cell`.
    path: Vec<Cell>,
}

impl Traversal for DepthFirst {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::DepthFirst
    }

    fn record(&self, request: &TraversalRequest) -> Result<Recording, RequestError> {
        request.validate()?;

        let grid = request.grid();
        let start = request.start();
        let goal = request.goal();

        let mut steps: Vec<Step> = Vec::new();
        let mut visited = VisitedSet::new(grid);
        let mut stack: Vec<StackEntry> = vec![StackEntry {
            cell: start,
            path: vec![start],
        }];

        // Nothing is visited yet; the stack holds the start alone.
        steps.push(Step {
            index: 0,
            description: format!("Initialize: Start at {start}"),
            frontier: vec![start],
            visited: Vec::new(),
            current: None,
            highlight: Highlight::new(HighlightKind::Start, vec![start]),
            terminal: false,
            path: None,
            distance: None,
            path_length: None,
        });

        while let Some(entry) = stack.pop() {
            let cell = entry.cell;
            if !visited.insert(grid, cell) {
                // Duplicate stack entry; its first pop already explored it.
                continue;
            }

            if cell == goal {
                let path_length = entry.path.len();
                steps.push(Step {
                    index: steps.len(),
                    description: format!("Goal found at {cell}! Path length: {path_length}"),
                    frontier: frontier_of(&stack),
                    visited: visited.snapshot(),
                    current: Some(cell),
                    highlight: Highlight::new(HighlightKind::Path, entry.path.clone()),
                    terminal: true,
                    path: Some(entry.path),
                    distance: None,
                    path_length: Some(path_length),
                });
                return Ok(finish(steps, request, true));
            }

            steps.push(Step {
                index: steps.len(),
                description: format!("Pop and visit cell {cell}"),
                frontier: frontier_of(&stack),
                visited: visited.snapshot(),
                current: Some(cell),
                highlight: Highlight::new(HighlightKind::Current, vec![cell]),
                terminal: false,
                path: None,
                distance: None,
                path_length: None,
            });

            for neighbor in neighbors4(grid, cell).into_iter().rev() {
                if grid.is_wall(neighbor) || visited.contains(grid, neighbor) {
                    continue;
                }
                let mut path = entry.path.clone();
                path.push(neighbor);
                stack.push(StackEntry {
                    cell: neighbor,
                    path,
                });

                steps.push(Step {
                    index: steps.len(),
                    description: format!("Push neighbor {neighbor} to stack"),
                    frontier: frontier_of(&stack),
                    visited: visited.snapshot(),
                    current: Some(cell),
                    highlight: Highlight::new(HighlightKind::FrontierAdd, vec![neighbor]),
                    terminal: false,
                    path: None,
                    distance: None,
                    path_length: None,
                });
            }
        }

        steps.push(Step {
            index: steps.len(),
            description: "No path found - stack exhausted".to_string(),
            frontier: Vec::new(),
            visited: visited.snapshot(),
            current: None,
            highlight: Highlight::new(HighlightKind::Failure, Vec::new()),
            terminal: true,
            path: None,
            distance: None,
            path_length: None,
        });
        Ok(finish(steps, request, false))
    }
}

fn finish(steps: Vec<Step>, request: &TraversalRequest, found: bool) -> Recording {
    tracing::debug!(
        algorithm = "dfs",
        steps = steps.len(),
        found,
        "recording complete"
    );
    Recording::new(AlgorithmKind::DepthFirst, steps, request.revision())
}

fn frontier_of(stack: &[StackEntry]) -> Vec<Cell> {
    stack.iter().map(|entry| entry.cell).collect()
}
