#![forbid(unsafe_code)]

//! Breadth-first recording.
//!
//! FIFO frontier. A cell is marked visited the moment it is discovered
//! (enqueued), never later, so each cell enters the queue at most once.
//! Discovered cells carry `distance = parent distance + 1`; the terminal
//! path is rebuilt from a dense back-pointer table and is the shortest
//! cell-count path under 4-directional movement, ties broken by the fixed
//! neighbor order.

use std::collections::VecDeque;

use gridwalk_grid::{Cell, Grid};

use crate::recorder::{Traversal, VisitedSet, neighbors4};
use crate::recording::Recording;
use crate::request::{AlgorithmKind, RequestError, TraversalRequest};
use crate::step::{Highlight, HighlightKind, Step};

/// The breadth-first strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Traversal for BreadthFirst {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::BreadthFirst
    }

    fn record(&self, request: &TraversalRequest) -> Result<Recording, RequestError> {
        request.validate()?;

        let grid = request.grid();
        let start = request.start();
        let goal = request.goal();

        let mut steps: Vec<Step> = Vec::new();
        let mut visited = VisitedSet::new(grid);
        let mut parent: Vec<Option<Cell>> = vec![None; grid.area()];
        let mut queue: VecDeque<(Cell, usize)> = VecDeque::new();

        visited.insert(grid, start);
        queue.push_back((start, 0));

        // The start is already enqueued and visited, but the snapshot shows
        // an empty queue: nothing has been explored yet.
        steps.push(Step {
            index: 0,
            description: format!("Initialize: Start at {start}"),
            frontier: Vec::new(),
            visited: visited.snapshot(),
            current: None,
            highlight: Highlight::new(HighlightKind::Start, vec![start]),
            terminal: false,
            path: None,
            distance: None,
            path_length: None,
        });

        while let Some((cell, distance)) = queue.pop_front() {
            if cell == goal {
                let path = reconstruct_path(&parent, grid, cell);
                steps.push(Step {
                    index: steps.len(),
                    description: format!("Goal found at {cell}! Distance: {distance}"),
                    frontier: frontier_of(&queue),
                    visited: visited.snapshot(),
                    current: Some(cell),
                    highlight: Highlight::new(HighlightKind::Path, path.clone()),
                    terminal: true,
                    path: Some(path),
                    distance: Some(distance),
                    path_length: None,
                });
                return Ok(finish(steps, request, true));
            }

            steps.push(Step {
                index: steps.len(),
                description: format!("Dequeue cell {cell} at distance {distance}"),
                frontier: frontier_of(&queue),
                visited: visited.snapshot(),
                current: Some(cell),
                highlight: Highlight::new(HighlightKind::Current, vec![cell]),
                terminal: false,
                path: None,
                distance: None,
                path_length: None,
            });

            for neighbor in neighbors4(grid, cell) {
                if grid.is_wall(neighbor) || visited.contains(grid, neighbor) {
                    continue;
                }
                visited.insert(grid, neighbor);
                parent[grid.index_of(neighbor)] = Some(cell);
                queue.push_back((neighbor, distance + 1));

                steps.push(Step {
                    index: steps.len(),
                    description: format!("Add neighbor {neighbor} to queue"),
                    frontier: frontier_of(&queue),
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
            description: "No path found - queue exhausted".to_string(),
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
        algorithm = "bfs",
        steps = steps.len(),
        found,
        "recording complete"
    );
    Recording::new(AlgorithmKind::BreadthFirst, steps, request.revision())
}

fn frontier_of(queue: &VecDeque<(Cell, usize)>) -> Vec<Cell> {
    queue.iter().map(|(cell, _)| *cell).collect()
}

/// Walk back-pointers from the goal to the start, then reverse.
fn reconstruct_path(parent: &[Option<Cell>], grid: &Grid, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while let Some(prev) = parent[grid.index_of(cursor)] {
        path.push(prev);
        cursor = prev;
    }
    path.reverse();
    path
}
