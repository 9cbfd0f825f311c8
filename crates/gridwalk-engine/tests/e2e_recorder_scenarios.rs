//! End-to-end recorder scenarios over concrete grids.

use gridwalk_engine::{AlgorithmKind, HighlightKind, create_recording};
use gridwalk_grid::{Cell, CellState, Grid, GridModel, Preset};

fn open_5x5() -> Grid {
    Grid::new(5, 5)
}

#[test]
fn bfs_open_grid_reports_distance_8() {
    let rec = create_recording(
        open_5x5(),
        Cell::new(0, 0),
        Cell::new(4, 4),
        AlgorithmKind::BreadthFirst,
    )
    .unwrap();
    let terminal = rec.terminal();
    assert!(terminal.terminal);
    assert!(terminal.is_success());
    assert_eq!(terminal.distance, Some(8));
    assert_eq!(rec.path().unwrap().len(), 9);
}

#[test]
fn enclosed_goal_fails_without_visiting_it() {
    // A ring of walls around the goal; the goal itself stays open.
    let goal = Cell::new(2, 2);
    let mut model = GridModel::new(Grid::new(5, 5), Cell::new(0, 0), goal);
    for row in 1..=3 {
        for col in 1..=3 {
            let cell = Cell::new(row, col);
            if cell != goal {
                assert!(model.set_cell_state(cell, CellState::Wall).applied());
            }
        }
    }

    for algorithm in AlgorithmKind::ALL {
        let rec = create_recording(model.grid().clone(), model.start(), model.goal(), algorithm)
            .unwrap();
        let terminal = rec.terminal();
        assert!(terminal.is_failure(), "{algorithm:?} should fail");
        assert!(terminal.frontier.is_empty());
        assert!(
            !terminal.has_visited(goal),
            "{algorithm:?} must never discover the enclosed goal"
        );
        assert!(!rec.found());
        assert_eq!(rec.path(), None);
    }
}

#[test]
fn start_equals_goal_is_a_two_step_recording() {
    let cell = Cell::new(2, 2);
    let rec = create_recording(open_5x5(), cell, cell, AlgorithmKind::BreadthFirst).unwrap();
    assert_eq!(rec.len(), 2);
    let init = rec.step_at(0).unwrap();
    assert_eq!(init.highlight.kind, HighlightKind::Start);
    let terminal = rec.step_at(1).unwrap();
    assert!(terminal.is_success());
    assert_eq!(terminal.path.as_deref(), Some(&[cell][..]));
    assert_eq!(terminal.distance, Some(0));

    let rec = create_recording(open_5x5(), cell, cell, AlgorithmKind::DepthFirst).unwrap();
    assert_eq!(rec.len(), 2);
    assert_eq!(rec.terminal().path_length, Some(1));
}

#[test]
fn dfs_open_grid_path_is_simple_but_not_necessarily_minimal() {
    let rec = create_recording(
        open_5x5(),
        Cell::new(0, 0),
        Cell::new(4, 4),
        AlgorithmKind::DepthFirst,
    )
    .unwrap();
    let terminal = rec.terminal();
    assert!(terminal.is_success());
    let length = terminal.path_length.unwrap();
    assert!((9..=25).contains(&length), "path length {length}");
    let path = terminal.path.as_ref().unwrap();
    for (i, cell) in path.iter().enumerate() {
        assert!(!path[i + 1..].contains(cell), "duplicate cell {cell}");
    }
}

#[test]
fn maze_preset_has_a_12_edge_shortest_path() {
    let model = Preset::by_id("maze").unwrap().model();
    let rec = create_recording(
        model.grid().clone(),
        model.start(),
        model.goal(),
        AlgorithmKind::BreadthFirst,
    )
    .unwrap();
    assert!(rec.found());
    assert_eq!(rec.terminal().distance, Some(12));
}

#[test]
fn identical_requests_produce_identical_recordings() {
    let model = Preset::by_id("simple").unwrap().model();
    for algorithm in AlgorithmKind::ALL {
        let a = create_recording(model.grid().clone(), model.start(), model.goal(), algorithm)
            .unwrap();
        let b = create_recording(model.grid().clone(), model.start(), model.goal(), algorithm)
            .unwrap();
        assert_eq!(a, b, "{algorithm:?} recordings diverged");
    }
}

#[test]
fn every_preset_is_solvable_by_both_algorithms() {
    for preset in &gridwalk_grid::PRESETS {
        let model = preset.model();
        for algorithm in AlgorithmKind::ALL {
            let rec =
                create_recording(model.grid().clone(), model.start(), model.goal(), algorithm)
                    .unwrap();
            assert!(rec.found(), "{} / {algorithm:?}", preset.id);
            let path = rec.path().unwrap();
            assert_eq!(path.first(), Some(&model.start()));
            assert_eq!(path.last(), Some(&model.goal()));
        }
    }
}
