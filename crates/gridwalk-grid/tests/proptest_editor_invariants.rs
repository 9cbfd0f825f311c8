//! Property-based invariants of the grid editor.
//!
//! ## Invariants
//!
//! 1. The start and goal cells are never walls, under any edit sequence.
//! 2. Start and goal always stay in bounds.
//! 3. The revision bumps exactly when an edit is applied, never when one
//!    is rejected.
//! 4. Grid dimensions only change through preset loads.

use gridwalk_grid::{Cell, CellState, EditOutcome, Grid, GridModel, PRESETS};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Wall(u16, u16),
    Clear(u16, u16),
    MoveStart(u16, u16),
    MoveGoal(u16, u16),
    LoadPreset(usize),
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    // Coordinates deliberately overshoot the 6x6 base grid to exercise
    // out-of-bounds rejection.
    prop_oneof![
        (0u16..9, 0u16..9).prop_map(|(r, c)| Edit::Wall(r, c)),
        (0u16..9, 0u16..9).prop_map(|(r, c)| Edit::Clear(r, c)),
        (0u16..9, 0u16..9).prop_map(|(r, c)| Edit::MoveStart(r, c)),
        (0u16..9, 0u16..9).prop_map(|(r, c)| Edit::MoveGoal(r, c)),
        (0usize..PRESETS.len()).prop_map(Edit::LoadPreset),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn markers_never_sit_on_walls(edits in prop::collection::vec(arb_edit(), 1..80)) {
        let mut model = GridModel::new(Grid::new(6, 6), Cell::new(0, 0), Cell::new(5, 5));
        for edit in edits {
            let before = model.revision();
            let outcome = match edit {
                Edit::Wall(r, c) => model.set_cell_state(Cell::new(r, c), CellState::Wall),
                Edit::Clear(r, c) => model.set_cell_state(Cell::new(r, c), CellState::Open),
                Edit::MoveStart(r, c) => model.move_start(Cell::new(r, c)),
                Edit::MoveGoal(r, c) => model.move_goal(Cell::new(r, c)),
                Edit::LoadPreset(i) => model.load_preset(&PRESETS[i]),
            };

            match outcome {
                EditOutcome::Applied => prop_assert_eq!(model.revision(), before + 1),
                EditOutcome::Rejected => prop_assert_eq!(model.revision(), before),
            }

            prop_assert!(model.grid().in_bounds(model.start()));
            prop_assert!(model.grid().in_bounds(model.goal()));
            prop_assert!(!model.grid().is_wall(model.start()));
            prop_assert!(!model.grid().is_wall(model.goal()));
        }
    }
}
